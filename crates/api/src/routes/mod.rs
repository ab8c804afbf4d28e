//! API route handlers

pub mod badges;
pub mod dashboard;
pub mod health;
pub mod progression;
pub mod rankings;
