//! Common types and utilities for the swim-lesson progression engine

pub mod config;
pub mod error;
pub mod models;

pub use config::Config;
pub use error::{Error, Result};
