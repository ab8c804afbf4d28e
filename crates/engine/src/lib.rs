//! Progression, dashboard, and ranking logic

pub mod badges;
pub mod dashboard;
pub mod leveling;
pub mod progression;
pub mod rankings;
pub mod scoring;

pub use dashboard::DashboardService;
pub use progression::ProgressionService;
pub use rankings::RankingService;

#[cfg(test)]
mod badges_test;
#[cfg(test)]
mod dashboard_test;
#[cfg(test)]
mod leveling_test;
#[cfg(test)]
mod progression_test;
#[cfg(test)]
mod rankings_test;
#[cfg(test)]
mod scoring_test;
