//! Used-vehicle purchase assessment driven by MOT inspection history.
//!
//! The [`valuation`] engine blends five risk sub-scores into a recommendation
//! and prices the latest inspection's defects through the [`repair_costs`]
//! classifier. Both are pure functions over an in-memory [`history`].

pub mod config;
pub mod error;
pub mod history;
pub mod repair_costs;
pub mod telemetry;
pub mod valuation;
