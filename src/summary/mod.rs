//! Session aggregation and recommendation rules

pub mod recommendations;
pub mod stats;

pub use recommendations::{recommendations, Recommendation};
pub use stats::{compute_stats, format_duration, AVG_RESPONSE_PLACEHOLDER};
