//! Terminal output formatting
//!
//! Player-facing text: alerts, formatting helpers and pretty-printing of
//! command results. The game core never formats text itself.

pub mod alerts;
pub mod display;
pub mod formatters;

pub use alerts::Alert;
pub use display::{print_analysis_result, print_survey_statistics};
