//! Command implementations

pub mod analyze;
pub mod simple;
pub mod sources;
pub mod survey;

pub use analyze::{AnalysisResult, analyze_root};
pub use simple::{run_simple, run_simple_with};
pub use sources::{load_dictionary, load_word_list};
pub use survey::{RootSummary, SurveyStatistics, run_survey};
