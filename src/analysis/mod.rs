mod analyzer;
mod length_distribution;
mod metrics;
mod projection;
mod statistics;

pub use analyzer::Analyzer;
pub use length_distribution::{LengthClass, LengthDistribution};
pub use metrics::{compute_survey_metrics, SampleComposition, SurveyMetrics};
pub use projection::{advance, run, steady_state_recruitment, ProjectionConfig, ProjectionTrace};
pub use statistics::{ConfidenceInterval, LengthStatistics};
