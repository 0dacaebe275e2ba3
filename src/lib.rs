pub mod analysis;
pub mod error;
pub mod io;
pub mod models;
pub mod visualization;

pub use analysis::Analyzer;
pub use error::LionfishError;
pub use io::{SurveyReader, SurveyWriter};
pub use models::{Bucket, Cohort, Fish, GrowthCurve, LengthSurvey, Sample, SizeClassMm};
