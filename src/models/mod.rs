mod cohort;
mod fish;
mod growth;
mod sample;
mod survey;

pub use cohort::{size_class_for, Bucket, Cohort, SizeClassMm};
pub use fish::Fish;
pub use growth::{GrowthCurve, GrowthPoint};
pub use sample::Sample;
pub use survey::LengthSurvey;
