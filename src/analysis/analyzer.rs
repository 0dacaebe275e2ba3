use crate::analysis::{
    advance, compute_survey_metrics, run, steady_state_recruitment, LengthDistribution,
    LengthStatistics, ProjectionConfig, ProjectionTrace, SurveyMetrics,
};
use crate::error::LionfishError;
use crate::models::{Cohort, GrowthCurve, LengthSurvey};

/// Unified analysis API that groups all analysis operations on a survey.
pub struct Analyzer<'a> {
    survey: &'a LengthSurvey,
}

impl<'a> Analyzer<'a> {
    /// Create a new Analyzer for the given survey.
    pub fn new(survey: &'a LengthSurvey) -> Self {
        Self { survey }
    }

    /// Compute survey-level metrics (counts, lengths, inferred ages,
    /// per-month composition).
    pub fn survey_metrics(&self, curve: &GrowthCurve) -> SurveyMetrics {
        compute_survey_metrics(self.survey, curve)
    }

    /// Compute sampling statistics at the given confidence level (e.g. 0.95).
    pub fn length_statistics(
        &self,
        curve: &GrowthCurve,
        confidence: f64,
    ) -> Result<LengthStatistics, LionfishError> {
        LengthStatistics::compute(self.survey, curve, confidence)
    }

    /// Build a length-frequency distribution with the given class width in mm.
    pub fn length_distribution(&self, class_width_mm: f64) -> LengthDistribution {
        LengthDistribution::from_survey(self.survey, class_width_mm)
    }

    /// Derive a step-0 cohort from the lengths observed in a given collection
    /// month, scaled by the assumed sampling-fraction multiplier.
    pub fn initial_cohort(
        &self,
        month: u32,
        year: i32,
        scale: f64,
        bucket_width_mm: f64,
        curve: &GrowthCurve,
    ) -> Result<Cohort, LionfishError> {
        let lengths = self.survey.lengths_for(month, year);
        if lengths.is_empty() {
            return Err(LionfishError::InsufficientData(format!(
                "no fish observed in {year}-{month:02}"
            )));
        }
        Cohort::from_lengths(&lengths, scale, bucket_width_mm, curve)
    }

    /// Advance a cohort by one annual step.
    pub fn advance_cohort(
        &self,
        cohort: &Cohort,
        config: &ProjectionConfig,
        curve: &GrowthCurve,
    ) -> Result<Cohort, LionfishError> {
        advance(cohort, config, curve)
    }

    /// Run a full projection from an initial cohort.
    pub fn project(
        &self,
        initial: &Cohort,
        config: &ProjectionConfig,
        curve: &GrowthCurve,
    ) -> Result<ProjectionTrace, LionfishError> {
        run(initial, config, curve)
    }

    /// Find the recruitment size that holds the population steady over the
    /// horizon.
    pub fn steady_state_recruitment(
        &self,
        initial: &Cohort,
        mortality_rate: f64,
        bucket_width_mm: f64,
        horizon: u32,
        curve: &GrowthCurve,
    ) -> Result<f64, LionfishError> {
        steady_state_recruitment(initial, mortality_rate, bucket_width_mm, horizon, curve)
    }
}
