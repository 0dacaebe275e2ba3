use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::error::LionfishError;
use crate::models::{GrowthCurve, LengthSurvey};

/// Confidence interval for a metric.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    pub mean: f64,
    pub std_error: f64,
    pub lower: f64,
    pub upper: f64,
    pub confidence_level: f64,
    pub sample_size: usize,
    pub sampling_error_percent: f64,
}

/// Sampling statistics for the measured lengths and their inferred ages.
///
/// Lengths at or beyond the asymptotic length cannot be inverted to an age,
/// so `inferred_age` is `None` when fewer than two fish have an invertible
/// length. The length interval is always computed from the full sample.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LengthStatistics {
    pub total_length: ConfidenceInterval,
    pub inferred_age: Option<ConfidenceInterval>,
}

impl LengthStatistics {
    /// Compute sampling statistics at a given confidence level (e.g. 0.95).
    pub fn compute(
        survey: &LengthSurvey,
        curve: &GrowthCurve,
        confidence: f64,
    ) -> Result<Self, LionfishError> {
        let lengths = survey.all_lengths_mm();
        if lengths.len() < 2 {
            return Err(LionfishError::InsufficientData(
                "Need at least 2 measured fish for statistical analysis".to_string(),
            ));
        }

        let ages: Vec<f64> = lengths
            .iter()
            .filter_map(|&l| curve.age_at_length(l).ok())
            .collect();
        let inferred_age = if ages.len() >= 2 {
            Some(compute_ci(&ages, confidence)?)
        } else {
            None
        };

        Ok(LengthStatistics {
            total_length: compute_ci(&lengths, confidence)?,
            inferred_age,
        })
    }
}

/// Compute a Student's-t confidence interval from a set of values.
fn compute_ci(values: &[f64], confidence: f64) -> Result<ConfidenceInterval, LionfishError> {
    let n = values.len();
    if n < 2 {
        return Err(LionfishError::InsufficientData(
            "Need at least 2 observations".to_string(),
        ));
    }

    let mean = values.iter().sum::<f64>() / n as f64;
    let variance = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
    let std_dev = variance.sqrt();
    let std_error = std_dev / (n as f64).sqrt();

    let df = (n - 1) as f64;
    let alpha = 1.0 - confidence;
    let t_dist = StudentsT::new(0.0, 1.0, df)
        .map_err(|e| LionfishError::ComputationError(e.to_string()))?;
    let t_value = t_dist.inverse_cdf(1.0 - alpha / 2.0);

    let margin = t_value * std_error;
    let sampling_error_percent = if mean.abs() > f64::EPSILON {
        (margin / mean) * 100.0
    } else {
        0.0
    };

    Ok(ConfidenceInterval {
        mean,
        std_error,
        lower: mean - margin,
        upper: mean + margin,
        confidence_level: confidence,
        sample_size: n,
        sampling_error_percent,
    })
}
