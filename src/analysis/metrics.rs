use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{GrowthCurve, LengthSurvey};

/// Per-collection-month composition data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleComposition {
    /// "YYYY-MM" label for the collection month
    pub label: String,
    pub num_fish: usize,
    pub percent_of_total: f64,
    pub mean_length_mm: f64,
    pub min_length_mm: f64,
    pub max_length_mm: f64,
}

/// Overall survey-level metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyMetrics {
    pub num_samples: usize,
    pub num_fish: usize,
    pub mean_length_mm: f64,
    pub min_length_mm: Option<f64>,
    pub max_length_mm: Option<f64>,
    /// Mean age inferred from the growth curve's inverse, when at least one
    /// length is below the asymptotic length
    pub mean_inferred_age: Option<f64>,
    pub sample_composition: Vec<SampleComposition>,
}

/// Compute survey-level metrics from a length survey.
pub fn compute_survey_metrics(survey: &LengthSurvey, curve: &GrowthCurve) -> SurveyMetrics {
    let lengths = survey.all_lengths_mm();
    let num_fish = lengths.len();

    if num_fish == 0 {
        return SurveyMetrics {
            num_samples: survey.num_samples(),
            num_fish: 0,
            mean_length_mm: 0.0,
            min_length_mm: None,
            max_length_mm: None,
            mean_inferred_age: None,
            sample_composition: Vec::new(),
        };
    }

    let mean_length = lengths.iter().sum::<f64>() / num_fish as f64;
    let min_length = lengths.iter().copied().fold(f64::INFINITY, f64::min);
    let max_length = lengths.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    // Ages at or above the asymptotic length are undefined; skip those fish.
    let ages: Vec<f64> = lengths
        .iter()
        .filter_map(|&l| curve.age_at_length(l).ok())
        .collect();
    let mean_age = if ages.is_empty() {
        None
    } else {
        Some(ages.iter().sum::<f64>() / ages.len() as f64)
    };

    // (count, length_sum, min, max) per collection month
    type MonthAccum = (usize, f64, f64, f64);
    let mut by_month: HashMap<String, MonthAccum> = HashMap::new();
    for sample in &survey.samples {
        for fish in &sample.fish {
            let entry = by_month
                .entry(sample.label())
                .or_insert((0, 0.0, f64::INFINITY, f64::NEG_INFINITY));
            entry.0 += 1;
            entry.1 += fish.total_length_mm;
            entry.2 = entry.2.min(fish.total_length_mm);
            entry.3 = entry.3.max(fish.total_length_mm);
        }
    }

    let mut composition: Vec<SampleComposition> = by_month
        .into_iter()
        .map(|(label, (count, length_sum, min, max))| SampleComposition {
            label,
            num_fish: count,
            percent_of_total: count as f64 / num_fish as f64 * 100.0,
            mean_length_mm: length_sum / count as f64,
            min_length_mm: min,
            max_length_mm: max,
        })
        .collect();
    composition.sort_by(|a, b| a.label.cmp(&b.label));

    SurveyMetrics {
        num_samples: survey.num_samples(),
        num_fish,
        mean_length_mm: mean_length,
        min_length_mm: Some(min_length),
        max_length_mm: Some(max_length),
        mean_inferred_age: mean_age,
        sample_composition: composition,
    }
}
