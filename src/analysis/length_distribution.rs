use serde::{Deserialize, Serialize};

use crate::models::LengthSurvey;

/// A single length class in the observed distribution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LengthClass {
    /// Lower bound of the class in mm (inclusive)
    pub lower_mm: f64,
    /// Upper bound of the class in mm (exclusive)
    pub upper_mm: f64,
    /// Midpoint of the class in mm
    pub midpoint_mm: f64,
    /// Number of measured fish in this class
    pub count: usize,
    /// Share of all measured fish, in percent
    pub percent: f64,
}

/// Observed length-frequency distribution for a survey.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LengthDistribution {
    /// Width of each length class in mm
    pub class_width_mm: f64,
    /// The occupied length classes, in ascending order
    pub classes: Vec<LengthClass>,
}

impl LengthDistribution {
    /// Build a length-frequency distribution from all measured fish in the
    /// survey.
    ///
    /// # Arguments
    /// * `survey` - The length survey data
    /// * `class_width_mm` - Width of each length class in mm (commonly 10)
    pub fn from_survey(survey: &LengthSurvey, class_width_mm: f64) -> Self {
        let lengths = survey.all_lengths_mm();
        Self::from_lengths(&lengths, class_width_mm)
    }

    /// Build a distribution from a flat list of lengths.
    pub fn from_lengths(lengths: &[f64], class_width_mm: f64) -> Self {
        if lengths.is_empty() || class_width_mm <= 0.0 {
            return LengthDistribution {
                class_width_mm,
                classes: Vec::new(),
            };
        }

        let min_len = lengths.iter().copied().fold(f64::INFINITY, f64::min);
        let max_len = lengths.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let total = lengths.len() as f64;

        let start = (min_len / class_width_mm).floor() * class_width_mm;
        let end = ((max_len / class_width_mm).floor() + 1.0) * class_width_mm;

        let mut classes = Vec::new();
        let mut lower = start;
        while lower < end {
            let upper = lower + class_width_mm;
            let count = lengths
                .iter()
                .filter(|&&l| l >= lower && l < upper)
                .count();

            if count > 0 {
                classes.push(LengthClass {
                    lower_mm: lower,
                    upper_mm: upper,
                    midpoint_mm: lower + class_width_mm / 2.0,
                    count,
                    percent: count as f64 / total * 100.0,
                });
            }

            lower = upper;
        }

        LengthDistribution {
            class_width_mm,
            classes,
        }
    }

    /// Total number of fish across all classes.
    pub fn total_count(&self) -> usize {
        self.classes.iter().map(|c| c.count).sum()
    }
}
