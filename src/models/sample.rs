use serde::{Deserialize, Serialize};

use super::Fish;

/// One sampling event: a set of fish measured in a given month and year.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sample {
    /// Unique sample identifier
    pub sample_id: u32,
    /// Calendar month of collection (1-12)
    pub month: u32,
    /// Calendar year of collection
    pub year: i32,
    /// Collection site (reef name, station code)
    pub site: Option<String>,
    /// Collection depth in meters
    pub depth_m: Option<f64>,
    /// Fish measured in this sample
    pub fish: Vec<Fish>,
}

impl Sample {
    /// Number of fish measured in this sample.
    pub fn num_fish(&self) -> usize {
        self.fish.len()
    }

    /// All total lengths in this sample, in measurement order.
    pub fn lengths_mm(&self) -> Vec<f64> {
        self.fish.iter().map(|f| f.total_length_mm).collect()
    }

    /// Mean total length for this sample, or 0.0 if empty.
    pub fn mean_length_mm(&self) -> f64 {
        if self.fish.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.fish.iter().map(|f| f.total_length_mm).sum();
        sum / self.fish.len() as f64
    }

    /// Smallest measured length, if any fish were measured.
    pub fn min_length_mm(&self) -> Option<f64> {
        self.fish
            .iter()
            .map(|f| f.total_length_mm)
            .fold(None, |acc, l| match acc {
                None => Some(l),
                Some(m) => Some(m.min(l)),
            })
    }

    /// Largest measured length, if any fish were measured.
    pub fn max_length_mm(&self) -> Option<f64> {
        self.fish
            .iter()
            .map(|f| f.total_length_mm)
            .fold(None, |acc, l| match acc {
                None => Some(l),
                Some(m) => Some(m.max(l)),
            })
    }

    /// Label for tables and logs, e.g. "2013-04".
    pub fn label(&self) -> String {
        format!("{}-{:02}", self.year, self.month)
    }

    /// Validate the sample header and every fish in it.
    pub fn validate(&self) -> Result<(), crate::error::LionfishError> {
        if !(1..=12).contains(&self.month) {
            return Err(crate::error::LionfishError::ValidationError(format!(
                "Sample {}: month must be in 1..=12, got {}",
                self.sample_id, self.month
            )));
        }
        if let Some(d) = self.depth_m {
            if !d.is_finite() || d < 0.0 {
                return Err(crate::error::LionfishError::ValidationError(format!(
                    "Sample {}: depth must be non-negative, got {}",
                    self.sample_id, d
                )));
            }
        }
        for fish in &self.fish {
            fish.validate()?;
        }
        Ok(())
    }
}
