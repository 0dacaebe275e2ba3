use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::GrowthCurve;
use crate::error::LionfishError;

/// Identity of a size class: the lower bound of the length bucket in
/// millimeters, always a non-negative multiple of the bucket width.
pub type SizeClassMm = u32;

/// Population state of one size class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bucket {
    /// Number of fish in this class. Carried as f64 but rounded to whole
    /// fish whenever mortality or scaling is applied.
    pub count: f64,
    /// Mean age of the fish in this class, in years
    pub mean_age: f64,
}

/// The population's state at one time step: counts and mean ages binned by
/// size class. Ordered map so iteration is in ascending size order and
/// projections are deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cohort {
    buckets: BTreeMap<SizeClassMm, Bucket>,
}

/// Snap a length to the nearest multiple of the bucket width.
pub fn size_class_for(length_mm: f64, bucket_width_mm: f64) -> SizeClassMm {
    ((length_mm / bucket_width_mm).round() * bucket_width_mm).round() as SizeClassMm
}

impl Default for Cohort {
    fn default() -> Self {
        Self::new()
    }
}

impl Cohort {
    /// Create an empty cohort.
    pub fn new() -> Self {
        Self {
            buckets: BTreeMap::new(),
        }
    }

    /// Derive a step-0 cohort from raw observed lengths.
    ///
    /// Each length is snapped to the nearest multiple of `bucket_width_mm`,
    /// classes are counted, counts are multiplied by `scale` (the assumed
    /// sampling-fraction multiplier) and rounded to whole fish, and each
    /// class's mean age is seeded from the growth curve's inverse at the
    /// class length. Classes whose scaled count rounds to zero are dropped.
    pub fn from_lengths(
        lengths_mm: &[f64],
        scale: f64,
        bucket_width_mm: f64,
        curve: &GrowthCurve,
    ) -> Result<Self, LionfishError> {
        if !bucket_width_mm.is_finite() || bucket_width_mm <= 0.0 {
            return Err(LionfishError::ConfigurationError(format!(
                "bucket_width_mm must be positive, got {bucket_width_mm}"
            )));
        }
        if !scale.is_finite() || scale < 0.0 {
            return Err(LionfishError::ConfigurationError(format!(
                "scale must be non-negative, got {scale}"
            )));
        }

        let mut raw_counts: BTreeMap<SizeClassMm, u64> = BTreeMap::new();
        for &length in lengths_mm {
            if !length.is_finite() || length < 0.0 {
                return Err(LionfishError::ValidationError(format!(
                    "observed length must be non-negative, got {length}"
                )));
            }
            *raw_counts
                .entry(size_class_for(length, bucket_width_mm))
                .or_insert(0) += 1;
        }

        let mut cohort = Cohort::new();
        for (lower_mm, n) in raw_counts {
            let count = (n as f64 * scale).round();
            if count <= 0.0 {
                continue;
            }
            let mean_age = curve.age_at_length(lower_mm as f64)?;
            cohort.set(lower_mm, count, mean_age);
        }
        Ok(cohort)
    }

    /// Insert or overwrite a size class.
    pub fn set(&mut self, lower_mm: SizeClassMm, count: f64, mean_age: f64) {
        self.buckets.insert(lower_mm, Bucket { count, mean_age });
    }

    /// Look up a size class by its lower bound.
    pub fn get(&self, lower_mm: SizeClassMm) -> Option<&Bucket> {
        self.buckets.get(&lower_mm)
    }

    /// Iterate size classes in ascending length order.
    pub fn iter(&self) -> impl Iterator<Item = (SizeClassMm, &Bucket)> {
        self.buckets.iter().map(|(&k, v)| (k, v))
    }

    /// Number of occupied size classes.
    pub fn num_classes(&self) -> usize {
        self.buckets.len()
    }

    /// True when no size classes are present.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total population across all size classes.
    pub fn total_count(&self) -> f64 {
        self.buckets.values().map(|b| b.count).sum()
    }

    /// Count-weighted mean length, or 0.0 for an empty cohort.
    pub fn weighted_mean_length_mm(&self) -> f64 {
        let total = self.total_count();
        if total <= 0.0 {
            return 0.0;
        }
        let weighted: f64 = self
            .buckets
            .iter()
            .map(|(&lower, b)| lower as f64 * b.count)
            .sum();
        weighted / total
    }

    /// Count-weighted mean age, or 0.0 for an empty cohort.
    pub fn weighted_mean_age(&self) -> f64 {
        let total = self.total_count();
        if total <= 0.0 {
            return 0.0;
        }
        let weighted: f64 = self.buckets.values().map(|b| b.mean_age * b.count).sum();
        weighted / total
    }
}
