use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::LionfishError;
use crate::models::{size_class_for, Cohort, GrowthCurve, SizeClassMm};

/// Immutable settings for one projection run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// Instantaneous annual mortality rate M (>= 0)
    pub mortality_rate: f64,
    /// Number of recruits injected into the size-zero class each step (>= 0)
    pub recruitment: f64,
    /// Width of each size class in millimeters (> 0)
    pub bucket_width_mm: f64,
    /// Number of annual steps to project
    pub horizon: u32,
}

impl ProjectionConfig {
    /// Check parameter ranges. Called eagerly before any projection step runs.
    pub fn validate(&self) -> Result<(), LionfishError> {
        if !self.mortality_rate.is_finite() || self.mortality_rate < 0.0 {
            return Err(LionfishError::ConfigurationError(format!(
                "mortality_rate must be non-negative, got {}",
                self.mortality_rate
            )));
        }
        if !self.recruitment.is_finite() || self.recruitment < 0.0 {
            return Err(LionfishError::ConfigurationError(format!(
                "recruitment must be non-negative, got {}",
                self.recruitment
            )));
        }
        if !self.bucket_width_mm.is_finite() || self.bucket_width_mm <= 0.0 {
            return Err(LionfishError::ConfigurationError(format!(
                "bucket_width_mm must be positive, got {}",
                self.bucket_width_mm
            )));
        }
        Ok(())
    }
}

/// Ordered sequence of cohorts, one per time step from 0 to the horizon
/// inclusive. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionTrace {
    steps: Vec<Cohort>,
}

impl ProjectionTrace {
    /// Number of cohorts in the trace (horizon + 1).
    pub fn num_steps(&self) -> usize {
        self.steps.len()
    }

    /// The cohort at a given step, if within the horizon.
    pub fn get(&self, step: usize) -> Option<&Cohort> {
        self.steps.get(step)
    }

    /// The step-0 cohort.
    pub fn initial(&self) -> &Cohort {
        &self.steps[0]
    }

    /// The cohort at the end of the horizon.
    pub fn last(&self) -> &Cohort {
        self.steps.last().expect("trace is never empty")
    }

    /// Total population at each step.
    pub fn totals(&self) -> Vec<f64> {
        self.steps.iter().map(|c| c.total_count()).collect()
    }

    /// Iterate cohorts in step order.
    pub fn iter(&self) -> impl Iterator<Item = &Cohort> {
        self.steps.iter()
    }
}

/// Advance a cohort by one annual step.
///
/// Applies mortality decay to every size class (survivors are rounded to
/// whole fish), increments each class's mean age by one year, re-bins each
/// class at the growth curve's length for the new age, and overwrites the
/// size-zero class with the recruitment pulse at age 0.
///
/// When several source classes project into the same destination class,
/// their survivor counts are summed and their mean ages averaged with equal
/// weight per source class (not count-weighted). Both the per-step rounding
/// and the unweighted averaging reproduce the replicated report's
/// bookkeeping as stated; they are modeling choices, not artifacts of this
/// implementation.
pub fn advance(
    cohort: &Cohort,
    config: &ProjectionConfig,
    curve: &GrowthCurve,
) -> Result<Cohort, LionfishError> {
    config.validate()?;

    let survival = (-config.mortality_rate).exp();

    // destination class -> (summed survivors, summed ages, source classes)
    let mut merged: BTreeMap<SizeClassMm, (f64, f64, u32)> = BTreeMap::new();

    for (lower_mm, bucket) in cohort.iter() {
        let survivors = (bucket.count * survival).round();
        if survivors <= 0.0 {
            continue;
        }

        let new_age = bucket.mean_age + 1.0;
        let new_length = curve.length_at_age(new_age);
        if !new_length.is_finite() || new_length < 0.0 {
            return Err(LionfishError::ComputationError(format!(
                "growth curve produced invalid length {new_length} mm at age {new_age} \
                 (source class {lower_mm} mm)"
            )));
        }

        let dest = size_class_for(new_length, config.bucket_width_mm);
        let entry = merged.entry(dest).or_insert((0.0, 0.0, 0));
        entry.0 += survivors;
        entry.1 += new_age;
        entry.2 += 1;
    }

    let mut next = Cohort::new();
    for (dest, (count, age_sum, sources)) in merged {
        next.set(dest, count, age_sum / sources as f64);
    }

    // Annual recruitment pulse: the zero class is overwritten, not added to,
    // and always exists in the advanced cohort.
    next.set(0, config.recruitment, 0.0);

    Ok(next)
}

/// Apply `advance` exactly `config.horizon` times, collecting every cohort
/// from step 0 to the horizon inclusive.
///
/// Deterministic for fixed inputs. On failure no partial trace is returned;
/// the error reports the first failing step and its cause.
pub fn run(
    initial: &Cohort,
    config: &ProjectionConfig,
    curve: &GrowthCurve,
) -> Result<ProjectionTrace, LionfishError> {
    config.validate()?;
    curve.validate()?;

    let mut steps = Vec::with_capacity(config.horizon as usize + 1);
    steps.push(initial.clone());

    for step in 1..=config.horizon {
        let prev = steps.last().expect("trace has at least the initial cohort");
        let next = advance(prev, config, curve).map_err(|e| LionfishError::ProjectionError {
            step,
            source: Box::new(e),
        })?;
        tracing::debug!(
            step,
            total = next.total_count(),
            classes = next.num_classes(),
            "advanced cohort"
        );
        steps.push(next);
    }

    Ok(ProjectionTrace { steps })
}

/// Smallest whole-fish recruitment size for which the total population at
/// the end of the horizon is at least the initial total, found by bisection.
///
/// End-of-horizon totals are monotone non-decreasing in the recruitment
/// size, so the bisection is sound.
pub fn steady_state_recruitment(
    initial: &Cohort,
    mortality_rate: f64,
    bucket_width_mm: f64,
    horizon: u32,
    curve: &GrowthCurve,
) -> Result<f64, LionfishError> {
    if horizon == 0 {
        return Err(LionfishError::ConfigurationError(
            "steady-state search requires a horizon of at least 1 step".to_string(),
        ));
    }

    let target = initial.total_count();
    let end_total = |recruitment: f64| -> Result<f64, LionfishError> {
        let config = ProjectionConfig {
            mortality_rate,
            recruitment,
            bucket_width_mm,
            horizon,
        };
        Ok(run(initial, &config, curve)?.last().total_count())
    };

    if end_total(0.0)? >= target {
        return Ok(0.0);
    }

    // Exponential search for an upper bound, then integer bisection.
    let mut hi = 1.0f64;
    while end_total(hi)? < target {
        hi *= 2.0;
        if hi > 1e12 {
            return Err(LionfishError::ComputationError(
                "steady-state recruitment search failed to bracket a solution".to_string(),
            ));
        }
    }

    let mut lo = 0.0f64;
    while hi - lo > 1.0 {
        let mid = ((lo + hi) / 2.0).floor();
        if end_total(mid)? >= target {
            hi = mid;
        } else {
            lo = mid;
        }
    }
    Ok(hi)
}
