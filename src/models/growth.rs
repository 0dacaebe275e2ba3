use serde::{Deserialize, Serialize};

use crate::error::LionfishError;

/// Seasonalized von Bertalanffy growth curve (Somers form).
///
/// Predicted total length at age `t` (years):
///
/// `L(t) = L_inf * (1 - exp(-(K*(t - t0) + S(t) - S(t0))))`
///
/// where `S(t) = (C*K / 2pi) * sin(2pi * (t - ts))`. The oscillation
/// amplitude is bounded by `K / 2pi` since `C <= 1`, so the curve is
/// non-decreasing in expectation over any full year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthCurve {
    /// Asymptotic total length in millimeters
    pub l_inf_mm: f64,
    /// Brody growth coefficient (1/year)
    pub k: f64,
    /// Intensity of the seasonal oscillation (0 = none, 1 = full)
    pub c: f64,
    /// Theoretical age at length zero (years)
    pub t0: f64,
    /// Phase offset: start of the sinusoidal growth oscillation (years)
    pub ts: f64,
}

impl Default for GrowthCurve {
    fn default() -> Self {
        // Fitted parameters from the replicated length-frequency analysis.
        Self {
            l_inf_mm: 448.0,
            k: 0.47,
            c: 0.61,
            t0: -0.12,
            ts: 0.17,
        }
    }
}

/// One point on a tabulated growth curve.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthPoint {
    pub age_years: f64,
    pub length_mm: f64,
}

impl GrowthCurve {
    /// Check parameter ranges. Returns `LionfishError::ConfigurationError` on failure.
    pub fn validate(&self) -> Result<(), LionfishError> {
        if !self.l_inf_mm.is_finite() || self.l_inf_mm <= 0.0 {
            return Err(LionfishError::ConfigurationError(format!(
                "l_inf_mm must be positive, got {}",
                self.l_inf_mm
            )));
        }
        if !self.k.is_finite() || self.k <= 0.0 {
            return Err(LionfishError::ConfigurationError(format!(
                "k must be positive, got {}",
                self.k
            )));
        }
        if !self.c.is_finite() || !(0.0..=1.0).contains(&self.c) {
            return Err(LionfishError::ConfigurationError(format!(
                "c must be in 0.0..=1.0, got {}",
                self.c
            )));
        }
        if !self.t0.is_finite() || !self.ts.is_finite() {
            return Err(LionfishError::ConfigurationError(
                "t0 and ts must be finite".to_string(),
            ));
        }
        Ok(())
    }

    fn seasonal(&self, t: f64) -> f64 {
        let two_pi = 2.0 * std::f64::consts::PI;
        (self.c * self.k / two_pi) * (two_pi * (t - self.ts)).sin()
    }

    /// Predicted total length (mm) at age `t` years. Defined for `t >= 0`.
    pub fn length_at_age(&self, t: f64) -> f64 {
        let exponent = self.k * (t - self.t0) + self.seasonal(t) - self.seasonal(self.t0);
        self.l_inf_mm * (1.0 - (-exponent).exp())
    }

    /// Age (years) at which the non-seasonal form of the curve reaches
    /// `length_mm`, clamped at 0. Used to seed mean ages when deriving a
    /// cohort from observed lengths; the seasonal term has no closed-form
    /// inverse and its amplitude is below one size class for realistic
    /// parameters.
    pub fn age_at_length(&self, length_mm: f64) -> Result<f64, LionfishError> {
        if !length_mm.is_finite() || length_mm < 0.0 {
            return Err(LionfishError::ComputationError(format!(
                "cannot invert growth curve for length {length_mm} mm"
            )));
        }
        if length_mm >= self.l_inf_mm {
            return Err(LionfishError::ComputationError(format!(
                "length {length_mm} mm is at or above the asymptotic length {} mm",
                self.l_inf_mm
            )));
        }
        let age = self.t0 - (1.0 - length_mm / self.l_inf_mm).ln() / self.k;
        Ok(age.max(0.0))
    }

    /// Tabulate the curve from age 0 to `max_age_years` inclusive, with
    /// `steps_per_year` points per year.
    pub fn tabulate(&self, max_age_years: u32, steps_per_year: u32) -> Vec<GrowthPoint> {
        let steps = steps_per_year.max(1);
        let n = max_age_years * steps;
        (0..=n)
            .map(|i| {
                let age = i as f64 / steps as f64;
                GrowthPoint {
                    age_years: age,
                    length_mm: self.length_at_age(age),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_parameters_valid() {
        assert!(GrowthCurve::default().validate().is_ok());
    }

    #[test]
    fn test_validate_negative_l_inf() {
        let curve = GrowthCurve {
            l_inf_mm: -1.0,
            ..GrowthCurve::default()
        };
        assert!(curve.validate().is_err());
    }

    #[test]
    fn test_validate_zero_k() {
        let curve = GrowthCurve {
            k: 0.0,
            ..GrowthCurve::default()
        };
        assert!(curve.validate().is_err());
    }

    #[test]
    fn test_validate_c_out_of_range() {
        let curve = GrowthCurve {
            c: 1.5,
            ..GrowthCurve::default()
        };
        let err = curve.validate().unwrap_err();
        assert!(err.to_string().contains("c must be in 0.0..=1.0"));
    }

    #[test]
    fn test_length_bounded_by_l_inf() {
        let curve = GrowthCurve::default();
        for i in 0..200 {
            let t = i as f64 / 10.0;
            let l = curve.length_at_age(t);
            assert!(l.is_finite());
            assert!(l < curve.l_inf_mm, "length {l} at age {t} exceeds L_inf");
        }
    }

    #[test]
    fn test_length_approaches_l_inf() {
        let curve = GrowthCurve::default();
        assert!(curve.length_at_age(30.0) > 0.99 * curve.l_inf_mm);
    }

    #[test]
    fn test_length_non_negative_for_valid_ages() {
        let curve = GrowthCurve::default();
        for i in 0..=100 {
            let t = i as f64 / 10.0;
            assert!(curve.length_at_age(t) >= 0.0, "negative length at age {t}");
        }
    }

    #[test]
    fn test_yearly_increments_non_negative() {
        // Within-season oscillation may dip, but year-over-year growth must not.
        let curve = GrowthCurve::default();
        for i in 0..15 {
            let t = i as f64;
            assert!(curve.length_at_age(t + 1.0) >= curve.length_at_age(t));
        }
    }

    #[test]
    fn test_no_seasonality_reduces_to_standard_vbgf() {
        let curve = GrowthCurve {
            c: 0.0,
            ..GrowthCurve::default()
        };
        let t = 2.5;
        let expected = curve.l_inf_mm * (1.0 - (-curve.k * (t - curve.t0)).exp());
        assert!((curve.length_at_age(t) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_age_at_length_inverts_non_seasonal_curve() {
        let curve = GrowthCurve {
            c: 0.0,
            ..GrowthCurve::default()
        };
        let age = 3.0;
        let length = curve.length_at_age(age);
        let recovered = curve.age_at_length(length).unwrap();
        assert!((recovered - age).abs() < 1e-9);
    }

    #[test]
    fn test_age_at_length_clamped_at_zero() {
        // Lengths below the length at age 0 invert to negative ages; clamp.
        let curve = GrowthCurve::default();
        let age = curve.age_at_length(1.0).unwrap();
        assert!(age >= 0.0);
    }

    #[test]
    fn test_age_at_length_monotone() {
        let curve = GrowthCurve::default();
        let a1 = curve.age_at_length(150.0).unwrap();
        let a2 = curve.age_at_length(300.0).unwrap();
        assert!(a2 > a1);
    }

    #[test]
    fn test_age_at_length_rejects_l_inf() {
        let curve = GrowthCurve::default();
        assert!(curve.age_at_length(curve.l_inf_mm).is_err());
        assert!(curve.age_at_length(curve.l_inf_mm + 50.0).is_err());
    }

    #[test]
    fn test_age_at_length_rejects_negative() {
        assert!(GrowthCurve::default().age_at_length(-1.0).is_err());
    }

    #[test]
    fn test_tabulate_length_and_endpoints() {
        let curve = GrowthCurve::default();
        let table = curve.tabulate(5, 12);
        assert_eq!(table.len(), 61);
        assert_eq!(table[0].age_years, 0.0);
        assert!((table.last().unwrap().age_years - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_tabulate_zero_steps_per_year_clamped() {
        let table = GrowthCurve::default().tabulate(3, 0);
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn test_growth_curve_json_roundtrip() {
        let curve = GrowthCurve::default();
        let json = serde_json::to_string(&curve).unwrap();
        let deserialized: GrowthCurve = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, curve);
    }
}
