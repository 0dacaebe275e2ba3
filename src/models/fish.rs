use serde::{Deserialize, Serialize};

/// A single measured fish record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fish {
    /// Unique fish identifier within the sample
    pub fish_id: u32,
    /// Sampling event this fish belongs to
    pub sample_id: u32,
    /// Total length in millimeters
    pub total_length_mm: f64,
    /// Wet weight in grams (if weighed)
    pub weight_g: Option<f64>,
}

impl Fish {
    /// Validate the measurement. Returns `LionfishError::ValidationError` on failure.
    pub fn validate(&self) -> Result<(), crate::error::LionfishError> {
        if !self.total_length_mm.is_finite() || self.total_length_mm <= 0.0 {
            return Err(crate::error::LionfishError::ValidationError(format!(
                "Sample {}, Fish {}: total length must be positive, got {}",
                self.sample_id, self.fish_id, self.total_length_mm
            )));
        }
        if let Some(w) = self.weight_g {
            if !w.is_finite() || w <= 0.0 {
                return Err(crate::error::LionfishError::ValidationError(format!(
                    "Sample {}, Fish {}: weight must be positive, got {}",
                    self.sample_id, self.fish_id, w
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_fish(length: f64, weight: Option<f64>) -> Fish {
        Fish {
            fish_id: 1,
            sample_id: 1,
            total_length_mm: length,
            weight_g: weight,
        }
    }

    #[test]
    fn test_validate_valid_fish() {
        assert!(make_fish(215.0, Some(180.0)).validate().is_ok());
    }

    #[test]
    fn test_validate_valid_fish_no_weight() {
        assert!(make_fish(215.0, None).validate().is_ok());
    }

    #[test]
    fn test_validate_zero_length() {
        let err = make_fish(0.0, None).validate().unwrap_err();
        assert!(err.to_string().contains("total length must be positive"));
    }

    #[test]
    fn test_validate_negative_length() {
        let err = make_fish(-10.0, None).validate().unwrap_err();
        assert!(err.to_string().contains("total length must be positive"));
    }

    #[test]
    fn test_validate_nan_length() {
        assert!(make_fish(f64::NAN, None).validate().is_err());
    }

    #[test]
    fn test_validate_zero_weight() {
        let err = make_fish(215.0, Some(0.0)).validate().unwrap_err();
        assert!(err.to_string().contains("weight must be positive"));
    }

    #[test]
    fn test_validate_negative_weight() {
        assert!(make_fish(215.0, Some(-1.0)).validate().is_err());
    }

    #[test]
    fn test_fish_json_roundtrip() {
        let fish = make_fish(302.5, Some(410.0));
        let json = serde_json::to_string(&fish).unwrap();
        let deserialized: Fish = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.fish_id, fish.fish_id);
        assert_eq!(deserialized.total_length_mm, fish.total_length_mm);
        assert_eq!(deserialized.weight_g, fish.weight_g);
    }
}
