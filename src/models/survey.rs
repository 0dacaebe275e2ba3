use serde::{Deserialize, Serialize};

use super::Sample;

/// A complete length-frequency survey dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LengthSurvey {
    /// Name or identifier for this survey
    pub name: String,
    /// Survey region or program description
    pub region: Option<String>,
    /// All sampling events in the survey
    pub samples: Vec<Sample>,
}

impl LengthSurvey {
    /// Create a new empty survey.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            region: None,
            samples: Vec::new(),
        }
    }

    /// Total number of sampling events.
    pub fn num_samples(&self) -> usize {
        self.samples.len()
    }

    /// Total number of measured fish across all samples.
    pub fn num_fish(&self) -> usize {
        self.samples.iter().map(|s| s.fish.len()).sum()
    }

    /// All total lengths across the survey, sample order then measurement order.
    pub fn all_lengths_mm(&self) -> Vec<f64> {
        self.samples
            .iter()
            .flat_map(|s| s.fish.iter().map(|f| f.total_length_mm))
            .collect()
    }

    /// Mean total length across all measured fish, or 0.0 if empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use lionfish_population_analyzer::{Fish, LengthSurvey, Sample};
    ///
    /// let mut survey = LengthSurvey::new("Example");
    /// survey.samples.push(Sample {
    ///     sample_id: 1, month: 4, year: 2013, site: None, depth_m: None,
    ///     fish: vec![
    ///         Fish { fish_id: 1, sample_id: 1, total_length_mm: 200.0, weight_g: None },
    ///         Fish { fish_id: 2, sample_id: 1, total_length_mm: 300.0, weight_g: None },
    ///     ],
    /// });
    /// assert!((survey.mean_length_mm() - 250.0).abs() < 0.001);
    /// ```
    pub fn mean_length_mm(&self) -> f64 {
        let lengths = self.all_lengths_mm();
        if lengths.is_empty() {
            return 0.0;
        }
        lengths.iter().sum::<f64>() / lengths.len() as f64
    }

    /// Observed lengths for a given collection month and year, across all
    /// matching samples.
    pub fn lengths_for(&self, month: u32, year: i32) -> Vec<f64> {
        self.samples
            .iter()
            .filter(|s| s.month == month && s.year == year)
            .flat_map(|s| s.fish.iter().map(|f| f.total_length_mm))
            .collect()
    }

    /// Distinct sample labels ("YYYY-MM") in chronological order.
    pub fn sample_labels(&self) -> Vec<String> {
        let mut keyed: Vec<(i32, u32)> = self.samples.iter().map(|s| (s.year, s.month)).collect();
        keyed.sort();
        keyed.dedup();
        keyed
            .into_iter()
            .map(|(y, m)| format!("{y}-{m:02}"))
            .collect()
    }

    /// Validate every sample in the survey.
    pub fn validate(&self) -> Result<(), crate::error::LionfishError> {
        for sample in &self.samples {
            sample.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Fish;

    fn make_fish(sample_id: u32, fish_id: u32, length: f64) -> Fish {
        Fish {
            fish_id,
            sample_id,
            total_length_mm: length,
            weight_g: None,
        }
    }

    fn make_sample(sample_id: u32, month: u32, year: i32, lengths: &[f64]) -> Sample {
        Sample {
            sample_id,
            month,
            year,
            site: None,
            depth_m: None,
            fish: lengths
                .iter()
                .enumerate()
                .map(|(i, &l)| make_fish(sample_id, i as u32 + 1, l))
                .collect(),
        }
    }

    fn sample_survey() -> LengthSurvey {
        let mut survey = LengthSurvey::new("Test Survey");
        survey
            .samples
            .push(make_sample(1, 8, 2012, &[150.0, 210.0, 240.0]));
        survey
            .samples
            .push(make_sample(2, 4, 2013, &[180.0, 260.0]));
        survey
    }

    #[test]
    fn test_new_survey() {
        let survey = LengthSurvey::new("My Survey");
        assert_eq!(survey.name, "My Survey");
        assert!(survey.region.is_none());
        assert!(survey.samples.is_empty());
    }

    #[test]
    fn test_new_survey_string_conversion() {
        let survey = LengthSurvey::new(String::from("Owned String"));
        assert_eq!(survey.name, "Owned String");
    }

    #[test]
    fn test_num_samples() {
        assert_eq!(sample_survey().num_samples(), 2);
    }

    #[test]
    fn test_num_fish() {
        assert_eq!(sample_survey().num_fish(), 5);
    }

    #[test]
    fn test_num_fish_empty() {
        assert_eq!(LengthSurvey::new("Empty").num_fish(), 0);
    }

    #[test]
    fn test_all_lengths() {
        let lengths = sample_survey().all_lengths_mm();
        assert_eq!(lengths, vec![150.0, 210.0, 240.0, 180.0, 260.0]);
    }

    #[test]
    fn test_mean_length() {
        let survey = sample_survey();
        let expected = (150.0 + 210.0 + 240.0 + 180.0 + 260.0) / 5.0;
        assert!((survey.mean_length_mm() - expected).abs() < 0.001);
    }

    #[test]
    fn test_mean_length_empty() {
        assert_eq!(LengthSurvey::new("Empty").mean_length_mm(), 0.0);
    }

    #[test]
    fn test_lengths_for_match() {
        let lengths = sample_survey().lengths_for(4, 2013);
        assert_eq!(lengths, vec![180.0, 260.0]);
    }

    #[test]
    fn test_lengths_for_no_match() {
        assert!(sample_survey().lengths_for(1, 2010).is_empty());
    }

    #[test]
    fn test_lengths_for_merges_samples_same_month() {
        let mut survey = sample_survey();
        survey.samples.push(make_sample(3, 4, 2013, &[300.0]));
        let lengths = survey.lengths_for(4, 2013);
        assert_eq!(lengths, vec![180.0, 260.0, 300.0]);
    }

    #[test]
    fn test_sample_labels_sorted_and_deduplicated() {
        let mut survey = sample_survey();
        survey.samples.push(make_sample(3, 4, 2013, &[300.0]));
        let labels = survey.sample_labels();
        assert_eq!(labels, vec!["2012-08", "2013-04"]);
    }

    #[test]
    fn test_validate_ok() {
        assert!(sample_survey().validate().is_ok());
    }

    #[test]
    fn test_validate_propagates_sample_errors() {
        let mut survey = sample_survey();
        survey.samples[0].month = 13;
        assert!(survey.validate().is_err());
    }

    #[test]
    fn test_survey_json_roundtrip() {
        let survey = sample_survey();
        let json = serde_json::to_string(&survey).unwrap();
        let deserialized: LengthSurvey = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.name, survey.name);
        assert_eq!(deserialized.num_samples(), survey.num_samples());
        assert_eq!(deserialized.num_fish(), survey.num_fish());
    }
}
