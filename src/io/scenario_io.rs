use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::ProjectionConfig;
use crate::error::LionfishError;
use crate::models::GrowthCurve;

/// One named projection scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    #[serde(flatten)]
    pub config: ProjectionConfig,
}

/// A TOML scenario file: optional growth-curve overrides plus one or more
/// projection scenarios.
///
/// ```toml
/// [growth]
/// l_inf_mm = 448.0
/// k = 0.47
/// c = 0.61
/// t0 = -0.12
/// ts = 0.17
///
/// [[scenario]]
/// name = "baseline"
/// mortality_rate = 0.5
/// recruitment = 1000.0
/// bucket_width_mm = 10.0
/// horizon = 3
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioFile {
    pub growth: Option<GrowthCurve>,
    #[serde(rename = "scenario", default)]
    pub scenarios: Vec<Scenario>,
}

/// Read and validate a scenario file.
pub fn read_scenarios(path: impl AsRef<Path>) -> Result<ScenarioFile, LionfishError> {
    let content = std::fs::read_to_string(path.as_ref())?;
    parse_scenarios(&content)
}

/// Parse and validate scenario TOML.
pub fn parse_scenarios(content: &str) -> Result<ScenarioFile, LionfishError> {
    let file: ScenarioFile = toml::from_str(content)?;

    if file.scenarios.is_empty() {
        return Err(LionfishError::ConfigurationError(
            "scenario file defines no scenarios".to_string(),
        ));
    }
    if let Some(curve) = &file.growth {
        curve.validate()?;
    }
    for scenario in &file.scenarios {
        scenario.config.validate()?;
    }

    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASIC: &str = r#"
        [growth]
        l_inf_mm = 448.0
        k = 0.47
        c = 0.61
        t0 = -0.12
        ts = 0.17

        [[scenario]]
        name = "low"
        mortality_rate = 0.5
        recruitment = 500.0
        bucket_width_mm = 10.0
        horizon = 3

        [[scenario]]
        name = "high"
        mortality_rate = 0.5
        recruitment = 1500.0
        bucket_width_mm = 10.0
        horizon = 3
    "#;

    #[test]
    fn test_parse_scenarios() {
        let file = parse_scenarios(BASIC).unwrap();
        assert_eq!(file.scenarios.len(), 2);
        assert_eq!(file.scenarios[0].name, "low");
        assert_eq!(file.scenarios[0].config.recruitment, 500.0);
        assert_eq!(file.scenarios[1].config.recruitment, 1500.0);
    }

    #[test]
    fn test_parse_growth_section() {
        let file = parse_scenarios(BASIC).unwrap();
        let curve = file.growth.unwrap();
        assert_eq!(curve.l_inf_mm, 448.0);
        assert_eq!(curve.k, 0.47);
    }

    #[test]
    fn test_growth_section_optional() {
        let content = r#"
            [[scenario]]
            name = "only"
            mortality_rate = 0.5
            recruitment = 1000.0
            bucket_width_mm = 10.0
            horizon = 3
        "#;
        let file = parse_scenarios(content).unwrap();
        assert!(file.growth.is_none());
        assert_eq!(file.scenarios.len(), 1);
    }

    #[test]
    fn test_empty_scenario_list_rejected() {
        let content = r#"
            [growth]
            l_inf_mm = 448.0
            k = 0.47
            c = 0.61
            t0 = -0.12
            ts = 0.17
        "#;
        assert!(parse_scenarios(content).is_err());
    }

    #[test]
    fn test_invalid_scenario_config_rejected() {
        let content = r#"
            [[scenario]]
            name = "bad"
            mortality_rate = -0.5
            recruitment = 1000.0
            bucket_width_mm = 10.0
            horizon = 3
        "#;
        assert!(parse_scenarios(content).is_err());
    }

    #[test]
    fn test_invalid_growth_rejected() {
        let content = r#"
            [growth]
            l_inf_mm = -448.0
            k = 0.47
            c = 0.61
            t0 = -0.12
            ts = 0.17

            [[scenario]]
            name = "ok"
            mortality_rate = 0.5
            recruitment = 1000.0
            bucket_width_mm = 10.0
            horizon = 3
        "#;
        assert!(parse_scenarios(content).is_err());
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(
            parse_scenarios("not = = toml").unwrap_err(),
            LionfishError::Toml(_)
        ));
    }

    #[test]
    fn test_read_scenarios_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("scenarios.toml");
        std::fs::write(&path, BASIC).unwrap();
        let file = read_scenarios(&path).unwrap();
        assert_eq!(file.scenarios.len(), 2);
    }

    #[test]
    fn test_read_scenarios_missing_file() {
        assert!(read_scenarios("/nonexistent/scenarios.toml").is_err());
    }
}
