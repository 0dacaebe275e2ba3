use std::path::Path;

use crate::error::LionfishError;
use crate::models::LengthSurvey;

/// Read length survey data from a JSON file.
pub fn read_json(path: impl AsRef<Path>) -> Result<LengthSurvey, LionfishError> {
    let content = std::fs::read_to_string(path.as_ref())?;
    let survey: LengthSurvey = serde_json::from_str(&content)?;
    survey.validate()?;
    Ok(survey)
}

/// Write length survey data to a JSON file.
pub fn write_json(
    survey: &LengthSurvey,
    path: impl AsRef<Path>,
    pretty: bool,
) -> Result<(), LionfishError> {
    let content = if pretty {
        serde_json::to_string_pretty(survey)?
    } else {
        serde_json::to_string(survey)?
    };
    std::fs::write(path.as_ref(), content)?;
    Ok(())
}
