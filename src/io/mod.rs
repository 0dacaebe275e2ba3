mod csv_io;
mod excel_io;
mod json_io;
mod scenario_io;

use std::path::Path;

use crate::error::LionfishError;
use crate::models::LengthSurvey;

pub use csv_io::{read_csv, write_csv};
pub use excel_io::{read_excel, write_excel};
pub use json_io::{read_json, write_json};
pub use scenario_io::{parse_scenarios, read_scenarios, Scenario, ScenarioFile};

/// Trait for reading length survey data from a file.
pub trait SurveyReader {
    fn read(&self, path: &Path) -> Result<LengthSurvey, LionfishError>;
}

/// Trait for writing length survey data to a file.
pub trait SurveyWriter {
    fn write(&self, survey: &LengthSurvey, path: &Path) -> Result<(), LionfishError>;
}

/// CSV format reader/writer.
pub struct CsvFormat;

impl SurveyReader for CsvFormat {
    fn read(&self, path: &Path) -> Result<LengthSurvey, LionfishError> {
        read_csv(path)
    }
}

impl SurveyWriter for CsvFormat {
    fn write(&self, survey: &LengthSurvey, path: &Path) -> Result<(), LionfishError> {
        write_csv(survey, path)
    }
}

/// JSON format reader/writer.
pub struct JsonFormat {
    pub pretty: bool,
}

impl Default for JsonFormat {
    fn default() -> Self {
        Self { pretty: false }
    }
}

impl SurveyReader for JsonFormat {
    fn read(&self, path: &Path) -> Result<LengthSurvey, LionfishError> {
        read_json(path)
    }
}

impl SurveyWriter for JsonFormat {
    fn write(&self, survey: &LengthSurvey, path: &Path) -> Result<(), LionfishError> {
        write_json(survey, path, self.pretty)
    }
}

/// Excel format reader/writer.
pub struct ExcelFormat;

impl SurveyReader for ExcelFormat {
    fn read(&self, path: &Path) -> Result<LengthSurvey, LionfishError> {
        read_excel(path)
    }
}

impl SurveyWriter for ExcelFormat {
    fn write(&self, survey: &LengthSurvey, path: &Path) -> Result<(), LionfishError> {
        write_excel(survey, path)
    }
}

/// Read a survey, dispatching on the file extension (.csv, .json, .xlsx).
pub fn read_survey(path: impl AsRef<Path>) -> Result<LengthSurvey, LionfishError> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "csv" => read_csv(path),
        "json" => read_json(path),
        "xlsx" | "xls" => read_excel(path),
        _ => Err(LionfishError::ParseError(format!(
            "Unsupported file format: .{ext}. Use .csv, .json, or .xlsx"
        ))),
    }
}
