use std::path::Path;

use calamine::{open_workbook, DataType, Reader, Xlsx};
use rust_xlsxwriter::Workbook;

use crate::error::LionfishError;
use crate::models::{Fish, LengthSurvey, Sample};

/// Read length survey data from an Excel (.xlsx) file.
///
/// Expects a sheet with columns:
/// sample_id, fish_id, month, year, site, depth_m, total_length_mm, weight_g
pub fn read_excel(path: impl AsRef<Path>) -> Result<LengthSurvey, LionfishError> {
    let path = path.as_ref();
    let mut workbook: Xlsx<_> = open_workbook(path)?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| LionfishError::Excel("No sheets found in workbook".to_string()))?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| LionfishError::Excel(e.to_string()))?;

    let mut samples: std::collections::HashMap<u32, Sample> = std::collections::HashMap::new();
    let mut rows = range.rows();

    // Skip header row
    rows.next();

    for (row_idx, row) in rows.enumerate() {
        if row.len() < 7 {
            continue;
        }
        let row_num = row_idx + 2; // 1-based, after the header

        let get_f64 = |idx: usize, column: &str| -> Result<f64, LionfishError> {
            row.get(idx).and_then(|c| c.as_f64()).ok_or_else(|| {
                LionfishError::ParseError(format!(
                    "row {row_num}: expected a number in column '{column}'"
                ))
            })
        };

        let get_opt_f64 = |idx: usize| -> Option<f64> { row.get(idx).and_then(|c| c.as_f64()) };

        let get_opt_string = |idx: usize| -> Option<String> {
            row.get(idx)
                .map(|c| c.to_string())
                .filter(|s| !s.is_empty())
        };

        let sample_id = get_f64(0, "sample_id")? as u32;
        let fish_id = get_f64(1, "fish_id")? as u32;

        let fish = Fish {
            fish_id,
            sample_id,
            total_length_mm: get_f64(6, "total_length_mm")?,
            weight_g: get_opt_f64(7),
        };

        fish.validate()?;

        let sample = match samples.entry(sample_id) {
            std::collections::hash_map::Entry::Occupied(entry) => entry.into_mut(),
            std::collections::hash_map::Entry::Vacant(entry) => entry.insert(Sample {
                sample_id,
                month: get_f64(2, "month")? as u32,
                year: get_f64(3, "year")? as i32,
                site: get_opt_string(4),
                depth_m: get_opt_f64(5),
                fish: Vec::new(),
            }),
        };

        sample.fish.push(fish);
    }

    for sample in samples.values() {
        sample.validate()?;
    }

    let mut survey = LengthSurvey::new(
        path.file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "Unknown".to_string()),
    );
    let mut sample_list: Vec<Sample> = samples.into_values().collect();
    sample_list.sort_by_key(|s| s.sample_id);
    survey.samples = sample_list;

    Ok(survey)
}

/// Write length survey data to an Excel (.xlsx) file.
pub fn write_excel(survey: &LengthSurvey, path: impl AsRef<Path>) -> Result<(), LionfishError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    let headers = [
        "sample_id",
        "fish_id",
        "month",
        "year",
        "site",
        "depth_m",
        "total_length_mm",
        "weight_g",
    ];

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(|e| LionfishError::Excel(e.to_string()))?;
    }

    let mut row_idx: u32 = 1;
    for sample in &survey.samples {
        for fish in &sample.fish {
            worksheet
                .write_number(row_idx, 0, fish.sample_id as f64)
                .map_err(|e| LionfishError::Excel(e.to_string()))?;
            worksheet
                .write_number(row_idx, 1, fish.fish_id as f64)
                .map_err(|e| LionfishError::Excel(e.to_string()))?;
            worksheet
                .write_number(row_idx, 2, sample.month as f64)
                .map_err(|e| LionfishError::Excel(e.to_string()))?;
            worksheet
                .write_number(row_idx, 3, sample.year as f64)
                .map_err(|e| LionfishError::Excel(e.to_string()))?;
            if let Some(site) = &sample.site {
                worksheet
                    .write_string(row_idx, 4, site)
                    .map_err(|e| LionfishError::Excel(e.to_string()))?;
            }
            if let Some(depth) = sample.depth_m {
                worksheet
                    .write_number(row_idx, 5, depth)
                    .map_err(|e| LionfishError::Excel(e.to_string()))?;
            }
            worksheet
                .write_number(row_idx, 6, fish.total_length_mm)
                .map_err(|e| LionfishError::Excel(e.to_string()))?;
            if let Some(w) = fish.weight_g {
                worksheet
                    .write_number(row_idx, 7, w)
                    .map_err(|e| LionfishError::Excel(e.to_string()))?;
            }

            row_idx += 1;
        }
    }

    workbook
        .save(path.as_ref())
        .map_err(|e| LionfishError::Excel(e.to_string()))?;

    Ok(())
}
