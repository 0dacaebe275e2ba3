use std::io::Read;
use std::path::Path;

use crate::error::LionfishError;
use crate::models::{Fish, LengthSurvey, Sample};

/// CSV row structure for fish measurement data.
#[derive(Debug, serde::Deserialize, serde::Serialize)]
struct FishRow {
    sample_id: u32,
    fish_id: u32,
    month: u32,
    year: i32,
    site: Option<String>,
    depth_m: Option<f64>,
    total_length_mm: f64,
    weight_g: Option<f64>,
}

fn parse_csv_records<R: Read>(
    rdr: &mut csv::Reader<R>,
) -> Result<std::collections::HashMap<u32, Sample>, LionfishError> {
    let mut samples: std::collections::HashMap<u32, Sample> = std::collections::HashMap::new();

    for result in rdr.deserialize() {
        let row: FishRow = result?;

        let fish = Fish {
            fish_id: row.fish_id,
            sample_id: row.sample_id,
            total_length_mm: row.total_length_mm,
            weight_g: row.weight_g,
        };

        fish.validate()?;

        let sample = samples.entry(row.sample_id).or_insert_with(|| Sample {
            sample_id: row.sample_id,
            month: row.month,
            year: row.year,
            site: row.site.clone(),
            depth_m: row.depth_m,
            fish: Vec::new(),
        });

        sample.fish.push(fish);
    }

    for sample in samples.values() {
        sample.validate()?;
    }

    Ok(samples)
}

/// Read length survey data from a CSV file.
pub fn read_csv(path: impl AsRef<Path>) -> Result<LengthSurvey, LionfishError> {
    let path = path.as_ref();
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let samples = parse_csv_records(&mut rdr)?;

    let mut survey = LengthSurvey::new(
        path.file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "Unknown".to_string()),
    );
    let mut sample_list: Vec<Sample> = samples.into_values().collect();
    sample_list.sort_by_key(|s| s.sample_id);
    survey.samples = sample_list;

    tracing::debug!(
        samples = survey.num_samples(),
        fish = survey.num_fish(),
        "read CSV survey"
    );
    Ok(survey)
}

/// Write length survey data to a CSV file as flat fish rows.
pub fn write_csv(survey: &LengthSurvey, path: impl AsRef<Path>) -> Result<(), LionfishError> {
    let mut wtr = csv::Writer::from_path(path.as_ref())?;

    for sample in &survey.samples {
        for fish in &sample.fish {
            let row = FishRow {
                sample_id: fish.sample_id,
                fish_id: fish.fish_id,
                month: sample.month,
                year: sample.year,
                site: sample.site.clone(),
                depth_m: sample.depth_m,
                total_length_mm: fish.total_length_mm,
                weight_g: fish.weight_g,
            };
            wtr.serialize(&row)?;
        }
    }

    wtr.flush()?;
    Ok(())
}
