//! Basic analysis example: load CSV, compute metrics, and display results.
//!
//! Run from the project root:
//!   cargo run --example basic_analysis

use std::path::Path;

use lionfish_population_analyzer::analysis::Analyzer;
use lionfish_population_analyzer::io::{CsvFormat, SurveyReader};
use lionfish_population_analyzer::models::GrowthCurve;
use lionfish_population_analyzer::visualization::{
    print_length_histogram, print_sample_table, print_statistics_table, print_survey_summary,
};

fn main() {
    let path = Path::new("data/samples/sample_survey.csv");
    let reader = CsvFormat;

    let survey = reader.read(path).expect("Failed to read CSV file");
    println!(
        "Loaded '{}': {} sampling events, {} fish",
        survey.name,
        survey.num_samples(),
        survey.num_fish()
    );

    let curve = GrowthCurve::default();
    let analyzer = Analyzer::new(&survey);

    // Survey metrics
    let metrics = analyzer.survey_metrics(&curve);
    print_survey_summary(&metrics);
    print_sample_table(&metrics);

    // Length-frequency distribution
    let dist = analyzer.length_distribution(10.0);
    print_length_histogram(&dist);

    // Sampling statistics
    match analyzer.length_statistics(&curve, 0.95) {
        Ok(stats) => print_statistics_table(&stats),
        Err(e) => eprintln!("Could not compute sampling statistics: {e}"),
    }
}
