//! Cohort projection example: seed a cohort from a survey month and project
//! it forward under mortality, growth, and recruitment.
//!
//! Run from the project root:
//!   cargo run --example cohort_projection

use std::path::Path;

use lionfish_population_analyzer::analysis::{Analyzer, ProjectionConfig};
use lionfish_population_analyzer::io::{CsvFormat, SurveyReader};
use lionfish_population_analyzer::models::GrowthCurve;
use lionfish_population_analyzer::visualization::{
    print_cohort_histogram, print_projection_table,
};

fn main() {
    let path = Path::new("data/samples/sample_survey.csv");
    let survey = CsvFormat.read(path).expect("Failed to read CSV file");

    let curve = GrowthCurve::default();
    let analyzer = Analyzer::new(&survey);

    // Each observed fish stands in for ten on the surveyed reef.
    let initial = analyzer
        .initial_cohort(4, 2013, 10.0, 10.0, &curve)
        .expect("Failed to build initial cohort");
    println!(
        "Initial cohort: {:.0} fish across {} size classes",
        initial.total_count(),
        initial.num_classes()
    );

    // Project a decade with a constant recruitment pulse
    println!("\n=== Constant Recruitment ===");
    let config = ProjectionConfig {
        mortality_rate: 0.5,
        recruitment: 1000.0,
        bucket_width_mm: 10.0,
        horizon: 10,
    };
    match analyzer.project(&initial, &config, &curve) {
        Ok(trace) => {
            print_projection_table(&trace);
            print_cohort_histogram(trace.last());
        }
        Err(e) => eprintln!("Projection failed: {e}"),
    }

    // Find the recruitment size that holds the population steady
    println!("\n=== Steady-State Recruitment ===");
    match analyzer.steady_state_recruitment(&initial, 0.5, 10.0, 3, &curve) {
        Ok(r) => println!(
            "{r:.0} age-0 recruits per year hold {:.0} fish steady over 3 years",
            initial.total_count()
        ),
        Err(e) => eprintln!("Steady-state search failed: {e}"),
    }
}
