pub mod charts;
pub mod tables;

pub use charts::{
    format_cohort_histogram, format_length_histogram, print_cohort_histogram,
    print_length_histogram,
};
pub use tables::{
    format_growth_table, format_projection_table, format_sample_table, format_scenario_table,
    format_statistics_table, format_survey_summary, print_growth_table, print_projection_table,
    print_sample_table, print_scenario_table, print_statistics_table, print_survey_summary,
};
