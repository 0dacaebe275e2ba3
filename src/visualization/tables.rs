use colored::Colorize;
use comfy_table::{
    modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, ContentArrangement, Table,
};

use crate::analysis::{LengthStatistics, ProjectionTrace, SurveyMetrics};
use crate::models::GrowthPoint;

/// Format a survey summary table as a string.
pub fn format_survey_summary(metrics: &SurveyMetrics) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", "Survey Summary".bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(50)));

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Metric", "Value", "Unit"]);

    table.add_row(vec![
        Cell::new("Sampling Events"),
        Cell::new(format!("{}", metrics.num_samples)),
        Cell::new(""),
    ]);
    table.add_row(vec![
        Cell::new("Fish Measured"),
        Cell::new(format!("{}", metrics.num_fish)),
        Cell::new(""),
    ]);
    table.add_row(vec![
        Cell::new("Mean Total Length"),
        Cell::new(format!("{:.1}", metrics.mean_length_mm)),
        Cell::new("mm"),
    ]);
    if let (Some(min), Some(max)) = (metrics.min_length_mm, metrics.max_length_mm) {
        table.add_row(vec![
            Cell::new("Length Range"),
            Cell::new(format!("{min:.0}-{max:.0}")),
            Cell::new("mm"),
        ]);
    }
    if let Some(age) = metrics.mean_inferred_age {
        table.add_row(vec![
            Cell::new("Mean Inferred Age"),
            Cell::new(format!("{age:.2}")),
            Cell::new("years"),
        ]);
    }

    output.push_str(&format!("{table}"));
    output
}

/// Print a formatted survey summary table.
pub fn print_survey_summary(metrics: &SurveyMetrics) {
    print!("{}", format_survey_summary(metrics));
}

/// Format the per-collection-month composition table as a string.
pub fn format_sample_table(metrics: &SurveyMetrics) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", "Sample Composition".bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(50)));

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "Month",
            "Fish",
            "% of Total",
            "Mean TL (mm)",
            "Min (mm)",
            "Max (mm)",
        ]);

    for comp in &metrics.sample_composition {
        table.add_row(vec![
            Cell::new(&comp.label),
            Cell::new(format!("{}", comp.num_fish)),
            Cell::new(format!("{:.1}%", comp.percent_of_total)),
            Cell::new(format!("{:.1}", comp.mean_length_mm)),
            Cell::new(format!("{:.0}", comp.min_length_mm)),
            Cell::new(format!("{:.0}", comp.max_length_mm)),
        ]);
    }

    output.push_str(&format!("{table}"));
    output
}

/// Print the sample composition table.
pub fn print_sample_table(metrics: &SurveyMetrics) {
    print!("{}", format_sample_table(metrics));
}

/// Format sampling statistics as a string.
pub fn format_statistics_table(stats: &LengthStatistics) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", "Sampling Statistics".bold().green()));
    output.push_str(&format!(
        "{}\n",
        format!(
            "Confidence Level: {:.0}% | Sample Size: {} fish",
            stats.total_length.confidence_level * 100.0,
            stats.total_length.sample_size
        )
        .dimmed()
    ));

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "Metric",
            "Mean",
            "Std Error",
            "Lower CI",
            "Upper CI",
            "Error %",
        ]);

    let mut rows = vec![("Total Length (mm)", &stats.total_length)];
    if let Some(age) = &stats.inferred_age {
        rows.push(("Inferred Age (yr)", age));
    }
    for (label, ci) in rows {
        table.add_row(vec![
            Cell::new(label),
            Cell::new(format!("{:.2}", ci.mean)),
            Cell::new(format!("{:.2}", ci.std_error)),
            Cell::new(format!("{:.2}", ci.lower)),
            Cell::new(format!("{:.2}", ci.upper)),
            Cell::new(format!("{:.1}%", ci.sampling_error_percent)),
        ]);
    }
    output.push_str(&format!("{table}"));
    if stats.inferred_age.is_none() {
        output.push_str(&format!(
            "\n{}\n",
            "Inferred ages unavailable: fewer than 2 fish below the asymptotic length".dimmed()
        ));
    }
    output
}

/// Print sampling statistics table.
pub fn print_statistics_table(stats: &LengthStatistics) {
    print!("{}", format_statistics_table(stats));
}

/// Format a length-at-age table as a string.
pub fn format_growth_table(points: &[GrowthPoint]) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", "Predicted Length at Age".bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(50)));

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Age (yr)", "Total Length (mm)"]);

    for point in points {
        table.add_row(vec![
            Cell::new(format!("{:.2}", point.age_years)),
            Cell::new(format!("{:.1}", point.length_mm)),
        ]);
    }

    output.push_str(&format!("{table}"));
    output
}

/// Print a length-at-age table.
pub fn print_growth_table(points: &[GrowthPoint]) {
    print!("{}", format_growth_table(points));
}

/// Format a per-step projection table as a string.
pub fn format_projection_table(trace: &ProjectionTrace) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", "Cohort Projection".bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(50)));

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "Year",
            "Total Fish",
            "Size Classes",
            "Mean TL (mm)",
            "Mean Age (yr)",
        ]);

    for (step, cohort) in trace.iter().enumerate() {
        table.add_row(vec![
            Cell::new(format!("{step}")),
            Cell::new(format!("{:.0}", cohort.total_count())),
            Cell::new(format!("{}", cohort.num_classes())),
            Cell::new(format!("{:.1}", cohort.weighted_mean_length_mm())),
            Cell::new(format!("{:.2}", cohort.weighted_mean_age())),
        ]);
    }

    output.push_str(&format!("{table}"));
    output
}

/// Print a per-step projection table.
pub fn print_projection_table(trace: &ProjectionTrace) {
    print!("{}", format_projection_table(trace));
}

/// Format a comparison of several named projection traces as a string.
/// All traces are expected to share a horizon; shorter traces leave blanks.
pub fn format_scenario_table(scenarios: &[(String, ProjectionTrace)]) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", "Scenario Comparison".bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(50)));

    if scenarios.is_empty() {
        output.push_str("  No scenarios to compare.\n");
        return output;
    }

    let max_steps = scenarios
        .iter()
        .map(|(_, t)| t.num_steps())
        .max()
        .unwrap_or(0);

    let mut table = Table::new();
    let mut header = vec!["Year".to_string()];
    header.extend(scenarios.iter().map(|(name, _)| name.clone()));
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);

    for step in 0..max_steps {
        let mut row = vec![Cell::new(format!("{step}"))];
        for (_, trace) in scenarios {
            match trace.get(step) {
                Some(cohort) => row.push(Cell::new(format!("{:.0}", cohort.total_count()))),
                None => row.push(Cell::new("")),
            }
        }
        table.add_row(row);
    }

    output.push_str(&format!("{table}"));
    output
}

/// Print a scenario comparison table.
pub fn print_scenario_table(scenarios: &[(String, ProjectionTrace)]) {
    print!("{}", format_scenario_table(scenarios));
}
