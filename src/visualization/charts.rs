use colored::Colorize;

use crate::analysis::LengthDistribution;
use crate::models::Cohort;

const MAX_BAR_WIDTH: usize = 50;

/// Format a length-frequency histogram as a string with unicode bars.
pub fn format_length_histogram(distribution: &LengthDistribution) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "\n{}\n",
        "Length-Frequency Distribution".bold().green()
    ));
    output.push_str(&format!(
        "{}\n",
        format!("Class width: {:.0} mm", distribution.class_width_mm).dimmed()
    ));

    if distribution.classes.is_empty() {
        output.push_str("  No fish to display.\n");
        return output;
    }

    let max_count = distribution
        .classes
        .iter()
        .map(|c| c.count)
        .max()
        .unwrap_or(1)
        .max(1);

    for class in &distribution.classes {
        let bar_width = (class.count * MAX_BAR_WIDTH) / max_count;
        let bar = "\u{2588}".repeat(bar_width.max(1));
        output.push_str(&format!(
            "{:>4.0}-{:<4.0} mm | {} {} ({:.1}%)\n",
            class.lower_mm,
            class.upper_mm,
            bar.cyan(),
            class.count,
            class.percent
        ));
    }

    output
}

/// Print a length-frequency histogram.
pub fn print_length_histogram(distribution: &LengthDistribution) {
    print!("{}", format_length_histogram(distribution));
}

/// Format a cohort's size-class structure as a histogram string.
pub fn format_cohort_histogram(cohort: &Cohort) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", "Cohort Size Structure".bold().green()));

    if cohort.is_empty() {
        output.push_str("  Empty cohort.\n");
        return output;
    }

    let max_count = cohort
        .iter()
        .map(|(_, bucket)| bucket.count)
        .fold(0.0_f64, f64::max)
        .max(1.0);

    for (size_class, bucket) in cohort.iter() {
        let bar_width = ((bucket.count / max_count) * MAX_BAR_WIDTH as f64).round() as usize;
        let bar = "\u{2588}".repeat(bar_width.max(1));
        output.push_str(&format!(
            "{size_class:>4} mm | {} {:.0} (age {:.2})\n",
            bar.cyan(),
            bucket.count,
            bucket.mean_age
        ));
    }

    output
}

/// Print a cohort size-structure histogram.
pub fn print_cohort_histogram(cohort: &Cohort) {
    print!("{}", format_cohort_histogram(cohort));
}
