use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use lionfish_population_analyzer::{
    analysis::{Analyzer, ProjectionConfig},
    io,
    models::GrowthCurve,
    visualization::{
        print_cohort_histogram, print_growth_table, print_length_histogram,
        print_projection_table, print_sample_table, print_scenario_table, print_statistics_table,
        print_survey_summary,
    },
};

#[derive(Parser)]
#[command(
    name = "lionfish-analyzer",
    about = "Lionfish Population Analyzer - Growth and cohort projection tool",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze length-survey data and display population metrics
    Analyze {
        /// Path to input file (CSV, JSON, or Excel)
        #[arg(short, long)]
        input: PathBuf,

        /// Confidence level for statistical analysis (0.0-1.0)
        #[arg(short, long, default_value = "0.95")]
        confidence: f64,

        /// Length class width in mm for the frequency distribution
        #[arg(short = 'w', long, default_value = "10.0")]
        class_width: f64,

        /// Show per-month sample composition
        #[arg(long, default_value = "true")]
        composition: bool,

        /// Show length-frequency histogram
        #[arg(long, default_value = "true")]
        distribution: bool,
    },

    /// Tabulate predicted length at age from the growth function
    Growth {
        /// Maximum age in years
        #[arg(short, long, default_value = "10")]
        max_age: u32,

        /// Evaluation points per year
        #[arg(short, long, default_value = "4")]
        steps_per_year: u32,

        /// Asymptotic length in mm
        #[arg(long, default_value = "448.0")]
        l_inf: f64,

        /// Growth coefficient K (per year)
        #[arg(long, default_value = "0.47")]
        k: f64,

        /// Amplitude of seasonal oscillation (0 disables seasonality)
        #[arg(long, default_value = "0.61")]
        c: f64,

        /// Theoretical age at zero length (years)
        #[arg(long, default_value = "-0.12")]
        t0: f64,

        /// Phase of the seasonal growth peak (fraction of year)
        #[arg(long, default_value = "0.17")]
        ts: f64,
    },

    /// Project a cohort forward under mortality, growth, and recruitment
    Project {
        /// Path to input file (CSV, JSON, or Excel)
        #[arg(short, long)]
        input: PathBuf,

        /// Collection month to seed the cohort from (1-12)
        #[arg(short, long)]
        month: u32,

        /// Collection year to seed the cohort from
        #[arg(short, long)]
        year: i32,

        /// Sampling-fraction multiplier applied to observed counts
        #[arg(long, default_value = "1.0")]
        scale: f64,

        /// Instantaneous natural mortality rate M (per year)
        #[arg(long, default_value = "0.5")]
        mortality: f64,

        /// Number of age-0 recruits added each year
        #[arg(short, long, default_value = "0.0")]
        recruitment: f64,

        /// Size-class bucket width in mm
        #[arg(short = 'w', long, default_value = "10.0")]
        bucket_width: f64,

        /// Number of annual steps to project
        #[arg(long, default_value = "10")]
        horizon: u32,

        /// TOML file defining named scenarios to compare
        #[arg(long)]
        scenarios: Option<PathBuf>,

        /// Solve for the recruitment that holds the population steady
        #[arg(long)]
        steady_state: bool,

        /// Show a size-structure histogram of the final cohort
        #[arg(long)]
        histogram: bool,
    },

    /// Convert survey data between formats
    Convert {
        /// Input file path
        #[arg(short, long)]
        input: PathBuf,

        /// Output file path
        #[arg(short, long)]
        output: PathBuf,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Display a quick summary of the survey
    Summary {
        /// Path to input file
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            input,
            confidence,
            class_width,
            composition,
            distribution,
        } => {
            println!(
                "\n{}",
                format!("Lionfish Population Analysis: {}", input.display())
                    .bold()
                    .cyan()
            );

            let survey = io::read_survey(&input)?;
            println!(
                "  Loaded {} sampling events with {} fish",
                survey.num_samples(),
                survey.num_fish()
            );

            let curve = GrowthCurve::default();
            let analyzer = Analyzer::new(&survey);

            let metrics = analyzer.survey_metrics(&curve);
            print_survey_summary(&metrics);

            if composition {
                print_sample_table(&metrics);
            }

            if distribution {
                let dist = analyzer.length_distribution(class_width);
                print_length_histogram(&dist);
            }

            match analyzer.length_statistics(&curve, confidence) {
                Ok(stats) => print_statistics_table(&stats),
                Err(e) => {
                    eprintln!("{}: {e}", "Warning".yellow());
                }
            }
        }

        Commands::Growth {
            max_age,
            steps_per_year,
            l_inf,
            k,
            c,
            t0,
            ts,
        } => {
            let curve = GrowthCurve {
                l_inf_mm: l_inf,
                k,
                c,
                t0,
                ts,
            };
            curve.validate()?;

            println!(
                "\n{}",
                format!(
                    "Seasonal von Bertalanffy Growth (L_inf = {l_inf} mm, K = {k}/yr)"
                )
                .bold()
                .cyan()
            );

            let points = curve.tabulate(max_age, steps_per_year);
            print_growth_table(&points);
        }

        Commands::Project {
            input,
            month,
            year,
            scale,
            mortality,
            recruitment,
            bucket_width,
            horizon,
            scenarios,
            steady_state,
            histogram,
        } => {
            let survey = io::read_survey(&input)?;
            let analyzer = Analyzer::new(&survey);

            if let Some(scenario_path) = scenarios {
                let file = io::read_scenarios(&scenario_path)?;
                let curve = file.growth.unwrap_or_default();
                let initial = analyzer.initial_cohort(month, year, scale, bucket_width, &curve)?;

                println!(
                    "\n{}",
                    format!("Scenario Projections: {}", scenario_path.display())
                        .bold()
                        .cyan()
                );

                let mut traces = Vec::new();
                for scenario in &file.scenarios {
                    let trace = analyzer.project(&initial, &scenario.config, &curve)?;
                    traces.push((scenario.name.clone(), trace));
                }
                print_scenario_table(&traces);
            } else if steady_state {
                let curve = GrowthCurve::default();
                let initial = analyzer.initial_cohort(month, year, scale, bucket_width, &curve)?;
                let r = analyzer.steady_state_recruitment(
                    &initial,
                    mortality,
                    bucket_width,
                    horizon,
                    &curve,
                )?;

                println!(
                    "\n{}",
                    format!("Steady-State Recruitment (M = {mortality}/yr, {horizon}-year horizon)")
                        .bold()
                        .cyan()
                );
                println!("  Initial population: {:.0} fish", initial.total_count());
                println!("  Required recruitment: {r:.0} age-0 fish per year");
            } else {
                let curve = GrowthCurve::default();
                let config = ProjectionConfig {
                    mortality_rate: mortality,
                    recruitment,
                    bucket_width_mm: bucket_width,
                    horizon,
                };
                let initial = analyzer.initial_cohort(month, year, scale, bucket_width, &curve)?;

                println!(
                    "\n{}",
                    format!("Cohort Projection: {horizon} years (M = {mortality}/yr)")
                        .bold()
                        .cyan()
                );

                let trace = analyzer.project(&initial, &config, &curve)?;
                print_projection_table(&trace);

                if histogram {
                    print_cohort_histogram(trace.last());
                }
            }
        }

        Commands::Convert {
            input,
            output,
            pretty,
        } => {
            let survey = io::read_survey(&input)?;

            let out_ext = output
                .extension()
                .and_then(|e| e.to_str())
                .unwrap_or("")
                .to_lowercase();

            match out_ext.as_str() {
                "csv" => io::write_csv(&survey, &output)?,
                "json" => io::write_json(&survey, &output, pretty)?,
                "xlsx" => io::write_excel(&survey, &output)?,
                _ => anyhow::bail!("Unsupported output format: .{out_ext}"),
            }

            println!(
                "{} Converted {} -> {}",
                "Success:".green().bold(),
                input.display(),
                output.display()
            );
        }

        Commands::Summary { input } => {
            let survey = io::read_survey(&input)?;

            println!("\n{}", "Quick Summary".bold().cyan());
            println!("{}", "=".repeat(40));
            println!("  Name:            {}", survey.name);
            if let Some(region) = &survey.region {
                println!("  Region:          {region}");
            }
            println!("  Sampling Events: {}", survey.num_samples());
            println!("  Fish Measured:   {}", survey.num_fish());
            println!("  Mean TL:         {:.1} mm", survey.mean_length_mm());
            for label in survey.sample_labels() {
                println!("  Collection:      {label}");
            }
        }
    }

    Ok(())
}
