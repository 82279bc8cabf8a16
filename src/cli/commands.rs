use std::path::{Path, PathBuf};
use tracing::info;

use crate::analyzers::{ColumnResolver, WindAnalysis, WindAnalyzer};
use crate::cli::args::{Cli, Commands};
use crate::error::{AnalysisError, Result};
use crate::models::Dataset;
use crate::readers::{sample_dataset, CsvReader};
use crate::settings::AnalysisSettings;
use crate::utils::filename::generate_default_report_filename;
use crate::utils::progress::ProgressReporter;
use crate::writers::{ReportWriter, WindReport};

pub fn run(cli: Cli) -> Result<()> {
    let settings = AnalysisSettings::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Analyze {
            input,
            output_file,
            direction_column,
            speed_column,
            delimiter,
            summary_only,
            compact,
        } => {
            println!("Analysing wind data...");
            println!("Input file: {}", input.display());

            let dataset = read_csv(&input, delimiter, cli.quiet)?;
            let resolver = ColumnResolver::from_settings(&settings)
                .with_direction_column(direction_column)
                .with_speed_column(speed_column);
            let analysis = WindAnalyzer::with_resolver(resolver).analyze_dataset(&dataset)?;

            let options = ReportOptions {
                output_file,
                summary_only,
                compact,
            };
            report(&input.display().to_string(), analysis, options)?;
        }

        Commands::Sample {
            output_file,
            summary_only,
            compact,
        } => {
            println!("Analysing built-in sample data...");

            let dataset = sample_dataset();
            let analysis = WindAnalyzer::with_resolver(ColumnResolver::from_settings(&settings))
                .analyze_dataset(&dataset)?;

            println!("\n{}", dataset.preview(settings.preview_rows));
            let options = ReportOptions {
                output_file,
                summary_only,
                compact,
            };
            report("sample data", analysis, options)?;
        }

        Commands::Preview {
            input,
            rows,
            delimiter,
        } => {
            let dataset = read_csv(&input, delimiter, cli.quiet)?;

            println!("Columns: {}", dataset.fields.join(", "));
            match ColumnResolver::from_settings(&settings).resolve(&dataset.fields) {
                Ok(columns) => println!(
                    "Wind columns: direction='{}', speed='{}'",
                    columns.direction_field, columns.speed_field
                ),
                Err(e) => println!("Wind columns: {}", e),
            }
            println!("\n{}", dataset.preview(rows.unwrap_or(settings.preview_rows)));
        }

        Commands::Info { file, table } => {
            println!("Reading report: {}", file.display());

            let report = ReportWriter::new().read_report(&file)?;
            println!("\n{}", report.summary());
            if table {
                println!("\nWind Rose\n{}", report.analysis.histogram.table());
            }
        }
    }

    Ok(())
}

fn read_csv(path: &Path, delimiter: char, quiet: bool) -> Result<Dataset> {
    let delimiter = u8::try_from(delimiter).map_err(|_| {
        AnalysisError::InvalidFormat(format!("Delimiter '{}' is not a single byte", delimiter))
    })?;

    let progress = ProgressReporter::new_spinner("Reading CSV...", quiet);
    let dataset = CsvReader::with_delimiter(delimiter).read_dataset(path, Some(&progress))?;
    progress.finish_with_message(&format!("Read {} rows", dataset.len()));

    Ok(dataset)
}

struct ReportOptions {
    output_file: Option<PathBuf>,
    summary_only: bool,
    compact: bool,
}

fn report(source: &str, analysis: WindAnalysis, options: ReportOptions) -> Result<()> {
    println!("\n{}", analysis.detailed_summary());

    if options.summary_only {
        println!("Summary only - no report written");
        return Ok(());
    }

    let output_file = options
        .output_file
        .unwrap_or_else(generate_default_report_filename);
    let report = WindReport::new(source, analysis);
    ReportWriter::new()
        .with_pretty(!options.compact)
        .write_report(&report, &output_file)?;

    info!(path = %output_file.display(), "Analysis complete");
    println!("Report written to {}", output_file.display());
    Ok(())
}
