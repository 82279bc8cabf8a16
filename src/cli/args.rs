use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "windrose-runway")]
#[command(about = "Wind rose and runway orientation analysis for wind observation CSV files")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Hide progress output")]
    pub quiet: bool,

    #[arg(long, global = true, help = "Log file path")]
    pub log_file: Option<PathBuf>,

    #[arg(long, global = true, help = "Settings file (TOML, JSON or YAML)")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyse a CSV file of wind observations
    Analyze {
        #[arg(short, long, help = "Input CSV file with a header row")]
        input: PathBuf,

        #[arg(
            short,
            long,
            help = "Output JSON report path [default: output/wind-rose-{YYMMDD}.json]"
        )]
        output_file: Option<PathBuf>,

        #[arg(long, help = "Column holding wind direction (skips name matching)")]
        direction_column: Option<String>,

        #[arg(long, help = "Column holding wind speed (skips name matching)")]
        speed_column: Option<String>,

        #[arg(short, long, default_value = ",", help = "Field delimiter")]
        delimiter: char,

        #[arg(long, default_value = "false", help = "Print the summary without writing a report")]
        summary_only: bool,

        #[arg(long, default_value = "false", help = "Write the report as single-line JSON")]
        compact: bool,
    },

    /// Analyse the built-in sample dataset
    Sample {
        #[arg(
            short,
            long,
            help = "Output JSON report path [default: output/wind-rose-{YYMMDD}.json]"
        )]
        output_file: Option<PathBuf>,

        #[arg(long, default_value = "false", help = "Print the summary without writing a report")]
        summary_only: bool,

        #[arg(long, default_value = "false", help = "Write the report as single-line JSON")]
        compact: bool,
    },

    /// Show the schema, resolved columns and first rows of a CSV file
    Preview {
        #[arg(short, long, help = "Input CSV file with a header row")]
        input: PathBuf,

        #[arg(short, long, help = "Rows to show [default: preview_rows setting]")]
        rows: Option<usize>,

        #[arg(short, long, default_value = ",", help = "Field delimiter")]
        delimiter: char,
    },

    /// Display a previously written JSON report
    Info {
        #[arg(short, long)]
        file: PathBuf,

        #[arg(long, default_value = "false", help = "Include the wind rose table")]
        table: bool,
    },
}
