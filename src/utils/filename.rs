use chrono::{Datelike, Local};
use std::path::PathBuf;

use crate::utils::constants::DEFAULT_OUTPUT_DIR;

/// Generate default report filename with format: wind-rose-{YYMMDD}.json
pub fn generate_default_report_filename() -> PathBuf {
    let now = Local::now();
    let filename = format!(
        "wind-rose-{:02}{:02}{:02}.json",
        now.year() % 100,
        now.month(),
        now.day()
    );
    PathBuf::from(DEFAULT_OUTPUT_DIR).join(filename)
}
