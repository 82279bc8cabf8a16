use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::info;

use crate::analyzers::WindAnalysis;
use crate::error::Result;
use crate::models::ChartData;

/// What a renderer needs: the chart series plus the runway recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindReport {
    pub source: String,
    pub generated_at: DateTime<Utc>,
    pub chart: ChartData,
    pub analysis: WindAnalysis,
}

impl WindReport {
    pub fn new(source: impl Into<String>, analysis: WindAnalysis) -> Self {
        Self {
            source: source.into(),
            generated_at: Utc::now(),
            chart: analysis.chart_data(),
            analysis,
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "Source: {}\nGenerated: {}\n{}",
            self.source,
            self.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            self.analysis.summary()
        )
    }
}

pub struct ReportWriter {
    pretty: bool,
}

impl ReportWriter {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn write_report(&self, report: &WindReport, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut writer = BufWriter::new(File::create(path)?);
        if self.pretty {
            serde_json::to_writer_pretty(&mut writer, report)?;
        } else {
            serde_json::to_writer(&mut writer, report)?;
        }
        writer.write_all(b"\n")?;
        writer.flush()?;

        info!(path = %path.display(), "Wrote wind report");
        Ok(())
    }

    pub fn read_report(&self, path: &Path) -> Result<WindReport> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }
}

impl Default for ReportWriter {
    fn default() -> Self {
        Self::new()
    }
}
