use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::analyzers::ColumnResolver;
use crate::error::Result;
use crate::models::{
    ChartData, ColumnAssignment, Dataset, Record, RunwayRecommendation, WindObservation,
    WindRoseHistogram,
};
use crate::utils::constants::RUNWAY_HEADING_STEP;

/// Everything derived from one dataset. Built from scratch per analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindAnalysis {
    pub columns: ColumnAssignment,
    pub total_records: usize,
    pub observations_used: usize,
    pub records_skipped: usize,
    pub histogram: WindRoseHistogram,
    /// `None` when no observation survived, or when the winds cancel out
    /// exactly and no prevailing axis exists.
    pub runway: Option<RunwayRecommendation>,
}

/// Sum of all wind vectors, east (`x`) and north (`y`) components.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ResultantVector {
    pub x: f64,
    pub y: f64,
}

impl ResultantVector {
    pub fn from_observations(observations: &[WindObservation]) -> Self {
        observations.iter().fold(Self::default(), |acc, obs| {
            let (x, y) = obs.components();
            Self {
                x: acc.x + x,
                y: acc.y + y,
            }
        })
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Bearing in [0, 360), or `None` for the zero vector.
    pub fn bearing(&self) -> Option<f64> {
        if self.is_zero() {
            return None;
        }
        let mut degrees = self.x.atan2(self.y).to_degrees();
        if degrees < 0.0 {
            degrees += 360.0;
        }
        Some(degrees)
    }
}

pub struct WindAnalyzer {
    resolver: ColumnResolver,
}

impl WindAnalyzer {
    pub fn new() -> Self {
        Self {
            resolver: ColumnResolver::new(),
        }
    }

    pub fn with_resolver(resolver: ColumnResolver) -> Self {
        Self { resolver }
    }

    /// Resolve columns against the dataset schema, then analyse.
    pub fn analyze_dataset(&self, dataset: &Dataset) -> Result<WindAnalysis> {
        let columns = self.resolver.resolve(&dataset.fields)?;
        Ok(self.analyze(&dataset.records, columns))
    }

    pub fn analyze(&self, records: &[Record], columns: ColumnAssignment) -> WindAnalysis {
        let observations = self.normalize(records, &columns);
        let histogram = build_histogram(&observations);
        let runway = optimal_runway_heading(&observations).map(RunwayRecommendation::from_heading);

        let records_skipped = records.len() - observations.len();
        match &runway {
            Some(r) => info!(
                observations = observations.len(),
                skipped = records_skipped,
                heading = r.optimal_degrees,
                designation = %r.designation(),
                "Wind analysis complete"
            ),
            None => warn!(
                observations = observations.len(),
                skipped = records_skipped,
                "No prevailing wind axis; runway recommendation unavailable"
            ),
        }

        WindAnalysis {
            columns,
            total_records: records.len(),
            observations_used: observations.len(),
            records_skipped,
            histogram,
            runway,
        }
    }

    /// Convert records to observations, silently dropping unusable rows.
    pub fn normalize(&self, records: &[Record], columns: &ColumnAssignment) -> Vec<WindObservation> {
        records
            .iter()
            .enumerate()
            .filter_map(|(row, record)| match WindObservation::from_record(record, columns) {
                Ok(obs) => Some(obs),
                Err(reason) => {
                    debug!(row = row + 1, ?reason, "Skipping record");
                    None
                }
            })
            .collect()
    }
}

impl Default for WindAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_histogram(observations: &[WindObservation]) -> WindRoseHistogram {
    let mut histogram = WindRoseHistogram::new();
    for observation in observations {
        histogram.add(observation);
    }
    histogram
}

/// Heading perpendicular to the resultant wind vector, rounded to the
/// nearest ten degrees. This approximates the crosswind-minimising
/// orientation rather than solving for it exactly.
pub fn optimal_runway_heading(observations: &[WindObservation]) -> Option<f64> {
    let bearing = ResultantVector::from_observations(observations).bearing()?;
    let heading = (bearing + 90.0) % 360.0;
    Some((heading / RUNWAY_HEADING_STEP + 0.5).floor() * RUNWAY_HEADING_STEP)
}

impl WindAnalysis {
    pub fn chart_data(&self) -> ChartData {
        self.histogram.to_chart_data()
    }

    pub fn summary(&self) -> String {
        let prevailing = self
            .histogram
            .prevailing_direction()
            .map(|d| d.label().to_string())
            .unwrap_or_else(|| "n/a".to_string());

        let runway = match &self.runway {
            Some(r) => r.summary(),
            None => "Suggested Runway\n- No usable wind observations".to_string(),
        };

        format!(
            "Columns: direction='{}', speed='{}'\n\
            Records: {} total, {} used, {} skipped\n\
            Prevailing direction: {}\n\n\
            {}",
            self.columns.direction_field,
            self.columns.speed_field,
            self.total_records,
            self.observations_used,
            self.records_skipped,
            prevailing,
            runway
        )
    }

    pub fn detailed_summary(&self) -> String {
        format!("{}\n\nWind Rose\n{}", self.summary(), self.histogram.table())
    }
}
