use serde::{Deserialize, Serialize};

use crate::models::{CompassDirection, SpeedBand, WindObservation};
use crate::utils::constants::{COMPASS_POINTS, SERIES_ALPHA_SUFFIX, SPEED_BAND_COUNT};

/// Occurrence counts per compass direction and speed band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindRoseHistogram {
    counts: [[u64; SPEED_BAND_COUNT]; COMPASS_POINTS],
}

impl Default for WindRoseHistogram {
    fn default() -> Self {
        Self::new()
    }
}

impl WindRoseHistogram {
    pub fn new() -> Self {
        Self {
            counts: [[0; SPEED_BAND_COUNT]; COMPASS_POINTS],
        }
    }

    pub fn add(&mut self, observation: &WindObservation) {
        let direction = observation.compass_direction();
        let band = SpeedBand::index_for(observation.speed);
        self.counts[direction.index()][band] += 1;
    }

    pub fn counts_for(&self, direction: CompassDirection) -> &[u64; SPEED_BAND_COUNT] {
        &self.counts[direction.index()]
    }

    pub fn count(&self, direction: CompassDirection, band: usize) -> u64 {
        self.counts[direction.index()][band]
    }

    pub fn direction_total(&self, direction: CompassDirection) -> u64 {
        self.counts_for(direction).iter().sum()
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().flatten().sum()
    }

    /// Per-direction counts for one speed band, in canonical direction order.
    pub fn band_series(&self, band: usize) -> Vec<u64> {
        self.counts.iter().map(|row| row[band]).collect()
    }

    /// Direction with the most observations; ties go to the earlier bearing.
    pub fn prevailing_direction(&self) -> Option<CompassDirection> {
        let mut best: Option<(CompassDirection, u64)> = None;
        for direction in CompassDirection::ALL {
            let total = self.direction_total(direction);
            if total > 0 && best.map_or(true, |(_, t)| total > t) {
                best = Some((direction, total));
            }
        }
        best.map(|(direction, _)| direction)
    }

    pub fn to_chart_data(&self) -> ChartData {
        let directions: Vec<String> = CompassDirection::ALL
            .iter()
            .map(|d| d.label().to_string())
            .collect();
        let direction_colors: Vec<String> = CompassDirection::ALL
            .iter()
            .map(|d| d.color().to_string())
            .collect();

        let datasets = SpeedBand::ALL
            .iter()
            .enumerate()
            .map(|(i, band)| ChartDataset {
                label: band.label.to_string(),
                band_color: band.color.to_string(),
                data: self.band_series(i),
                background_color: direction_colors
                    .iter()
                    .map(|c| format!("{}{}", c, SERIES_ALPHA_SUFFIX))
                    .collect(),
            })
            .collect();

        ChartData {
            directions,
            direction_colors,
            datasets,
        }
    }

    /// Fixed-width table, one row per direction and one column per band.
    pub fn table(&self) -> String {
        let mut out = format!("{:<5}", "Dir");
        for band in SpeedBand::ALL.iter() {
            out.push_str(&format!("{:>12}", band.label));
        }
        out.push_str(&format!("{:>8}\n", "Total"));

        for direction in CompassDirection::ALL {
            out.push_str(&format!("{:<5}", direction.label()));
            for count in self.counts_for(direction) {
                out.push_str(&format!("{:>12}", count));
            }
            out.push_str(&format!("{:>8}\n", self.direction_total(direction)));
        }
        out
    }
}

/// Wind rose series in the shape a polar/stacked chart consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub directions: Vec<String>,
    pub direction_colors: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    pub label: String,
    pub band_color: String,
    pub data: Vec<u64>,
    pub background_color: Vec<String>,
}
