use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::constants::{BUCKET_WIDTH_DEGREES, COMPASS_POINTS, SPEED_BAND_COUNT};

/// The 16-point compass rose, in clockwise order starting at north.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CompassDirection {
    N,
    Nne,
    Ne,
    Ene,
    E,
    Ese,
    Se,
    Sse,
    S,
    Ssw,
    Sw,
    Wsw,
    W,
    Wnw,
    Nw,
    Nnw,
}

impl CompassDirection {
    pub const ALL: [CompassDirection; COMPASS_POINTS] = [
        CompassDirection::N,
        CompassDirection::Nne,
        CompassDirection::Ne,
        CompassDirection::Ene,
        CompassDirection::E,
        CompassDirection::Ese,
        CompassDirection::Se,
        CompassDirection::Sse,
        CompassDirection::S,
        CompassDirection::Ssw,
        CompassDirection::Sw,
        CompassDirection::Wsw,
        CompassDirection::W,
        CompassDirection::Wnw,
        CompassDirection::Nw,
        CompassDirection::Nnw,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn label(&self) -> &'static str {
        match self {
            CompassDirection::N => "N",
            CompassDirection::Nne => "NNE",
            CompassDirection::Ne => "NE",
            CompassDirection::Ene => "ENE",
            CompassDirection::E => "E",
            CompassDirection::Ese => "ESE",
            CompassDirection::Se => "SE",
            CompassDirection::Sse => "SSE",
            CompassDirection::S => "S",
            CompassDirection::Ssw => "SSW",
            CompassDirection::Sw => "SW",
            CompassDirection::Wsw => "WSW",
            CompassDirection::W => "W",
            CompassDirection::Wnw => "WNW",
            CompassDirection::Nw => "NW",
            CompassDirection::Nnw => "NNW",
        }
    }

    /// Case-insensitive lookup of a compass label such as "nne".
    pub fn from_label(label: &str) -> Option<Self> {
        let upper = label.to_uppercase();
        Self::ALL.iter().copied().find(|d| d.label() == upper)
    }

    /// Canonical bearing of the bucket centre.
    pub fn bearing(&self) -> f64 {
        self.index() as f64 * BUCKET_WIDTH_DEGREES
    }

    /// Bucket containing `degrees`. Any finite angle is accepted; half-way
    /// values round towards the clockwise neighbour.
    pub fn from_degrees(degrees: f64) -> Self {
        let points = COMPASS_POINTS as i64;
        let rounded = (degrees / BUCKET_WIDTH_DEGREES + 0.5).floor() as i64;
        Self::ALL[rounded.rem_euclid(points) as usize]
    }

    /// Display colour, `#RRGGBB`.
    pub fn color(&self) -> &'static str {
        match self {
            CompassDirection::N => "#FF0000",
            CompassDirection::Nne => "#FF4500",
            CompassDirection::Ne => "#FF8C00",
            CompassDirection::Ene => "#FFD700",
            CompassDirection::E => "#FFFF00",
            CompassDirection::Ese => "#ADFF2F",
            CompassDirection::Se => "#32CD32",
            CompassDirection::Sse => "#008000",
            CompassDirection::S => "#0000FF",
            CompassDirection::Ssw => "#4B0082",
            CompassDirection::Sw => "#8A2BE2",
            CompassDirection::Wsw => "#9932CC",
            CompassDirection::W => "#800080",
            CompassDirection::Wnw => "#C71585",
            CompassDirection::Nw => "#FF1493",
            CompassDirection::Nnw => "#FF69B4",
        }
    }
}

impl fmt::Display for CompassDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Half-open speed interval in km/h; the last band is open-ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedBand {
    pub min: f64,
    pub max: f64,
    pub label: &'static str,
    pub color: &'static str,
}

impl SpeedBand {
    pub const ALL: [SpeedBand; SPEED_BAND_COUNT] = [
        SpeedBand {
            min: 0.0,
            max: 5.0,
            label: "0-5 km/h",
            color: "rgba(0, 255, 0, 0.5)",
        },
        SpeedBand {
            min: 5.0,
            max: 10.0,
            label: "5-10 km/h",
            color: "rgba(173, 255, 47, 0.5)",
        },
        SpeedBand {
            min: 10.0,
            max: 15.0,
            label: "10-15 km/h",
            color: "rgba(255, 255, 0, 0.5)",
        },
        SpeedBand {
            min: 15.0,
            max: 20.0,
            label: "15-20 km/h",
            color: "rgba(255, 165, 0, 0.5)",
        },
        SpeedBand {
            min: 20.0,
            max: f64::INFINITY,
            label: ">20 km/h",
            color: "rgba(255, 0, 0, 0.5)",
        },
    ];

    pub fn contains(&self, speed: f64) -> bool {
        speed >= self.min && speed < self.max
    }

    /// Index of the first band containing `speed`. Negative speeds fit no
    /// band and are counted in the last one; record normalisation already
    /// drops them, so only observations built with `WindObservation::new`
    /// can reach that case.
    pub fn index_for(speed: f64) -> usize {
        Self::ALL
            .iter()
            .position(|band| band.contains(speed))
            .unwrap_or(Self::ALL.len() - 1)
    }
}
