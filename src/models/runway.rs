use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::constants::{RECIPROCAL_OFFSET, RUNWAY_COUNT, RUNWAY_HEADING_STEP};

/// Suggested runway orientation and its two designations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct RunwayRecommendation {
    /// Heading already rounded to the nearest ten degrees; may be 360.
    #[validate(range(min = 0.0, max = 360.0))]
    pub optimal_degrees: f64,

    #[validate(range(min = 1, max = 36))]
    pub runway_number: u8,

    #[validate(range(min = 1, max = 36))]
    pub reciprocal_number: u8,
}

impl RunwayRecommendation {
    pub fn from_heading(optimal_degrees: f64) -> Self {
        let runway_number = runway_number_for(optimal_degrees);
        Self {
            optimal_degrees,
            runway_number,
            reciprocal_number: reciprocal_of(runway_number),
        }
    }

    /// Two-digit designations, e.g. "09/27".
    pub fn designation(&self) -> String {
        format!("{:02}/{:02}", self.runway_number, self.reciprocal_number)
    }

    /// Heading and reciprocal heading in whole degrees.
    pub fn orientation(&self) -> (i64, i64) {
        let heading = self.optimal_degrees.round();
        let reciprocal = (self.optimal_degrees + 180.0) % 360.0;
        (heading as i64, reciprocal.round() as i64)
    }

    pub fn summary(&self) -> String {
        let (heading, reciprocal) = self.orientation();
        format!(
            "Suggested Runway\n\
            - Optimal heading: {}°\n\
            - Designation: {}\n\
            - Orientation: {}°/{}°",
            heading,
            self.designation(),
            heading,
            reciprocal
        )
    }
}

/// Runway number for a heading; 0 maps to 36 and values past 36 wrap.
pub fn runway_number_for(heading: f64) -> u8 {
    let count = RUNWAY_COUNT as i64;
    let mut number = (heading / RUNWAY_HEADING_STEP + 0.5).floor() as i64;
    if number == 0 {
        number = count;
    }
    if number > count {
        number -= count;
    }
    number as u8
}

pub fn reciprocal_of(runway_number: u8) -> u8 {
    match (runway_number + RECIPROCAL_OFFSET) % RUNWAY_COUNT {
        0 => RUNWAY_COUNT,
        n => n,
    }
}
