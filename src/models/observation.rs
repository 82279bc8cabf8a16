use serde::{Deserialize, Serialize};

use crate::models::{CompassDirection, RawValue, Record};
use crate::utils::numeric::parse_numeric_prefix;

/// Which columns of the dataset carry wind direction and wind speed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnAssignment {
    pub direction_field: String,
    pub speed_field: String,
}

impl ColumnAssignment {
    pub fn new(direction_field: impl Into<String>, speed_field: impl Into<String>) -> Self {
        Self {
            direction_field: direction_field.into(),
            speed_field: speed_field.into(),
        }
    }
}

/// Why a record did not produce an observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    MissingDirection,
    MissingSpeed,
    UnparsableDirection,
    UnparsableSpeed,
    NegativeSpeed,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindObservation {
    /// Bearing the wind is reported from, normalised into [0, 360).
    pub direction_degrees: f64,
    pub speed: f64,
}

impl WindObservation {
    pub fn new(direction_degrees: f64, speed: f64) -> Self {
        let mut direction_degrees = direction_degrees.rem_euclid(360.0);
        if direction_degrees >= 360.0 {
            direction_degrees = 0.0;
        }

        Self {
            direction_degrees,
            speed,
        }
    }

    /// Normalise one row using the resolved columns.
    pub fn from_record(
        record: &Record,
        columns: &ColumnAssignment,
    ) -> std::result::Result<Self, SkipReason> {
        let raw_direction = record
            .get(&columns.direction_field)
            .filter(|v| !v.is_empty())
            .ok_or(SkipReason::MissingDirection)?;
        let raw_speed = record
            .get(&columns.speed_field)
            .filter(|v| !v.is_empty())
            .ok_or(SkipReason::MissingSpeed)?;

        let direction = parse_direction(raw_direction).ok_or(SkipReason::UnparsableDirection)?;
        let speed = parse_speed(raw_speed).ok_or(SkipReason::UnparsableSpeed)?;

        if speed < 0.0 {
            return Err(SkipReason::NegativeSpeed);
        }

        Ok(Self::new(direction, speed))
    }

    pub fn compass_direction(&self) -> CompassDirection {
        CompassDirection::from_degrees(self.direction_degrees)
    }

    /// East and north components, meteorological convention (0° = north,
    /// clockwise).
    pub fn components(&self) -> (f64, f64) {
        let radians = self.direction_degrees.to_radians();
        (self.speed * radians.sin(), self.speed * radians.cos())
    }
}

fn parse_direction(value: &RawValue) -> Option<f64> {
    match value {
        RawValue::Number(degrees) => Some(*degrees).filter(|d| d.is_finite()),
        RawValue::Text(text) => CompassDirection::from_label(text)
            .map(|d| d.bearing())
            .or_else(|| parse_numeric_prefix(text)),
        RawValue::Empty => None,
    }
}

fn parse_speed(value: &RawValue) -> Option<f64> {
    match value {
        RawValue::Number(speed) => Some(*speed).filter(|s| s.is_finite()),
        RawValue::Text(text) => parse_numeric_prefix(text),
        RawValue::Empty => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SpeedBand;

    fn columns() -> ColumnAssignment {
        ColumnAssignment::new("dir", "speed")
    }

    #[test]
    fn test_cardinal_direction_converted() {
        let record = Record::new().with_value("dir", "sw").with_value("speed", "12");
        let obs = WindObservation::from_record(&record, &columns()).unwrap();

        assert_eq!(obs.direction_degrees, 225.0);
        assert_eq!(obs.speed, 12.0);
        assert_eq!(obs.compass_direction(), CompassDirection::Sw);
    }

    #[test]
    fn test_numeric_text_and_units() {
        let record = Record::new()
            .with_value("dir", "123.5deg")
            .with_value("speed", "7 km/h");
        let obs = WindObservation::from_record(&record, &columns()).unwrap();

        assert_eq!(obs.direction_degrees, 123.5);
        assert_eq!(obs.speed, 7.0);
    }

    #[test]
    fn test_direction_wraps_into_range() {
        let record = Record::new().with_value("dir", -30.0).with_value("speed", 3.0);
        let obs = WindObservation::from_record(&record, &columns()).unwrap();
        assert_eq!(obs.direction_degrees, 330.0);

        let obs = WindObservation::new(725.0, 1.0);
        assert_eq!(obs.direction_degrees, 5.0);
    }

    #[test]
    fn test_skip_reasons() {
        let missing = Record::new().with_value("dir", 90.0);
        assert_eq!(
            WindObservation::from_record(&missing, &columns()),
            Err(SkipReason::MissingSpeed)
        );

        let blank = Record::new()
            .with_value("dir", RawValue::Empty)
            .with_value("speed", 4.0);
        assert_eq!(
            WindObservation::from_record(&blank, &columns()),
            Err(SkipReason::MissingDirection)
        );

        let invalid = Record::new().with_value("dir", "invalid").with_value("speed", 4.0);
        assert_eq!(
            WindObservation::from_record(&invalid, &columns()),
            Err(SkipReason::UnparsableDirection)
        );

        let calm = Record::new().with_value("dir", "N").with_value("speed", "calm");
        assert_eq!(
            WindObservation::from_record(&calm, &columns()),
            Err(SkipReason::UnparsableSpeed)
        );

        let negative = Record::new().with_value("dir", "N").with_value("speed", -2.0);
        assert_eq!(
            WindObservation::from_record(&negative, &columns()),
            Err(SkipReason::NegativeSpeed)
        );
    }

    #[test]
    fn test_negative_speed_only_from_constructor() {
        let obs = WindObservation::new(90.0, -2.0);
        assert_eq!(obs.speed, -2.0);
        assert_eq!(SpeedBand::index_for(obs.speed), SpeedBand::ALL.len() - 1);
    }

    #[test]
    fn test_components() {
        let (x, y) = WindObservation::new(90.0, 10.0).components();
        assert!((x - 10.0).abs() < 1e-9);
        assert!(y.abs() < 1e-9);

        let (x, y) = WindObservation::new(180.0, 4.0).components();
        assert!(x.abs() < 1e-9);
        assert!((y + 4.0).abs() < 1e-9);
    }
}
