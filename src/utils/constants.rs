/// Compass resolution of the wind rose
pub const COMPASS_POINTS: usize = 16;
pub const BUCKET_WIDTH_DEGREES: f64 = 360.0 / COMPASS_POINTS as f64;

/// Number of speed bands in the wind rose
pub const SPEED_BAND_COUNT: usize = 5;

/// Runway numbering
pub const RUNWAY_HEADING_STEP: f64 = 10.0;
pub const RUNWAY_COUNT: u8 = 36;
pub const RECIPROCAL_OFFSET: u8 = 18;

/// Column name heuristics (matched case-insensitively as substrings)
pub const DIRECTION_KEYWORDS: [&str; 3] = ["dir", "dirección", "direccion"];
pub const SPEED_KEYWORDS: [&str; 3] = ["vel", "speed", "velocidad"];

/// Alpha suffix appended to direction colours for chart series fills
pub const SERIES_ALPHA_SUFFIX: &str = "80";

/// Processing defaults
pub const DEFAULT_PREVIEW_ROWS: usize = 10;
pub const DEFAULT_OUTPUT_DIR: &str = "output";
pub const ENV_PREFIX: &str = "WINDROSE";
