pub mod constants;
pub mod filename;
pub mod numeric;
pub mod progress;

pub use constants::*;
pub use filename::generate_default_report_filename;
pub use numeric::parse_numeric_prefix;
pub use progress::ProgressReporter;
