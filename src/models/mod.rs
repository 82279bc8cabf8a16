pub mod compass;
pub mod histogram;
pub mod observation;
pub mod record;
pub mod runway;

pub use compass::{CompassDirection, SpeedBand};
pub use histogram::{ChartData, ChartDataset, WindRoseHistogram};
pub use observation::{ColumnAssignment, SkipReason, WindObservation};
pub use record::{Dataset, RawValue, Record};
pub use runway::RunwayRecommendation;
