pub mod column_resolver;
pub mod wind_analyzer;

pub use column_resolver::{ColumnResolver, ColumnRole, ColumnRule};
pub use wind_analyzer::{
    build_histogram, optimal_runway_heading, ResultantVector, WindAnalysis, WindAnalyzer,
};
