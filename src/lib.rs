pub mod analyzers;
pub mod cli;
pub mod error;
pub mod models;
pub mod readers;
pub mod settings;
pub mod utils;
pub mod writers;

pub use analyzers::{ColumnResolver, WindAnalysis, WindAnalyzer};
pub use error::{AnalysisError, Result};
