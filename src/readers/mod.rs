pub mod csv_reader;
pub mod sample;

pub use csv_reader::CsvReader;
pub use sample::sample_dataset;
