//! Readers that load delimited numeric text into a [`Matrix`](crate::math::Matrix).
pub mod csv_reader;

pub use csv_reader::{read_csv, read_csv_with_config, CsvReaderConfig};
