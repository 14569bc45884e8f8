pub mod csv;

pub use csv::{parse_measurements_csv, read_measurements_file};
