pub mod adapter;
pub mod config;
pub mod records;

pub use adapter::CsvRecordSource;
pub use config::DataConfig;
pub use records::{RecordError, parse_activity_row, parse_artist_row, parse_checked_row, parse_link_row};
