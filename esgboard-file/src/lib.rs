//! File-backed connectors.
#![warn(missing_docs)]

mod csv_table;
mod news_archive;

pub use csv_table::CsvConnector;
pub use news_archive::NewsArchiveConnector;
