//! Exporters for resolution records: a CSV file and a price query URL.

mod csv_writer;
mod query_url;

pub use csv_writer::{read_pairs, write_csv, write_resolutions, CSV_HEADER};
pub use query_url::build_query_url;
