//! hourlog: time-partitioned sensor log indexing and query engine
//!
//! Scans a directory of hourly chunk files named `chunk_YYYY-MM-DD_HH.txt`,
//! builds an in-memory index of which (date, hour) slots exist, reports
//! coverage gaps, and answers day, hour, and field queries against the
//! semi-structured text of each file.
//!
//! The index stores paths only and is immutable after the scan; every query
//! re-reads and re-parses the underlying files, so results always reflect
//! the current on-disk content.
//!
//! ```no_run
//! use hourlog::{index_chunks, inspection_report, query_day, ChunkParser};
//!
//! # fn main() -> hourlog::Result<()> {
//! let index = index_chunks("./data")?;
//! println!("{}", inspection_report(&index));
//!
//! let parser = ChunkParser::new()?;
//! let day = query_day(&index, &parser, "2025-08-10", None)?;
//! println!("{} hours on record", day.len());
//! # Ok(())
//! # }
//! ```

pub mod chunk;
pub mod error;
pub mod fields;
pub mod index;
pub mod query;
pub mod report;

pub use chunk::{ChunkName, ChunkNameParser, ChunkParser, Record, RAW_KEY};
pub use error::{Error, Result};
pub use index::{index_chunks, ChunkIndex, HOURS_PER_DAY, NO_DATA};
pub use query::{
    parse_date, parse_hours, query_day, query_hours, HourEntry, QueryResult, MISSING_FILE,
};
pub use report::{inspection_report, render_query_json, render_query_result};
