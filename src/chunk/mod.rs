//! Hourly chunk file handling
//!
//! This module recognizes the fixed chunk naming convention and extracts
//! canonical fields from one chunk file's text. A chunk file holds one hour
//! of sensor readings and is named `chunk_YYYY-MM-DD_HH.txt`.

mod filename;
mod parser;

pub use filename::{ChunkName, ChunkNameParser};
pub use parser::{ChunkParser, Record, RAW_KEY};
