//! Chunk filename recognition
//!
//! Recognizes the fixed naming convention `chunk_YYYY-MM-DD_HH.txt` and
//! extracts the date and hour groups.

use regex::Regex;

use crate::error::Result;

/// Pattern for hourly chunk file names
const CHUNK_FILENAME: &str = r"^chunk_(\d{4})-(\d{2})-(\d{2})_(\d{2})\.txt$";

/// Date and hour groups extracted from a chunk file name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkName {
    pub year: u32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
}

impl ChunkName {
    /// Render the date part as the `YYYY-MM-DD` index key
    pub fn date_key(&self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Matcher for the fixed chunk naming convention
///
/// Validation is digit-count only: `chunk_2025-13-41_99.txt` parses, and
/// the resulting date and hour become legitimate index keys. Calendar
/// legality is out of scope for filenames; directories may contain
/// unrelated files, which simply do not match.
#[derive(Debug)]
pub struct ChunkNameParser {
    pattern: Regex,
}

impl ChunkNameParser {
    /// Compile the filename pattern
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(CHUNK_FILENAME)?,
        })
    }

    /// Parse a file name, returning its numeric groups on match
    ///
    /// Non-matching names yield `None` rather than an error.
    pub fn parse(&self, name: &str) -> Option<ChunkName> {
        let caps = self.pattern.captures(name)?;
        Some(ChunkName {
            year: caps[1].parse().ok()?,
            month: caps[2].parse().ok()?,
            day: caps[3].parse().ok()?,
            hour: caps[4].parse().ok()?,
        })
    }
}
