//! Query execution over the chunk index
//!
//! Both entry points are read-only over the index and perform their own
//! file reads; nothing is cached between calls, so results always reflect
//! the current on-disk content. This module also owns the normalization of
//! driver-supplied date and hour tokens.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::chunk::{ChunkParser, Record, RAW_KEY};
use crate::error::{Error, Result};
use crate::fields::normalize;
use crate::index::ChunkIndex;

/// Message recorded for a requested hour with no indexed chunk file
pub const MISSING_FILE: &str = "file not found";

/// Per-hour query outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum HourEntry {
    /// Parsed record (or raw text) for an indexed hour
    Record(Record),
    /// Requested hour with no chunk file behind it
    Missing {
        /// Reason string, always [`MISSING_FILE`]
        error: String,
    },
}

impl HourEntry {
    /// Check if this entry marks a missing chunk file
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing { .. })
    }

    fn missing() -> Self {
        Self::Missing {
            error: MISSING_FILE.to_string(),
        }
    }
}

/// Query result mapping: hour to entry, ascending
pub type QueryResult = BTreeMap<u32, HourEntry>;

/// Query every indexed hour of one day
///
/// Iterates only the hours actually present for `date`, ascending, reading
/// and parsing each file. Without `fields` each entry holds the raw text
/// under [`RAW_KEY`]; with `fields` each name is normalized and looked up,
/// and fields absent from a record are omitted from that hour's entry
/// (absence means "not reported", not "empty value"). A date absent from
/// the index yields an empty mapping, not an error.
pub fn query_day(
    index: &ChunkIndex,
    parser: &ChunkParser,
    date: &str,
    fields: Option<&[String]>,
) -> Result<QueryResult> {
    let mut result = QueryResult::new();

    for hour in index.hours_for(date) {
        if let Some(path) = index.path_for(date, hour) {
            let record = parser.parse(&read_chunk(path)?);
            result.insert(hour, HourEntry::Record(select_fields(record, fields)));
        }
    }

    debug!(date, hours = result.len(), "day query");
    Ok(result)
}

/// Query an explicit list of hours for one day
///
/// `hours` is caller-supplied and de-duplicated (see [`parse_hours`]); the
/// result map orders entries ascending. A requested hour with no indexed
/// file yields a [`MISSING_FILE`] entry instead of an error, so a batch
/// with gaps still returns a complete mapping. Indexed hours behave as in
/// [`query_day`]. Only an actual read failure is a hard error.
pub fn query_hours(
    index: &ChunkIndex,
    parser: &ChunkParser,
    date: &str,
    hours: &[u32],
    fields: Option<&[String]>,
) -> Result<QueryResult> {
    let mut result = QueryResult::new();

    for &hour in hours {
        match index.path_for(date, hour) {
            Some(path) => {
                let record = parser.parse(&read_chunk(path)?);
                result.insert(hour, HourEntry::Record(select_fields(record, fields)));
            }
            None => {
                result.insert(hour, HourEntry::missing());
            }
        }
    }

    debug!(date, requested = hours.len(), "hour query");
    Ok(result)
}

/// Read one chunk file, attaching the path on failure
///
/// A file deleted between indexing and query surfaces here as a hard
/// error; it is a read failure, not a missing hour.
fn read_chunk(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| Error::chunk(path, format!("Failed to read chunk file: {}", e)))
}

/// Reduce a parsed record to the requested fields
///
/// No fields (or an empty list) keeps only the raw text. Requested fields
/// are normalized before lookup; names missing from the record are
/// silently dropped.
fn select_fields(record: Record, fields: Option<&[String]>) -> Record {
    match fields {
        Some(fields) if !fields.is_empty() => {
            let mut selected = Record::new();
            for field in fields {
                let key = normalize(field);
                if let Some(value) = record.get(&key) {
                    selected.insert(key, value.clone());
                }
            }
            selected
        }
        _ => {
            let mut raw_only = Record::new();
            if let Some(raw) = record.get(RAW_KEY) {
                raw_only.insert(RAW_KEY.to_string(), raw.clone());
            }
            raw_only
        }
    }
}

/// Parse a driver-supplied date token to the canonical `YYYY-MM-DD` key
///
/// Accepts `YYYYMMDD` or `YYYY-MM-DD`; anything else is a hard error for
/// the driver to display. Query dates are calendar-validated even though
/// index keys are not; a calendar-invalid indexed date is reportable but
/// not addressable by query.
pub fn parse_date(input: &str) -> Result<String> {
    let token = input.trim();
    let parsed = if token.len() == 8 && token.bytes().all(|b| b.is_ascii_digit()) {
        NaiveDate::parse_from_str(token, "%Y%m%d")
    } else {
        NaiveDate::parse_from_str(token, "%Y-%m-%d")
    };

    match parsed {
        Ok(date) => Ok(date.format("%Y-%m-%d").to_string()),
        Err(e) => Err(Error::invalid_date(format!("{}: {}", token, e))),
    }
}

/// Parse a driver-supplied hours list like `3:00, 16:00, 21`
///
/// Accepts `H`, `HH`, `H:00`, and `HH:00` token shapes, validated to 0-23.
/// Empty tokens are skipped; duplicates are dropped keeping first-seen
/// order (the result maps of [`query_hours`] sort later).
pub fn parse_hours(input: &str) -> Result<Vec<u32>> {
    let pattern = Regex::new(r"^(\d{1,2})(?::?\s*00)?$")?;
    let mut hours: Vec<u32> = Vec::new();

    for token in input.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }

        let caps = pattern
            .captures(token)
            .ok_or_else(|| Error::invalid_hours(format!("Invalid hour token: {}", token)))?;
        let hour: u32 = caps[1]
            .parse()
            .map_err(|_| Error::invalid_hours(format!("Invalid hour token: {}", token)))?;
        if hour > 23 {
            return Err(Error::invalid_hours(format!("Hour out of range: {}", hour)));
        }

        if !hours.contains(&hour) {
            hours.push(hour);
        }
    }

    Ok(hours)
}
