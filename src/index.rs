//! Chunk index
//!
//! In-memory index of which (date, hour) chunk slots exist, built from a
//! single directory scan. The index stores file paths only; chunk contents
//! are re-read at query time so results always reflect the files on disk.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::chunk::ChunkNameParser;
use crate::error::{Error, Result};

/// Hours in one indexed day
pub const HOURS_PER_DAY: u32 = 24;

/// Sentinel rendered when the index holds no data
pub const NO_DATA: &str = "N/A";

/// In-memory index of chunk files, keyed by date then hour
///
/// Built once from a directory snapshot and treated as immutable
/// afterwards; rescanning means discarding and rebuilding, never patching.
/// Ordered maps give ascending iteration for reports and day queries. The
/// index is the sole owner of every path it stores.
#[derive(Debug, Clone, Default)]
pub struct ChunkIndex {
    by_date: BTreeMap<String, BTreeMap<u32, PathBuf>>,
}

impl ChunkIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the path for a (date, hour) slot
    pub fn add(&mut self, date: impl Into<String>, hour: u32, path: impl Into<PathBuf>) {
        self.by_date
            .entry(date.into())
            .or_default()
            .insert(hour, path.into());
    }

    /// Number of distinct dates present
    pub fn day_count(&self) -> usize {
        self.by_date.len()
    }

    /// Check whether any chunk file was indexed
    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }

    /// Indexed dates, ascending
    pub fn dates(&self) -> impl Iterator<Item = &str> {
        self.by_date.keys().map(String::as_str)
    }

    /// Hours present for a date, ascending; empty for an absent date
    pub fn hours_for(&self, date: &str) -> Vec<u32> {
        self.by_date
            .get(date)
            .map(|hours| hours.keys().copied().collect())
            .unwrap_or_default()
    }

    /// Path indexed for a (date, hour) slot, if any
    pub fn path_for(&self, date: &str, hour: u32) -> Option<&Path> {
        self.by_date.get(date)?.get(&hour).map(PathBuf::as_path)
    }

    /// Display range covered by the index
    ///
    /// Returns the earliest date with its earliest indexed hour and the
    /// latest date with its latest indexed hour. The end renders minute
    /// `:59` as a fixed display convention; coverage end is approximate,
    /// not derived from record content. An empty index yields the
    /// [`NO_DATA`] sentinel pair.
    pub fn date_range(&self) -> (String, String) {
        let start = self
            .by_date
            .iter()
            .next()
            .and_then(|(date, hours)| hours.keys().next().map(|h| format!("{} {:02}:00", date, h)));
        let end = self
            .by_date
            .iter()
            .next_back()
            .and_then(|(date, hours)| {
                hours.keys().next_back().map(|h| format!("{} {:02}:59", date, h))
            });

        match (start, end) {
            (Some(start), Some(end)) => (start, end),
            _ => (NO_DATA.to_string(), NO_DATA.to_string()),
        }
    }

    /// Sorted hours in 0-23 not present for a date
    ///
    /// A date entirely absent from the index counts as fully missing and
    /// yields all 24 hours.
    pub fn missing_hours(&self, date: &str) -> Vec<u32> {
        match self.by_date.get(date) {
            Some(hours) => (0..HOURS_PER_DAY).filter(|h| !hours.contains_key(h)).collect(),
            None => (0..HOURS_PER_DAY).collect(),
        }
    }
}

/// Build a chunk index from a single directory scan
///
/// Runs the filename matcher over every directory entry; matches are added
/// to the index and everything else is skipped silently, so the directory
/// may contain unrelated files. The final index state is independent of
/// directory order unless two entries claim the same (date, hour) slot, in
/// which case the later-processed one wins (directory order is
/// platform-defined).
pub fn index_chunks(folder: impl AsRef<Path>) -> Result<ChunkIndex> {
    let folder = folder.as_ref();
    let matcher = ChunkNameParser::new()?;
    let mut index = ChunkIndex::new();
    let mut skipped = 0usize;

    let entries = fs::read_dir(folder)
        .map_err(|e| Error::scan(folder, format!("Failed to read directory: {}", e)))?;

    for entry in entries {
        let entry = entry
            .map_err(|e| Error::scan(folder, format!("Failed to read directory entry: {}", e)))?;
        let file_name = entry.file_name();

        // Non-UTF-8 names cannot match the pattern; skip them like any
        // other unrelated entry
        if let Some(name) = file_name.to_str() {
            if let Some(chunk) = matcher.parse(name) {
                index.add(chunk.date_key(), chunk.hour, entry.path());
                continue;
            }
        }
        skipped += 1;
    }

    debug!(
        folder = %folder.display(),
        days = index.day_count(),
        skipped,
        "indexed chunk directory"
    );

    Ok(index)
}
