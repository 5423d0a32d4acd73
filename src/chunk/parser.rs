//! Chunk text parsing
//!
//! Extracts canonical fields from the free-form text of one chunk file.
//! Field lines have the shape `<Label>: <value>` with tolerant label
//! spelling; everything else in the file is ignored.

use std::collections::BTreeMap;

use regex::Regex;

use crate::error::Result;

/// Reserved record key holding the full trimmed chunk text
pub const RAW_KEY: &str = "raw";

/// Canonical-key to string-value pairs parsed from one chunk file
///
/// Ephemeral: built per query per file and discarded after formatting.
pub type Record = BTreeMap<String, String>;

/// Label patterns per canonical key, in canonical table order
const FIELD_PATTERNS: [(&str, &str); 6] = [
    ("temperature", r"(?i)^temperature:\s*(.+)$"),
    ("humidity", r"(?i)^humidity:\s*(.+)$"),
    ("ieq", r"(?i)^ieq(?:\s*median)?:\s*(.+)$"),
    ("co2", r"(?i)^co[2₂o]:\s*(.+)$"),
    ("pm25", r"(?i)^pm\s*2\.?5:\s*(.+)$"),
    ("illuminance", r"(?i)^illuminance:\s*(.+)$"),
];

/// Parser for chunk file contents
///
/// Compiles one line-anchored, case-insensitive pattern per canonical key.
/// Reused across files within a query; holds no per-file state.
#[derive(Debug)]
pub struct ChunkParser {
    patterns: Vec<(&'static str, Regex)>,
}

impl ChunkParser {
    /// Compile the field patterns
    pub fn new() -> Result<Self> {
        let mut patterns = Vec::with_capacity(FIELD_PATTERNS.len());
        for (key, pattern) in FIELD_PATTERNS {
            patterns.push((key, Regex::new(pattern)?));
        }
        Ok(Self { patterns })
    }

    /// Parse one chunk file's text into a record
    ///
    /// Every line is trimmed and tested against every key's pattern; the
    /// first match per key wins and later duplicates are ignored. The full
    /// trimmed text always lands under [`RAW_KEY`], so whole-file queries
    /// never depend on field extraction succeeding.
    pub fn parse(&self, text: &str) -> Record {
        let mut record = Record::new();

        for line in text.lines() {
            let line = line.trim();
            for (key, pattern) in &self.patterns {
                if record.contains_key(*key) {
                    continue;
                }
                if let Some(caps) = pattern.captures(line) {
                    record.insert((*key).to_string(), caps[1].trim().to_string());
                }
            }
        }

        record.insert(RAW_KEY.to_string(), text.trim().to_string());
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Data: 2025-09-11\n\
        Hour range: 01:00 - 02:00\n\
        \n\
        Temperature: median 27.4°C, max 27.4°C, min 27.3°C\n\
        Humidity: median 49.8%\n\
        IEQ median: 63 (poor)\n\
        CO₂: 428–438 ppm (optimal)\n\
        PM2.5: 4.7 µg/m³ (good)\n\
        illuminance: median 0 lux\n";

    #[test]
    fn test_parse_all_fields() {
        let parser = ChunkParser::new().unwrap();
        let record = parser.parse(SAMPLE);

        assert!(record["temperature"].starts_with("median 27.4"));
        assert!(record["humidity"].starts_with("median 49.8"));
        assert!(record["ieq"].starts_with("63"));
        assert!(record["co2"].starts_with("428"));
        assert!(record["pm25"].starts_with("4.7"));
        assert!(record["illuminance"].starts_with("median 0"));
        assert_eq!(record[RAW_KEY], SAMPLE.trim());
    }

    #[test]
    fn test_first_occurrence_wins() {
        let parser = ChunkParser::new().unwrap();
        let record = parser.parse("Temperature: 20.1°C\nTemperature: 99.9°C\n");
        assert_eq!(record["temperature"], "20.1°C");
    }

    #[test]
    fn test_unmatched_lines_are_ignored() {
        let parser = ChunkParser::new().unwrap();
        let record = parser.parse("Station: rooftop-2\nHumidity: 40%\nbattery low\n");
        assert_eq!(record["humidity"], "40%");
        assert_eq!(record.len(), 2); // humidity + raw
    }

    #[test]
    fn test_label_variants() {
        let parser = ChunkParser::new().unwrap();
        let record = parser.parse("co2: 500 ppm\nPM 2.5: 12\nieq: 70\n");
        assert_eq!(record["co2"], "500 ppm");
        assert_eq!(record["pm25"], "12");
        assert_eq!(record["ieq"], "70");
    }

    #[test]
    fn test_empty_text_keeps_raw() {
        let parser = ChunkParser::new().unwrap();
        let record = parser.parse("");
        assert_eq!(record.len(), 1);
        assert_eq!(record[RAW_KEY], "");
    }

    #[test]
    fn test_indented_field_lines_match_after_trim() {
        let parser = ChunkParser::new().unwrap();
        let record = parser.parse("   Illuminance: 120 lux   \n");
        assert_eq!(record["illuminance"], "120 lux");
    }
}
