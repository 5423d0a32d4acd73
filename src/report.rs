//! Coverage reporting and query-result rendering
//!
//! Renders the inspection report for an index and turns query result
//! mappings into display text or JSON. Only observed dates appear in
//! reports; calendar holes between them are not inferred, since no
//! external calendar source is consulted.

use crate::chunk::RAW_KEY;
use crate::error::Result;
use crate::index::ChunkIndex;
use crate::query::{HourEntry, QueryResult};

/// Render the coverage report for an index
///
/// Shows the total day count, the display date range, and for every
/// indexed date either `complete (24/24)` or the explicit missing hours.
pub fn inspection_report(index: &ChunkIndex) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("=== Inspection Report ===".to_string());
    lines.push(format!("Days covered: {}", index.day_count()));

    let (start, end) = index.date_range();
    lines.push(format!("Date range: {} -> {}", start, end));

    lines.push("Per-day completeness (missing hours listed):".to_string());
    for date in index.dates() {
        let missing = index.missing_hours(date);
        if missing.is_empty() {
            lines.push(format!("  {}: complete (24/24)", date));
        } else {
            let tokens: Vec<String> = missing
                .iter()
                .map(|hour| format!("{:02} hour file", hour))
                .collect();
            lines.push(format!("  {}: missing {}", date, tokens.join(", ")));
        }
    }

    lines.join("\n")
}

/// Render a query result mapping as display text
///
/// Hour headers followed by either indented `key: value` lines
/// (`with_fields`), the raw chunk text, or an `ERROR:` line for hours
/// with no indexed file; entries are blank-line separated.
pub fn render_query_result(result: &QueryResult, with_fields: bool) -> String {
    let mut lines: Vec<String> = Vec::new();

    for (hour, entry) in result {
        lines.push(format!("[{:02}:00]", hour));
        match entry {
            HourEntry::Missing { error } => {
                lines.push(format!("  ERROR: {}", error));
            }
            HourEntry::Record(record) => {
                if with_fields {
                    for (key, value) in record {
                        lines.push(format!("  {}: {}", key, value));
                    }
                } else {
                    lines.push(record.get(RAW_KEY).cloned().unwrap_or_default());
                }
            }
        }
        lines.push(String::new());
    }

    lines.join("\n").trim().to_string()
}

/// Render a query result mapping as pretty-printed JSON
pub fn render_query_json(result: &QueryResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunk::Record;
    use crate::query::MISSING_FILE;

    fn sample_index() -> ChunkIndex {
        let mut index = ChunkIndex::new();
        index.add("2025-08-10", 0, "/data/chunk_2025-08-10_00.txt");
        index.add("2025-08-10", 1, "/data/chunk_2025-08-10_01.txt");
        index.add("2025-08-11", 3, "/data/chunk_2025-08-11_03.txt");
        index
    }

    fn record(pairs: &[(&str, &str)]) -> HourEntry {
        let mut record = Record::new();
        for (key, value) in pairs {
            record.insert((*key).to_string(), (*value).to_string());
        }
        HourEntry::Record(record)
    }

    #[test]
    fn test_inspection_report_contents() {
        let report = inspection_report(&sample_index());
        assert!(report.starts_with("=== Inspection Report ==="));
        assert!(report.contains("Days covered: 2"));
        assert!(report.contains("Date range: 2025-08-10 00:00 -> 2025-08-11 03:59"));
        assert!(report.contains("  2025-08-10: missing"));
        assert!(report.contains("02 hour file"));
        // Hours 0 and 1 are present, so the missing list starts at 02
        assert!(!report.contains("00 hour file, 01 hour file"));
    }

    #[test]
    fn test_inspection_report_complete_day() {
        let mut index = ChunkIndex::new();
        for hour in 0..24 {
            index.add(
                "2025-08-10",
                hour,
                format!("/data/chunk_2025-08-10_{:02}.txt", hour),
            );
        }
        let report = inspection_report(&index);
        assert!(report.contains("  2025-08-10: complete (24/24)"));
        assert!(!report.contains("missing"));
    }

    #[test]
    fn test_inspection_report_empty_index() {
        let report = inspection_report(&ChunkIndex::new());
        assert!(report.contains("Days covered: 0"));
        assert!(report.contains("Date range: N/A -> N/A"));
    }

    #[test]
    fn test_render_raw_result() {
        let mut result = QueryResult::new();
        result.insert(1, record(&[(RAW_KEY, "Humidity: 40%")]));

        let text = render_query_result(&result, false);
        assert_eq!(text, "[01:00]\nHumidity: 40%");
    }

    #[test]
    fn test_render_field_result() {
        let mut result = QueryResult::new();
        result.insert(3, record(&[("co2", "428 ppm"), ("temperature", "27.4°C")]));
        result.insert(16, record(&[("co2", "501 ppm")]));

        let text = render_query_result(&result, true);
        let expected = "[03:00]\n  co2: 428 ppm\n  temperature: 27.4°C\n\n[16:00]\n  co2: 501 ppm";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_missing_entry() {
        let mut result = QueryResult::new();
        result.insert(5, HourEntry::Missing {
            error: MISSING_FILE.to_string(),
        });

        let text = render_query_result(&result, true);
        assert_eq!(text, "[05:00]\n  ERROR: file not found");
    }

    #[test]
    fn test_render_json() {
        let mut result = QueryResult::new();
        result.insert(1, record(&[("humidity", "40%")]));
        result.insert(5, HourEntry::Missing {
            error: MISSING_FILE.to_string(),
        });

        let json: serde_json::Value =
            serde_json::from_str(&render_query_json(&result).unwrap()).unwrap();
        assert_eq!(json["1"]["humidity"], "40%");
        assert_eq!(json["5"]["error"], MISSING_FILE);
    }
}
