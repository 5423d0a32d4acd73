//! Field name normalization
//!
//! Maps free-form, human-written sensor labels onto the fixed set of
//! canonical record keys. Labels that match nothing pass through unchanged.

/// Canonical field table as (simplified label, canonical key) pairs.
///
/// The order is part of the contract: prefix matching walks this table top
/// to bottom and the first hit wins, so overlapping prefixes resolve the
/// same way in every build.
pub const CANONICAL_FIELDS: [(&str, &str); 6] = [
    ("temperature", "temperature"),
    ("humidity", "humidity"),
    ("ieq", "ieq"),
    ("co2", "co2"),
    ("pm2.5", "pm25"),
    ("illuminance", "illuminance"),
];

/// Normalize a metric/field name to its canonical key.
///
/// Lowercases and trims the input, folds known symbol and spacing variants
/// (`CO₂`, `C02`, `ieq median`, `pm 2.5`, ...) onto a simplified spelling,
/// then resolves against [`CANONICAL_FIELDS`] by prefix and finally by
/// exact equality. Unknown names are returned unchanged rather than
/// rejected, so callers can probe for labels the parser never extracts.
pub fn normalize(name: &str) -> String {
    let mut n = name.trim().to_lowercase();

    // co2 variants
    n = n.replace("co₂", "co2").replace("c02", "co2");
    n = n.replace("ieq median", "ieq").replace("ieq (median)", "ieq");
    n = n.replace("pm 2.5", "pm2.5").replace("pm 2,5", "pm2.5");

    // Best match by prefix, in table order
    for (simplified, canonical) in CANONICAL_FIELDS {
        if n.starts_with(simplified) {
            return canonical.to_string();
        }
    }

    // Fall back to exact equality, then pass through
    for (simplified, canonical) in CANONICAL_FIELDS {
        if n == simplified {
            return canonical.to_string();
        }
    }

    n
}
