//! Frozen feature schema and the constant tables the extractor matches against.
//!
//! Trained models are fit against exactly this column order. Adding, removing
//! or reordering a name invalidates every model built from earlier vectors.

/// Number of columns in every feature vector.
pub const FEATURE_COUNT: usize = 15;

/// Feature names in column order.
pub const FEATURE_SCHEMA: [&str; FEATURE_COUNT] = [
    "url_length",
    "hostname_length",
    "path_length",
    "query_length",
    "num_dots",
    "num_hyphens",
    "num_digits",
    "num_special_chars",
    "has_https",
    "has_ip",
    "has_at_symbol",
    "has_double_slash",
    "has_suspicious_tld",
    "keyword_count",
    "entropy",
];

/// Characters counted by `num_special_chars`.
pub const SPECIAL_CHARS: &str = "@!#$%^&*()+=[]{}|\\;:'\",<>?/";

/// Host substrings that set `has_suspicious_tld`. Matched anywhere in the
/// host, not only as a suffix.
pub const SUSPICIOUS_TLDS: [&str; 8] = [
    ".xyz", ".top", ".info", ".club", ".online", ".site", ".cc", ".biz",
];

/// Lowercase keywords counted (at most once each) by `keyword_count`.
pub const KEYWORDS: [&str; 10] = [
    "login", "secure", "bank", "verify", "update", "free", "click", "confirm", "account",
    "signin",
];

/// Decimal places kept for the `entropy` column.
pub const ENTROPY_DECIMALS: usize = 4;

/// Column index of a feature name, if it belongs to the schema.
pub fn column_index(name: &str) -> Option<usize> {
    FEATURE_SCHEMA.iter().position(|n| *n == name)
}
