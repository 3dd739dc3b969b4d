//! URL → feature vector extraction.
//!
//! The extractor is total and pure: any input yields a vector with every
//! schema column, degenerate input yields the all-zero vector, and nothing
//! is read from or written to the outside world.

mod host;
mod lexical;
mod vector;

pub use vector::{FeatureValue, FeatureVector};

use crate::url_model::UrlParts;
use host::{has_ip, has_suspicious_tld, host_entropy};
use lexical::{
    char_len, count_char, count_digits, count_special, flag, has_double_slash, keyword_count,
    starts_with_https,
};

/// Whitespace as the upstream training pipeline trims it: Unicode White_Space
/// plus the ASCII file/group/record/unit separators.
fn is_trim_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Empty or whitespace-only input carries no signal.
fn is_degenerate(url: &str) -> bool {
    url.trim_matches(is_trim_space).is_empty()
}

/// Extracts the feature vector for a candidate URL.
///
/// Whole-URL features are computed on `url` exactly as given (no trimming);
/// host, path and query come from [`UrlParts::parse`].
pub fn extract(url: &str) -> FeatureVector {
    if is_degenerate(url) {
        tracing::trace!("degenerate input, returning zero vector");
        return FeatureVector::zeroed();
    }

    let parts = UrlParts::parse(url);
    let host = parts.host();

    FeatureVector {
        url_length: char_len(url),
        hostname_length: char_len(host),
        path_length: char_len(&parts.path),
        query_length: char_len(&parts.query),
        num_dots: count_char(url, '.'),
        num_hyphens: count_char(url, '-'),
        num_digits: count_digits(url),
        num_special_chars: count_special(url),
        has_https: flag(starts_with_https(url)),
        has_ip: flag(has_ip(host)),
        has_at_symbol: flag(url.contains('@')),
        has_double_slash: flag(has_double_slash(url)),
        has_suspicious_tld: flag(has_suspicious_tld(host)),
        keyword_count: keyword_count(url),
        entropy: host_entropy(host),
    }
    .sanitized()
}

/// Like [`extract`], with an absent value mapped to the zero vector.
pub fn extract_opt(url: Option<&str>) -> FeatureVector {
    url.map_or_else(FeatureVector::zeroed, extract)
}

/// Like [`extract`] for raw bytes; input that is not UTF-8 text is treated as
/// unusable and yields the zero vector.
pub fn extract_bytes(raw: &[u8]) -> FeatureVector {
    match std::str::from_utf8(raw) {
        Ok(s) => extract(s),
        Err(_) => {
            tracing::trace!("input is not UTF-8, returning zero vector");
            FeatureVector::zeroed()
        }
    }
}

#[cfg(test)]
mod tests;
