//! Host-level signals: dotted-quad detection, suspicious TLD substrings and
//! character entropy.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

use crate::schema::{ENTROPY_DECIMALS, SUSPICIOUS_TLDS};

/// Four dot-separated groups of 1-3 digits anywhere in the host. Octets are
/// not range-checked.
static DOTTED_QUAD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{1,3}\.){3}\d{1,3}").expect("dotted quad pattern is valid"));

pub(super) fn has_ip(host: &str) -> bool {
    DOTTED_QUAD.is_match(host)
}

/// Substring containment, so `.xyzcorp.com` matches `.xyz`.
pub(super) fn has_suspicious_tld(host: &str) -> bool {
    SUSPICIOUS_TLDS.iter().any(|tld| host.contains(tld))
}

/// Shannon entropy (bits) of the host's character distribution, rounded.
///
/// Distinct characters are visited in sorted order so the floating-point sum
/// is identical across runs. Returns 0 for an empty host.
pub(super) fn host_entropy(host: &str) -> f64 {
    let mut counts: BTreeMap<char, u64> = BTreeMap::new();
    let mut len = 0u64;
    for c in host.chars() {
        *counts.entry(c).or_insert(0) += 1;
        len += 1;
    }
    if len == 0 {
        return 0.0;
    }

    let total = len as f64;
    let mut entropy = 0.0f64;
    for &count in counts.values() {
        let p = count as f64 / total;
        if p > 0.0 {
            entropy -= p * p.log2();
        }
    }
    round_decimals(entropy, ENTROPY_DECIMALS)
}

/// Round to `decimals` places via the shortest decimal rendering, which rounds
/// the exact binary value (half-to-even on exact ties).
fn round_decimals(x: f64, decimals: usize) -> f64 {
    if !x.is_finite() {
        return 0.0;
    }
    format!("{:.*}", decimals, x).parse().unwrap_or(0.0)
}
