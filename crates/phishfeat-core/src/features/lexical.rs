//! Whole-URL character counts and indicators. All scans run over the raw
//! input, not the parsed parts.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::schema::{KEYWORDS, SPECIAL_CHARS};

/// Any Unicode decimal digit (`Nd`), not only ASCII.
static DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d").expect("digit pattern is valid"));

/// Characters with `Numeric_Type=Digit` that are not `Nd`: superscripts,
/// subscripts, circled and parenthesized forms, and a few historic scripts.
/// These count as digits for `num_digits` alongside `\d`.
const OTHER_DIGITS: &[(char, char)] = &[
    ('\u{B2}', '\u{B3}'),
    ('\u{B9}', '\u{B9}'),
    ('\u{1369}', '\u{1371}'),
    ('\u{19DA}', '\u{19DA}'),
    ('\u{2070}', '\u{2070}'),
    ('\u{2074}', '\u{2079}'),
    ('\u{2080}', '\u{2089}'),
    ('\u{2460}', '\u{2468}'),
    ('\u{2474}', '\u{247C}'),
    ('\u{2488}', '\u{2490}'),
    ('\u{24EA}', '\u{24EA}'),
    ('\u{24F5}', '\u{24FD}'),
    ('\u{24FF}', '\u{24FF}'),
    ('\u{2776}', '\u{277E}'),
    ('\u{2780}', '\u{2788}'),
    ('\u{278A}', '\u{2792}'),
    ('\u{10A40}', '\u{10A43}'),
    ('\u{10E60}', '\u{10E68}'),
    ('\u{11052}', '\u{1105A}'),
    ('\u{1F100}', '\u{1F10A}'),
];

fn is_other_digit(c: char) -> bool {
    OTHER_DIGITS
        .binary_search_by(|&(lo, hi)| {
            if hi < c {
                std::cmp::Ordering::Less
            } else if lo > c {
                std::cmp::Ordering::Greater
            } else {
                std::cmp::Ordering::Equal
            }
        })
        .is_ok()
}

/// Length in Unicode scalar values.
pub(super) fn char_len(s: &str) -> u64 {
    s.chars().count() as u64
}

pub(super) fn count_char(s: &str, needle: char) -> u64 {
    s.chars().filter(|c| *c == needle).count() as u64
}

/// Decimal digits (`\d`) plus the other digit characters in [`OTHER_DIGITS`].
pub(super) fn count_digits(s: &str) -> u64 {
    let decimal = DIGIT.find_iter(s).count();
    let other = s.chars().filter(|c| is_other_digit(*c)).count();
    (decimal + other) as u64
}

pub(super) fn count_special(s: &str) -> u64 {
    s.chars().filter(|c| SPECIAL_CHARS.contains(*c)).count() as u64
}

/// Case-sensitive prefix check on the raw string; `httpsfoo:` also matches.
pub(super) fn starts_with_https(s: &str) -> bool {
    s.starts_with("https")
}

/// More than one non-overlapping `//`, so the scheme separator alone does not count.
pub(super) fn has_double_slash(s: &str) -> bool {
    s.matches("//").count() > 1
}

/// Number of distinct keywords present in the lower-cased URL.
pub(super) fn keyword_count(s: &str) -> u64 {
    let lower = s.to_lowercase();
    KEYWORDS.iter().filter(|kw| lower.contains(*kw)).count() as u64
}

pub(super) fn flag(b: bool) -> u8 {
    u8::from(b)
}
