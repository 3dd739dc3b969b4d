//! Lenient URL decomposition.
//!
//! Splits a raw candidate string into `scheme://netloc/path;params?query#fragment`
//! without ever failing: anything that is missing comes back as an empty string.
//! No normalisation happens beyond lower-casing the scheme, so the netloc keeps
//! userinfo, port and original case. Feature values depend on these exact
//! substrings, so a strict parser (which rejects scheme-less input and rewrites
//! hosts) is not a substitute.

mod split;

use split::{clean_input, split_netloc, split_params, split_scheme, uses_params};

/// Components of a candidate URL. Absent parts are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlParts {
    pub scheme: String,
    pub netloc: String,
    pub path: String,
    pub params: String,
    pub query: String,
    pub fragment: String,
}

impl UrlParts {
    /// Splits `raw` into its components. Never fails.
    ///
    /// # Examples
    ///
    /// - `"https://a.com/x?y=1"` → netloc `a.com`, path `/x`, query `y=1`
    /// - `"example.com/login"` → no scheme, no netloc, path `example.com/login`
    pub fn parse(raw: &str) -> Self {
        let cleaned = clean_input(raw);
        let (scheme, rest) = split_scheme(&cleaned);
        let (netloc, rest) = split_netloc(rest);

        let (rest, fragment) = rest.split_once('#').unwrap_or((rest, ""));
        let (rest, query) = rest.split_once('?').unwrap_or((rest, ""));
        let (path, params) = if uses_params(&scheme) && rest.contains(';') {
            split_params(rest)
        } else {
            (rest, "")
        };

        Self {
            netloc: netloc.to_string(),
            path: path.to_string(),
            params: params.to_string(),
            query: query.to_string(),
            fragment: fragment.to_string(),
            scheme,
        }
    }

    /// The host as used for host-level features: the full netloc.
    pub fn host(&self) -> &str {
        &self.netloc
    }

    pub fn has_scheme(&self) -> bool {
        !self.scheme.is_empty()
    }
}
