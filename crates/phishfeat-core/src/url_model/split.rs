//! Component splitting helpers: scheme, netloc and `;params`.

/// Schemes whose last path segment may carry `;params`.
const USES_PARAMS: [&str; 16] = [
    "", "ftp", "hdl", "prospero", "http", "imap", "https", "shttp", "rtsp", "rtsps", "rtspu",
    "sip", "sips", "mms", "sftp", "tel",
];

/// Characters removed from anywhere in the input before splitting.
const UNSAFE_CHARS: [char; 3] = ['\t', '\r', '\n'];

/// C0 control or space, stripped from the front of the input.
pub(super) fn is_c0_control_or_space(c: char) -> bool {
    c <= '\u{20}'
}

/// Leading C0/space stripped, tab/CR/LF removed everywhere.
pub(super) fn clean_input(raw: &str) -> String {
    raw.trim_start_matches(is_c0_control_or_space)
        .chars()
        .filter(|c| !UNSAFE_CHARS.contains(c))
        .collect()
}

fn is_scheme_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '+' || c == '-' || c == '.'
}

/// Splits `scheme:` off the front. The scheme must start with an ASCII letter
/// and consist only of `[A-Za-z0-9+.-]`; otherwise the input has no scheme.
pub(super) fn split_scheme(s: &str) -> (String, &str) {
    if let Some(colon) = s.find(':') {
        let head = &s[..colon];
        let starts_alpha = head.chars().next().is_some_and(|c| c.is_ascii_alphabetic());
        if starts_alpha && head.chars().all(is_scheme_char) {
            return (head.to_ascii_lowercase(), &s[colon + 1..]);
        }
    }
    (String::new(), s)
}

/// Splits `//netloc` off the front; the netloc ends at the first `/`, `?` or `#`.
pub(super) fn split_netloc(s: &str) -> (&str, &str) {
    match s.strip_prefix("//") {
        Some(after) => {
            let end = after.find(&['/', '?', '#'][..]).unwrap_or(after.len());
            after.split_at(end)
        }
        None => ("", s),
    }
}

pub(super) fn uses_params(scheme: &str) -> bool {
    USES_PARAMS.contains(&scheme)
}

/// Splits `;params` off a path: the first `;` after the last `/`, or the first
/// `;` when the path has no `/`.
pub(super) fn split_params(path: &str) -> (&str, &str) {
    let at = match path.rfind('/') {
        Some(slash) => path[slash..].find(';').map(|off| slash + off),
        None => path.find(';'),
    };
    match at {
        Some(i) => (&path[..i], &path[i + 1..]),
        None => (path, ""),
    }
}
