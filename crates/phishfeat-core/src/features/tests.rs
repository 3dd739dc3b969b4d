use super::*;
use crate::schema::{FEATURE_COUNT, FEATURE_SCHEMA};

fn row(url: &str) -> [f64; FEATURE_COUNT] {
    extract(url).to_array()
}

#[test]
fn degenerate_inputs_yield_zero_vector() {
    assert!(extract("").is_zero());
    assert!(extract("   ").is_zero());
    assert!(extract("\t\n\r ").is_zero());
    assert!(extract("\u{1f}\u{a0}").is_zero());
    assert!(extract_opt(None).is_zero());
    assert!(extract_bytes(&[0xff, 0xfe, b'h']).is_zero());
}

#[test]
fn zero_vector_has_same_keys_as_normal_path() {
    let zero: Vec<_> = extract("").iter().map(|(n, _)| n).collect();
    let full: Vec<_> = extract("https://a.com").iter().map(|(n, _)| n).collect();
    assert_eq!(zero, full);
    assert_eq!(full, FEATURE_SCHEMA.to_vec());
}

#[test]
fn optional_and_byte_inputs_match_str() {
    let url = "http://192.168.0.1/x";
    assert_eq!(extract_opt(Some(url)), extract(url));
    assert_eq!(extract_bytes(url.as_bytes()), extract(url));
}

#[test]
fn https_indicator() {
    assert_eq!(extract("https://a.com").has_https, 1);
    assert_eq!(extract("http://a.com").has_https, 0);
    assert_eq!(extract("httpsxyz://a.com").has_https, 1);
}

#[test]
fn ip_indicator() {
    assert_eq!(extract("http://192.168.0.1/x").has_ip, 1);
    assert_eq!(extract("http://example.com").has_ip, 0);
    // Digits in the path do not count; only the host is searched.
    assert_eq!(extract("http://example.com/1.2.3.4").has_ip, 0);
}

#[test]
fn keyword_count_caps_at_one_per_keyword() {
    assert_eq!(extract("http://login-login-login.com").keyword_count, 1);
}

#[test]
fn entropy_is_zero_for_single_character_host() {
    assert_eq!(extract("http://aaaa").entropy, 0.0);
    assert_eq!(extract("example.com/login").entropy, 0.0);
    assert_eq!(extract("http://aaaa.com").entropy, 2.0);
}

#[test]
fn end_to_end_phishing_example() {
    let v = extract("https://secure-login.bank-update.xyz/verify?user=123");
    assert_eq!(v.has_https, 1);
    assert_eq!(v.has_suspicious_tld, 1);
    assert_eq!(v.has_at_symbol, 0);
    assert!(v.keyword_count >= 3);
    assert_eq!(v.keyword_count, 5);
    assert_eq!(v.num_hyphens, 2);
    assert_eq!(v.has_ip, 0);
    assert_eq!(
        v.to_array(),
        [52.0, 28.0, 7.0, 8.0, 2.0, 2.0, 3.0, 6.0, 1.0, 0.0, 0.0, 0.0, 1.0, 5.0, 4.2804]
    );
}

#[test]
fn reference_vectors() {
    let cases: &[(&str, [f64; FEATURE_COUNT])] = &[
        (
            "http://192.168.0.1/x",
            [20.0, 11.0, 2.0, 0.0, 3.0, 0.0, 8.0, 4.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 2.5949],
        ),
        (
            "http://user:pw@10.0.0.1:8080/a;b/c;d?q=1#frag",
            [45.0, 21.0, 6.0, 3.0, 3.0, 0.0, 10.0, 13.0, 0.0, 1.0, 1.0, 0.0, 0.0, 0.0, 3.3273],
        ),
        (
            "example.com/login",
            [17.0, 0.0, 17.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        ),
        (
            "//host.top/p",
            [12.0, 8.0, 2.0, 0.0, 1.0, 0.0, 0.0, 3.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 2.5],
        ),
        (
            "http://a.com//redirect//x",
            [25.0, 5.0, 13.0, 0.0, 1.0, 0.0, 0.0, 7.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 2.3219],
        ),
        (
            "HTTPS://A.COM",
            [13.0, 5.0, 0.0, 0.0, 1.0, 0.0, 0.0, 3.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 2.3219],
        ),
        (
            "mailto:joe@x.info",
            [17.0, 0.0, 10.0, 0.0, 1.0, 0.0, 0.0, 2.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0],
        ),
        (
            "http://[::1]/a",
            [14.0, 5.0, 2.0, 0.0, 0.0, 0.0, 1.0, 8.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.9219],
        ),
        (
            "https://ex.com/p;x?y",
            [20.0, 6.0, 2.0, 1.0, 1.0, 0.0, 0.0, 6.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 2.585],
        ),
        (
            "  https://a.com",
            [15.0, 5.0, 0.0, 0.0, 1.0, 0.0, 0.0, 3.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 2.3219],
        ),
        (
            "http://exa\tmple.com/a",
            [21.0, 11.0, 2.0, 0.0, 1.0, 0.0, 0.0, 4.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 3.0958],
        ),
        (
            "http://a.com/¹²",
            [15.0, 5.0, 3.0, 0.0, 1.0, 0.0, 2.0, 4.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 2.3219],
        ),
        (
            "http://①.top/x²",
            [15.0, 5.0, 3.0, 0.0, 1.0, 0.0, 2.0, 4.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 2.3219],
        ),
    ];
    for (url, expected) in cases {
        assert_eq!(&row(url), expected, "mismatch for {url:?}");
    }
}

#[test]
fn unicode_digits_are_counted() {
    let v = extract("\u{663}\u{663} http://x");
    assert_eq!(v.num_digits, 2);
    assert_eq!(v.url_length, 11);
    assert_eq!(v.hostname_length, 0);
    assert_eq!(extract("http://a.com/¹²").num_digits, 2);
}

#[test]
fn extraction_is_deterministic() {
    let url = "https://xn--pple-43d.com/@login?next=//evil.top";
    assert_eq!(extract(url), extract(url));
}
