//! Property tests: every input yields the full schema, in order, with finite
//! non-negative values, and the same input always yields the same vector.

use phishfeat_core::schema::{FEATURE_COUNT, FEATURE_SCHEMA};
use phishfeat_core::{extract, extract_bytes, FeatureValue};
use proptest::prelude::*;

fn assert_well_formed(url: &str) -> Result<(), TestCaseError> {
    let v = extract(url);
    let names: Vec<&str> = v.iter().map(|(n, _)| n).collect();
    prop_assert_eq!(names, FEATURE_SCHEMA.to_vec());

    let row = v.to_array();
    prop_assert_eq!(row.len(), FEATURE_COUNT);
    for x in row {
        prop_assert!(x.is_finite() && x >= 0.0, "bad value {} for {:?}", x, url);
    }
    for flag in [
        v.has_https,
        v.has_ip,
        v.has_at_symbol,
        v.has_double_slash,
        v.has_suspicious_tld,
    ] {
        prop_assert!(flag <= 1);
    }
    prop_assert!(v.keyword_count <= 10);
    prop_assert!(v.hostname_length <= v.url_length);
    prop_assert!(v.path_length <= v.url_length);
    prop_assert!(v.query_length <= v.url_length);
    prop_assert!(matches!(v.get("entropy"), Some(FeatureValue::Float(_))));
    Ok(())
}

fn url_like() -> impl Strategy<Value = String> {
    (
        prop_oneof![
            Just(""),
            Just("http://"),
            Just("https://"),
            Just("//"),
            Just("ftp://"),
            Just("javascript:")
        ],
        "[a-zA-Z0-9.@:\\[\\]-]{0,24}",
        "(/[a-z0-9;%._~-]{0,8}){0,4}",
        proptest::option::of("[a-z0-9=&]{0,16}"),
        proptest::option::of("[a-z0-9]{0,8}"),
    )
        .prop_map(|(scheme, host, path, query, frag)| {
            let mut s = format!("{scheme}{host}{path}");
            if let Some(q) = query {
                s.push('?');
                s.push_str(&q);
            }
            if let Some(f) = frag {
                s.push('#');
                s.push_str(&f);
            }
            s
        })
}

proptest! {
    #[test]
    fn arbitrary_strings_yield_full_schema(s in any::<String>()) {
        assert_well_formed(&s)?;
    }

    #[test]
    fn url_shaped_strings_yield_full_schema(s in url_like()) {
        assert_well_formed(&s)?;
    }

    #[test]
    fn extraction_is_deterministic(s in any::<String>()) {
        prop_assert_eq!(extract(&s), extract(&s));
    }

    #[test]
    fn arbitrary_bytes_never_panic(bytes in proptest::collection::vec(any::<u8>(), 0..128)) {
        let v = extract_bytes(&bytes);
        prop_assert_eq!(v.iter().count(), FEATURE_COUNT);
    }

    #[test]
    fn whitespace_only_is_zero(s in "[ \t\r\n]{0,16}") {
        prop_assert!(extract(&s).is_zero());
    }
}
