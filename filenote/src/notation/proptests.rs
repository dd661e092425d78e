//! Property-based tests for notation handling.
//!
//! Note: the resolver module already has property tests for branch
//! selection. This module focuses on the text helpers and URI parsing.

use super::text::{decode_escapes, looks_like_uri};
use super::uri::Uri;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Text without a percent sign is never changed by decoding
    #[test]
    fn decode_without_escapes_is_identity(s in "[^%]{0,64}") {
        prop_assert_eq!(decode_escapes(&s).as_ref(), s.as_str());
    }

    // Escaping printable ASCII octet by octet and decoding restores it
    #[test]
    fn decode_restores_escaped_ascii(s in "[ -~]{0,32}") {
        let escaped: String = s.bytes().map(|b| format!("%{b:02X}")).collect();
        prop_assert_eq!(decode_escapes(&escaped).as_ref(), s.as_str());
    }

    // Decoding never produces more characters than the input had
    #[test]
    fn decode_never_grows(s in "\\PC{0,64}") {
        prop_assert!(decode_escapes(&s).chars().count() <= s.chars().count());
    }

    // Absolute Unix paths never look like URIs
    #[test]
    fn rooted_paths_not_scheme_shaped(s in "/[a-zA-Z0-9:_./-]{0,40}") {
        prop_assert!(!looks_like_uri(&s));
    }

    // Parsing arbitrary text never panics, and a success keeps the text verbatim
    #[test]
    fn uri_parse_total(s in "\\PC{0,64}") {
        if let Ok(uri) = Uri::parse(&s) {
            prop_assert_eq!(uri.as_str(), s.as_str());
        }
    }

    // Every URI with a scheme is recognized by the scheme pattern
    #[test]
    fn parsed_scheme_is_scheme_shaped(
        scheme in "[a-zA-Z][a-zA-Z0-9+.-]{0,8}",
        path in "/[a-z0-9/]{0,16}",
    ) {
        let text = format!("{scheme}:{path}");
        let uri = Uri::parse(&text).unwrap();
        prop_assert_eq!(uri.scheme(), Some(scheme.as_str()));
        prop_assert!(looks_like_uri(&text));
    }
}
