//! Pattern checks and decoding for plain-text notations.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::{Captures, Regex};

/// The prefix that marks text as a `file:` URI.
pub const FILE_PREFIX: &str = "file:";

fn uri_scheme() -> &'static Regex {
    static URI_SCHEME: OnceLock<Regex> = OnceLock::new();
    URI_SCHEME.get_or_init(|| {
        Regex::new(r"^[a-zA-Z][a-zA-Z0-9+\-.]*:.+$").expect("URI scheme pattern is valid")
    })
}

fn encoded_octet() -> &'static Regex {
    static ENCODED_OCTET: OnceLock<Regex> = OnceLock::new();
    ENCODED_OCTET
        .get_or_init(|| Regex::new("%([0-9a-fA-F]{2})").expect("escape pattern is valid"))
}

/// Whether text starts with something shaped like a URI scheme.
///
/// Matches a letter, then letters, digits, `+`, `-` or `.`, then a colon
/// followed by at least one more character. A Windows drive path such as
/// `C:\dir` matches too.
///
/// # Examples
///
/// ```
/// use filenote::notation::text::looks_like_uri;
///
/// assert!(looks_like_uri("custom-scheme:payload"));
/// assert!(!looks_like_uri("/opt/app:v2"));
/// assert!(!looks_like_uri("mailto:"));
/// ```
#[must_use]
pub fn looks_like_uri(text: &str) -> bool {
    uri_scheme().is_match(text)
}

/// Replace every `%` followed by two hex digits with the character whose
/// code point is that value.
///
/// Escapes are decoded one octet at a time, so `%E9` becomes `é`
/// (U+00E9), not the start of a UTF-8 sequence. A `%` that is not followed
/// by two hex digits is left as is.
///
/// # Examples
///
/// ```
/// use filenote::notation::text::decode_escapes;
///
/// assert_eq!(decode_escapes("%2Fetc%2Fpasswd"), "/etc/passwd");
/// assert_eq!(decode_escapes("100%"), "100%");
/// ```
#[must_use]
pub fn decode_escapes(text: &str) -> Cow<'_, str> {
    encoded_octet().replace_all(text, |caps: &Captures<'_>| {
        u8::from_str_radix(&caps[1], 16)
            .map_or_else(|_| caps[0].to_string(), |octet| char::from(octet).to_string())
    })
}
