//! A minimal RFC 3986 URI reference.
//!
//! This is not a general URI library. It validates the character set of each
//! component closely enough to reject values that are not legal URIs, splits
//! out the scheme, authority, path, query and fragment, and decodes the path.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use percent_encoding::percent_decode_str;
use thiserror::Error;
use url::Url;

/// A URI could not be parsed.
///
/// # Examples
///
/// ```
/// use filenote::Uri;
///
/// let err = "http://host/a b".parse::<Uri>().unwrap_err();
/// assert_eq!(err.index, 13);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason} at index {index}: {input}")]
pub struct UriSyntaxError {
    /// The text that failed to parse.
    pub input: String,
    /// Byte offset of the offending character.
    pub index: usize,
    /// What was wrong at that offset.
    pub reason: String,
}

impl UriSyntaxError {
    fn new(input: &str, index: usize, reason: impl Into<String>) -> Self {
        Self {
            input: input.to_string(),
            index,
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Component {
    Authority,
    Path,
    Query,
    Fragment,
}

impl Component {
    const fn name(self) -> &'static str {
        match self {
            Self::Authority => "authority",
            Self::Path => "path",
            Self::Query => "query",
            Self::Fragment => "fragment",
        }
    }

    fn allows(self, c: char) -> bool {
        if c.is_ascii_alphanumeric()
            || matches!(c, '-' | '.' | '_' | '~')
            || matches!(c, '!' | '$' | '&' | '\'' | '(' | ')' | '*' | '+' | ',' | ';' | '=')
            || matches!(c, ':' | '@')
        {
            return true;
        }
        match self {
            Self::Authority => matches!(c, '[' | ']'),
            Self::Path => c == '/',
            Self::Query | Self::Fragment => matches!(c, '/' | '?'),
        }
    }
}

/// A parsed URI reference.
///
/// The original text is kept verbatim and is what [`fmt::Display`] prints.
/// Only [`Uri::path`] decodes percent escapes.
///
/// # Examples
///
/// ```
/// use filenote::Uri;
///
/// let uri: Uri = "file:///tmp/my%20file.txt".parse().unwrap();
/// assert_eq!(uri.scheme(), Some("file"));
/// assert_eq!(uri.authority(), Some(""));
/// assert_eq!(uri.raw_path(), "/tmp/my%20file.txt");
/// assert_eq!(uri.path(), "/tmp/my file.txt");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Uri {
    serialization: String,
    scheme: Option<String>,
    authority: Option<String>,
    path: String,
    query: Option<String>,
    fragment: Option<String>,
}

impl Uri {
    /// Parse a URI reference.
    ///
    /// A colon that appears before the first `/`, `?` or `#` ends a scheme,
    /// which must then be a letter followed by letters, digits, `+`, `-` or
    /// `.`. Relative references without a scheme are accepted.
    ///
    /// # Errors
    ///
    /// Returns a [`UriSyntaxError`] for an invalid scheme, an empty
    /// scheme-specific part, a malformed `%` escape, or a character that is
    /// not allowed in the component where it appears.
    pub fn parse(input: &str) -> Result<Self, UriSyntaxError> {
        let scheme_end = input
            .find(|c: char| matches!(c, ':' | '/' | '?' | '#'))
            .filter(|&i| input[i..].starts_with(':'));

        let (scheme, hier_start) = match scheme_end {
            Some(end) => {
                validate_scheme(input, &input[..end])?;
                if end + 1 == input.len() {
                    return Err(UriSyntaxError::new(
                        input,
                        end + 1,
                        "expected scheme-specific part",
                    ));
                }
                (Some(input[..end].to_string()), end + 1)
            }
            None => (None, 0),
        };

        let fragment_start = input[hier_start..].find('#').map(|i| hier_start + i);
        let hier_end = fragment_start.unwrap_or(input.len());
        let query_start = input[hier_start..hier_end]
            .find('?')
            .map(|i| hier_start + i);
        let path_end = query_start.unwrap_or(hier_end);

        let hier = &input[hier_start..path_end];
        let (authority, path_start) = if let Some(stripped) = hier.strip_prefix("//") {
            let len = stripped.find('/').unwrap_or(stripped.len());
            let authority = &stripped[..len];
            validate(input, hier_start + 2, authority, Component::Authority)?;
            (Some(authority.to_string()), hier_start + 2 + len)
        } else {
            (None, hier_start)
        };

        let path = &input[path_start..path_end];
        validate(input, path_start, path, Component::Path)?;

        let query = match query_start {
            Some(start) => {
                let query = &input[start + 1..hier_end];
                validate(input, start + 1, query, Component::Query)?;
                Some(query.to_string())
            }
            None => None,
        };

        let fragment = match fragment_start {
            Some(start) => {
                let fragment = &input[start + 1..];
                validate(input, start + 1, fragment, Component::Fragment)?;
                Some(fragment.to_string())
            }
            None => None,
        };

        Ok(Self {
            serialization: input.to_string(),
            scheme,
            authority,
            path: path.to_string(),
            query,
            fragment,
        })
    }

    /// The scheme, exactly as written.
    #[must_use]
    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    /// The authority, if the URI has a `//` part. May be empty.
    #[must_use]
    pub fn authority(&self) -> Option<&str> {
        self.authority.as_deref()
    }

    /// The path with percent escapes still in place.
    #[must_use]
    pub fn raw_path(&self) -> &str {
        &self.path
    }

    /// The path with percent escapes decoded as UTF-8.
    ///
    /// For an opaque URI such as `file:notes.txt` this is the opaque part.
    /// Invalid UTF-8 sequences are replaced with U+FFFD.
    #[must_use]
    pub fn path(&self) -> Cow<'_, str> {
        percent_decode_str(&self.path).decode_utf8_lossy()
    }

    /// The query, without the leading `?`.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// The fragment, without the leading `#`.
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Whether the URI has a scheme.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.scheme.is_some()
    }

    /// Whether the URI has a scheme but no hierarchical path, like `mailto:a@b`.
    #[must_use]
    pub fn is_opaque(&self) -> bool {
        self.scheme.is_some() && self.authority.is_none() && !self.path.starts_with('/')
    }

    /// The URI as originally written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.serialization
    }
}

fn validate_scheme(input: &str, scheme: &str) -> Result<(), UriSyntaxError> {
    if scheme.is_empty() {
        return Err(UriSyntaxError::new(input, 0, "expected scheme name"));
    }
    for (i, c) in scheme.char_indices() {
        if i == 0 && !c.is_ascii_alphabetic() {
            return Err(UriSyntaxError::new(input, 0, "expected scheme name"));
        }
        if !(c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')) {
            return Err(UriSyntaxError::new(
                input,
                i,
                "illegal character in scheme name",
            ));
        }
    }
    Ok(())
}

fn validate(
    input: &str,
    offset: usize,
    text: &str,
    component: Component,
) -> Result<(), UriSyntaxError> {
    let mut chars = text.char_indices();
    while let Some((i, c)) = chars.next() {
        if c == '%' {
            match text.get(i + 1..i + 3) {
                Some(hex) if hex.chars().all(|h| h.is_ascii_hexdigit()) => {
                    chars.next();
                    chars.next();
                }
                _ => {
                    return Err(UriSyntaxError::new(
                        input,
                        offset + i,
                        "malformed escape pair",
                    ))
                }
            }
            continue;
        }

        // Non-ASCII characters are accepted unescaped, as long as they are
        // not controls or whitespace.
        let allowed = if c.is_ascii() {
            component.allows(c)
        } else {
            !c.is_control() && !c.is_whitespace()
        };
        if !allowed {
            return Err(UriSyntaxError::new(
                input,
                offset + i,
                format!("illegal character in {}", component.name()),
            ));
        }
    }
    Ok(())
}

impl FromStr for Uri {
    type Err = UriSyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&Url> for Uri {
    type Error = UriSyntaxError;

    /// Re-parse a URL's serialization under RFC 3986 rules.
    ///
    /// The WHATWG parser behind [`Url`] leaves some characters literal that
    /// RFC 3986 forbids, such as `|` in a path. Those fail here.
    fn try_from(url: &Url) -> Result<Self, Self::Error> {
        Self::parse(url.as_str())
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialization)
    }
}
