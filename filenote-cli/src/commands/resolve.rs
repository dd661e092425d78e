//! Command to resolve notations into filesystem paths.

use crate::error::CliError;
use crate::utils::{build_resolver, GlobalOptions};
use clap::{Args, ValueEnum};
use filenote::{Error as LibError, Notation, Uri};
use serde::Serialize;
use std::path::PathBuf;
use url::Url;

/// How each argument should be interpreted before resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NotationKind {
    /// Plain text, disambiguated by the resolver
    Text,
    /// A URI, parsed strictly
    Uri,
    /// A URL, parsed with WHATWG rules
    Url,
    /// A filesystem path, returned unchanged
    Path,
    /// An opaque value converted from its text
    Other,
}

/// Output format for resolved paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ResolveFormat {
    /// One path per line
    Text,
    /// A JSON array of objects
    Json,
}

/// A resolved notation, as printed in JSON output.
#[derive(Debug, Serialize)]
struct Resolved {
    notation: String,
    kind: &'static str,
    path: String,
}

/// Resolve notations to filesystem paths.
#[derive(Args)]
pub struct ResolveCommand {
    /// Notations to resolve
    #[arg(value_name = "NOTATION", required = true)]
    pub notations: Vec<String>,

    /// How to interpret each notation
    #[arg(long, value_enum, default_value = "text")]
    pub kind: NotationKind,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: ResolveFormat,
}

impl ResolveCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let resolver = build_resolver(global)?;

        let mut resolved = Vec::with_capacity(self.notations.len());
        for raw in self.notations {
            let notation = parse_notation(self.kind, &raw)?;
            let kind = notation.kind();
            let path = resolver.resolve(notation)?;

            if self.format == ResolveFormat::Text {
                println!("{}", path.display());
            }
            resolved.push(Resolved {
                notation: raw,
                kind,
                path: path.to_string_lossy().into_owned(),
            });
        }

        if self.format == ResolveFormat::Json {
            let json = serde_json::to_string_pretty(&resolved).map_err(|e| {
                CliError::Io(std::io::Error::other(format!("Failed to write JSON: {e}")))
            })?;
            println!("{json}");
        }

        Ok(())
    }
}

/// Turn a command-line argument into a notation of the requested kind.
fn parse_notation(kind: NotationKind, raw: &str) -> Result<Notation, CliError> {
    match kind {
        NotationKind::Text => Ok(Notation::from(raw)),
        NotationKind::Path => Ok(Notation::from(PathBuf::from(raw))),
        NotationKind::Uri => Uri::parse(raw).map(Notation::from).map_err(|source| {
            CliError::Library(LibError::MalformedInput {
                input: raw.to_string(),
                source,
            })
        }),
        NotationKind::Url => Url::parse(raw)
            .map(Notation::from)
            .map_err(|e| CliError::InvalidArguments(format!("Invalid URL '{raw}': {e}"))),
        NotationKind::Other => Ok(Notation::other(raw)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_each_kind() {
        assert!(matches!(
            parse_notation(NotationKind::Text, "file:/a").unwrap(),
            Notation::Text(_)
        ));
        assert!(matches!(
            parse_notation(NotationKind::Path, "file:/a").unwrap(),
            Notation::FilePath(_)
        ));
        assert!(matches!(
            parse_notation(NotationKind::Uri, "file:/a").unwrap(),
            Notation::Uri(_)
        ));
        assert!(matches!(
            parse_notation(NotationKind::Url, "file:///a").unwrap(),
            Notation::Url(_)
        ));
        assert!(matches!(
            parse_notation(NotationKind::Other, "a").unwrap(),
            Notation::Other(_)
        ));
    }

    #[test]
    fn test_bad_uri_is_malformed() {
        let err = parse_notation(NotationKind::Uri, "file:/a b").unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_bad_url_is_invalid_argument() {
        let err = parse_notation(NotationKind::Url, "not a url").unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }
}
