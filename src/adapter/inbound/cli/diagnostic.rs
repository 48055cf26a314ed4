//! Miette-based error diagnostics for configuration files.
//!
//! Renders a TOML error with the offending file content and a labeled span.

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Configuration error with source location context.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(marketwright::config))]
pub struct ConfigDiagnostic {
    /// Human-readable error message.
    pub message: String,

    /// Source content (the configuration file).
    #[source_code]
    pub src: miette::NamedSource<String>,

    /// Byte offset and length of the problematic region.
    #[label("here")]
    pub span: Option<SourceSpan>,

    /// Optional help text with suggestions for fixing the error.
    #[help]
    pub help: Option<String>,
}

impl ConfigDiagnostic {
    /// Build a diagnostic from a TOML parse error.
    #[must_use]
    pub fn from_toml(name: &str, src: &str, error: &toml::de::Error) -> Self {
        Self {
            message: error.message().to_string(),
            src: miette::NamedSource::new(name, src.to_string()),
            span: error.span().map(|range| (range.start, range.len()).into()),
            help: Some("see `marketwright config init` for a documented template".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_error_keeps_span() {
        let src = "[api]\nurl = \n";
        let err = toml::from_str::<toml::Value>(src).unwrap_err();
        let diag = ConfigDiagnostic::from_toml("config.toml", src, &err);

        assert!(diag.span.is_some());
        assert!(!diag.message.is_empty());
    }
}
