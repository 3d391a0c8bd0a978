// File: src/error.rs
// Purpose: Error types for template lookup and pattern compilation

use std::fmt;

/// Entity kind a template addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    Product,
    Category,
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateKind::Product => f.write_str("product"),
            TemplateKind::Category => f.write_str("category"),
        }
    }
}

/// Errors raised while selecting or building a template.
///
/// Formatting, parsing and rewrite selection never fail; these only occur
/// when configuration names a shape that cannot be provided.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UrlError {
    #[error("Unknown {kind} url template: {name}")]
    UnknownTemplate { kind: TemplateKind, name: String },

    #[error("Invalid url pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

impl UrlError {
    pub(crate) fn invalid_pattern(pattern: &str, reason: impl Into<String>) -> Self {
        UrlError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.into(),
        }
    }
}
