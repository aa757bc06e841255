//! Error types for the POM document model.
//!
//! Malformed XML is the only hard parse failure; a well-formed document with
//! the wrong root element parses fine and is reported via
//! [`PomDocument::is_valid`](crate::PomDocument::is_valid) so callers can
//! skip it instead of aborting.

use thiserror::Error;

/// Raised when the input cannot be parsed as XML at all.
#[derive(Debug, Error)]
#[error("malformed XML: {0}")]
pub struct ParseError(#[from] roxmltree::Error);

/// Errors raised by queries and mutations on an already-parsed document.
#[derive(Debug, Error)]
pub enum PomError {
    /// The document text no longer parses. Mutations only splice well-formed
    /// fragments, so this indicates a bug or outside interference.
    #[error("document is no longer well-formed: {0}")]
    Reparse(#[from] roxmltree::Error),

    /// The document is not a Maven POM (wrong root element).
    #[error("document root is not <project>")]
    NotAPom,

    /// A section id refers to a profile that does not exist.
    #[error("no such build section: {0}")]
    SectionNotFound(String),

    /// A mutation targeted a plugin that is not declared in the section.
    #[error("plugin '{artifact_id}' not found in {section}")]
    PluginNotFound {
        artifact_id: String,
        section: String,
    },

    /// The raw text of an element did not have the expected shape
    /// (e.g. no recognizable closing tag).
    #[error("unrecognized element structure for <{0}>")]
    MalformedElement(String),
}

pub type PomResult<T> = Result<T, PomError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_displays_cause() {
        let err = roxmltree::Document::parse("<oops").unwrap_err();
        let wrapped = ParseError(err);
        assert!(wrapped.to_string().starts_with("malformed XML"));
    }

    #[test]
    fn plugin_not_found_names_both_sides() {
        let err = PomError::PluginNotFound {
            artifact_id: "jmeter-maven-plugin".to_string(),
            section: "profile 'ci'".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("jmeter-maven-plugin"));
        assert!(msg.contains("profile 'ci'"));
    }
}
