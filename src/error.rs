//! Error taxonomy for page rendering.

use thiserror::Error;

/// Recoverable failures surfaced while assembling a page.
///
/// Fetch and parse failures are caught where the data is used and turned
/// into a fallback view. `NotFound` degrades to a directory view. `Render`
/// carries the message of a panic caught by the page boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SiteError {
    #[error("Failed to fetch {target}: {reason}")]
    Fetch { target: String, reason: String },

    #[error("Failed to parse {target}: {reason}")]
    Parse { target: String, reason: String },

    #[error("No {kind} with id '{id}'")]
    NotFound { kind: &'static str, id: String },

    #[error("Render fault: {0}")]
    Render(String),
}

impl SiteError {
    pub fn fetch(target: impl Into<String>, reason: impl ToString) -> Self {
        Self::Fetch {
            target: target.into(),
            reason: reason.to_string(),
        }
    }

    pub fn parse(target: impl Into<String>, reason: impl ToString) -> Self {
        Self::Parse {
            target: target.into(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SiteError::fetch("/blogs/x.md", "404 Not Found");
        assert_eq!(err.to_string(), "Failed to fetch /blogs/x.md: 404 Not Found");

        let err = SiteError::NotFound {
            kind: "post",
            id: "missing".to_string(),
        };
        assert_eq!(err.to_string(), "No post with id 'missing'");

        let err = SiteError::Render("index out of bounds".to_string());
        assert_eq!(err.to_string(), "Render fault: index out of bounds");
    }

    #[test]
    fn test_parse_constructor() {
        let err = SiteError::parse("world.geojson", "expected value at line 1");
        assert!(matches!(err, SiteError::Parse { .. }));
        assert!(err.to_string().contains("world.geojson"));
    }
}
