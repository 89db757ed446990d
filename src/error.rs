//! Error types for topic resolution and the help surfaces

use thiserror::Error;

/// Why a query could not be turned into a topic
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolutionError {
    /// The value's type has no topic mapping
    #[error("no help topic covers values of type `{type_name}`")]
    Unclassifiable { type_name: String },

    /// The keyword matched no topic or synonym, not even approximately
    #[error("unknown help topic `{keyword}` (try `topics` for the full list)")]
    Unknown { keyword: String },
}

impl ResolutionError {
    /// Stable machine-readable kind, used in tool responses
    pub fn kind(&self) -> &'static str {
        match self {
            ResolutionError::Unclassifiable { .. } => "unclassifiable",
            ResolutionError::Unknown { .. } => "unknown",
        }
    }
}

/// Errors surfaced by the help desk and its command surfaces
#[derive(Debug, Error)]
pub enum HelpError {
    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    #[error("keyword `{keyword}` maps to both `{first}` and `{second}`")]
    SynonymConflict {
        keyword: String,
        first: String,
        second: String,
    },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("line editor: {0}")]
    Editor(#[from] rustyline::error::ReadlineError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type for help operations
pub type HelpResult<T> = Result<T, HelpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_messages_are_readable() {
        let err = ResolutionError::Unknown {
            keyword: "frobs".to_string(),
        };
        assert!(err.to_string().contains("`frobs`"));
        assert_eq!(err.kind(), "unknown");

        let err = ResolutionError::Unclassifiable {
            type_name: "Ptr{Cvoid}".to_string(),
        };
        assert!(err.to_string().contains("Ptr{Cvoid}"));
        assert_eq!(err.kind(), "unclassifiable");
    }

    #[test]
    fn test_resolution_error_is_transparent_in_help_error() {
        let err: HelpError = ResolutionError::Unknown {
            keyword: "x".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "unknown help topic `x` (try `topics` for the full list)");
    }
}
