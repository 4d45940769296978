//! Error types shared by the loader and the conversion entry points.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Load,
    Options,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Load => write!(f, "Load"),
            Phase::Options => write!(f, "Options"),
        }
    }
}

/// Failure raised by the document loader.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("malformed document: {message}")]
    Syntax {
        message: String,
        line: Option<usize>,
        column: Option<usize>,
    },

    #[error("unknown tag '{0}'")]
    UnknownTag(String),

    #[error("tag '{tag}' expects a {expected} payload")]
    TagKind { tag: String, expected: &'static str },
}

impl From<serde_yaml::Error> for LoadError {
    fn from(e: serde_yaml::Error) -> Self {
        let location = e.location();
        LoadError::Syntax {
            message: e.to_string(),
            line: location.as_ref().map(|l| l.line()),
            column: location.as_ref().map(|l| l.column()),
        }
    }
}

impl LoadError {
    pub fn code(&self) -> &'static str {
        match self {
            LoadError::Syntax { .. } => "P001",
            LoadError::UnknownTag(_) => "P002",
            LoadError::TagKind { .. } => "P003",
        }
    }
}

/// Phase-tagged error surfaced to callers of `try_convert` and the wasm layer.
#[derive(Debug, Clone, Error)]
#[error("[{phase}:{code}] {message}")]
pub struct ConvertError {
    pub code: String,
    pub phase: Phase,
    pub message: String,
}

impl From<LoadError> for ConvertError {
    fn from(e: LoadError) -> Self {
        ConvertError {
            code: e.code().into(),
            phase: Phase::Load,
            message: e.to_string(),
        }
    }
}

impl ConvertError {
    pub fn options(message: impl Into<String>) -> Self {
        ConvertError {
            code: "O001".into(),
            phase: Phase::Options,
            message: message.into(),
        }
    }
}
