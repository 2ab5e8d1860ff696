/// Failure to build a [`Page`](crate::types::Page) from an API response.
///
/// Only structurally required fields produce errors; optional fields fall back
/// to defaults instead.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("missing key `{key}`")]
    MissingKey { key: String },
    #[error("key `{key}` is not {expected}")]
    WrongType { key: String, expected: &'static str },
    #[error("invalid JSON body: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

impl PageError {
    pub(crate) fn missing(key: impl Into<String>) -> Self {
        Self::MissingKey { key: key.into() }
    }

    pub(crate) fn wrong_type(key: impl Into<String>, expected: &'static str) -> Self {
        Self::WrongType { key: key.into(), expected }
    }

    /// Dotted path of the offending key, if the error concerns one.
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::MissingKey { key } | Self::WrongType { key, .. } => Some(key),
            Self::InvalidJson(_) => None,
        }
    }

    /// Re-root the reported key under `prefix` (e.g. `data[3]`).
    pub(crate) fn within(self, prefix: &str) -> Self {
        match self {
            Self::MissingKey { key } => Self::MissingKey { key: format!("{prefix}.{key}") },
            Self::WrongType { key, expected } => Self::WrongType { key: format!("{prefix}.{key}"), expected },
            other => other,
        }
    }
}
