use thiserror::Error;

/// Decode errors raised by the event and response codecs.
///
/// Unknown `type`/`msgtype` strings are deliberately *not* errors: they
/// resolve to the `Unsupported`/`Unknown` fallback variants so that older
/// clients keep working against newer servers.
#[derive(Debug, Error)]
pub enum Error {
    /// A required field was absent from the input JSON.
    #[error("missing required field `{field}` in {shape}")]
    MissingField {
        field: &'static str,
        shape: &'static str,
    },

    /// A field was present but held the wrong JSON kind.
    #[error("field `{field}` is not {expected}")]
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
    },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn missing(field: &'static str, shape: &'static str) -> Error {
        Error::MissingField { field, shape }
    }

    pub(crate) fn mismatch(field: &'static str, expected: &'static str) -> Error {
        Error::TypeMismatch { field, expected }
    }
}
