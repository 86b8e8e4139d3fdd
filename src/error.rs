use thiserror::Error;

/// Result alias for envelope conversions and JSON handling.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Base64 text was not valid under either the standard or the URL-safe alphabet.
///
/// Carries the error of the last decoder that was tried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid base64 payload: {source}")]
pub struct PayloadDecodeError {
    #[source]
    source: base64::DecodeError,
}

impl PayloadDecodeError {
    pub(crate) fn new(source: base64::DecodeError) -> Self {
        Self { source }
    }

    /// The underlying base64 error from the final decode attempt.
    pub fn decode_error(&self) -> &base64::DecodeError {
        &self.source
    }
}

/// Errors raised while converting or (de)serializing envelopes.
#[derive(Debug, Error)]
pub enum Error {
    /// The envelope payload is not valid base64.
    #[error(transparent)]
    Decode(#[from] PayloadDecodeError),

    /// A signature's `sig` field is not valid base64.
    #[error("signature {index}: {source}")]
    SignatureDecode {
        index: usize,
        #[source]
        source: PayloadDecodeError,
    },

    /// Malformed JSON or a missing required field.
    #[error("invalid DSSE envelope JSON: {0}")]
    Json(#[from] serde_json::Error),
}
