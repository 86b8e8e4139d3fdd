use serde::{Deserialize, Serialize};

use crate::{
    b64,
    error::{PayloadDecodeError, Result},
};

/// Serializable DSSE envelope as it appears on the wire.
///
/// Holds the payload and signatures exactly as transmitted, still base64-encoded.
/// Nothing is decoded until asked for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    /// How to interpret the decoded payload
    pub payload_type: String,
    /// The base64-encoded payload (standard or URL-safe alphabet)
    pub payload: String,
    /// Signatures over the payload, in signer order
    pub signatures: Vec<Signature>,
}

impl Envelope {
    /// Returns the serialized body, decoded from the envelope's payload field.
    ///
    /// Standard base64 is tried first, then URL-safe base64.
    ///
    /// # Returns
    /// * `Result<Vec<u8>, PayloadDecodeError>` - payload bytes, or the URL-safe decode error if both alphabets fail
    pub fn decode_b64_payload(&self) -> Result<Vec<u8>, PayloadDecodeError> {
        b64::decode_flexible(&self.payload)
    }

    /// Parses an envelope from a JSON string.
    ///
    /// # Arguments
    /// * `s` - JSON string to parse
    ///
    /// # Returns
    /// * `Result<Self>` - Parsed envelope, or error if the JSON is malformed or a field is missing
    pub fn from_json_str(s: &str) -> Result<Self> {
        let envelope = serde_json::from_str(s).map_err(|err| {
            log::debug!("Failed to parse DSSE envelope: {err}");
            err
        })?;

        Ok(envelope)
    }

    /// Parses an envelope from JSON bytes.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        let envelope = serde_json::from_slice(bytes).map_err(|err| {
            log::debug!("Failed to parse DSSE envelope: {err}");
            err
        })?;

        Ok(envelope)
    }

    /// Serializes the envelope to a compact JSON string.
    pub fn to_json_string(&self) -> Result<String> {
        let s = serde_json::to_string(self)?;

        Ok(s)
    }
}

/// Serializable signature within a DSSE envelope.
///
/// The signature scheme is agreed upon by signer and verifier out of band.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(utoipa::ToSchema))]
pub struct Signature {
    /// Key identifier used to create the signature, possibly empty
    pub keyid: String,
    /// The base64-encoded signature bytes
    pub sig: String,
}

impl Signature {
    /// Decodes the signature bytes with the same flexible decoder as the payload.
    pub fn decode_b64_sig(&self) -> Result<Vec<u8>, PayloadDecodeError> {
        b64::decode_flexible(&self.sig)
    }
}
