use std::{convert::TryFrom, fmt, str::FromStr};

use crate::{
    b64,
    error::{Error, Result},
    models, pae,
};

/// Dead Simple Signing Envelope (DSSE) with its payload and signatures decoded.
///
/// Built from a [`models::Envelope`] read off the wire, or assembled directly
/// by a signer before being encoded back with [`Envelope::into_json_string`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    /// The type/format of the payload being signed
    pub payload_type: PayloadType,
    /// The raw payload data in bytes
    pub payload: Vec<u8>,
    /// Signatures over the payload, in signer order
    pub signatures: Vec<Signature>,
}

impl Envelope {
    /// Converts the envelope into a JSON string representation.
    ///
    /// # Returns
    /// * `Result<String>` - JSON string of the envelope, or error if serialization fails
    pub fn into_json_string(self) -> Result<String> {
        models::Envelope::from(self).to_json_string()
    }

    /// Creates an envelope from a JSON string representation.
    ///
    /// # Arguments
    /// * `s` - JSON string to parse
    ///
    /// # Returns
    /// * `Result<Self>` - Parsed envelope, or error if the JSON or any base64 field is invalid
    pub fn try_from_json_string(s: &str) -> Result<Self> {
        let envelope = models::Envelope::from_json_str(s)?;
        Self::try_from(envelope)
    }

    /// Pre-authentication encoding of this envelope's payload type and payload.
    pub fn pae(&self) -> Vec<u8> {
        pae::pae(&self.payload_type.to_string(), &self.payload)
    }
}

/// Payload type of a DSSE envelope.
///
/// Known types get their own variant; any other string is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadType {
    /// in-toto attestation in JSON format
    InTotoJson,
    /// Any other custom payload type
    Other(String),
}

impl PayloadType {
    const IN_TOTO_JSON: &'static str = "application/vnd.in-toto+json";
}

impl fmt::Display for PayloadType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayloadType::InTotoJson => write!(f, "{}", Self::IN_TOTO_JSON),
            PayloadType::Other(s) => write!(f, "{}", s),
        }
    }
}

impl FromStr for PayloadType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Self::IN_TOTO_JSON => Ok(PayloadType::InTotoJson),
            _ => Ok(PayloadType::Other(s.to_owned())),
        }
    }
}

/// Decoded signature within a DSSE envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    /// Key identifier used to create the signature
    pub keyid: String,
    /// The raw signature bytes
    pub sig: Vec<u8>,
}

impl TryFrom<models::Envelope> for Envelope {
    type Error = Error;

    fn try_from(envelope: models::Envelope) -> Result<Self> {
        let payload = envelope.decode_b64_payload()?;

        let models::Envelope {
            payload_type,
            signatures,
            ..
        } = envelope;

        let payload_type = match PayloadType::from_str(&payload_type) {
            Ok(payload_type) => payload_type,
            Err(never) => match never {},
        };

        let signatures = signatures
            .into_iter()
            .enumerate()
            .map(|(index, signature)| {
                Signature::try_from(signature)
                    .map_err(|source| Error::SignatureDecode { index, source })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            payload_type,
            payload,
            signatures,
        })
    }
}

impl From<Envelope> for models::Envelope {
    fn from(envelope: Envelope) -> Self {
        let Envelope {
            payload_type,
            payload,
            signatures,
        } = envelope;

        let payload_type = payload_type.to_string();
        let payload = b64::encode(payload);
        let signatures = signatures.into_iter().map(Into::into).collect();

        Self {
            payload_type,
            payload,
            signatures,
        }
    }
}

impl TryFrom<models::Signature> for Signature {
    type Error = crate::error::PayloadDecodeError;

    fn try_from(signature: models::Signature) -> Result<Self, Self::Error> {
        let sig = signature.decode_b64_sig()?;
        let models::Signature { keyid, .. } = signature;

        Ok(Self { keyid, sig })
    }
}

impl From<Signature> for models::Signature {
    fn from(signature: Signature) -> Self {
        let Signature { keyid, sig } = signature;

        let sig = b64::encode(sig);

        Self { keyid, sig }
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;

    use super::*;

    macro_rules! fixtures {
        ($($name:ident: $fixture:literal => $payload_type:expr, $payload:expr, $keyids:expr),* $(,)?) => {
            $(
                #[test]
                fn $name() -> Result<()> {
                    let json = include_str!(concat!("../fixtures/", $fixture, ".json"));

                    let envelope = Envelope::try_from_json_string(json)?;

                    assert_eq!(envelope.payload_type, $payload_type);
                    assert_eq!(envelope.payload, $payload);

                    let keyids = envelope
                        .signatures
                        .iter()
                        .map(|s| s.keyid.as_str())
                        .collect::<Vec<_>>();
                    assert_eq!(keyids, $keyids);

                    Ok(())
                }
            )*
        };
    }

    fixtures! {
        hello_world: "hello-world" =>
            PayloadType::Other("http://example.com/HelloWorld".to_owned()),
            b"hello world".to_vec(),
            vec!["66301bbf"],
        intoto_url_safe: "intoto-url-safe" =>
            PayloadType::InTotoJson,
            vec![0xfb, 0xff],
            vec!["a", "b"],
        unsigned: "unsigned" =>
            PayloadType::Other("text/plain".to_owned()),
            Vec::<u8>::new(),
            Vec::<&str>::new(),
    }

    #[test]
    fn payload_type_roundtrips_strings() {
        for s in ["application/vnd.in-toto+json", "text/plain", ""] {
            let payload_type = s.parse::<PayloadType>().unwrap();

            assert_eq!(payload_type.to_string(), s);
        }
        assert_eq!(
            "application/vnd.in-toto+json".parse::<PayloadType>().unwrap(),
            PayloadType::InTotoJson
        );
    }

    #[test]
    fn json_roundtrip_preserves_order() -> Result<()> {
        let envelope = Envelope {
            payload_type: PayloadType::InTotoJson,
            payload: b"{\"_type\":\"https://in-toto.io/Statement/v1\"}".to_vec(),
            signatures: vec![
                Signature {
                    keyid: "a".to_owned(),
                    sig: vec![1, 2, 3],
                },
                Signature {
                    keyid: "b".to_owned(),
                    sig: vec![0xfb, 0xff],
                },
            ],
        };

        let json = envelope.clone().into_json_string()?;
        let parsed = Envelope::try_from_json_string(&json)?;

        assert_eq!(parsed, envelope);

        Ok(())
    }

    #[test]
    fn encodes_with_standard_alphabet() {
        let envelope = Envelope {
            payload_type: PayloadType::Other("t".to_owned()),
            payload: vec![0xfb, 0xff],
            signatures: vec![],
        };

        let wire = models::Envelope::from(envelope);

        assert_eq!(wire.payload, "+/8=");
        assert!(wire.signatures.is_empty());
    }

    #[test]
    fn invalid_payload_is_a_decode_error() {
        let wire = models::Envelope {
            payload_type: "t".to_owned(),
            payload: "not-valid-base64-!!".to_owned(),
            signatures: vec![],
        };

        let err = Envelope::try_from(wire).unwrap_err();

        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn invalid_sig_reports_its_index() {
        let wire = models::Envelope {
            payload_type: "t".to_owned(),
            payload: "aGVsbG8=".to_owned(),
            signatures: vec![
                models::Signature {
                    keyid: "a".to_owned(),
                    sig: "aGVsbG8=".to_owned(),
                },
                models::Signature {
                    keyid: "b".to_owned(),
                    sig: "@@".to_owned(),
                },
            ],
        };

        let err = Envelope::try_from(wire).unwrap_err();

        assert!(matches!(err, Error::SignatureDecode { index: 1, .. }));
    }

    #[test]
    fn pae_uses_payload_type_string() {
        let envelope = Envelope {
            payload_type: PayloadType::Other("http://example.com/HelloWorld".to_owned()),
            payload: b"hello world".to_vec(),
            signatures: vec![],
        };

        assert_eq!(
            envelope.pae(),
            b"DSSEv1 29 http://example.com/HelloWorld 11 hello world"
        );
    }
}
