//! Dead Simple Signing Envelope (DSSE) data model.
//!
//! An envelope carries an arbitrary serialized payload alongside one or more
//! detached signatures over it. This crate holds the envelope as read off the
//! wire, decodes its base64 fields (standard or URL-safe alphabet), and builds
//! the pre-authentication encoding that signers and verifiers operate on.
//! Signing, verification and key resolution are left to the caller.

/// Flexible base64 decoding across the standard and URL-safe alphabets
pub mod b64;

/// Envelope with decoded payload and signature bytes
pub mod envelope;

/// Error types
pub mod error;

/// Serializable wire model of the envelope
pub mod models;

/// DSSE v1 pre-authentication encoding
pub mod pae;

pub use envelope::PayloadType;
pub use error::{Error, PayloadDecodeError, Result};
pub use models::{Envelope, Signature};
