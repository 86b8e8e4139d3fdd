use std::borrow::Cow;

use base64::{
    alphabet,
    engine::{
        general_purpose::{GeneralPurpose, PAD},
        Engine,
    },
};

use crate::error::PayloadDecodeError;

/// Standard alphabet (`+`, `/`) with required padding.
///
/// Non-zero trailing bits are tolerated so that lax producers still decode.
pub const STANDARD: GeneralPurpose =
    GeneralPurpose::new(&alphabet::STANDARD, PAD.with_decode_allow_trailing_bits(true));

/// URL-safe alphabet (`-`, `_`) with required padding.
pub const URL_SAFE: GeneralPurpose =
    GeneralPurpose::new(&alphabet::URL_SAFE, PAD.with_decode_allow_trailing_bits(true));

/// Removes `\r` and `\n`, borrowing the input when it has none.
fn strip_line_breaks(s: &str) -> Cow<'_, str> {
    if s.contains(|c: char| matches!(c, '\r' | '\n')) {
        Cow::Owned(s.chars().filter(|c| !matches!(c, '\r' | '\n')).collect())
    } else {
        Cow::Borrowed(s)
    }
}

/// Decodes base64 text that may use either the standard or the URL-safe alphabet.
///
/// Line breaks are skipped. Standard base64 is always tried first; if it
/// fails, URL-safe base64 is tried and its error is returned on failure.
///
/// # Arguments
/// * `s` - base64 text
///
/// # Returns
/// * `Result<Vec<u8>, PayloadDecodeError>` - decoded bytes, or the URL-safe decode error
pub fn decode_flexible(s: &str) -> Result<Vec<u8>, PayloadDecodeError> {
    let input = strip_line_breaks(s);

    STANDARD
        .decode(input.as_bytes())
        .or_else(|err| {
            log::trace!("standard base64 decode failed, trying url-safe: {err}");
            URL_SAFE.decode(input.as_bytes())
        })
        .map_err(|err| {
            log::trace!("url-safe base64 decode failed: {err}");
            PayloadDecodeError::new(err)
        })
}

/// Encodes bytes with the standard, padded alphabet.
pub fn encode(bytes: impl AsRef<[u8]>) -> String {
    STANDARD.encode(bytes)
}
