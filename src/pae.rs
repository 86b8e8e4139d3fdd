/// Builds the DSSE v1 pre-authentication encoding of a payload.
///
/// `"DSSEv1" SP LEN(type) SP type SP LEN(payload) SP payload`, where `LEN` is
/// the ASCII decimal byte length. This is the byte string a signer signs.
pub fn pae(payload_type: &str, payload: &[u8]) -> Vec<u8> {
    let type_len = payload_type.len().to_string();
    let payload_len = payload.len().to_string();

    let mut out = Vec::with_capacity(
        10 + type_len.len() + payload_type.len() + payload_len.len() + payload.len(),
    );
    out.extend_from_slice(b"DSSEv1 ");
    out.extend_from_slice(type_len.as_bytes());
    out.push(b' ');
    out.extend_from_slice(payload_type.as_bytes());
    out.push(b' ');
    out.extend_from_slice(payload_len.as_bytes());
    out.push(b' ');
    out.extend_from_slice(payload);

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hello_world() {
        let encoded = pae("http://example.com/HelloWorld", b"hello world");

        assert_eq!(
            encoded,
            b"DSSEv1 29 http://example.com/HelloWorld 11 hello world"
        );
    }

    #[test]
    fn empty_type_and_payload() {
        assert_eq!(pae("", b""), b"DSSEv1 0  0 ");
    }

    #[test]
    fn lengths_count_bytes_not_chars() {
        let encoded = pae("t", "é".as_bytes());

        assert_eq!(encoded, "DSSEv1 1 t 2 é".as_bytes());
    }
}
