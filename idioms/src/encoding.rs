use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::error::EncodingError;

/// Standard (padded) base64 of the UTF-8 bytes of `text`.
pub fn encode(text: &str) -> String {
    BASE64.encode(text.as_bytes())
}

pub fn decode(encoded: &str) -> Result<String, EncodingError> {
    let bytes = BASE64.decode(encoded.trim())?;
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_text() {
        let encoded = encode("Base64 finally in the standard library!");
        assert_eq!(encoded, "QmFzZTY0IGZpbmFsbHkgaW4gdGhlIHN0YW5kYXJkIGxpYnJhcnkh");
        assert_eq!(decode(&encoded).expect("valid"), "Base64 finally in the standard library!");
    }

    #[test]
    fn rejects_bad_alphabet_and_bad_utf8() {
        assert!(matches!(decode("not base64!"), Err(EncodingError::Base64(_))));
        // 0xff 0xfe is not UTF-8.
        assert!(matches!(decode("//4="), Err(EncodingError::Utf8(_))));
    }
}
