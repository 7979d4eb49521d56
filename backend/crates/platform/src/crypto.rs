//! Randomness and key material helpers

use base64::{Engine, engine::general_purpose};
use rand::{RngCore, rngs::OsRng};

/// 32 random bytes, sized for an HS256 signing key
pub fn random_secret() -> [u8; 32] {
    let mut secret = [0u8; 32];
    OsRng.fill_bytes(&mut secret);
    secret
}

/// Lower-case hex of `len` random bytes, used for collision-resistant file names
pub fn random_hex(len: usize) -> String {
    let mut bytes = vec![0u8; len];
    OsRng.fill_bytes(&mut bytes);
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Decode a standard base64 secret; surrounding whitespace is ignored
pub fn from_base64(s: &str) -> Result<Vec<u8>, base64::DecodeError> {
    general_purpose::STANDARD.decode(s.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_secret_differs() {
        assert_ne!(random_secret(), random_secret());
    }

    #[test]
    fn test_random_hex() {
        let hex = random_hex(4);
        assert_eq!(hex.len(), 8);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert!(random_hex(0).is_empty());
    }

    #[test]
    fn test_from_base64() {
        let decoded = from_base64(" AAECAw==\n").unwrap();
        assert_eq!(decoded, vec![0, 1, 2, 3]);
        assert!(from_base64("***").is_err());
    }
}
