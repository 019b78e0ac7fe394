//! Hashing for `keccak256:` literals.

use sha3::{Digest, Keccak256};
use thiserror::Error;

/// Length of a keccak256 digest in bytes.
pub const HASH_LENGTH: usize = 32;

#[derive(Debug, Error)]
pub enum HashError {
    #[error("hash provider failed: {0}")]
    Provider(String),
}

pub trait HashProvider: Send + Sync {
    fn keccak256(&self, data: &[u8]) -> Result<[u8; HASH_LENGTH], HashError>;
}

/// Legacy Keccak-256 (the pre-standard padding, not NIST SHA3-256).
#[derive(Debug, Clone, Copy, Default)]
pub struct Keccak256Hasher;

impl HashProvider for Keccak256Hasher {
    fn keccak256(&self, data: &[u8]) -> Result<[u8; HASH_LENGTH], HashError> {
        Ok(Keccak256::digest(data).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_digests() {
        let h = Keccak256Hasher;
        assert_eq!(
            hex::encode(h.keccak256(b"").unwrap()),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
        assert_eq!(
            hex::encode(h.keccak256(b"abc").unwrap()),
            "4e03657aea45a94fc7d47ba826c8d667c0d1e6e33a64a036ec44f58fa12d6c45"
        );
    }
}
