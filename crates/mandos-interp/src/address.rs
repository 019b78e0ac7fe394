//! Address derivation for `address:` literals.

use thiserror::Error;

/// Default address length in bytes.
pub const ADDRESS_LENGTH: usize = 32;

/// Default filler after the name.
pub const ADDRESS_PAD: u8 = b'_';

#[derive(Debug, Error)]
pub enum AddressError {
    #[error("address name is {len} bytes, longer than the {max}-byte address")]
    NameTooLong { len: usize, max: usize },

    #[error("address codec failed: {0}")]
    Codec(String),
}

pub trait AddressCodec: Send + Sync {
    fn derive_address(&self, name: &[u8]) -> Result<Vec<u8>, AddressError>;
}

/// The name itself, right-padded to a fixed length.
///
/// `address:owner` becomes `owner` followed by 27 `_` bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaddedNameAddressCodec {
    length: usize,
    pad: u8,
}

impl PaddedNameAddressCodec {
    pub fn new(length: usize, pad: u8) -> Self {
        Self { length, pad }
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

impl Default for PaddedNameAddressCodec {
    fn default() -> Self {
        Self::new(ADDRESS_LENGTH, ADDRESS_PAD)
    }
}

impl AddressCodec for PaddedNameAddressCodec {
    fn derive_address(&self, name: &[u8]) -> Result<Vec<u8>, AddressError> {
        if name.len() > self.length {
            return Err(AddressError::NameTooLong {
                len: name.len(),
                max: self.length,
            });
        }
        let mut out = Vec::with_capacity(self.length);
        out.extend_from_slice(name);
        out.resize(self.length, self.pad);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pads_to_length() {
        let addr = PaddedNameAddressCodec::default().derive_address(b"owner").unwrap();
        assert_eq!(addr.len(), 32);
        assert_eq!(&addr[..5], b"owner");
        assert!(addr[5..].iter().all(|&b| b == b'_'));
    }

    #[test]
    fn test_exact_length_and_too_long() {
        let codec = PaddedNameAddressCodec::new(4, 0);
        assert_eq!(codec.derive_address(b"abcd").unwrap(), b"abcd".to_vec());
        assert_eq!(codec.derive_address(b"").unwrap(), vec![0; 4]);
        assert!(matches!(
            codec.derive_address(b"abcde"),
            Err(AddressError::NameTooLong { len: 5, max: 4 })
        ));
    }
}
