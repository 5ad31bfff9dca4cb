//! Key types for AES-128.

use crate::block::Block;
use crate::error::CipherError;

/// Number of bytes in an AES-128 cipher key.
pub const KEY_SIZE: usize = 16;

/// AES-128 cipher key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aes128Key(pub [u8; KEY_SIZE]);

impl From<[u8; KEY_SIZE]> for Aes128Key {
    fn from(value: [u8; KEY_SIZE]) -> Self {
        Self(value)
    }
}

impl TryFrom<&[u8]> for Aes128Key {
    type Error = CipherError;

    /// Builds a key from a slice, rejecting any length other than 16 bytes.
    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; KEY_SIZE] = value
            .try_into()
            .map_err(|_| CipherError::KeyLength(value.len()))?;
        Ok(Self(bytes))
    }
}

/// Expanded round keys for AES-128: the cipher key followed by ten derived
/// keys. Owned by the encryption or decryption call that produced them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundKeys(pub [Block; 11]);

impl RoundKeys {
    /// Returns the round key at the requested index (0..=10).
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        &self.0[round]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_of_wrong_length_is_rejected() {
        assert_eq!(
            Aes128Key::try_from(&[0u8; 15][..]),
            Err(CipherError::KeyLength(15))
        );
        assert_eq!(
            Aes128Key::try_from(&[0u8; 17][..]),
            Err(CipherError::KeyLength(17))
        );
    }

    #[test]
    fn slice_of_key_length_is_accepted() {
        let bytes = [0xabu8; KEY_SIZE];
        assert_eq!(Aes128Key::try_from(&bytes[..]), Ok(Aes128Key(bytes)));
    }
}
