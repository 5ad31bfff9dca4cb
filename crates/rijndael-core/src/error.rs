//! Error type for the cipher boundary.

use thiserror::Error;

/// Errors surfaced when constructing cipher inputs from raw slices.
///
/// Wrong-length input is rejected rather than truncated or padded; the
/// fixed-size APIs taking `[u8; 16]` values cannot fail.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CipherError {
    /// The supplied key was not exactly 16 bytes.
    #[error("AES-128 key must be 16 bytes, got {0}")]
    KeyLength(usize),
    /// The supplied block was not exactly 16 bytes.
    #[error("AES block must be 16 bytes, got {0}")]
    BlockLength(usize),
}
