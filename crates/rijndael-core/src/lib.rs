//! AES-128 single-block encryption and decryption.
//!
//! This crate implements the 10-round Rijndael transformation with a 128-bit
//! block and a 128-bit key, and nothing else:
//! - Key schedule expanding one cipher key into 11 round keys.
//! - Single-block encryption and decryption.
//! - Typed errors for wrong-length keys and blocks.
//!
//! Chaining modes, padding, and key sizes other than 128 bits are out of
//! scope; callers apply the primitive once per 16-byte block. The
//! implementation aims for clarity and testability rather than constant-time
//! guarantees; it should not be treated as side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
mod gf;
mod key;
mod round;
mod tables;

pub use crate::block::{Block, BLOCK_SIZE};
pub use crate::cipher::{decrypt, decrypt_block, encrypt, encrypt_block, expand_key, ROUNDS};
pub use crate::error::CipherError;
pub use crate::key::{Aes128Key, RoundKeys, KEY_SIZE};
