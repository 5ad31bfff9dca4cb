//! AES-128 key schedule and the forward/inverse block cipher drivers.

use crate::block::{Block, BLOCK_SIZE};
use crate::error::CipherError;
use crate::key::{Aes128Key, RoundKeys, KEY_SIZE};
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
use crate::tables::{rcon, sbox};

/// Number of cipher rounds for a 128-bit key.
pub const ROUNDS: usize = 10;

// AES-128 parameters are fixed at definition time; any other combination is a
// configuration error, not something to negotiate at runtime.
const _: () = assert!(BLOCK_SIZE == 16 && KEY_SIZE == 16 && ROUNDS == 10);

/// Expands a 128-bit cipher key into 11 round keys.
///
/// Round key 0 is the cipher key verbatim. For each later round, word 0 is
/// the previous round key's last word rotated left one byte, substituted
/// through the S-box, XORed with the round constant (first byte only) and
/// with the previous round key's word 0; words 1..=3 each XOR the preceding
/// word with the word at the same position one round back.
pub fn expand_key(key: &Aes128Key) -> RoundKeys {
    let mut keys = [[0u8; BLOCK_SIZE]; ROUNDS + 1];
    keys[0] = key.0;

    for round in 1..=ROUNDS {
        let prev = keys[round - 1];
        let mut next = [0u8; BLOCK_SIZE];

        let mut word = [prev[12], prev[13], prev[14], prev[15]];
        word.rotate_left(1);
        for byte in word.iter_mut() {
            *byte = sbox(*byte);
        }
        word[0] ^= rcon(round);
        for i in 0..4 {
            next[i] = word[i] ^ prev[i];
        }

        for w in 1..4 {
            for i in 0..4 {
                next[w * 4 + i] = next[(w - 1) * 4 + i] ^ prev[w * 4 + i];
            }
        }

        keys[round] = next;
    }

    RoundKeys(keys)
}

/// Encrypts a single 16-byte block under the given key.
///
/// The round keys are derived internally and dropped when the call returns.
pub fn encrypt_block(plaintext: &Block, key: &Aes128Key) -> Block {
    let round_keys = expand_key(key);
    let mut state = *plaintext;

    add_round_key(&mut state, round_keys.get(0));

    for round in 1..ROUNDS {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, round_keys.get(round));
    }

    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, round_keys.get(ROUNDS));

    state
}

/// Decrypts a single 16-byte block under the given key.
///
/// Mirrors [`encrypt_block`] exactly in reverse, so decrypting a ciphertext
/// with the key that produced it recovers the original block.
pub fn decrypt_block(ciphertext: &Block, key: &Aes128Key) -> Block {
    let round_keys = expand_key(key);
    let mut state = *ciphertext;

    add_round_key(&mut state, round_keys.get(ROUNDS));
    inv_shift_rows(&mut state);
    inv_sub_bytes(&mut state);

    for round in (1..ROUNDS).rev() {
        add_round_key(&mut state, round_keys.get(round));
        inv_mix_columns(&mut state);
        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state);
    }

    add_round_key(&mut state, round_keys.get(0));

    state
}

/// Encrypts one block given raw slices, rejecting wrong-length inputs.
pub fn encrypt(plaintext: &[u8], key: &[u8]) -> Result<Block, CipherError> {
    let block: Block = plaintext
        .try_into()
        .map_err(|_| CipherError::BlockLength(plaintext.len()))?;
    let key = Aes128Key::try_from(key)?;
    Ok(encrypt_block(&block, &key))
}

/// Decrypts one block given raw slices, rejecting wrong-length inputs.
pub fn decrypt(ciphertext: &[u8], key: &[u8]) -> Result<Block, CipherError> {
    let block: Block = ciphertext
        .try_into()
        .map_err(|_| CipherError::BlockLength(ciphertext.len()))?;
    let key = Aes128Key::try_from(key)?;
    Ok(decrypt_block(&block, &key))
}
