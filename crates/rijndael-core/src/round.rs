//! AES round transformations and their inverses.

use crate::block::{offset, xor_in_place, Block};
use crate::gf::xtime;
use crate::tables::{inv_sbox, sbox};

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = sbox(*byte);
    }
}

/// Applies the inverse SubBytes transformation.
#[inline]
pub fn inv_sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = inv_sbox(*byte);
    }
}

/// Performs ShiftRows in place: row k rotates left by k columns.
#[inline]
pub fn shift_rows(state: &mut Block) {
    let src = *state;
    for row in 1..4 {
        for col in 0..4 {
            state[offset(row, col)] = src[offset(row, (col + row) % 4)];
        }
    }
}

/// Performs the inverse of ShiftRows in place: row k rotates right by k.
#[inline]
pub fn inv_shift_rows(state: &mut Block) {
    let src = *state;
    for row in 1..4 {
        for col in 0..4 {
            state[offset(row, (col + row) % 4)] = src[offset(row, col)];
        }
    }
}

/// Mixes one 4-byte column.
///
/// Equivalent to multiplying by the [[2,3,1,1],[1,2,3,1],[1,1,2,3],[3,1,1,2]]
/// matrix over GF(2^8), expressed so that only `xtime` and XOR are needed:
/// every output byte is `orig ^ t ^ xtime(orig ^ next)` where `t` is the XOR
/// of the whole column and `next` the cyclically following byte.
fn mix_column(column: &mut [u8]) {
    let t = column[0] ^ column[1] ^ column[2] ^ column[3];
    let first = column[0];
    column[0] ^= t ^ xtime(column[0] ^ column[1]);
    column[1] ^= t ^ xtime(column[1] ^ column[2]);
    column[2] ^= t ^ xtime(column[2] ^ column[3]);
    column[3] ^= t ^ xtime(column[3] ^ first);
}

/// MixColumns over all four columns.
#[inline]
pub fn mix_columns(state: &mut Block) {
    for column in state.chunks_exact_mut(4) {
        mix_column(column);
    }
}

/// Inverse MixColumns over all four columns.
///
/// XORing `xtime(xtime(a ^ c))` into bytes 0/2 and `xtime(xtime(b ^ d))`
/// into bytes 1/3 reduces the inverse mixing matrix to the forward one, so
/// the inverse matrix never has to be materialized.
#[inline]
pub fn inv_mix_columns(state: &mut Block) {
    for column in state.chunks_exact_mut(4) {
        let u = xtime(xtime(column[0] ^ column[2]));
        let v = xtime(xtime(column[1] ^ column[3]));
        column[0] ^= u;
        column[1] ^= v;
        column[2] ^= u;
        column[3] ^= v;
        mix_column(column);
    }
}

/// Adds (XORs) a round key into the state.
#[inline]
pub fn add_round_key(state: &mut Block, round_key: &Block) {
    xor_in_place(state, round_key);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngCore;

    fn random_block(rng: &mut impl RngCore) -> Block {
        let mut block = [0u8; 16];
        rng.fill_bytes(&mut block);
        block
    }

    #[test]
    fn sub_bytes_round_trips() {
        let mut rng = rand::thread_rng();
        for _ in 0..20 {
            let block = random_block(&mut rng);
            let mut state = block;
            sub_bytes(&mut state);
            inv_sub_bytes(&mut state);
            assert_eq!(state, block);
        }
    }

    #[test]
    fn shift_rows_round_trips() {
        let mut rng = rand::thread_rng();
        for _ in 0..20 {
            let block = random_block(&mut rng);
            let mut state = block;
            shift_rows(&mut state);
            inv_shift_rows(&mut state);
            assert_eq!(state, block);
        }
    }

    #[test]
    fn shift_rows_moves_known_positions() {
        let mut state: Block = core::array::from_fn(|i| i as u8);
        shift_rows(&mut state);
        // Row 0 untouched, row 1 rotated one column left.
        assert_eq!(state[0], 0);
        assert_eq!(state[1], 5);
        assert_eq!(state[3], 15);
        assert_eq!(state[10], 2);
        assert_eq!(state[15], 11);
    }

    #[test]
    fn mix_columns_round_trips() {
        let mut rng = rand::thread_rng();
        for _ in 0..20 {
            let block = random_block(&mut rng);
            let mut state = block;
            mix_columns(&mut state);
            inv_mix_columns(&mut state);
            assert_eq!(state, block);
        }
    }

    #[test]
    fn mix_column_matches_fips_examples() {
        // Example columns from FIPS-197 §5.1.3.
        let mut column = [0xdb, 0x13, 0x53, 0x45];
        mix_column(&mut column);
        assert_eq!(column, [0x8e, 0x4d, 0xa1, 0xbc]);

        let mut column = [0xd4, 0xbf, 0x5d, 0x30];
        mix_column(&mut column);
        assert_eq!(column, [0x04, 0x66, 0x81, 0xe5]);
    }

    #[test]
    fn add_round_key_is_self_inverse() {
        let mut rng = rand::thread_rng();
        let block = random_block(&mut rng);
        let key = random_block(&mut rng);
        let mut state = block;
        add_round_key(&mut state, &key);
        add_round_key(&mut state, &key);
        assert_eq!(state, block);
    }
}
