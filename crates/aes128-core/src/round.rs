//! AES round transformations over [`State`].

use crate::block::Block;
use crate::gf::{GfMultiply, LogTable};
use crate::sbox::sbox;
use crate::state::{State, NB};

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(state: &mut State) {
    for byte in state.bytes_mut() {
        *byte = sbox(*byte);
    }
}

/// Performs ShiftRows in place: row `r` rotates left by `r` positions.
#[inline]
pub fn shift_rows(state: &mut State) {
    for (r, row) in state.rows_mut().iter_mut().enumerate() {
        row.rotate_left(r);
    }
}

fn mix_single_column<M: GfMultiply>(col: [u8; NB]) -> [u8; NB] {
    let [a0, a1, a2, a3] = col;
    [
        M::mul(2, a0) ^ M::mul(3, a1) ^ a2 ^ a3,
        a0 ^ M::mul(2, a1) ^ M::mul(3, a2) ^ a3,
        a0 ^ a1 ^ M::mul(2, a2) ^ M::mul(3, a3),
        M::mul(3, a0) ^ a1 ^ a2 ^ M::mul(2, a3),
    ]
}

/// MixColumns over all four columns using the table multiplier.
#[inline]
pub fn mix_columns(state: &mut State) {
    mix_columns_with::<LogTable>(state);
}

/// MixColumns over all four columns using multiplier `M`.
pub fn mix_columns_with<M: GfMultiply>(state: &mut State) {
    for col in 0..NB {
        let mixed = mix_single_column::<M>(state.column(col));
        state.set_column(col, mixed);
    }
}

/// Adds (XORs) a round key into the state.
///
/// The key is laid out with the same row/column mapping as the state before
/// the XOR.
#[inline]
pub fn add_round_key(state: &mut State, round_key: &Block) {
    let key = State::from_block(round_key);
    for (r, row) in state.rows_mut().iter_mut().enumerate() {
        for (c, byte) in row.iter_mut().enumerate() {
            *byte ^= key.get(r, c);
        }
    }
}
