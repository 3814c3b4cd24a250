//! AES-128 block encryption.

use crate::block::Block;
use crate::gf::{GfMultiply, LogTable};
use crate::key::{Aes128Key, ExpandedKey, ROUNDS};
use crate::round::{add_round_key, mix_columns_with, shift_rows, sub_bytes};
use crate::schedule::expand_key;
use crate::state::State;

/// Encrypts a single 16-byte block with a pre-expanded key.
#[inline]
pub fn encrypt_block(block: &Block, expanded: &ExpandedKey) -> Block {
    encrypt_block_with::<LogTable>(block, expanded)
}

/// Encrypts a single block, using `M` for the MixColumns field products.
pub fn encrypt_block_with<M: GfMultiply>(block: &Block, expanded: &ExpandedKey) -> Block {
    let round_keys = expanded.round_keys();
    let mut state = State::from_block(block);

    add_round_key(&mut state, &round_keys[0]);

    for round_key in &round_keys[1..ROUNDS] {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns_with::<M>(&mut state);
        add_round_key(&mut state, round_key);
    }

    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, &round_keys[ROUNDS]);

    state.to_block()
}

/// AES-128 encryptor holding a key schedule computed once.
///
/// The schedule is never mutated after construction, so one instance can be
/// shared by reference across threads.
#[derive(Clone, Debug)]
pub struct Aes128 {
    expanded: ExpandedKey,
}

impl Aes128 {
    /// Expands `key` and returns a ready cipher.
    pub fn new(key: &Aes128Key) -> Self {
        Self {
            expanded: expand_key(key),
        }
    }

    /// The key schedule in use.
    pub fn expanded_key(&self) -> &ExpandedKey {
        &self.expanded
    }

    /// Encrypts one block.
    #[inline]
    pub fn encrypt_block(&self, block: &Block) -> Block {
        encrypt_block(block, &self.expanded)
    }
}

impl From<ExpandedKey> for Aes128 {
    fn from(expanded: ExpandedKey) -> Self {
        Self { expanded }
    }
}
