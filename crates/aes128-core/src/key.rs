//! Key types for AES-128.

use crate::block::{Block, BLOCK_SIZE};
use crate::error::{Error, Result};

/// Key length in bytes (`Nk = 4` words).
pub const KEY_SIZE: usize = 16;

/// Number of rounds (`Nr`).
pub const ROUNDS: usize = 10;

/// Number of round keys, including the initial whitening key.
pub const ROUND_KEYS: usize = ROUNDS + 1;

/// Number of four-byte words in the expanded key.
pub const EXPANDED_WORDS: usize = 4 * ROUND_KEYS;

/// Expanded key length in bytes.
pub const EXPANDED_KEY_SIZE: usize = BLOCK_SIZE * ROUND_KEYS;

/// AES-128 key wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aes128Key(pub [u8; KEY_SIZE]);

impl From<[u8; KEY_SIZE]> for Aes128Key {
    fn from(value: [u8; KEY_SIZE]) -> Self {
        Self(value)
    }
}

impl TryFrom<&[u8]> for Aes128Key {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self> {
        let bytes: [u8; KEY_SIZE] = value
            .try_into()
            .map_err(|_| Error::InvalidKeyLength {
                actual: value.len(),
            })?;
        Ok(Self(bytes))
    }
}

impl AsRef<[u8]> for Aes128Key {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// The 176-byte key schedule: 44 words, 11 round keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExpandedKey([u8; EXPANDED_KEY_SIZE]);

impl ExpandedKey {
    pub(crate) fn from_words(words: &[u32; EXPANDED_WORDS]) -> Self {
        let mut bytes = [0u8; EXPANDED_KEY_SIZE];
        for (chunk, word) in bytes.chunks_exact_mut(4).zip(words.iter()) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        Self(bytes)
    }

    /// The schedule as concatenated words.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; EXPANDED_KEY_SIZE] {
        &self.0
    }

    /// Word `index` (0..44), or `None` past the end.
    pub fn word(&self, index: usize) -> Option<[u8; 4]> {
        let start = index.checked_mul(4)?;
        let bytes = self.0.get(start..start.checked_add(4)?)?;
        let mut word = [0u8; 4];
        word.copy_from_slice(bytes);
        Some(word)
    }

    /// Round key `round` (0..=10), occupying bytes `16 * round..16 * round + 16`.
    pub fn round_key(&self, round: usize) -> Result<Block> {
        let end = round
            .checked_add(1)
            .and_then(|r| r.checked_mul(BLOCK_SIZE))
            .ok_or(Error::InternalInvariantViolation("round key offset overflow"))?;
        let bytes = self
            .0
            .get(end - BLOCK_SIZE..end)
            .ok_or(Error::InternalInvariantViolation(
                "round key read past the expanded key",
            ))?;
        let mut block = [0u8; BLOCK_SIZE];
        block.copy_from_slice(bytes);
        Ok(block)
    }

    /// All eleven round keys in order.
    pub fn round_keys(&self) -> [Block; ROUND_KEYS] {
        let mut keys = [[0u8; BLOCK_SIZE]; ROUND_KEYS];
        for (key, chunk) in keys.iter_mut().zip(self.0.chunks_exact(BLOCK_SIZE)) {
            key.copy_from_slice(chunk);
        }
        keys
    }
}

impl AsRef<[u8]> for ExpandedKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
