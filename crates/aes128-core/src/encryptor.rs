//! Independent (ECB-style) encryption of whole buffers.
//!
//! Each block is encrypted with the same schedule and no chaining value, so
//! blocks can be processed in any order and reassembled by index.

use log::debug;
use rayon::prelude::*;

use crate::block::{Block, BLOCK_SIZE};
use crate::cipher::Aes128;
use crate::error::{Error, Result};
use crate::framer::{frame, framed_len};
use crate::key::{Aes128Key, KEY_SIZE};

/// Default plaintext limit in bytes.
pub const DEFAULT_MAX_PLAINTEXT_LEN: usize = 16_000_000;

/// Configuration for [`Encryptor`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncryptorConfig {
    /// Largest plaintext accepted, in bytes.
    pub max_plaintext_len: usize,
    /// Encrypt blocks on the rayon thread pool.
    pub parallel: bool,
}

impl Default for EncryptorConfig {
    fn default() -> Self {
        Self {
            max_plaintext_len: DEFAULT_MAX_PLAINTEXT_LEN,
            parallel: false,
        }
    }
}

/// Encrypts arbitrary-length buffers block by block under one key.
#[derive(Clone, Debug)]
pub struct Encryptor {
    cipher: Aes128,
    config: EncryptorConfig,
}

impl Encryptor {
    /// Creates an encryptor with explicit configuration.
    pub fn new(config: EncryptorConfig, key: &Aes128Key) -> Self {
        Self {
            cipher: Aes128::new(key),
            config,
        }
    }

    /// Creates an encryptor with default configuration.
    pub fn with_key(key: &Aes128Key) -> Self {
        Self::new(EncryptorConfig::default(), key)
    }

    /// Returns the configuration.
    pub fn config(&self) -> &EncryptorConfig {
        &self.config
    }

    /// Frames and encrypts `plaintext`, returning ciphertext blocks in input
    /// order. Output length is `plaintext.len()` rounded up to a multiple of 16.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        if plaintext.len() > self.config.max_plaintext_len {
            return Err(Error::InputTooLarge {
                len: plaintext.len(),
                max: self.config.max_plaintext_len,
            });
        }

        let blocks = frame(plaintext).len();
        debug!(
            "encrypting {} bytes as {blocks} blocks (parallel: {})",
            plaintext.len(),
            self.config.parallel
        );

        let mut out = vec![0u8; framed_len(plaintext.len())];
        if self.config.parallel {
            out.par_chunks_mut(BLOCK_SIZE)
                .zip(plaintext.par_chunks(BLOCK_SIZE))
                .for_each(|(dst, src)| self.encrypt_chunk(dst, src));
        } else {
            for (dst, block) in out.chunks_mut(BLOCK_SIZE).zip(frame(plaintext)) {
                dst.copy_from_slice(&self.cipher.encrypt_block(&block));
            }
        }

        if out.len() != blocks * BLOCK_SIZE {
            return Err(Error::InternalInvariantViolation(
                "ciphertext length differs from framed length",
            ));
        }
        Ok(out)
    }

    fn encrypt_chunk(&self, dst: &mut [u8], src: &[u8]) {
        let block = frame(src).next().unwrap_or([0u8; BLOCK_SIZE]);
        dst.copy_from_slice(&self.cipher.encrypt_block(&block));
    }

    /// Encrypts already framed blocks.
    pub fn encrypt_blocks(&self, blocks: &[Block]) -> Vec<Block> {
        if self.config.parallel {
            blocks
                .par_iter()
                .map(|b| self.cipher.encrypt_block(b))
                .collect()
        } else {
            blocks.iter().map(|b| self.cipher.encrypt_block(b)).collect()
        }
    }
}

/// Encrypts a `key || plaintext` buffer: the first 16 bytes are the key and
/// everything after them is plaintext.
pub fn encrypt_stream(config: EncryptorConfig, input: &[u8]) -> Result<Vec<u8>> {
    if input.len() < KEY_SIZE {
        return Err(Error::InvalidKeyLength {
            actual: input.len(),
        });
    }
    let (key, plaintext) = input.split_at(KEY_SIZE);
    let key = Aes128Key::try_from(key)?;
    Encryptor::new(config, &key).encrypt(plaintext)
}
