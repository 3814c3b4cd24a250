//! AES-128 encryption core following FIPS-197.
//!
//! This crate provides:
//! - GF(2^8) arithmetic with interchangeable bitwise and log/antilog
//!   multipliers, plus the S-box and round constants.
//! - The AES-128 key schedule.
//! - The round pipeline over a column-major 4×4 state.
//! - Zero-padding block framing and an unchained, optionally parallel,
//!   buffer encryptor.
//!
//! Decryption and chaining modes are not provided. The implementation aims for
//! clarity and testability rather than constant-time guarantees; it should not
//! be treated as side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod encryptor;
mod error;
mod framer;
pub mod gf;
mod key;
pub mod round;
mod sbox;
mod schedule;
mod state;

pub use crate::block::{Block, BLOCK_SIZE};
pub use crate::cipher::{encrypt_block, encrypt_block_with, Aes128};
pub use crate::encryptor::{
    encrypt_stream, Encryptor, EncryptorConfig, DEFAULT_MAX_PLAINTEXT_LEN,
};
pub use crate::error::{Error, Result};
pub use crate::framer::{frame, framed_len, Frames};
pub use crate::gf::{Bitwise, GfMultiply, LogTable};
pub use crate::key::{
    Aes128Key, ExpandedKey, EXPANDED_KEY_SIZE, KEY_SIZE, ROUNDS, ROUND_KEYS,
};
pub use crate::sbox::{sbox, SBOX};
pub use crate::schedule::{expand, expand_key};
pub use crate::state::State;
