//! Splits a byte buffer into 16-byte blocks.
//!
//! A short final chunk is right-padded with zero bytes. This is not PKCS#7:
//! trailing zero bytes in the plaintext cannot be told apart from padding, so
//! the plaintext length is not recoverable from the framed output alone.

use core::iter::FusedIterator;

use crate::block::{Block, BLOCK_SIZE};

/// Iterator over zero-padded blocks of a plaintext buffer.
#[derive(Clone, Debug)]
pub struct Frames<'a> {
    chunks: core::slice::Chunks<'a, u8>,
}

/// Frames `plaintext` into blocks. Empty input yields no blocks.
pub fn frame(plaintext: &[u8]) -> Frames<'_> {
    Frames {
        chunks: plaintext.chunks(BLOCK_SIZE),
    }
}

/// Length of the framed (and therefore encrypted) output for `len` input bytes.
#[inline]
pub fn framed_len(len: usize) -> usize {
    len.div_ceil(BLOCK_SIZE) * BLOCK_SIZE
}

fn pad(chunk: &[u8]) -> Block {
    let mut block = [0u8; BLOCK_SIZE];
    block[..chunk.len()].copy_from_slice(chunk);
    block
}

impl Iterator for Frames<'_> {
    type Item = Block;

    fn next(&mut self) -> Option<Block> {
        self.chunks.next().map(pad)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl DoubleEndedIterator for Frames<'_> {
    fn next_back(&mut self) -> Option<Block> {
        self.chunks.next_back().map(pad)
    }
}

impl ExactSizeIterator for Frames<'_> {}

impl FusedIterator for Frames<'_> {}
