//! AES-128 key expansion.

use log::trace;

use crate::error::Result;
use crate::gf::RCON;
use crate::key::{Aes128Key, ExpandedKey, EXPANDED_WORDS};
use crate::sbox::sbox;

fn rot_word(word: u32) -> u32 {
    word.rotate_left(8)
}

fn sub_word(word: u32) -> u32 {
    u32::from_be_bytes(word.to_be_bytes().map(sbox))
}

/// Expands a 128-bit key into 11 round keys.
pub fn expand_key(key: &Aes128Key) -> ExpandedKey {
    let mut w = [0u32; EXPANDED_WORDS];
    for (word, chunk) in w.iter_mut().zip(key.0.chunks_exact(4)) {
        let bytes: [u8; 4] = [chunk[0], chunk[1], chunk[2], chunk[3]];
        *word = u32::from_be_bytes(bytes);
    }

    for i in 4..EXPANDED_WORDS {
        let mut temp = w[i - 1];
        if i % 4 == 0 {
            temp = sub_word(rot_word(temp)) ^ (u32::from(RCON[i / 4]) << 24);
        }
        w[i] = w[i - 4] ^ temp;
    }

    trace!("expanded AES-128 key into {EXPANDED_WORDS} words");
    ExpandedKey::from_words(&w)
}

/// Expands raw key bytes, rejecting anything that is not exactly 16 bytes.
pub fn expand(key: &[u8]) -> Result<ExpandedKey> {
    let key: Aes128Key = key.try_into()?;
    Ok(expand_key(&key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::key::{EXPANDED_KEY_SIZE, KEY_SIZE};

    fn key(hex_str: &str) -> Aes128Key {
        let bytes = hex::decode(hex_str).expect("valid hex");
        Aes128Key::try_from(bytes.as_slice()).expect("16-byte key")
    }

    #[test]
    fn appendix_a1_schedule() {
        let schedule = expand_key(&key("2b7e151628aed2a6abf7158809cf4f3c"));
        assert_eq!(schedule.word(4), Some([0xa0, 0xfa, 0xfe, 0x17]));
        assert_eq!(schedule.word(5), Some([0x88, 0x54, 0x2c, 0xb1]));
        assert_eq!(schedule.word(43), Some([0xb6, 0x63, 0x0c, 0xa6]));
        assert_eq!(
            hex::encode(schedule.round_key(1).expect("round 1")),
            "a0fafe1788542cb123a339392a6c7605"
        );
    }

    #[test]
    fn zero_key_last_round_key() {
        let schedule = expand_key(&Aes128Key([0u8; KEY_SIZE]));
        assert_eq!(
            hex::encode(schedule.round_key(10).expect("round 10")),
            "b4ef5bcb3e92e21123e951cf6f8f188e"
        );
    }

    #[test]
    fn schedule_starts_with_key() {
        let raw = [0x5au8; KEY_SIZE];
        let schedule = expand(&raw).expect("valid key");
        assert_eq!(schedule.as_bytes().len(), EXPANDED_KEY_SIZE);
        assert_eq!(&schedule.as_bytes()[..KEY_SIZE], &raw[..]);
    }

    #[test]
    fn expand_rejects_wrong_lengths() {
        assert_eq!(expand(&[]), Err(Error::InvalidKeyLength { actual: 0 }));
        assert_eq!(
            expand(&[1u8; 24]),
            Err(Error::InvalidKeyLength { actual: 24 })
        );
    }

    #[test]
    fn recurrence_holds_for_non_multiple_of_four() {
        let schedule = expand_key(&key("000102030405060708090a0b0c0d0e0f"));
        for i in (4..EXPANDED_WORDS).filter(|i| i % 4 != 0) {
            let prev = schedule.word(i - 1).expect("word");
            let back = schedule.word(i - 4).expect("word");
            let expected: [u8; 4] = core::array::from_fn(|b| prev[b] ^ back[b]);
            assert_eq!(schedule.word(i), Some(expected));
        }
    }
}
