//! CHAM-128/128 key schedule and block encryption/decryption.

use crate::block::{block_from_bytes, block_from_words, block_to_bytes, Block, BLOCK_BYTES};
use crate::error::ChamError;
use crate::key::{Cham128Key, RoundKeys, Word, KEY_WORDS, ROUND_KEY_WORDS};
use crate::rotate::{rotl, Rotation};
use crate::round::{inv_round, round};

/// Number of rounds CHAM-128/128 applies to each block.
pub const ROUNDS: u32 = 80;

/// Expands a 128-bit key into eight round keys.
///
/// Key word `i` yields two round keys: one mixed with rotations by 1 and 8
/// stored at `i`, and one mixed with rotations by 1 and 11 stored at
/// `(i + 4) ^ 1`. The index swap interleaves the two families and is part
/// of the algorithm.
pub fn expand_key(key: &Cham128Key) -> RoundKeys {
    let mut rk = [0 as Word; ROUND_KEY_WORDS];
    for (i, &k) in key.0.iter().enumerate() {
        let base = k ^ rotl(k, Rotation::ONE);
        rk[i] = base ^ rotl(k, Rotation::EIGHT);
        rk[(i + KEY_WORDS) ^ 1] = base ^ rotl(k, Rotation::ELEVEN);
    }
    RoundKeys(rk)
}

/// Encrypts a single block with pre-expanded round keys.
pub fn encrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    encrypt_rounds(block, round_keys, ROUNDS)
}

/// Decrypts a single block with pre-expanded round keys.
pub fn decrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    decrypt_rounds(block, round_keys, ROUNDS)
}

/// Runs the first `rounds` rounds of the cipher.
///
/// Only `rounds == ROUNDS` is CHAM-128/128; other counts exist for analysis.
pub fn encrypt_rounds(block: &Block, round_keys: &RoundKeys, rounds: u32) -> Block {
    (0..rounds).fold(*block, |state, index| round(state, index, round_keys))
}

/// Inverse of [`encrypt_rounds`] for the same `rounds`.
pub fn decrypt_rounds(block: &Block, round_keys: &RoundKeys, rounds: u32) -> Block {
    (0..rounds)
        .rev()
        .fold(*block, |state, index| inv_round(state, index, round_keys))
}

/// A keyed CHAM-128/128 instance.
///
/// Holds only the round keys, so one instance may encrypt any number of
/// blocks, from any number of threads.
#[derive(Clone, Copy, Debug)]
pub struct Cham128 {
    round_keys: RoundKeys,
}

impl Cham128 {
    /// Runs the key schedule for `key`.
    pub fn new(key: &Cham128Key) -> Self {
        Self {
            round_keys: expand_key(key),
        }
    }

    /// Wraps an already expanded schedule.
    pub fn from_round_keys(round_keys: RoundKeys) -> Self {
        Self { round_keys }
    }

    /// Returns the expanded schedule.
    pub fn round_keys(&self) -> &RoundKeys {
        &self.round_keys
    }

    /// Encrypts one block.
    pub fn encrypt_block(&self, block: &Block) -> Block {
        encrypt_block(block, &self.round_keys)
    }

    /// Decrypts one block.
    pub fn decrypt_block(&self, block: &Block) -> Block {
        decrypt_block(block, &self.round_keys)
    }

    /// Encrypts 16 bytes (four little-endian words) in place.
    pub fn encrypt_bytes(&self, bytes: &mut [u8; BLOCK_BYTES]) {
        *bytes = block_to_bytes(&self.encrypt_block(&block_from_bytes(bytes)));
    }

    /// Decrypts 16 bytes (four little-endian words) in place.
    pub fn decrypt_bytes(&self, bytes: &mut [u8; BLOCK_BYTES]) {
        *bytes = block_to_bytes(&self.decrypt_block(&block_from_bytes(bytes)));
    }

    /// Encrypts a raw word buffer in place. The buffer must hold exactly
    /// four words; anything else is rejected untouched.
    pub fn encrypt_words_in_place(&self, words: &mut [Word]) -> Result<(), ChamError> {
        let block = block_from_words(words)?;
        words.copy_from_slice(&self.encrypt_block(&block));
        Ok(())
    }

    /// Decrypts a raw word buffer in place, see [`Self::encrypt_words_in_place`].
    pub fn decrypt_words_in_place(&self, words: &mut [Word]) -> Result<(), ChamError> {
        let block = block_from_words(words)?;
        words.copy_from_slice(&self.decrypt_block(&block));
        Ok(())
    }
}
