//! Block representation helpers.

use core::convert::TryFrom;

use crate::error::ChamError;
use crate::key::Word;

/// Number of words in a block.
pub const BLOCK_WORDS: usize = 4;
/// Size of a block in bytes.
pub const BLOCK_BYTES: usize = 16;

/// CHAM-128 block of four words, index 0 first.
pub type Block = [Word; BLOCK_WORDS];

pub(crate) fn words_from_le_bytes(bytes: &[u8; 16]) -> [Word; 4] {
    core::array::from_fn(|i| {
        Word::from_le_bytes([
            bytes[4 * i],
            bytes[4 * i + 1],
            bytes[4 * i + 2],
            bytes[4 * i + 3],
        ])
    })
}

/// Reads a block from 16 bytes holding four little-endian words.
#[inline]
pub fn block_from_bytes(bytes: &[u8; BLOCK_BYTES]) -> Block {
    words_from_le_bytes(bytes)
}

/// Writes a block out as 16 bytes, four little-endian words.
pub fn block_to_bytes(block: &Block) -> [u8; BLOCK_BYTES] {
    let mut out = [0u8; BLOCK_BYTES];
    for (chunk, word) in out.chunks_exact_mut(4).zip(block.iter()) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }
    out
}

/// Builds a block from a word slice of exactly four entries.
pub fn block_from_words(words: &[Word]) -> Result<Block, ChamError> {
    Block::try_from(words).map_err(|_| ChamError::InvalidLength {
        what: "block words",
        expected: BLOCK_WORDS,
        actual: words.len(),
    })
}

/// Builds a block from a byte slice of exactly sixteen entries.
pub fn block_from_slice(bytes: &[u8]) -> Result<Block, ChamError> {
    let bytes = <[u8; BLOCK_BYTES]>::try_from(bytes).map_err(|_| ChamError::InvalidLength {
        what: "block bytes",
        expected: BLOCK_BYTES,
        actual: bytes.len(),
    })?;
    Ok(block_from_bytes(&bytes))
}
