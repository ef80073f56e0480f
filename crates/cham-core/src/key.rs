//! Key types for CHAM-128/128.

use core::convert::TryFrom;
use core::fmt;

use crate::block::words_from_le_bytes;
use crate::error::ChamError;

/// The 32-bit word every CHAM-128 operation works on.
pub type Word = u32;

/// Number of words in a master key.
pub const KEY_WORDS: usize = 4;

/// Size of a master key in bytes.
pub const KEY_BYTES: usize = 16;

/// Number of words in the expanded round-key array.
pub const ROUND_KEY_WORDS: usize = 8;

/// CHAM-128/128 master key as four words.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Cham128Key(pub [Word; KEY_WORDS]);

impl fmt::Debug for Cham128Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Cham128Key(..)")
    }
}

impl From<[Word; KEY_WORDS]> for Cham128Key {
    fn from(value: [Word; KEY_WORDS]) -> Self {
        Self(value)
    }
}

/// Bytes are read as little-endian words, so `00 01 02 03` becomes `0x03020100`.
impl From<[u8; KEY_BYTES]> for Cham128Key {
    fn from(value: [u8; KEY_BYTES]) -> Self {
        Self(words_from_le_bytes(&value))
    }
}

impl TryFrom<&[Word]> for Cham128Key {
    type Error = ChamError;

    fn try_from(words: &[Word]) -> Result<Self, Self::Error> {
        let words: [Word; KEY_WORDS] =
            words.try_into().map_err(|_| ChamError::InvalidLength {
                what: "key words",
                expected: KEY_WORDS,
                actual: words.len(),
            })?;
        Ok(Self(words))
    }
}

impl TryFrom<&[u8]> for Cham128Key {
    type Error = ChamError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; KEY_BYTES] =
            bytes.try_into().map_err(|_| ChamError::InvalidLength {
                what: "key bytes",
                expected: KEY_BYTES,
                actual: bytes.len(),
            })?;
        Ok(Self::from(bytes))
    }
}

/// Expanded round keys for CHAM-128/128.
///
/// The eight entries are cycled every eight rounds; the array is read-only
/// after [`expand_key`](crate::expand_key) and can be shared across threads.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct RoundKeys(pub [Word; ROUND_KEY_WORDS]);

// The schedule is invertible, so printing it would print the key.
impl fmt::Debug for RoundKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RoundKeys(..)")
    }
}

impl RoundKeys {
    /// Returns the key used in round `round`.
    #[inline]
    pub fn get(&self, round: usize) -> Word {
        self.0[round & (ROUND_KEY_WORDS - 1)]
    }
}

impl TryFrom<&[Word]> for RoundKeys {
    type Error = ChamError;

    fn try_from(words: &[Word]) -> Result<Self, Self::Error> {
        let words: [Word; ROUND_KEY_WORDS] =
            words.try_into().map_err(|_| ChamError::InvalidLength {
                what: "round keys",
                expected: ROUND_KEY_WORDS,
                actual: words.len(),
            })?;
        Ok(Self(words))
    }
}
