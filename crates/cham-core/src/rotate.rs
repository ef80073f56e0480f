//! 32-bit circular rotations.
//!
//! Every rotation inside the cipher goes through [`Rotation`], which can only
//! hold amounts in `1..=31`. The amounts the cipher needs are associated
//! constants, so an out-of-range shift cannot be written at a call site.

use crate::error::ChamError;
use crate::key::Word;

/// A rotation amount known to lie in `1..=31`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rotation(u32);

impl Rotation {
    /// Rotate by one bit.
    pub const ONE: Rotation = Rotation(1);
    /// Rotate by eight bits.
    pub const EIGHT: Rotation = Rotation(8);
    /// Rotate by eleven bits.
    pub const ELEVEN: Rotation = Rotation(11);

    /// Validates `amount`, rejecting 0 and anything of 32 or more.
    pub const fn new(amount: u32) -> Result<Self, ChamError> {
        if amount >= 1 && amount <= 31 {
            Ok(Self(amount))
        } else {
            Err(ChamError::InvalidRotation(amount))
        }
    }

    /// Returns the raw amount.
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Amount that undoes this rotation when applied in the same direction.
    #[inline]
    pub const fn complement(self) -> Rotation {
        Rotation(32 - self.0)
    }
}

/// Rotates `value` left by `amount` bits.
#[inline]
pub const fn rotl(value: Word, amount: Rotation) -> Word {
    value.rotate_left(amount.0)
}

/// Rotates `value` right by `amount` bits.
#[inline]
pub const fn rotr(value: Word, amount: Rotation) -> Word {
    value.rotate_right(amount.0)
}

/// Left rotation for amounts that arrive as plain integers.
pub fn checked_rotl(value: Word, amount: u32) -> Result<Word, ChamError> {
    Ok(rotl(value, Rotation::new(amount)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn matches_shift_formula() {
        let v: Word = 0x8000_0001;
        for d in 1..32 {
            let expected = (v << d) | (v >> (32 - d));
            assert_eq!(checked_rotl(v, d), Ok(expected));
        }
    }

    #[test]
    fn rotation_then_complement_is_identity() {
        let mut rng = ChaCha20Rng::from_seed([7u8; 32]);
        for _ in 0..64 {
            let v: Word = rng.gen();
            for d in 1..32 {
                let r = Rotation::new(d).unwrap();
                assert_eq!(rotl(rotl(v, r), r.complement()), v);
                assert_eq!(rotr(rotl(v, r), r), v);
            }
        }
    }

    #[test]
    fn zero_and_full_width_are_rejected() {
        assert_eq!(Rotation::new(0), Err(ChamError::InvalidRotation(0)));
        assert_eq!(Rotation::new(32), Err(ChamError::InvalidRotation(32)));
        assert_eq!(checked_rotl(1, 0), Err(ChamError::InvalidRotation(0)));
        assert_eq!(checked_rotl(1, 33), Err(ChamError::InvalidRotation(33)));
        // A full turn is the identity; it is reachable only as a rotation and its complement.
        let v: Word = 0xdead_beef;
        for d in 1..32 {
            let r = Rotation::new(d).unwrap();
            assert_eq!(checked_rotl(rotl(v, r), r.complement().get()), Ok(v));
        }
    }

    #[test]
    fn cipher_constants_are_in_range() {
        for r in [Rotation::ONE, Rotation::EIGHT, Rotation::ELEVEN] {
            assert_eq!(Rotation::new(r.get()), Ok(r));
        }
    }
}
