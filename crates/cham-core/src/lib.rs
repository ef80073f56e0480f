//! CHAM-128/128 block cipher core.
//!
//! CHAM is an ARX cipher (addition, rotation, xor) built as a four-branch
//! generalized Feistel network. This crate provides:
//! - The key schedule, expanding a 128-bit key into eight round keys.
//! - Single-block encryption (80 rounds) and its inverse.
//! - Typed keys and blocks, with checked conversions from raw buffers.
//!
//! Only the raw block primitive is implemented; there are no modes of
//! operation or padding. All operations are fixed-cost arithmetic with no
//! data-dependent branches.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
mod key;
mod rotate;
mod round;

pub use crate::block::{
    block_from_bytes, block_from_slice, block_from_words, block_to_bytes, Block, BLOCK_BYTES,
    BLOCK_WORDS,
};
pub use crate::cipher::{
    decrypt_block, decrypt_rounds, encrypt_block, encrypt_rounds, expand_key, Cham128, ROUNDS,
};
pub use crate::error::ChamError;
pub use crate::key::{Cham128Key, RoundKeys, Word, KEY_BYTES, KEY_WORDS, ROUND_KEY_WORDS};
pub use crate::rotate::{checked_rotl, rotl, rotr, Rotation};
