//! CHAM-128 round transformations.
//!
//! One round updates only the first word of the state and then shifts the
//! four words left by one position, so the fresh word lands at index 3.
//! Even rounds rotate `x1` by one and the sum by eight; odd rounds swap
//! the two amounts.

use crate::block::Block;
use crate::key::RoundKeys;
use crate::rotate::{rotl, rotr, Rotation};

#[inline]
fn amounts(index: u32) -> (Rotation, Rotation) {
    if index & 1 == 0 {
        (Rotation::ONE, Rotation::EIGHT)
    } else {
        (Rotation::EIGHT, Rotation::ONE)
    }
}

/// Applies round `index` to `state`, returning the next state.
#[inline]
pub fn round(state: Block, index: u32, round_keys: &RoundKeys) -> Block {
    let [x0, x1, x2, x3] = state;
    let (inner, outer) = amounts(index);
    let sum = (x0 ^ index).wrapping_add(rotl(x1, inner) ^ round_keys.get(index as usize));
    [x1, x2, x3, rotl(sum, outer)]
}

/// Undoes round `index`.
#[inline]
pub fn inv_round(state: Block, index: u32, round_keys: &RoundKeys) -> Block {
    let [x1, x2, x3, fresh] = state;
    let (inner, outer) = amounts(index);
    let sum = rotr(fresh, outer);
    let x0 = sum.wrapping_sub(rotl(x1, inner) ^ round_keys.get(index as usize)) ^ index;
    [x0, x1, x2, x3]
}
