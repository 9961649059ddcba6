//! Symbol widths supported by the field
//!
//! A symbol is one field element stored in its natural unsigned type.
//! Log sums are carried in the next wider type so that adding up to
//! `field_size - 1` logs never overflows.

use std::fmt::{Debug, Display, LowerHex};
use std::hash::Hash;
use std::ops::{Add, BitXor, BitXorAssign, Rem, Sub};
use std::sync::OnceLock;

use super::Field;

/// Unsigned integer type usable as a GF(2^n) element.
pub trait FieldSymbol:
    Copy
    + Eq
    + Ord
    + Hash
    + Default
    + Debug
    + Display
    + LowerHex
    + BitXor<Output = Self>
    + BitXorAssign
    + Send
    + Sync
    + 'static
{
    /// Bits per symbol
    const BITS: u32;

    /// Number of field elements, `2^BITS`
    const SIZE: usize = 1usize << Self::BITS;

    /// Primitive polynomial used when no generator is configured
    const DEFAULT_GENERATOR: u32;

    /// Accumulator type, twice the symbol width
    type Wide: Copy
        + Default
        + Debug
        + Add<Output = Self::Wide>
        + Sub<Output = Self::Wide>
        + Rem<Output = Self::Wide>
        + From<Self>
        + Into<u64>;

    /// Symbol value as a table index
    fn to_index(self) -> usize;

    /// Symbol from a table index; bits above `BITS` are discarded
    fn from_index(index: usize) -> Self;

    /// Accumulator holding `value`
    fn wide(value: usize) -> Self::Wide;

    /// Accumulator value as a table index
    fn wide_index(value: Self::Wide) -> usize {
        value.into() as usize
    }

    #[doc(hidden)]
    fn shared_cell() -> &'static OnceLock<Field<Self>>;
}

impl FieldSymbol for u8 {
    const BITS: u32 = 8;
    const DEFAULT_GENERATOR: u32 = 0x169;

    type Wide = u16;

    #[inline(always)]
    fn to_index(self) -> usize {
        self as usize
    }

    #[inline(always)]
    fn from_index(index: usize) -> Self {
        index as u8
    }

    #[inline(always)]
    fn wide(value: usize) -> u16 {
        value as u16
    }

    fn shared_cell() -> &'static OnceLock<Field<Self>> {
        static FIELD: OnceLock<Field<u8>> = OnceLock::new();
        &FIELD
    }
}

impl FieldSymbol for u16 {
    const BITS: u32 = 16;
    const DEFAULT_GENERATOR: u32 = 0x17F0B;

    type Wide = u32;

    #[inline(always)]
    fn to_index(self) -> usize {
        self as usize
    }

    #[inline(always)]
    fn from_index(index: usize) -> Self {
        index as u16
    }

    #[inline(always)]
    fn wide(value: usize) -> u32 {
        value as u32
    }

    fn shared_cell() -> &'static OnceLock<Field<Self>> {
        static FIELD: OnceLock<Field<u16>> = OnceLock::new();
        &FIELD
    }
}
