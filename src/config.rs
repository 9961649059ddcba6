//! Field configuration: symbol width and generator polynomial
//!
//! The configuration only names the field. Tables are built from it by
//! [`Field::from_config`](crate::Field::from_config), which also certifies
//! that the generator is primitive.

use crate::{field::generator_period, FieldError};

/// Supported symbol widths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldBits {
    /// GF(2^8), byte symbols
    Eight,
    /// GF(2^16), 16-bit symbols
    Sixteen,
}

impl FieldBits {
    /// Width from a bit count, `None` unless 8 or 16
    pub fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            8 => Some(Self::Eight),
            16 => Some(Self::Sixteen),
            _ => None,
        }
    }

    /// Bits per symbol
    pub fn bits(self) -> u32 {
        match self {
            Self::Eight => 8,
            Self::Sixteen => 16,
        }
    }

    /// Number of field elements
    pub fn size(self) -> usize {
        1 << self.bits()
    }

    /// Primitive polynomial shipped for this width
    pub fn default_generator(self) -> u32 {
        match self {
            Self::Eight => 0x169,
            Self::Sixteen => 0x17F0B,
        }
    }
}

/// Parameters that fully determine a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldConfig {
    /// Symbol width
    pub bits: FieldBits,

    /// Generator polynomial, including the field-size bit
    pub generator: u32,
}

impl FieldConfig {
    /// GF(2^8) with the default generator 0x169
    pub fn gf8() -> Self {
        Self::for_bits(FieldBits::Eight)
    }

    /// GF(2^16) with the default generator 0x17F0B
    pub fn gf16() -> Self {
        Self::for_bits(FieldBits::Sixteen)
    }

    /// Default generator for `bits`
    pub fn for_bits(bits: FieldBits) -> Self {
        Self {
            bits,
            generator: bits.default_generator(),
        }
    }

    /// Replace the generator polynomial
    pub fn with_generator(mut self, generator: u32) -> Self {
        self.generator = generator;
        self
    }

    /// Number of field elements
    pub fn size(&self) -> usize {
        self.bits.size()
    }

    /// Check that the generator has the right degree and a constant term
    ///
    /// Primitivity is certified separately when the tables are built.
    pub fn validate(&self) -> Result<(), FieldError> {
        crate::field::check_generator_shape(self.generator, self.bits.bits())
    }

    /// Full check, including primitivity, without building tables
    pub fn validate_primitive(&self) -> Result<(), FieldError> {
        self.validate()?;
        let period = generator_period(self.generator, self.bits.bits());
        if period != self.size() - 1 {
            return Err(FieldError::GeneratorNotPrimitive {
                generator: self.generator,
                period,
            });
        }
        Ok(())
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self::gf16()
    }
}
