//! Binary extension field GF(2^n), n = 8 or 16
//!
//! `Field` is the initialize-once context that every other operation borrows:
//! - Addition and subtraction are XOR (characteristic 2)
//! - Multiplication is `exp[log a + log b]` on a doubled exp table
//! - Zero is special-cased everywhere, it has no discrete log

mod symbol;
mod tables;

pub use symbol::FieldSymbol;
pub use tables::generator_period;
pub(crate) use tables::check_generator_shape;

use std::fmt;

use crate::{FieldConfig, FieldError};

/// GF(2^8) with byte symbols
pub type Gf8 = Field<u8>;

/// GF(2^16) with 16-bit symbols
pub type Gf16 = Field<u16>;

/// Log/exp tables for one field size and generator.
///
/// Immutable once built; share it by reference across threads.
#[derive(Clone)]
pub struct Field<S: FieldSymbol> {
    generator: u32,
    /// `exp[i]` = x^(i mod q), `2 * size` entries so log sums need no modulo
    exp: Box<[S]>,
    /// `log[a]` for nonzero `a`; `log[0]` holds the sentinel `q`
    log: Box<[S]>,
}

impl<S: FieldSymbol> Field<S> {
    /// Build the field with the default generator for this symbol width
    pub fn new() -> Result<Self, FieldError> {
        Self::with_generator(S::DEFAULT_GENERATOR)
    }

    /// Build the field for `generator`, certifying that it is primitive
    pub fn with_generator(generator: u32) -> Result<Self, FieldError> {
        let tables = tables::build_tables::<S>(generator).map_err(|err| {
            tracing::warn!(generator, bits = S::BITS, %err, "rejected field generator");
            err
        })?;
        tracing::debug!(generator, bits = S::BITS, "built field tables");
        Ok(Self {
            generator,
            exp: tables.exp,
            log: tables.log,
        })
    }

    /// Build the field described by `config`
    pub fn from_config(config: &FieldConfig) -> Result<Self, FieldError> {
        if config.bits.bits() != S::BITS {
            return Err(FieldError::WidthMismatch {
                config: config.bits.bits(),
                symbol: S::BITS,
            });
        }
        config.validate()?;
        Self::with_generator(config.generator)
    }

    /// Process-wide field with the default generator, built on first use
    ///
    /// # Panics
    ///
    /// Panics if the default generator fails to build, which would make
    /// every result of this width wrong.
    pub fn shared() -> &'static Self {
        S::shared_cell().get_or_init(|| {
            Self::new().unwrap_or_else(|err| panic!("default GF(2^{}) field: {err}", S::BITS))
        })
    }

    /// Number of field elements, `2^bits`
    pub fn size(&self) -> usize {
        S::SIZE
    }

    /// Order of the multiplicative group, `size - 1`
    pub fn order(&self) -> usize {
        S::SIZE - 1
    }

    /// Bits per symbol
    pub fn bits(&self) -> u32 {
        S::BITS
    }

    /// Generator polynomial
    pub fn generator(&self) -> u32 {
        self.generator
    }

    /// Field addition (XOR)
    #[inline(always)]
    pub fn add(&self, a: S, b: S) -> S {
        a ^ b
    }

    /// Field subtraction (also XOR)
    #[inline(always)]
    pub fn sub(&self, a: S, b: S) -> S {
        a ^ b
    }

    /// Field multiplication
    #[inline]
    pub fn mul(&self, a: S, b: S) -> S {
        if a == S::default() || b == S::default() {
            return S::default();
        }
        self.exp[self.log_index(a) + self.log_index(b)]
    }

    /// Field division, `a / b`
    pub fn div(&self, a: S, b: S) -> Result<S, FieldError> {
        if b == S::default() {
            return Err(FieldError::DivisionByZero);
        }
        if a == S::default() {
            return Ok(S::default());
        }
        Ok(self.exp[self.log_index(a) + self.order() - self.log_index(b)])
    }

    /// Multiplicative inverse
    pub fn inv(&self, a: S) -> Result<S, FieldError> {
        if a == S::default() {
            return Err(FieldError::DivisionByZero);
        }
        Ok(self.exp[self.order() - self.log_index(a)])
    }

    /// `a` raised to the power `e`; `0^0 = 1`
    pub fn pow(&self, a: S, e: u64) -> S {
        if e == 0 {
            return S::from_index(1);
        }
        if a == S::default() {
            return S::default();
        }
        let order = self.order() as u64;
        let log = (self.log_index(a) as u64 * (e % order)) % order;
        self.exp[log as usize]
    }

    /// Discrete log of `a`, `None` for zero
    pub fn log(&self, a: S) -> Option<usize> {
        if a == S::default() {
            None
        } else {
            Some(self.log_index(a))
        }
    }

    /// Element whose discrete log is `i mod (size - 1)`
    pub fn exp(&self, i: usize) -> S {
        self.exp[i % self.order()]
    }

    /// Raw table lookup of `log[a]`; `a` must be nonzero
    #[inline(always)]
    pub(crate) fn log_index(&self, a: S) -> usize {
        self.log[a.to_index()].to_index()
    }

    /// Raw table lookup of `exp[i]` for `i < 2 * size`
    #[inline(always)]
    pub(crate) fn exp_index(&self, i: usize) -> S {
        self.exp[i]
    }
}

impl<S: FieldSymbol> fmt::Debug for Field<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("bits", &S::BITS)
            .field("generator", &format_args!("{:#x}", self.generator))
            .finish_non_exhaustive()
    }
}
