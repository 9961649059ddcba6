//! Discrete log/exp table construction
//!
//! Walks the powers of x modulo the generator: shift left once per step and
//! reduce with the generator whenever the field-size bit is set. Position `i`
//! of the walk is the element whose discrete log is `i`.

use super::FieldSymbol;
use crate::FieldError;

/// Freshly built tables: `exp` has `2 * size` entries, `log` has `size`.
pub(crate) struct Tables<S> {
    pub exp: Box<[S]>,
    pub log: Box<[S]>,
}

/// Reject generators that cannot define GF(2^bits) at all.
///
/// The generator must be odd (a zero constant term makes x a zero divisor)
/// and its highest set bit must be exactly bit `bits`.
pub(crate) fn check_generator_shape(generator: u32, bits: u32) -> Result<(), FieldError> {
    let odd = generator & 1 == 1;
    let degree_ok = bits < 32 && generator >> bits == 1;
    if odd && degree_ok {
        Ok(())
    } else {
        Err(FieldError::InvalidGenerator { generator, bits })
    }
}

/// Number of doubling steps until x returns to 1 modulo `generator`.
///
/// A generator is primitive exactly when this equals `2^bits - 1`. Generators
/// that fail the shape check report a period of 0.
pub fn generator_period(generator: u32, bits: u32) -> usize {
    if check_generator_shape(generator, bits).is_err() {
        return 0;
    }
    let size = 1u32 << bits;
    let mut x = 1u32;
    for step in 1..=size as usize {
        x = double(x, size, generator);
        if x == 1 {
            return step;
        }
    }
    0
}

#[inline(always)]
fn double(x: u32, size: u32, generator: u32) -> u32 {
    let shifted = x << 1;
    if shifted & size != 0 {
        shifted ^ generator
    } else {
        shifted
    }
}

/// Build exp/log tables for `generator`, certifying that it is primitive.
pub(crate) fn build_tables<S: FieldSymbol>(generator: u32) -> Result<Tables<S>, FieldError> {
    check_generator_shape(generator, S::BITS)?;

    let size = S::SIZE;
    let order = size - 1;
    let mut exp = vec![S::default(); 2 * size];
    let mut log = vec![S::default(); size];

    let mut x = 1u32;
    for i in 0..order {
        // Back at 1 early: x generates a proper subgroup
        if i > 0 && x == 1 {
            return Err(FieldError::GeneratorNotPrimitive {
                generator,
                period: i,
            });
        }
        let symbol = S::from_index(x as usize);
        exp[i] = symbol;
        exp[i + order] = symbol;
        log[x as usize] = S::from_index(i);
        x = double(x, size as u32, generator);
    }
    if x != 1 {
        return Err(FieldError::GeneratorNotPrimitive {
            generator,
            period: generator_period(generator, S::BITS),
        });
    }

    // Tail of the doubled table, reachable only through modular indexing
    exp[2 * size - 2] = exp[0];
    exp[2 * size - 1] = exp[1];
    // Zero has no discrete log
    log[0] = S::from_index(order);

    Ok(Tables {
        exp: exp.into_boxed_slice(),
        log: log.into_boxed_slice(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_check() {
        assert!(check_generator_shape(0x169, 8).is_ok());
        assert!(check_generator_shape(0x17F0B, 16).is_ok());
        // Even
        assert!(check_generator_shape(0x168, 8).is_err());
        // Wrong degree
        assert!(check_generator_shape(0x69, 8).is_err());
        assert!(check_generator_shape(0x17F0B, 8).is_err());
    }

    #[test]
    fn test_period() {
        assert_eq!(generator_period(0x169, 8), 255);
        assert_eq!(generator_period(0x11D, 8), 255);
        // AES polynomial is irreducible but x has order 51
        assert_eq!(generator_period(0x11B, 8), 51);
        // x^8 + 1 = (x + 1)^8
        assert_eq!(generator_period(0x101, 8), 8);
        assert_eq!(generator_period(0x100, 8), 0);
    }

    #[test]
    fn test_tables_doubling_invariant() {
        let tables = build_tables::<u8>(0x169).unwrap();
        assert_eq!(tables.exp.len(), 512);
        assert_eq!(tables.log.len(), 256);
        for i in 0..512 {
            assert_eq!(tables.exp[i], tables.exp[i % 255], "exp[{}]", i);
        }
        assert_eq!(tables.exp[0], 1);
        assert_eq!(tables.exp[1], 2);
        assert_eq!(tables.log[0], 255);
    }

    #[test]
    fn test_rejects_non_primitive() {
        let err = build_tables::<u8>(0x11B).err();
        assert_eq!(
            err,
            Some(FieldError::GeneratorNotPrimitive {
                generator: 0x11B,
                period: 51
            })
        );
        let err = build_tables::<u16>(0x169).err();
        assert_eq!(
            err,
            Some(FieldError::InvalidGenerator {
                generator: 0x169,
                bits: 16
            })
        );
    }
}
