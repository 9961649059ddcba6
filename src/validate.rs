//! Precondition checks
//!
//! Interpolation over repeated points divides by zero in log space and
//! mismatched blocks read past the shortest one. Both would corrupt parity
//! silently, so they are rejected up front.

use bitvec::prelude::*;

use crate::{FieldError, FieldSymbol};

/// Known points must be non-empty, pairwise distinct, and exclude `wanted`.
///
/// One bit per field element; O(count) with no hashing.
pub(crate) fn check_points<S: FieldSymbol>(points: &[S], wanted: S) -> Result<(), FieldError> {
    if points.is_empty() {
        return Err(FieldError::EmptyPoints);
    }

    let mut seen = bitvec![0; S::SIZE];
    for &point in points {
        if seen.replace(point.to_index(), true) {
            return Err(FieldError::DuplicatePoint {
                point: point.to_index() as u32,
            });
        }
    }
    if seen[wanted.to_index()] {
        return Err(FieldError::WantedIsKnownPoint {
            point: wanted.to_index() as u32,
        });
    }
    Ok(())
}

/// One source per matrix row, each exactly `len` symbols long.
pub(crate) fn check_sources<S>(count: usize, sources: &[&[S]], len: usize) -> Result<(), FieldError> {
    if sources.len() != count {
        return Err(FieldError::SourceCountMismatch {
            expected: count,
            found: sources.len(),
        });
    }
    check_lengths(sources.iter().copied().enumerate(), len)
}

/// Every `(index, block)` pair must be exactly `len` symbols long.
pub(crate) fn check_lengths<'a, S: 'a>(
    blocks: impl IntoIterator<Item = (usize, &'a [S])>,
    len: usize,
) -> Result<(), FieldError> {
    for (index, block) in blocks {
        if block.len() != len {
            return Err(FieldError::LengthMismatch {
                index,
                expected: len,
                found: block.len(),
            });
        }
    }
    Ok(())
}
