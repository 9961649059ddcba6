//! Data-parallel evaluation
//!
//! Reads go through the read-only matrix and source blocks; each worker
//! writes a disjoint output range. Nothing is shared mutably, so no locks.

use std::ops::Range;

use rayon::prelude::*;

use super::{accumulate, UNROLL};
use crate::{validate::check_sources, FieldError, FieldSymbol, MulMatrix};

/// Split `0..len` into at most `parts` contiguous ranges.
///
/// Every range except the last starts and ends on a multiple of [`UNROLL`],
/// so each one can be fed to an unrolled kernel.
pub fn partition(len: usize, parts: usize) -> Vec<Range<usize>> {
    if len == 0 {
        return Vec::new();
    }
    let groups = len.div_ceil(UNROLL);
    let step = groups.div_ceil(parts.max(1)) * UNROLL;
    (0..len)
        .step_by(step)
        .map(|start| start..(start + step).min(len))
        .collect()
}

/// Evaluate positions `start..start + out.len()` into `out`.
///
/// Lets callers drive their own workers over the ranges from [`partition`].
pub fn evaluate_range<S: FieldSymbol>(
    matrix: &MulMatrix<S>,
    sources: &[&[S]],
    start: usize,
    out: &mut [S],
) -> Result<(), FieldError> {
    let len = sources.first().map_or(0, |source| source.len());
    check_sources(matrix.count(), sources, len)?;

    start
        .checked_add(out.len())
        .filter(|&end| end <= len)
        .ok_or(FieldError::RangeOutOfBounds {
            start,
            end: start.saturating_add(out.len()),
            len,
        })?;
    accumulate(matrix, sources, start, out);
    Ok(())
}

/// [`evaluate`](super::evaluate) across the rayon pool, `chunk_len`
/// positions per task.
pub fn evaluate_parallel<S: FieldSymbol>(
    matrix: &MulMatrix<S>,
    sources: &[&[S]],
    result: &mut [S],
    chunk_len: usize,
) -> Result<(), FieldError> {
    check_sources(matrix.count(), sources, result.len())?;

    let chunk_len = chunk_len.max(1);
    tracing::trace!(
        len = result.len(),
        chunk_len,
        count = matrix.count(),
        "parallel evaluation"
    );
    result
        .par_chunks_mut(chunk_len)
        .enumerate()
        .for_each(|(n, out)| accumulate(matrix, sources, n * chunk_len, out));
    Ok(())
}
