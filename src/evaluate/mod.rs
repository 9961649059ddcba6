//! Block evaluation
//!
//! `result[k] = Σ matrix[i][sources[i][k]]` for every position `k`.
//!
//! With a matrix built for (data points, parity point) this encodes a parity
//! block; with one built for (surviving points, lost point) it rebuilds the
//! lost block. Positions are independent, so the work splits freely across
//! threads (see [`evaluate_parallel`]).

mod parallel;
mod update;

pub use parallel::{evaluate_parallel, evaluate_range, partition};
pub use update::update;

use crate::{validate::check_sources, FieldError, FieldSymbol, MulMatrix};

/// Positions handled per iteration by [`evaluate_unrolled`]
pub const UNROLL: usize = 8;

/// Evaluate `matrix` over `sources` into `result`.
///
/// Needs one source per matrix row, each as long as `result`. `result` is
/// fully overwritten.
pub fn evaluate<S: FieldSymbol>(
    matrix: &MulMatrix<S>,
    sources: &[&[S]],
    result: &mut [S],
) -> Result<(), FieldError> {
    check_sources(matrix.count(), sources, result.len())?;
    accumulate(matrix, sources, 0, result);
    Ok(())
}

/// Evaluate into a freshly allocated block.
///
/// The length is taken from the first source.
pub fn evaluate_to_vec<S: FieldSymbol>(
    matrix: &MulMatrix<S>,
    sources: &[&[S]],
) -> Result<Vec<S>, FieldError> {
    let len = sources.first().map_or(0, |source| source.len());
    let mut result = vec![S::default(); len];
    evaluate(matrix, sources, &mut result)?;
    Ok(result)
}

/// Same output as [`evaluate`], `UNROLL` positions per iteration.
///
/// `result.len()` must be a multiple of [`UNROLL`].
pub fn evaluate_unrolled<S: FieldSymbol>(
    matrix: &MulMatrix<S>,
    sources: &[&[S]],
    result: &mut [S],
) -> Result<(), FieldError> {
    check_sources(matrix.count(), sources, result.len())?;
    if result.len() % UNROLL != 0 {
        return Err(FieldError::UnalignedLength {
            len: result.len(),
            group: UNROLL,
        });
    }

    // Initialize with first block of data
    let row = matrix.row_slice(0);
    for (out, data) in result
        .chunks_exact_mut(UNROLL)
        .zip(sources[0].chunks_exact(UNROLL))
    {
        out[0] = row[data[0].to_index()];
        out[1] = row[data[1].to_index()];
        out[2] = row[data[2].to_index()];
        out[3] = row[data[3].to_index()];
        out[4] = row[data[4].to_index()];
        out[5] = row[data[5].to_index()];
        out[6] = row[data[6].to_index()];
        out[7] = row[data[7].to_index()];
    }

    // Add other blocks of data
    for (i, source) in sources.iter().enumerate().skip(1) {
        let row = matrix.row_slice(i);
        for (out, data) in result
            .chunks_exact_mut(UNROLL)
            .zip(source.chunks_exact(UNROLL))
        {
            out[0] ^= row[data[0].to_index()];
            out[1] ^= row[data[1].to_index()];
            out[2] ^= row[data[2].to_index()];
            out[3] ^= row[data[3].to_index()];
            out[4] ^= row[data[4].to_index()];
            out[5] ^= row[data[5].to_index()];
            out[6] ^= row[data[6].to_index()];
            out[7] ^= row[data[7].to_index()];
        }
    }
    Ok(())
}

/// Scalar kernel over positions `offset..offset + out.len()`.
///
/// Source 0 initializes, the rest XOR-accumulate. Bounds already checked.
pub(crate) fn accumulate<S: FieldSymbol>(
    matrix: &MulMatrix<S>,
    sources: &[&[S]],
    offset: usize,
    out: &mut [S],
) {
    let end = offset + out.len();

    let row = matrix.row_slice(0);
    for (r, &x) in out.iter_mut().zip(&sources[0][offset..end]) {
        *r = row[x.to_index()];
    }

    for (i, source) in sources.iter().enumerate().skip(1) {
        let row = matrix.row_slice(i);
        for (r, &x) in out.iter_mut().zip(&source[offset..end]) {
            *r ^= row[x.to_index()];
        }
    }
}
