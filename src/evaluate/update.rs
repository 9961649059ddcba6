//! Incremental update of an evaluated block
//!
//! Replacing source `row` changes the result by
//! `matrix[row][new[k]] - matrix[row][old[k]]` at each position. Both
//! operations are XOR, so the update is O(len) regardless of source count.

use crate::{validate::check_lengths, FieldError, FieldSymbol, MulMatrix};

/// Swap the contribution of source `row` from `old_block` to `new_block`.
///
/// `result` must be the current output of an evaluation with this exact
/// `matrix` in which source `row` was `old_block`. A stale `result` is
/// numerically indistinguishable from a valid one and cannot be detected.
pub fn update<S: FieldSymbol>(
    matrix: &MulMatrix<S>,
    row: usize,
    result: &mut [S],
    old_block: &[S],
    new_block: &[S],
) -> Result<(), FieldError> {
    if row >= matrix.count() {
        return Err(FieldError::RowOutOfRange {
            row,
            count: matrix.count(),
        });
    }
    check_lengths([(row, old_block), (row, new_block)], result.len())?;

    let table = matrix.row_slice(row);
    for ((r, &old), &new) in result.iter_mut().zip(old_block).zip(new_block) {
        // Sub old block and add new block of data
        *r ^= table[old.to_index()] ^ table[new.to_index()];
    }
    Ok(())
}
