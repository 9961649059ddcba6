//! Multiplication tables
//!
//! Row `i`, column `x` of a [`MulMatrix`] holds `coefficient[i] * x`. Block
//! evaluation then needs one table lookup per source symbol and no
//! multiplication at all.

use std::fmt;

use crate::{validate::check_points, Field, FieldError, FieldSymbol};

impl<S: FieldSymbol> Field<S> {
    /// Lookup row for multiplying by `coefficient`: `row[x] = coefficient * x`
    pub fn mul_row(&self, coefficient: S) -> Vec<S> {
        let mut row = vec![S::default(); self.size()];
        self.fill_mul_row(coefficient, &mut row);
        row
    }

    /// Fill `row` in place with `coefficient * x` for every symbol `x`
    ///
    /// # Panics
    ///
    /// Panics unless `row` has exactly one slot per field element.
    pub fn fill_mul_row(&self, coefficient: S, row: &mut [S]) {
        assert_eq!(row.len(), self.size(), "multiplication row must cover every symbol");

        // log(0) is undefined, zero absorbs
        row[0] = S::default();
        if coefficient == S::default() {
            row.fill(S::default());
            return;
        }

        let log_c = self.log_index(coefficient);
        for (x, slot) in row.iter_mut().enumerate().skip(1) {
            *slot = self.exp_index(log_c + self.log_index(S::from_index(x)));
        }
    }
}

/// `count` multiplication rows, one per known point
///
/// Immutable once built. Reuse it for every block evaluated against the same
/// (points, wanted) pair.
#[derive(Clone, PartialEq, Eq)]
pub struct MulMatrix<S: FieldSymbol> {
    /// Row-major, `count * S::SIZE` symbols
    table: Box<[S]>,
    count: usize,
    points: Vec<S>,
    wanted: Option<S>,
}

impl<S: FieldSymbol> MulMatrix<S> {
    /// Matrix mapping values at `points` to the value at `wanted`
    ///
    /// Solves the Lagrange coefficients once and expands one row per point.
    pub fn build(field: &Field<S>, points: &[S], wanted: S) -> Result<Self, FieldError> {
        check_points(points, wanted)?;
        let coefficients = field.coefficients_unchecked(points, wanted);

        let mut matrix = Self::assemble(field, &coefficients);
        matrix.points = points.to_vec();
        matrix.wanted = Some(wanted);

        tracing::debug!(
            count = matrix.count,
            wanted = wanted.to_index(),
            bits = S::BITS,
            "built multiplication matrix"
        );
        Ok(matrix)
    }

    /// Matrix for an explicit coefficient vector
    ///
    /// The result is not tied to any (points, wanted) pair.
    pub fn from_coefficients(field: &Field<S>, coefficients: &[S]) -> Result<Self, FieldError> {
        if coefficients.is_empty() {
            return Err(FieldError::EmptyPoints);
        }
        Ok(Self::assemble(field, coefficients))
    }

    fn assemble(field: &Field<S>, coefficients: &[S]) -> Self {
        let size = field.size();
        let mut table = vec![S::default(); coefficients.len() * size].into_boxed_slice();
        for (row, &coefficient) in table.chunks_exact_mut(size).zip(coefficients) {
            field.fill_mul_row(coefficient, row);
        }
        Self {
            table,
            count: coefficients.len(),
            points: Vec::new(),
            wanted: None,
        }
    }

    /// Number of rows (source blocks consumed per evaluation)
    pub fn count(&self) -> usize {
        self.count
    }

    /// Columns per row
    pub fn field_size(&self) -> usize {
        S::SIZE
    }

    /// Row `i`
    ///
    /// # Panics
    ///
    /// Panics if `i >= count()`.
    pub fn row(&self, i: usize) -> MulRow<'_, S> {
        MulRow(self.row_slice(i))
    }

    /// Row `i`, or `None` past the end
    pub fn get_row(&self, i: usize) -> Option<MulRow<'_, S>> {
        (i < self.count).then(|| self.row(i))
    }

    /// Coefficient behind row `i` (`row[1]`)
    ///
    /// # Panics
    ///
    /// Panics if `i >= count()`.
    pub fn coefficient(&self, i: usize) -> S {
        self.row_slice(i)[1]
    }

    /// All coefficients, in row order
    pub fn coefficients(&self) -> Vec<S> {
        (0..self.count).map(|i| self.coefficient(i)).collect()
    }

    /// Known points this matrix was built for (empty for explicit coefficients)
    pub fn points(&self) -> &[S] {
        &self.points
    }

    /// Wanted point this matrix was built for
    pub fn wanted(&self) -> Option<S> {
        self.wanted
    }

    /// Whether this matrix can be reused for `(points, wanted)`
    pub fn is_for(&self, points: &[S], wanted: S) -> bool {
        self.wanted == Some(wanted) && self.points == points
    }

    #[inline(always)]
    pub(crate) fn row_slice(&self, i: usize) -> &[S] {
        &self.table[i * S::SIZE..(i + 1) * S::SIZE]
    }
}

impl<S: FieldSymbol> fmt::Debug for MulMatrix<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MulMatrix")
            .field("count", &self.count)
            .field("field_size", &S::SIZE)
            .field("points", &self.points)
            .field("wanted", &self.wanted)
            .finish()
    }
}

/// Borrowed multiplication row
#[derive(Clone, Copy)]
pub struct MulRow<'a, S>(&'a [S]);

impl<'a, S: FieldSymbol> MulRow<'a, S> {
    /// `coefficient * x`
    #[inline(always)]
    pub fn apply(&self, x: S) -> S {
        self.0[x.to_index()]
    }

    /// Coefficient this row multiplies by
    pub fn coefficient(&self) -> S {
        self.0[1]
    }

    /// Full lookup table
    pub fn as_slice(&self) -> &'a [S] {
        self.0
    }
}

impl<S: FieldSymbol> fmt::Debug for MulRow<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MulRow")
            .field("coefficient", &self.coefficient())
            .finish_non_exhaustive()
    }
}
