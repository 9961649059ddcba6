//! Coefficient solver
//!
//! ```text
//!       (w  - x0) (w  - x1) ... (w  - xn)
//! ci = -----------------------------------
//!       (xi - x0) (xi - x1) ... (xi - xn)
//! ```
//!
//! The numerator keeps the `(w - xi)` factor so it can be shared by every
//! coefficient. The denominator cancels it by using `(xi - w)` in place of
//! the `j == i` term. Both products are summed in log space.

use crate::{validate::check_points, Field, FieldError, FieldSymbol};

impl<S: FieldSymbol> Field<S> {
    /// Lagrange coefficients for recovering the value at `wanted` from values
    /// at `points`.
    ///
    /// `points` must be non-empty and pairwise distinct, and must not
    /// contain `wanted`.
    pub fn lagrange_coefficients(&self, points: &[S], wanted: S) -> Result<Vec<S>, FieldError> {
        check_points(points, wanted)?;
        Ok(self.coefficients_unchecked(points, wanted))
    }

    /// Solver body; preconditions already checked
    pub(crate) fn coefficients_unchecked(&self, points: &[S], wanted: S) -> Vec<S> {
        let q = S::wide(self.order());

        let numer = points
            .iter()
            .fold(S::Wide::default(), |acc, &xj| {
                acc + S::wide(self.log_index(xj ^ wanted))
            })
            % q;

        points
            .iter()
            .enumerate()
            .map(|(i, &xi)| {
                let denom = points
                    .iter()
                    .enumerate()
                    .fold(S::Wide::default(), |acc, (j, &xj)| {
                        let xj = if i == j { wanted } else { xj };
                        acc + S::wide(self.log_index(xi ^ xj))
                    })
                    % q;
                // denom < q, so the biased difference cannot underflow
                let log = (q + q + numer - denom) % q;
                self.exp_index(S::wide_index(log))
            })
            .collect()
    }

    /// Value at `wanted` of the polynomial through `(points[i], values[i])`
    pub fn interpolate(&self, points: &[S], values: &[S], wanted: S) -> Result<S, FieldError> {
        if values.len() != points.len() {
            return Err(FieldError::SourceCountMismatch {
                expected: points.len(),
                found: values.len(),
            });
        }
        let coefficients = self.lagrange_coefficients(points, wanted)?;
        Ok(coefficients
            .iter()
            .zip(values)
            .fold(S::default(), |acc, (&c, &y)| acc ^ self.mul(c, y)))
    }
}
