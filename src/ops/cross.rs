//! src/ops/cross.rs
//!
//! Generalized cross product, driven by a fixed structure-constant table.
//!
//! Entry `(i, j)` of the table is `(sign, k)` with `e_i × e_j = sign·e_k`.
//! The 7×7 table is one octonion-derived choice; its top-left 3×3 block is
//! the usual quaternion-derived 3-D product.

use crate::error::{GeometryError, Result};
use crate::operand::Operand;
use crate::vector::Vector;

use super::vector_pair;

/// Structure constants for the 7-D cross product.
#[rustfmt::skip]
pub const CROSS_TABLE: [[(i8, usize); 7]; 7] = [
    [( 0, 0), ( 1, 2), (-1, 1), ( 1, 4), (-1, 3), (-1, 6), ( 1, 5)],
    [(-1, 2), ( 0, 1), ( 1, 0), ( 1, 5), ( 1, 6), (-1, 3), (-1, 4)],
    [( 1, 1), (-1, 0), ( 0, 2), ( 1, 6), (-1, 5), ( 1, 4), (-1, 3)],
    [(-1, 4), (-1, 5), (-1, 6), ( 0, 3), ( 1, 0), ( 1, 1), ( 1, 2)],
    [( 1, 3), (-1, 6), ( 1, 5), (-1, 0), ( 0, 4), (-1, 2), ( 1, 1)],
    [( 1, 6), ( 1, 3), (-1, 4), (-1, 1), ( 1, 2), ( 0, 5), (-1, 0)],
    [(-1, 5), ( 1, 4), ( 1, 3), (-1, 2), (-1, 1), ( 1, 0), ( 0, 6)],
];

/// Vector-valued, anticommutative, orthogonal bilinear products exist only
/// in 3 and 7 dimensions.
#[inline]
pub fn cross_supported(dimension: usize) -> bool {
    matches!(dimension, 3 | 7)
}

/// `a × b` for same-shape 3-D or 7-D vectors.
pub fn cross<'a>(a: impl Into<Operand<'a>>, b: impl Into<Operand<'a>>) -> Result<Vector> {
    let (a, b) = vector_pair("cross product", a.into(), b.into())?;
    let n = a.dimension();
    if !cross_supported(n) {
        return Err(GeometryError::undefined(
            "cross product",
            format!(
                "not defined for vectors with dimensionality {n}; non-trivial bilinear products \
                 of two vectors that are vector-valued, anticommutative and orthogonal exist \
                 only in 3 and 7 dimensions"
            ),
        ));
    }
    tracing::trace!(dimension = n, "cross product");

    let xa = a.coords().as_slice();
    let xb = b.coords().as_slice();
    let mut out = a.zeros_like();
    let acc = out.coords_mut();
    for (i, row) in CROSS_TABLE.iter().enumerate().take(n) {
        for (j, &(sign, k)) in row.iter().enumerate().take(n) {
            if sign == 0 {
                continue;
            }
            acc.accumulate(k, xa[i] * xb[j] * f64::from(sign));
        }
    }
    Ok(out)
}
