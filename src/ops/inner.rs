//! src/ops/inner.rs
//! Bilinear inner product `Σ a_i·b_i`, without complex conjugation.

use crate::error::Result;
use crate::operand::Operand;
use crate::types::Scalar;
use crate::vector::Vector;

use super::vector_pair;

/// Inner product of two same-shape vectors.
pub fn inner<'a>(a: impl Into<Operand<'a>>, b: impl Into<Operand<'a>>) -> Result<Scalar> {
    let (a, b) = vector_pair("inner product", a.into(), b.into())?;
    Ok(inner_unchecked(a, b))
}

/// Caller guarantees equal signatures.
#[inline]
pub(crate) fn inner_unchecked(a: &Vector, b: &Vector) -> Scalar {
    a.iter()
        .zip(b.iter())
        .fold(Scalar::new(0.0, 0.0), |acc, (x, y)| acc + x * y)
}
