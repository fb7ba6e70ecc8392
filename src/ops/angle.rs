//! src/ops/angle.rs
//! Angle between two vectors.

use crate::config::STANDARD;
use crate::error::{GeometryError, Result};
use crate::operand::Operand;

use super::inner::inner_unchecked;
use super::vector_pair;

/// `arccos(a·b / (‖a‖‖b‖))` in radians.
///
/// A real cosine is clamped into `[-1, 1]` first so parallel vectors do not
/// fall off the domain through rounding. For a complex cosine the real part
/// of the complex arccosine is returned.
pub fn angle<'a>(a: impl Into<Operand<'a>>, b: impl Into<Operand<'a>>) -> Result<f64> {
    let (a, b) = vector_pair("angle", a.into(), b.into())?;
    let (na, nb) = (a.norm(), b.norm());
    if na.norm() < STANDARD.degenerate_norm || nb.norm() < STANDARD.degenerate_norm {
        return Err(GeometryError::degenerate("angle"));
    }

    let cos = inner_unchecked(a, b) / (na * nb);
    if cos.im.abs() < STANDARD.epsilon {
        Ok(cos.re.clamp(-1.0, 1.0).acos())
    } else {
        Ok(cos.acos().re)
    }
}
