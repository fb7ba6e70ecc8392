//! Vector algebra: inner product, generalized cross product, angle.

pub mod angle;
pub mod cross;
pub mod inner;

pub use angle::angle;
pub use cross::{cross, cross_supported, CROSS_TABLE};
pub use inner::inner;

use crate::error::{GeometryError, Result};
use crate::operand::Operand;
use crate::vector::Vector;

/// Both operands must be vectors with equal signatures.
pub(crate) fn vector_pair<'a>(
    operation: &'static str,
    a: Operand<'a>,
    b: Operand<'a>,
) -> Result<(&'a Vector, &'a Vector)> {
    match (a.as_vector(), b.as_vector()) {
        (Some(va), Some(vb)) => {
            if va.signature().compatible(vb.signature()) {
                Ok((va, vb))
            } else {
                Err(GeometryError::shape(va.type_name(), vb.type_name()))
            }
        }
        _ => Err(GeometryError::capability(operation, a.type_name(), b.type_name())),
    }
}
