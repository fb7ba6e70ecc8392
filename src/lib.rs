#![doc = include_str!("../README.md")]

#[macro_use]
mod macros;

pub mod axes;
pub mod config;
pub mod coords;
pub mod error;
pub mod format;
pub mod operand;
pub mod ops;
pub mod point;
pub mod signature;
pub mod types;
pub mod vector;

pub use axes::AxisMap;
pub use config::Tolerance;
pub use coords::Coordinates;
pub use error::{GeometryError, Result};
pub use format::Rounded;
pub use operand::{BinaryOp, Operand};
pub use ops::{angle, cross, inner};
pub use point::{Point, PointBuilder};
pub use signature::{signature_of, Signature};
pub use types::{IntoScalar, Scalar};
pub use vector::{Vector, VectorBuilder};
