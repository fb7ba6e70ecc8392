//! Error types for geometry operations.

use thiserror::Error;

/// Everything that can go wrong when building or combining geometry objects.
///
/// Type names in messages are the caller-facing ones (`"3D Vector"`), never
/// those of an internal representation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// Two objects with different signatures were combined.
    #[error(
        "signature mismatch between {left} and {right}: the objects differ in dimension or in \
         axis names, and operations across coordinate systems are not allowed"
    )]
    ShapeMismatch {
        /// Type name of the left operand.
        left: String,
        /// Type name of the right operand.
        right: String,
    },

    /// An operand lacks the capability an operation requires.
    #[error("{operation} is not defined for types {left} and {right}")]
    CapabilityMismatch {
        /// The attempted operation.
        operation: &'static str,
        /// Type name of the left operand.
        left: String,
        /// Type name of the right operand.
        right: String,
    },

    /// The combination has no mathematical meaning.
    #[error("{operation} is undefined: {reason}")]
    UndefinedOperation {
        /// The attempted operation.
        operation: &'static str,
        /// What is wrong, and what to use instead where an alternative exists.
        reason: String,
    },

    /// A zero-norm vector was used where a non-zero norm is required.
    #[error("{operation} requires a vector with non-zero magnitude")]
    DegenerateInput {
        /// The attempted operation.
        operation: &'static str,
    },

    /// A positional index beyond the dimension.
    #[error("index {index} out of range for dimension {dimension}")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Dimension of the object.
        dimension: usize,
    },

    /// No axis with this name exists.
    #[error("no axis named `{name}`")]
    UnknownAxis {
        /// The requested name.
        name: String,
    },

    /// The same axis name was declared twice.
    #[error("axis `{name}` declared more than once")]
    DuplicateAxis {
        /// The repeated name.
        name: String,
    },

    /// A positional coordinate followed a named one.
    #[error("positional coordinate at slot {index} follows a named axis; named axes must come last")]
    PositionalAfterNamed {
        /// Slot the positional value would have taken.
        index: usize,
    },
}

/// Result alias for geometry operations.
pub type Result<T> = std::result::Result<T, GeometryError>;

impl GeometryError {
    pub(crate) fn shape(left: impl Into<String>, right: impl Into<String>) -> Self {
        let err = Self::ShapeMismatch {
            left: left.into(),
            right: right.into(),
        };
        tracing::debug!(error = %err, "rejected shape mismatch");
        err
    }

    pub(crate) fn capability(
        operation: &'static str,
        left: impl Into<String>,
        right: impl Into<String>,
    ) -> Self {
        let err = Self::CapabilityMismatch {
            operation,
            left: left.into(),
            right: right.into(),
        };
        tracing::debug!(error = %err, "rejected operand");
        err
    }

    pub(crate) fn undefined(operation: &'static str, reason: impl Into<String>) -> Self {
        let err = Self::UndefinedOperation {
            operation,
            reason: reason.into(),
        };
        tracing::debug!(error = %err, "rejected undefined operation");
        err
    }

    pub(crate) fn degenerate(operation: &'static str) -> Self {
        tracing::debug!(operation, "rejected zero-norm input");
        Self::DegenerateInput { operation }
    }
}
