use thiserror::Error;

use crate::schema::FieldRef;

/// Canonical result for the engine.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// An unknown field name was referenced. Programmer error; never
    /// recovered internally.
    #[error("unknown field: {0}")]
    InvalidField(String),

    /// Ordering was requested on a field with absent values among the
    /// candidates. Callers are expected to filter with `NotNull` first.
    #[error("cannot order on '{0}': absent values present (filter with NotNull first)")]
    UnorderableValue(FieldRef),

    /// A predicate or aggregate was applied with an operand of the wrong
    /// type for the field.
    #[error("invalid operand for '{field}': {detail}")]
    InvalidOperand { field: FieldRef, detail: String },

    // The core crate does not do I/O; the session layer maps its read and
    // parse failures into this variant.
    #[error("load error: {0}")]
    Load(String),
}
