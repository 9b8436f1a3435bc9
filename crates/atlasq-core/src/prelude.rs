//! Convenient re-exports for downstream crates.

pub use crate::error::{Error, Result};
pub use crate::record::{Record, Value};
pub use crate::schema::{DataType, FieldRef};
