#![forbid(unsafe_code)]
//! atlasq-core: record schema, scalar values, and errors.
//!
//! Pure data, no I/O. Loading lives in `atlasq-session`, evaluation in
//! `atlasq-query`.

pub mod error;
pub mod prelude;
pub mod record;
pub mod schema;

pub use error::{Error, Result};
pub use record::{Record, Value};
pub use schema::{DataType, FieldRef};
