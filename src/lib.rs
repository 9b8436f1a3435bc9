#![forbid(unsafe_code)]
//! atlasq: facade over the workspace crates.
//!
//! Pulls the record schema, query pipeline, aggregation, and session
//! boundary into one importable surface.

pub use atlasq_core::{error, record, schema};
pub use atlasq_core::{DataType, Error, FieldRef, Record, Result, Value};
pub use atlasq_query::{aggregate, predicate, query};
pub use atlasq_query::{CmpOp, Direction, Predicate, Query};
pub use atlasq_session::{LoadOptions, Session};
