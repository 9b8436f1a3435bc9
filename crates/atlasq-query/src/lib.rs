#![forbid(unsafe_code)]
//! atlasq-query: predicate evaluation, query pipelines, and aggregation.
//!
//! Design intent:
//! - Everything here is pure and synchronous: a `Query` is a value, each
//!   builder step returns a new value, and materialization never caches.
//! - Nullable fields must be excluded with `Predicate::NotNull` before
//!   they can be ordered or compared; the evaluator excludes, it does not
//!   guess.

pub mod aggregate;
pub mod predicate;
pub mod query;

pub use aggregate::{cmp_nullable, extreme_by, sum};
pub use predicate::{CmpOp, Predicate};
pub use query::{Direction, Query};
