#![forbid(unsafe_code)]
//! atlasq-session: the dataset loading boundary.
//!
//! A `Session` acquires the record sequence exactly once (CSV, JSONL, or
//! in-memory) and holds it immutable for its lifetime. Loading is the only
//! operation that touches an external resource; it fails fast with no
//! partial session.

pub mod reader;
pub mod session;

pub use reader::LoadOptions;
pub use session::Session;
