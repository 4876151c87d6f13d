// Allow pre-existing clippy lints across the codebase
#![allow(clippy::len_without_is_empty, clippy::doc_lazy_continuation)]

//! Sort tab-separated records by selected columns and tabulate the
//! number of records per distinct pair of the first two sort columns.
//!
//! The pipeline runs in strict sequence: [`field`] lexes the input,
//! [`table`] stores fixed-arity records, [`sort`] orders them in place,
//! [`tabulate`] groups them, and [`render`] prints each stage.

/// Use mimalloc as the global allocator for all binaries.
/// Records are many small Vec<u8> fields, which mimalloc handles well.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

pub mod common;
pub mod error;
pub mod field;
pub mod pipeline;
pub mod render;
pub mod sort;
pub mod table;
pub mod tabulate;
