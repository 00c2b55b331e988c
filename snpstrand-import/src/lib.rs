//! Paged assembly of legacy dbSNP submission rows.
//!
//! The legacy schema joins one submission (sub-SNP) against its annotations,
//! so a submission spans one row per annotation and a result page can cut a
//! submission in half. This crate pulls pages from a [`RowSource`], merges
//! rows sharing a submission id across page boundaries, and yields one
//! immutable [`snpstrand_core::SubSnpRecord`] per id, ready for
//! forward-strand resolution.
//!
//! The assembler is single-pass and pull-based: nothing is read ahead beyond
//! the current page, and an empty page always means the result set is done.

pub mod assembler;
pub mod config;
pub mod errors;
pub mod process;
pub mod row;
pub mod source;

// re-exports
pub use assembler::SubSnpAssembler;
pub use config::ImportConfig;
pub use errors::AssembleError;
pub use row::SubSnpRow;
pub use source::{RowSource, VecRowSource};
