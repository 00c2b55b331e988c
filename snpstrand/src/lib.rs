//! Facade over the snpstrand member crates.
//!
//! Enable the `core` feature for the data model and forward-strand
//! resolution, and `import` for the paged grouping assembler. Both are on by
//! default.

#[cfg(feature = "core")]
#[doc(inline)]
pub use snpstrand_core as core;

#[cfg(feature = "import")]
#[doc(inline)]
pub use snpstrand_import as import;
