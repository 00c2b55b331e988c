//! # Forward-strand normalization for dbSNP submission records
//!
//! This crate holds the data model for one submitted variant (a sub-SNP) and
//! the string machinery needed to express its alleles on the forward strand
//! of the reference assembly, regardless of the strand the submitter reported
//! against.
//!
//! The legacy schema tracks three independent orientations per submission
//! (submission-to-SNP, SNP-to-contig, contig-to-chromosome) plus one more per
//! HGVS annotation. All of them are decoded from their +1/-1 integer codes at
//! the input boundary into [`Orientation`], and strand resolution is plain
//! boolean algebra from there on.
//!
//! # Example
//!
//! ```
//! use snpstrand_core::alleles;
//!
//! let tokens = alleles::split_alleles("T /A/-");
//! assert_eq!(tokens, vec!["T", "A", ""]);
//! assert_eq!(alleles::reverse_complement("CCCT"), "AGGG");
//! ```

pub mod alleles;
pub mod errors;
pub mod models;

// re-exports
pub use errors::{FieldError, UndefinedHgvsAlleleError};
pub use models::{HgvsAnchor, HgvsAnnotation, LocusType, Orientation, Region, SubSnpRecord};
