use thiserror::Error;

/// Rejections raised while decoding legacy column values into model types.
///
/// Both variants are fatal at record construction: a row carrying a negative
/// coordinate or an unknown orientation code poisons the whole import pass.
#[derive(Error, Debug)]
pub enum FieldError {
    #[error("coordinates must be non-negative numbers, got {0}")]
    InvalidCoordinate(i64),

    #[error("orientation code must be 1 or -1, got {0}")]
    InvalidOrientationCode(i32),
}

/// Raised when reference/alternate resolution has no HGVS annotation to
/// anchor the strand.
///
/// Per-call only: the record itself stays valid and still answers
/// allele-list queries.
#[derive(Error, Debug)]
#[error("sub-SNP {ss_id} has no HGVS annotation to anchor reference/alternate resolution")]
pub struct UndefinedHgvsAlleleError {
    pub ss_id: i64,
}
