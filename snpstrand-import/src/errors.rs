use snpstrand_core::FieldError;
use thiserror::Error;

/// Failures raised while assembling paged rows into submission records.
///
/// Every variant is fatal for the running import pass; there is no retry at
/// this level. Row Source failures pass through unmodified.
#[derive(Error, Debug)]
pub enum AssembleError {
    #[error("page size must be a positive number of rows")]
    InvalidPageSize,

    #[error(
        "sub-SNP {ss_id} arrived after sub-SNP {latest} had already been observed; \
         rows must arrive ordered ascending by ss_id"
    )]
    OutOfOrder { ss_id: i64, latest: i64 },

    #[error(transparent)]
    InvalidRow(#[from] FieldError),

    #[error(transparent)]
    Source(#[from] anyhow::Error),
}
