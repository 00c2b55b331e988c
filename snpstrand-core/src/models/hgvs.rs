use serde::{Deserialize, Serialize};

use crate::errors::FieldError;
use crate::models::Orientation;
use crate::models::region::coordinate;

/// One HGVS-derived annotation of a submitted variant.
///
/// The legacy schema carries up to two of these per sub-SNP: one mapping the
/// variant to a chromosome and one to a contig. Only the orientation,
/// coordinates, and reference allele are consumed here; the HGVS string
/// itself is kept verbatim, never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HgvsAnnotation {
    pub reference: String,
    pub hgvs_string: String,
    pub start: u64,
    pub stop: Option<u64>,
    pub orientation: Orientation,
}

impl HgvsAnnotation {
    /// Collapse the nullable columns of one HGVS bundle.
    ///
    /// A bundle is present only when reference, HGVS string, and start are
    /// all non-null; anything less collapses to a fully absent annotation.
    /// The stop column may be null on its own.
    pub fn from_columns(
        reference: Option<String>,
        hgvs_string: Option<String>,
        start: Option<i64>,
        stop: Option<i64>,
        orientation: Orientation,
    ) -> Result<Option<Self>, FieldError> {
        let (Some(reference), Some(hgvs_string), Some(start)) = (reference, hgvs_string, start)
        else {
            return Ok(None);
        };
        Ok(Some(HgvsAnnotation {
            reference,
            hgvs_string,
            start: coordinate(start)?,
            stop: stop.map(coordinate).transpose()?,
            orientation,
        }))
    }
}
