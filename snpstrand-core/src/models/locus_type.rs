use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Classification of a variant locus in the legacy schema.
///
/// Decoded from the `loc_type` column: 2 marks an exact substitution, 1 an
/// insertion (the submitted sequence has extra bases), 3 a deletion. Every
/// other code is carried as [`LocusType::Other`] so unusual rows still
/// assemble; the placeholder handling in the allele engine does not depend
/// on the code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocusType {
    Substitution,
    Insertion,
    Deletion,
    Other,
}

impl LocusType {
    pub fn from_code(code: i32) -> Self {
        match code {
            2 => LocusType::Substitution,
            1 => LocusType::Insertion,
            3 => LocusType::Deletion,
            _ => LocusType::Other,
        }
    }
}

impl Display for LocusType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocusType::Substitution => write!(f, "substitution"),
            LocusType::Insertion => write!(f, "insertion"),
            LocusType::Deletion => write!(f, "deletion"),
            LocusType::Other => write!(f, "other"),
        }
    }
}
