use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

use crate::errors::FieldError;

/// One interval on a named sequence (a contig or a chromosome).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Region {
    pub name: String,
    pub start: u64,
    pub end: u64,
}

impl Region {
    /// Build a region from signed legacy coordinates.
    pub fn new(name: impl Into<String>, start: i64, end: i64) -> Result<Self, FieldError> {
        Ok(Region {
            name: name.into(),
            start: coordinate(start)?,
            end: coordinate(end)?,
        })
    }

    /// Build a region from nullable legacy columns.
    ///
    /// Chromosome coordinates exist only when the contig is mapped to a
    /// chromosome; a missing name (or missing coordinates) collapses the
    /// whole region to absent. Coordinates that are present must still be
    /// non-negative.
    pub fn from_nullable(
        name: Option<String>,
        start: Option<i64>,
        end: Option<i64>,
    ) -> Result<Option<Self>, FieldError> {
        let (Some(name), Some(start), Some(end)) = (name, start, end) else {
            return Ok(None);
        };
        Region::new(name, start, end).map(Some)
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}-{}", self.name, self.start, self.end)
    }
}

/// Check and widen one signed legacy coordinate.
pub(crate) fn coordinate(value: i64) -> Result<u64, FieldError> {
    u64::try_from(value).map_err(|_| FieldError::InvalidCoordinate(value))
}
