use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

use crate::errors::FieldError;

/// Strand orientation of one coordinate system relative to another.
///
/// The legacy schema stores every orientation as a +1/-1 integer code. The
/// code is decoded exactly once, at the input boundary; from there on strand
/// resolution composes orientations with plain boolean algebra over
/// [`Orientation::is_reverse`], never with sign arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Forward,
    Reverse,
}

impl Orientation {
    /// Decode a legacy +1/-1 orientation code.
    pub fn from_code(code: i32) -> Result<Self, FieldError> {
        match code {
            1 => Ok(Orientation::Forward),
            -1 => Ok(Orientation::Reverse),
            other => Err(FieldError::InvalidOrientationCode(other)),
        }
    }

    pub fn is_reverse(self) -> bool {
        matches!(self, Orientation::Reverse)
    }
}

impl Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Forward => write!(f, "forward"),
            Orientation::Reverse => write!(f, "reverse"),
        }
    }
}

impl FromStr for Orientation {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "forward" => Ok(Orientation::Forward),
            "reverse" => Ok(Orientation::Reverse),
            _ => Err(()),
        }
    }
}
