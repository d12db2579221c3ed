use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Identifiers issued by external collaborators (e.g. the token subject).
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Natural key of a villa number.
///
/// Always strictly positive. Path and body inputs are parsed with
/// [`VillaNo::new`], which yields `None` for zero or negative values, so a
/// missing key is represented explicitly rather than by a sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct VillaNo(i32);

impl VillaNo {
    pub fn new(value: i32) -> Option<Self> {
        (value > 0).then_some(Self(value))
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for VillaNo {
    type Error = CoreError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| {
            CoreError::Validation(format!("villa number must be positive, got {value}"))
        })
    }
}

impl From<VillaNo> for i32 {
    fn from(number: VillaNo) -> Self {
        number.0
    }
}

impl From<VillaNo> for DbId {
    fn from(number: VillaNo) -> Self {
        DbId::from(number.0)
    }
}

impl fmt::Display for VillaNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
