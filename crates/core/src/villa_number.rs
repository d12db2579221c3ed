//! Villa number entity, lookup filters, and request/response DTOs.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::repository::{Entity, Predicate};
use crate::types::{Timestamp, VillaNo};

/// Maximum length of the free-text `specialDetails` field.
pub const MAX_SPECIAL_DETAILS_LEN: u64 = 500;

/// A numbered lodging unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VillaNumber {
    pub number: VillaNo,
    pub special_details: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl VillaNumber {
    /// Build a not-yet-persisted entity. Storage overwrites the timestamps.
    pub fn new(number: VillaNo, special_details: Option<String>) -> Self {
        let now = chrono::Utc::now();
        Self {
            number,
            special_details,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Entity for VillaNumber {
    type Key = VillaNo;
    type Filter = VillaNumberFilter;

    const NAME: &'static str = "VillaNumber";

    fn key(&self) -> VillaNo {
        self.number
    }

    fn stamp_created(&mut self, now: Timestamp) {
        self.created_at = now;
        self.updated_at = now;
    }

    fn stamp_updated(&mut self, previous: &Self, now: Timestamp) {
        self.created_at = previous.created_at;
        self.updated_at = now;
    }
}

/// Lookup conditions for [`VillaNumber`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VillaNumberFilter {
    /// Exact natural-key match.
    Number(VillaNo),
    /// Case-sensitive substring match on `specialDetails`.
    DetailsContain(String),
}

impl Predicate<VillaNumber> for VillaNumberFilter {
    fn matches(&self, entity: &VillaNumber) -> bool {
        match self {
            VillaNumberFilter::Number(number) => entity.number == *number,
            VillaNumberFilter::DetailsContain(needle) => entity
                .special_details
                .as_deref()
                .is_some_and(|details| details.contains(needle.as_str())),
        }
    }
}

/// Body of `POST /villanumbers`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VillaNumberCreateRequest {
    #[validate(range(min = 1, message = "number must be a positive integer"))]
    pub number: i32,
    #[validate(length(max = MAX_SPECIAL_DETAILS_LEN))]
    pub special_details: Option<String>,
}

/// Body of `PUT /villanumbers/{id}`. `number` must equal the path id.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VillaNumberUpdateRequest {
    #[validate(range(min = 1, message = "number must be a positive integer"))]
    pub number: i32,
    #[validate(length(max = MAX_SPECIAL_DETAILS_LEN))]
    pub special_details: Option<String>,
}

impl TryFrom<VillaNumberCreateRequest> for VillaNumber {
    type Error = CoreError;

    fn try_from(dto: VillaNumberCreateRequest) -> Result<Self, Self::Error> {
        dto.validate()?;
        Ok(VillaNumber::new(
            VillaNo::try_from(dto.number)?,
            dto.special_details,
        ))
    }
}

impl TryFrom<VillaNumberUpdateRequest> for VillaNumber {
    type Error = CoreError;

    fn try_from(dto: VillaNumberUpdateRequest) -> Result<Self, Self::Error> {
        dto.validate()?;
        Ok(VillaNumber::new(
            VillaNo::try_from(dto.number)?,
            dto.special_details,
        ))
    }
}

/// Client-facing projection. Storage timestamps are not exposed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VillaNumberView {
    pub number: VillaNo,
    pub special_details: Option<String>,
}

impl From<&VillaNumber> for VillaNumberView {
    fn from(entity: &VillaNumber) -> Self {
        Self {
            number: entity.number,
            special_details: entity.special_details.clone(),
        }
    }
}

impl From<VillaNumber> for VillaNumberView {
    fn from(entity: VillaNumber) -> Self {
        Self {
            number: entity.number,
            special_details: entity.special_details,
        }
    }
}
