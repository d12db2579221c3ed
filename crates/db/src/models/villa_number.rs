//! Villa number row model.

use sqlx::FromRow;
use villa_core::repository::RepositoryError;
use villa_core::types::{Timestamp, VillaNo};
use villa_core::villa_number::VillaNumber;

/// A row from the `villa_numbers` table.
#[derive(Debug, Clone, FromRow)]
pub struct VillaNumberRow {
    pub villa_no: i32,
    pub special_details: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl TryFrom<VillaNumberRow> for VillaNumber {
    type Error = RepositoryError;

    fn try_from(row: VillaNumberRow) -> Result<Self, Self::Error> {
        let number = VillaNo::new(row.villa_no).ok_or_else(|| {
            RepositoryError::Storage(format!("stored villa_no {} is not positive", row.villa_no))
        })?;
        Ok(VillaNumber {
            number,
            special_details: row.special_details,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}
