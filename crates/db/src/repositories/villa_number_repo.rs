//! PostgreSQL repository for the `villa_numbers` table.

use async_trait::async_trait;
use sqlx::PgPool;
use villa_core::repository::{Entity, Repository, RepositoryError};
use villa_core::villa_number::{VillaNumber, VillaNumberFilter};

use crate::models::villa_number::VillaNumberRow;

/// Column list for villa_numbers queries.
const COLUMNS: &str = "villa_no, special_details, created_at, updated_at";

/// Provides CRUD operations for villa numbers.
#[derive(Clone)]
pub struct PgVillaNumberRepo {
    pool: PgPool,
}

impl PgVillaNumberRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Flatten a sqlx error into the storage-agnostic error type.
fn storage_error(err: sqlx::Error) -> RepositoryError {
    tracing::error!(error = %err, "villa_numbers query failed");
    RepositoryError::Storage(err.to_string())
}

#[async_trait]
impl Repository<VillaNumber> for PgVillaNumberRepo {
    /// List all villa numbers, ordered by number ascending.
    async fn get_all(&self) -> Result<Vec<VillaNumber>, RepositoryError> {
        let query = format!("SELECT {COLUMNS} FROM villa_numbers ORDER BY villa_no ASC");
        sqlx::query_as::<_, VillaNumberRow>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error)?
            .into_iter()
            .map(VillaNumber::try_from)
            .collect()
    }

    async fn get(
        &self,
        filter: &VillaNumberFilter,
    ) -> Result<Option<VillaNumber>, RepositoryError> {
        let row = match filter {
            VillaNumberFilter::Number(number) => {
                let query = format!("SELECT {COLUMNS} FROM villa_numbers WHERE villa_no = $1");
                sqlx::query_as::<_, VillaNumberRow>(&query)
                    .bind(number.get())
                    .fetch_optional(&self.pool)
                    .await
            }
            VillaNumberFilter::DetailsContain(needle) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM villa_numbers
                     WHERE strpos(special_details, $1) > 0
                     ORDER BY villa_no ASC
                     LIMIT 1"
                );
                sqlx::query_as::<_, VillaNumberRow>(&query)
                    .bind(needle)
                    .fetch_optional(&self.pool)
                    .await
            }
        }
        .map_err(storage_error)?;

        row.map(VillaNumber::try_from).transpose()
    }

    /// Insert-if-absent. A concurrent insert of the same number loses here
    /// rather than at a later constraint check.
    async fn create(&self, entity: &VillaNumber) -> Result<VillaNumber, RepositoryError> {
        let query = format!(
            "INSERT INTO villa_numbers (villa_no, special_details)
             VALUES ($1, $2)
             ON CONFLICT (villa_no) DO NOTHING
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, VillaNumberRow>(&query)
            .bind(entity.number.get())
            .bind(&entity.special_details)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error)?
            .ok_or_else(|| RepositoryError::already_exists::<VillaNumber>(entity.key()))
            .and_then(VillaNumber::try_from)
    }

    /// Full replace of the mutable fields; `created_at` is left untouched.
    async fn update(&self, entity: &VillaNumber) -> Result<VillaNumber, RepositoryError> {
        let query = format!(
            "UPDATE villa_numbers SET
                special_details = $2,
                updated_at = NOW()
             WHERE villa_no = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, VillaNumberRow>(&query)
            .bind(entity.number.get())
            .bind(&entity.special_details)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error)?
            .ok_or_else(|| RepositoryError::not_found::<VillaNumber>(entity.key()))
            .and_then(VillaNumber::try_from)
    }

    async fn remove(&self, entity: &VillaNumber) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM villa_numbers WHERE villa_no = $1")
            .bind(entity.number.get())
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;
        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found::<VillaNumber>(entity.key()));
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        crate::health_check(&self.pool).await.map_err(storage_error)
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}
