//! PostgreSQL Destination Repository Implementation
//!
//! Implements the DestinationRepository trait using SQLx for PostgreSQL.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::gateways::DestinationRepository;
use crate::domain::models::destination::{Destination, DestinationId, NewDestination};
use crate::shared::errors::RepositoryError;

/// Database row representation for destinations table
#[derive(Debug, sqlx::FromRow)]
struct DestinationRow {
    id: i64,
    name: String,
    country: String,
    description: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<DestinationRow> for Destination {
    fn from(row: DestinationRow) -> Self {
        Destination::restore(
            DestinationId::new(row.id),
            row.name,
            row.country,
            row.description,
            row.created_at,
        )
    }
}

/// PostgreSQL implementation of DestinationRepository
pub struct PostgresDestinationRepository {
    pool: PgPool,
}

impl PostgresDestinationRepository {
    /// Create a new PostgresDestinationRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DestinationRepository for PostgresDestinationRepository {
    async fn find_all(&self) -> Result<Vec<Destination>, RepositoryError> {
        let rows = sqlx::query_as::<_, DestinationRow>(
            r#"
            SELECT id, name, country, description, created_at
            FROM destinations
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Destination::from).collect())
    }

    async fn find_by_id(&self, id: DestinationId) -> Result<Option<Destination>, RepositoryError> {
        let row = sqlx::query_as::<_, DestinationRow>(
            r#"
            SELECT id, name, country, description, created_at
            FROM destinations
            WHERE id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Destination::from))
    }

    async fn create(&self, destination: &NewDestination) -> Result<Destination, RepositoryError> {
        let row = sqlx::query_as::<_, DestinationRow>(
            r#"
            INSERT INTO destinations (name, country, description)
            VALUES ($1, $2, $3)
            RETURNING id, name, country, description, created_at
            "#,
        )
        .bind(destination.name())
        .bind(destination.country())
        .bind(destination.description())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn update(
        &self,
        destination: &Destination,
    ) -> Result<Option<Destination>, RepositoryError> {
        let row = sqlx::query_as::<_, DestinationRow>(
            r#"
            UPDATE destinations
            SET name = $2,
                country = $3,
                description = $4
            WHERE id = $1
            RETURNING id, name, country, description, created_at
            "#,
        )
        .bind(destination.id().value())
        .bind(destination.name())
        .bind(destination.country())
        .bind(destination.description())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Destination::from))
    }

    async fn delete(&self, id: DestinationId) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r#"
            DELETE FROM destinations
            WHERE id = $1
            "#,
        )
        .bind(id.value())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
