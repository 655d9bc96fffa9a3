use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use rihla_core::records::TripInput;
use rihla_core::{RepoError, Trip, TripRepository};

use crate::error::map_sqlx_err;

const TRIP_COLUMNS: &str =
    "id, title, price, date, description, image_url, program, is_completed, created_at";

pub struct PgTripRepository {
    pool: PgPool,
}

impl PgTripRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TripRepository for PgTripRepository {
    async fn list_by_date(&self) -> Result<Vec<Trip>, RepoError> {
        sqlx::query_as::<_, Trip>(&format!(
            "SELECT {TRIP_COLUMNS} FROM trips ORDER BY date ASC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_err)
    }

    async fn list_by_created(&self) -> Result<Vec<Trip>, RepoError> {
        sqlx::query_as::<_, Trip>(&format!(
            "SELECT {TRIP_COLUMNS} FROM trips ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_err)
    }

    async fn get(&self, id: Uuid) -> Result<Option<Trip>, RepoError> {
        sqlx::query_as::<_, Trip>(&format!("SELECT {TRIP_COLUMNS} FROM trips WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_err)
    }

    async fn insert(&self, input: &TripInput) -> Result<Trip, RepoError> {
        sqlx::query_as::<_, Trip>(&format!(
            r#"
            INSERT INTO trips (id, title, price, date, description, image_url, program, is_completed)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {TRIP_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(&input.title)
        .bind(input.price)
        .bind(input.date)
        .bind(&input.description)
        .bind(&input.image_url)
        .bind(&input.program)
        .bind(input.is_completed)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_err)
    }

    async fn update(&self, id: Uuid, input: &TripInput) -> Result<(), RepoError> {
        let result = sqlx::query(
            r#"
            UPDATE trips
            SET title = $1, price = $2, date = $3, description = $4,
                image_url = $5, program = $6, is_completed = $7
            WHERE id = $8
            "#,
        )
        .bind(&input.title)
        .bind(input.price)
        .bind(input.date)
        .bind(&input.description)
        .bind(&input.image_url)
        .bind(&input.program)
        .bind(input.is_completed)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    async fn set_completed(&self, id: Uuid, is_completed: bool) -> Result<(), RepoError> {
        let result = sqlx::query("UPDATE trips SET is_completed = $1 WHERE id = $2")
            .bind(is_completed)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_err)?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let result = sqlx::query("DELETE FROM trips WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_err)?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}
