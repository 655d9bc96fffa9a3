use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use rihla_core::records::DepartureInput;
use rihla_core::{DepartureRepository, RepoError, TripDeparture};

use crate::error::map_sqlx_err;

const DEPARTURE_COLUMNS: &str =
    "id, trip_id, departure_date, available_seats, is_available, created_at";

pub struct PgDepartureRepository {
    pool: PgPool,
}

impl PgDepartureRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DepartureRepository for PgDepartureRepository {
    async fn list_for_trip(&self, trip_id: Uuid) -> Result<Vec<TripDeparture>, RepoError> {
        sqlx::query_as::<_, TripDeparture>(&format!(
            "SELECT {DEPARTURE_COLUMNS} FROM trip_departures
             WHERE trip_id = $1 ORDER BY departure_date ASC"
        ))
        .bind(trip_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_err)
    }

    async fn list_active(
        &self,
        trip_id: Uuid,
        today: NaiveDate,
    ) -> Result<Vec<TripDeparture>, RepoError> {
        sqlx::query_as::<_, TripDeparture>(&format!(
            "SELECT {DEPARTURE_COLUMNS} FROM trip_departures
             WHERE trip_id = $1 AND is_available = TRUE AND departure_date >= $2
             ORDER BY departure_date ASC"
        ))
        .bind(trip_id)
        .bind(today)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_err)
    }

    async fn insert(&self, input: &DepartureInput) -> Result<TripDeparture, RepoError> {
        // UNIQUE (trip_id, departure_date) turns a duplicate date into
        // RepoError::Duplicate via map_sqlx_err.
        sqlx::query_as::<_, TripDeparture>(&format!(
            r#"
            INSERT INTO trip_departures (id, trip_id, departure_date, available_seats, is_available)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {DEPARTURE_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(input.trip_id)
        .bind(input.departure_date)
        .bind(input.available_seats)
        .bind(input.is_available)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_err)
    }

    async fn set_available(&self, id: Uuid, is_available: bool) -> Result<(), RepoError> {
        let result = sqlx::query("UPDATE trip_departures SET is_available = $1 WHERE id = $2")
            .bind(is_available)
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
        let result = sqlx::query("DELETE FROM trip_departures WHERE id = $1")
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
