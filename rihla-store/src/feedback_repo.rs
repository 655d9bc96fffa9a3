use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use rihla_core::records::FeedbackInput;
use rihla_core::{Feedback, FeedbackRepository, RepoError};

use crate::error::map_sqlx_err;

const FEEDBACK_COLUMNS: &str =
    "id, trip_id, user_name, user_email, rating, comment, likes, created_at";

pub struct PgFeedbackRepository {
    pool: PgPool,
}

impl PgFeedbackRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FeedbackRepository for PgFeedbackRepository {
    async fn list_for_trip(&self, trip_id: Uuid) -> Result<Vec<Feedback>, RepoError> {
        sqlx::query_as::<_, Feedback>(&format!(
            "SELECT {FEEDBACK_COLUMNS} FROM feedbacks
             WHERE trip_id = $1 ORDER BY created_at DESC"
        ))
        .bind(trip_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_err)
    }

    async fn insert(&self, input: &FeedbackInput) -> Result<Feedback, RepoError> {
        sqlx::query_as::<_, Feedback>(&format!(
            r#"
            INSERT INTO feedbacks (id, trip_id, user_name, user_email, rating, comment, likes)
            VALUES ($1, $2, $3, $4, $5, $6, 0)
            RETURNING {FEEDBACK_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(input.trip_id)
        .bind(&input.user_name)
        .bind(&input.user_email)
        .bind(input.rating)
        .bind(&input.comment)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_err)
    }

    async fn increment_likes(&self, id: Uuid) -> Result<i32, RepoError> {
        // Atomic in the database; concurrent likes from different devices
        // cannot lose an increment.
        let likes: Option<(i32,)> =
            sqlx::query_as("UPDATE feedbacks SET likes = likes + 1 WHERE id = $1 RETURNING likes")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(map_sqlx_err)?;

        likes.map(|(l,)| l).ok_or(RepoError::NotFound)
    }
}
