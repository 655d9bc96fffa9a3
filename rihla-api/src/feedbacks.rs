use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use rihla_catalog::rating;
use rihla_core::records::FeedbackInput;
use rihla_core::Feedback;

use crate::{error::AppError, state::AppState};

const REQUIRED_FIELDS_MSG: &str = "الرجاء ملء جميع الحقول المطلوبة";

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/v1/trips/{id}/feedbacks",
            get(list_feedbacks).post(submit_feedback),
        )
        .route("/v1/feedbacks/{id}/like", post(like_feedback))
}

#[derive(Debug, Serialize)]
pub struct FeedbackListResponse {
    pub feedbacks: Vec<Feedback>,
    pub total: usize,
    /// One-decimal average, absent (not "0.0") when there are no reviews.
    pub average_rating: Option<String>,
}

async fn list_feedbacks(
    State(state): State<AppState>,
    Path(trip_id): Path<Uuid>,
) -> Result<Json<FeedbackListResponse>, AppError> {
    let feedbacks = state
        .feedbacks
        .list_for_trip(trip_id)
        .await
        .map_err(AppError::from_repo)?;

    let average_rating = rating::average(&feedbacks).map(rating::format_average);

    Ok(Json(FeedbackListResponse {
        total: feedbacks.len(),
        average_rating,
        feedbacks,
    }))
}

#[derive(Debug, Deserialize)]
pub struct SubmitFeedbackRequest {
    pub user_name: String,
    #[serde(default)]
    pub user_email: Option<String>,
    pub rating: i16,
    pub comment: String,
}

async fn submit_feedback(
    State(state): State<AppState>,
    Path(trip_id): Path<Uuid>,
    Json(req): Json<SubmitFeedbackRequest>,
) -> Result<Json<Feedback>, AppError> {
    let input = FeedbackInput {
        trip_id,
        user_name: req.user_name,
        user_email: req.user_email,
        rating: req.rating,
        comment: req.comment,
    };

    // Rejected before the store is touched.
    input.validate().map_err(|err| {
        tracing::debug!("Rejected feedback submission: {err}");
        AppError::Validation(REQUIRED_FIELDS_MSG.to_string())
    })?;

    let created = state
        .feedbacks
        .insert(&input.normalized())
        .await
        .map_err(AppError::from_repo)?;

    Ok(Json(created))
}

#[derive(Debug, Serialize)]
struct LikeResponse {
    likes: i32,
}

/// Bumps the soft popularity counter. "Already liked on this device" never
/// reaches the server; that bookkeeping lives with the client.
async fn like_feedback(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<LikeResponse>, AppError> {
    let likes = state
        .feedbacks
        .increment_likes(id)
        .await
        .map_err(AppError::from_repo)?;

    Ok(Json(LikeResponse { likes }))
}
