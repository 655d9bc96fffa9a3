use axum::{extract::State, routing::get, Json, Router};

use rihla_core::CompanyTestimonial;

use crate::{error::AppError, state::AppState};

/// The public rotation never shows more than this many entries.
const FEATURED_LIMIT: i64 = 10;

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/testimonials", get(list_featured))
}

async fn list_featured(
    State(state): State<AppState>,
) -> Result<Json<Vec<CompanyTestimonial>>, AppError> {
    let testimonials = state
        .testimonials
        .list_featured(FEATURED_LIMIT)
        .await
        .map_err(AppError::from_repo)?;
    Ok(Json(testimonials))
}
