use axum::{extract::State, routing::get, Json, Router};

use rihla_core::Partner;

use crate::{error::AppError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/partners", get(list_partners))
}

/// Partner logos in their manual display order, for the public slider.
async fn list_partners(State(state): State<AppState>) -> Result<Json<Vec<Partner>>, AppError> {
    let partners = state.partners.list().await.map_err(AppError::from_repo)?;
    Ok(Json(partners))
}
