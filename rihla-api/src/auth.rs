use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};

use crate::{error::AppError, middleware::auth::AdminClaims, state::AppState};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
struct AuthResponse {
    token: String,
}

/// Ungated: the login view is reachable without a session.
pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/admin/login", post(login))
}

/// Gated session endpoints, mounted behind the admin middleware.
pub fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/v1/admin/session", get(session))
        .route("/v1/admin/logout", post(logout))
}

async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    if req.email != state.auth.admin_email || req.password != state.auth.admin_password {
        return Err(AppError::Authentication(
            "Invalid login credentials".to_string(),
        ));
    }

    let my_claims = AdminClaims {
        sub: req.email.clone(),
        email: req.email,
        role: "ADMIN".to_owned(),
        exp: (Utc::now() + Duration::seconds(state.auth.expiration as i64)).timestamp() as usize,
    };

    let token = encode(
        &Header::default(),
        &my_claims,
        &EncodingKey::from_secret(state.auth.secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(format!("Token encoding failed: {}", e)))?;

    Ok(Json(AuthResponse { token }))
}

/// The presence check the admin shell calls on mount: 401 from the gate
/// means "no session", anything else echoes the claims.
async fn session(Extension(claims): Extension<AdminClaims>) -> Json<AdminClaims> {
    Json(claims)
}

/// Sessions are stateless tokens; logout is acknowledged and the client
/// drops the token, which triggers the redirect on its side.
async fn logout() -> StatusCode {
    StatusCode::NO_CONTENT
}
