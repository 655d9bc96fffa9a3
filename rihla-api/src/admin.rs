use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, patch, post, put},
    Json, Router,
};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use rihla_catalog::{ordering, schedule, MoveDirection};
use rihla_core::records::{DepartureInput, PartnerInput, TestimonialInput, TripInput};
use rihla_core::{CompanyTestimonial, Partner, RepoError, Trip, TripDeparture};

use crate::{error::AppError, state::AppState};

const DUPLICATE_DATE_MSG: &str = "هذا التاريخ موجود بالفعل لهذه الرحلة";

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/admin/trips", get(list_trips).post(create_trip))
        .route("/v1/admin/trips/{id}", put(update_trip).delete(delete_trip))
        .route("/v1/admin/trips/{id}/completed", patch(set_trip_completed))
        .route(
            "/v1/admin/trips/{id}/departures",
            get(list_departures).post(create_departure),
        )
        .route("/v1/admin/departures/{id}", delete(delete_departure))
        .route(
            "/v1/admin/departures/{id}/availability",
            patch(set_departure_availability),
        )
        .route("/v1/admin/partners", get(list_partners).post(create_partner))
        .route(
            "/v1/admin/partners/{id}",
            put(update_partner).delete(delete_partner),
        )
        .route("/v1/admin/partners/{id}/move", post(move_partner))
        .route(
            "/v1/admin/testimonials",
            get(list_testimonials).post(create_testimonial),
        )
        .route(
            "/v1/admin/testimonials/{id}",
            put(update_testimonial).delete(delete_testimonial),
        )
        .route(
            "/v1/admin/testimonials/{id}/featured",
            patch(set_testimonial_featured),
        )
}

// ============================================================================
// Trips
// ============================================================================

async fn list_trips(State(state): State<AppState>) -> Result<Json<Vec<Trip>>, AppError> {
    let trips = state
        .trips
        .list_by_created()
        .await
        .map_err(AppError::from_repo)?;
    Ok(Json(trips))
}

async fn create_trip(
    State(state): State<AppState>,
    Json(input): Json<TripInput>,
) -> Result<Json<Trip>, AppError> {
    input.validate().map_err(AppError::from_validation)?;
    let trip = state
        .trips
        .insert(&input)
        .await
        .map_err(AppError::from_repo)?;
    Ok(Json(trip))
}

async fn update_trip(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<TripInput>,
) -> Result<StatusCode, AppError> {
    input.validate().map_err(AppError::from_validation)?;
    state
        .trips
        .update(id, &input)
        .await
        .map_err(AppError::from_repo)?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Deserialize)]
pub struct SetCompletedRequest {
    pub is_completed: bool,
}

/// Archives or restores a trip without touching its other fields.
async fn set_trip_completed(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SetCompletedRequest>,
) -> Result<StatusCode, AppError> {
    state
        .trips
        .set_completed(id, req.is_completed)
        .await
        .map_err(AppError::from_repo)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_trip(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.trips.delete(id).await.map_err(AppError::from_repo)?;
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Departures
// ============================================================================

#[derive(Debug, Serialize)]
pub struct DepartureAdminResponse {
    pub departures: Vec<TripDeparture>,
    pub upcoming_count: usize,
    pub past_count: usize,
}

/// The admin sees every departure of the trip, with the upcoming/past split
/// the management view shows in its header.
async fn list_departures(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DepartureAdminResponse>, AppError> {
    let departures = state
        .departures
        .list_for_trip(id)
        .await
        .map_err(AppError::from_repo)?;

    let today = Local::now().date_naive();
    let (upcoming, past) = schedule::split_by_today(&departures, today);

    Ok(Json(DepartureAdminResponse {
        upcoming_count: upcoming.len(),
        past_count: past.len(),
        departures,
    }))
}

#[derive(Debug, Deserialize)]
pub struct CreateDepartureRequest {
    pub departure_date: NaiveDate,
    #[serde(default)]
    pub available_seats: Option<i32>,
    #[serde(default = "default_available")]
    pub is_available: bool,
}

fn default_available() -> bool {
    true
}

async fn create_departure(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<CreateDepartureRequest>,
) -> Result<Json<TripDeparture>, AppError> {
    let input = DepartureInput {
        trip_id: id,
        departure_date: req.departure_date,
        available_seats: req.available_seats,
        is_available: req.is_available,
    };

    let departure = state.departures.insert(&input).await.map_err(|err| match err {
        // a second departure on the same date for this trip
        RepoError::Duplicate => AppError::Conflict(DUPLICATE_DATE_MSG.to_string()),
        other => AppError::from_repo(other),
    })?;

    Ok(Json(departure))
}

#[derive(Debug, Deserialize)]
pub struct SetAvailabilityRequest {
    pub is_available: bool,
}

async fn set_departure_availability(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SetAvailabilityRequest>,
) -> Result<StatusCode, AppError> {
    state
        .departures
        .set_available(id, req.is_available)
        .await
        .map_err(AppError::from_repo)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_departure(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state
        .departures
        .delete(id)
        .await
        .map_err(AppError::from_repo)?;
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Partners
// ============================================================================

async fn list_partners(State(state): State<AppState>) -> Result<Json<Vec<Partner>>, AppError> {
    let partners = state.partners.list().await.map_err(AppError::from_repo)?;
    Ok(Json(partners))
}

#[derive(Debug, Deserialize)]
pub struct CreatePartnerRequest {
    pub name: String,
    pub logo_url: String,
}

/// New partners always append: display_order = current max + 1.
async fn create_partner(
    State(state): State<AppState>,
    Json(req): Json<CreatePartnerRequest>,
) -> Result<Json<Partner>, AppError> {
    let partners = state.partners.list().await.map_err(AppError::from_repo)?;
    let input = PartnerInput {
        name: req.name,
        logo_url: req.logo_url,
        display_order: ordering::next_display_order(&partners),
    };
    let partner = state
        .partners
        .insert(&input)
        .await
        .map_err(AppError::from_repo)?;
    Ok(Json(partner))
}

async fn update_partner(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<PartnerInput>,
) -> Result<StatusCode, AppError> {
    state
        .partners
        .update(id, &input)
        .await
        .map_err(AppError::from_repo)?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Deserialize)]
pub struct MovePartnerRequest {
    pub direction: MoveDirection,
}

/// Swaps the selected partner with its neighbor in display order. At the
/// boundary there is nothing to swap: no write happens and the current
/// order comes back unchanged.
async fn move_partner(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<MovePartnerRequest>,
) -> Result<Json<Vec<Partner>>, AppError> {
    let partners = state.partners.list().await.map_err(AppError::from_repo)?;

    let Some(swap) = ordering::plan_move(&partners, id, req.direction) else {
        return Ok(Json(partners));
    };

    state
        .partners
        .swap_display_order(swap.first, swap.second)
        .await
        .map_err(AppError::from_repo)?;

    let refreshed = state.partners.list().await.map_err(AppError::from_repo)?;
    Ok(Json(refreshed))
}

async fn delete_partner(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state
        .partners
        .delete(id)
        .await
        .map_err(AppError::from_repo)?;
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Testimonials
// ============================================================================

async fn list_testimonials(
    State(state): State<AppState>,
) -> Result<Json<Vec<CompanyTestimonial>>, AppError> {
    let testimonials = state
        .testimonials
        .list()
        .await
        .map_err(AppError::from_repo)?;
    Ok(Json(testimonials))
}

async fn create_testimonial(
    State(state): State<AppState>,
    Json(input): Json<TestimonialInput>,
) -> Result<Json<CompanyTestimonial>, AppError> {
    input.validate().map_err(AppError::from_validation)?;
    let testimonial = state
        .testimonials
        .insert(&input)
        .await
        .map_err(AppError::from_repo)?;
    Ok(Json(testimonial))
}

async fn update_testimonial(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<TestimonialInput>,
) -> Result<StatusCode, AppError> {
    input.validate().map_err(AppError::from_validation)?;
    state
        .testimonials
        .update(id, &input)
        .await
        .map_err(AppError::from_repo)?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Deserialize)]
pub struct SetFeaturedRequest {
    pub is_featured: bool,
}

async fn set_testimonial_featured(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SetFeaturedRequest>,
) -> Result<StatusCode, AppError> {
    state
        .testimonials
        .set_featured(id, req.is_featured)
        .await
        .map_err(AppError::from_repo)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_testimonial(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state
        .testimonials
        .delete(id)
        .await
        .map_err(AppError::from_repo)?;
    Ok(StatusCode::NO_CONTENT)
}
