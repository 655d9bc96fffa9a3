use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use chrono::Local;
use serde::Serialize;
use uuid::Uuid;

use rihla_catalog::{links, schedule, TripWithDepartures};
use rihla_core::{Trip, TripDeparture};

use crate::{error::AppError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/trips/home", get(homepage))
        .route("/v1/trips/{id}", get(trip_details))
}

#[derive(Debug, Serialize)]
pub struct HomepageResponse {
    pub upcoming: Vec<TripWithDepartures>,
    pub completed: Vec<Trip>,
}

/// The homepage payload: upcoming trips enriched with bookable departures,
/// archived trips as-is. A store failure degrades the affected section to
/// empty instead of failing the page.
async fn homepage(State(state): State<AppState>) -> Json<HomepageResponse> {
    let trips = match state.trips.list_by_date().await {
        Ok(trips) => trips,
        Err(err) => {
            tracing::error!("Failed to fetch trips: {err}");
            Vec::new()
        }
    };

    let (upcoming, completed) = schedule::partition_by_completion(trips);
    let today = Local::now().date_naive();

    let mut enriched = Vec::with_capacity(upcoming.len());
    for trip in upcoming {
        let departures = match state.departures.list_active(trip.id, today).await {
            Ok(departures) => departures,
            Err(err) => {
                tracing::error!("Failed to fetch departures for trip {}: {err}", trip.id);
                Vec::new()
            }
        };
        enriched.push(schedule::compose(trip, departures, today));
    }

    Json(HomepageResponse {
        upcoming: enriched,
        completed,
    })
}

#[derive(Debug, Serialize)]
pub struct TripDetailsResponse {
    pub trip: Trip,
    pub departures: Vec<TripDeparture>,
    /// First active departure, pre-selected as the booking default.
    pub selected_departure: Option<Uuid>,
    pub booking_link: Option<String>,
    pub inquiry_link: String,
}

async fn trip_details(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TripDetailsResponse>, AppError> {
    let trip = state
        .trips
        .get(id)
        .await
        .map_err(AppError::from_repo)?
        .ok_or_else(|| AppError::NotFound("الرحلة غير موجودة".to_string()))?;

    let today = Local::now().date_naive();
    let departures = state
        .departures
        .list_active(id, today)
        .await
        .map_err(AppError::from_repo)?;

    let selected_departure = departures.first().map(|d| d.id);
    let booking_link = if trip.is_completed {
        None
    } else {
        departures.first().map(|d| {
            links::whatsapp_link(
                &state.contact.whatsapp_phone,
                &links::booking_message(&trip.title, d.departure_date),
            )
        })
    };
    let inquiry_link = links::whatsapp_link(
        &state.contact.whatsapp_phone,
        &links::inquiry_message(&trip.title),
    );

    Ok(Json(TripDetailsResponse {
        trip,
        departures,
        selected_departure,
        booking_link,
        inquiry_link,
    }))
}
