use chrono::NaiveDate;
use serde::Serialize;

use rihla_core::{Trip, TripDeparture};

/// An upcoming trip enriched with its bookable departures.
///
/// `next_departure` and `available_dates_count` are always derived from the
/// live departure list, never stored.
#[derive(Debug, Clone, Serialize)]
pub struct TripWithDepartures {
    #[serde(flatten)]
    pub trip: Trip,
    pub departures: Vec<TripDeparture>,
    pub next_departure: Option<NaiveDate>,
    pub available_dates_count: usize,
}

/// Departures a visitor may still book: switched on and not before `today`,
/// date ascending.
pub fn active_departures(departures: &[TripDeparture], today: NaiveDate) -> Vec<TripDeparture> {
    let mut active: Vec<TripDeparture> = departures
        .iter()
        .filter(|d| d.is_active(today))
        .cloned()
        .collect();
    active.sort_by_key(|d| d.departure_date);
    active
}

/// Attaches the active departure list to a trip. The earliest active date
/// becomes `next_departure`; with no active departures it stays absent.
pub fn compose(trip: Trip, departures: Vec<TripDeparture>, today: NaiveDate) -> TripWithDepartures {
    let departures = active_departures(&departures, today);
    TripWithDepartures {
        next_departure: departures.first().map(|d| d.departure_date),
        available_dates_count: departures.len(),
        trip,
        departures,
    }
}

/// Splits trips into the two homepage buckets: (upcoming, completed).
/// Every trip lands in exactly one bucket, decided by `is_completed` alone.
pub fn partition_by_completion(trips: Vec<Trip>) -> (Vec<Trip>, Vec<Trip>) {
    trips.into_iter().partition(|t| !t.is_completed)
}

/// Admin split of a trip's full departure list into (upcoming, past) by
/// calendar date. Availability is ignored here; the admin sees everything.
pub fn split_by_today(
    departures: &[TripDeparture],
    today: NaiveDate,
) -> (Vec<TripDeparture>, Vec<TripDeparture>) {
    departures
        .iter()
        .cloned()
        .partition(|d| d.departure_date >= today)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use uuid::Uuid;

    fn trip(id: Uuid, date: &str, is_completed: bool) -> Trip {
        Trip {
            id,
            title: "رحلة".to_string(),
            price: 1000.0,
            date: date.parse().unwrap(),
            description: String::new(),
            image_url: None,
            program: None,
            is_completed,
            created_at: Utc::now(),
        }
    }

    fn departure(trip_id: Uuid, date: &str, is_available: bool) -> TripDeparture {
        TripDeparture {
            id: Uuid::new_v4(),
            trip_id,
            departure_date: date.parse().unwrap(),
            available_seats: None,
            is_available,
            created_at: Utc::now(),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
    }

    #[test]
    fn every_trip_lands_in_exactly_one_bucket() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let trips = vec![trip(a, "2026-03-01", false), trip(b, "2025-01-01", true)];

        let (upcoming, completed) = partition_by_completion(trips);

        assert_eq!(upcoming.iter().map(|t| t.id).collect::<Vec<_>>(), vec![a]);
        assert_eq!(completed.iter().map(|t| t.id).collect::<Vec<_>>(), vec![b]);
    }

    #[test]
    fn unavailable_and_past_departures_are_not_active() {
        let trip_id = Uuid::new_v4();
        let departures = vec![
            departure(trip_id, "2026-03-01", true),
            departure(trip_id, "2026-04-01", false),
        ];

        let composed = compose(trip(trip_id, "2026-03-01", false), departures, today());

        assert_eq!(composed.available_dates_count, 1);
        assert_eq!(
            composed.next_departure,
            Some(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap())
        );
    }

    #[test]
    fn next_departure_is_the_earliest_active_date() {
        let trip_id = Uuid::new_v4();
        // deliberately out of order
        let departures = vec![
            departure(trip_id, "2026-06-15", true),
            departure(trip_id, "2026-02-10", true),
            departure(trip_id, "2025-12-01", true), // past
        ];

        let composed = compose(trip(trip_id, "2026-02-10", false), departures, today());

        assert_eq!(
            composed.next_departure,
            Some(NaiveDate::from_ymd_opt(2026, 2, 10).unwrap())
        );
        assert_eq!(composed.available_dates_count, 2);
        let dates: Vec<_> = composed
            .departures
            .iter()
            .map(|d| d.departure_date.to_string())
            .collect();
        assert_eq!(dates, vec!["2026-02-10", "2026-06-15"]);
    }

    #[test]
    fn no_active_departures_means_absent_next_departure() {
        let trip_id = Uuid::new_v4();
        let departures = vec![departure(trip_id, "2025-01-01", true)];

        let composed = compose(trip(trip_id, "2026-03-01", false), departures, today());

        assert_eq!(composed.next_departure, None);
        assert_eq!(composed.available_dates_count, 0);
    }

    #[test]
    fn admin_split_ignores_availability() {
        let trip_id = Uuid::new_v4();
        let departures = vec![
            departure(trip_id, "2026-03-01", false),
            departure(trip_id, "2025-03-01", true),
        ];

        let (upcoming, past) = split_by_today(&departures, today());

        assert_eq!(upcoming.len(), 1);
        assert_eq!(past.len(), 1);
    }
}
