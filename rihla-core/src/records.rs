use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A bookable or archived travel package.
///
/// `is_completed` partitions all trips into exactly two display buckets:
/// upcoming (bookable) and history. `date` is the legacy single departure
/// date, kept for trips that never received individual departures.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Trip {
    pub id: Uuid,
    pub title: String,
    pub price: f64,
    pub date: NaiveDate,
    pub description: String,
    pub image_url: Option<String>,
    pub program: Option<String>,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
}

/// Placeholder shown when a trip has no image of its own.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://picsum.photos/seed/travel/1920/1080";

impl Trip {
    pub fn image_or_placeholder(&self) -> &str {
        self.image_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(PLACEHOLDER_IMAGE_URL)
    }
}

/// One scheduled occurrence of a trip.
///
/// `available_seats` of `None` means unspecified, not zero. The pair
/// (trip_id, departure_date) is unique; the store reports a violation as
/// [`crate::RepoError::Duplicate`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct TripDeparture {
    pub id: Uuid,
    pub trip_id: Uuid,
    pub departure_date: NaiveDate,
    pub available_seats: Option<i32>,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
}

impl TripDeparture {
    /// A departure is shown to visitors only while it is switched on and
    /// not yet in the past (calendar-date comparison).
    pub fn is_active(&self, today: NaiveDate) -> bool {
        self.is_available && self.departure_date >= today
    }
}

/// A displayed client/partner logo with a manual position in the strip.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Partner {
    pub id: Uuid,
    pub name: String,
    pub logo_url: String,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
}

/// A visitor-submitted review attached to one trip. Never edited, never
/// deleted through the public surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Feedback {
    pub id: Uuid,
    pub trip_id: Uuid,
    pub user_name: String,
    pub user_email: Option<String>,
    pub rating: i16,
    pub comment: String,
    pub likes: i32,
    pub created_at: DateTime<Utc>,
}

/// An admin-curated site-wide testimonial, independent of any trip.
/// Only featured rows are eligible for the public rotation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct CompanyTestimonial {
    pub id: Uuid,
    pub customer_name: String,
    pub customer_location: Option<String>,
    pub rating: i16,
    pub testimonial: String,
    pub avatar_url: Option<String>,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Write inputs
// ============================================================================

/// Editable fields of a trip, used for both create and update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripInput {
    pub title: String,
    pub price: f64,
    pub date: NaiveDate,
    pub description: String,
    pub image_url: Option<String>,
    pub program: Option<String>,
    #[serde(default)]
    pub is_completed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartureInput {
    pub trip_id: Uuid,
    pub departure_date: NaiveDate,
    pub available_seats: Option<i32>,
    pub is_available: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartnerInput {
    pub name: String,
    pub logo_url: String,
    pub display_order: i32,
}

/// A new visitor review. `likes` always starts at zero and is not part of
/// the input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackInput {
    pub trip_id: Uuid,
    pub user_name: String,
    pub user_email: Option<String>,
    pub rating: i16,
    pub comment: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestimonialInput {
    pub customer_name: String,
    pub customer_location: Option<String>,
    pub rating: i16,
    pub testimonial: String,
    pub avatar_url: Option<String>,
    pub is_featured: bool,
}
