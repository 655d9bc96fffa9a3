use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::RepoError;
use crate::records::{
    CompanyTestimonial, DepartureInput, Feedback, FeedbackInput, Partner, PartnerInput,
    TestimonialInput, Trip, TripDeparture, TripInput,
};

/// Repository trait for trip data access.
#[async_trait]
pub trait TripRepository: Send + Sync {
    /// All trips, `date` ascending. Feeds the homepage partition.
    async fn list_by_date(&self) -> Result<Vec<Trip>, RepoError>;

    /// All trips, newest first. Feeds the admin table.
    async fn list_by_created(&self) -> Result<Vec<Trip>, RepoError>;

    async fn get(&self, id: Uuid) -> Result<Option<Trip>, RepoError>;

    async fn insert(&self, input: &TripInput) -> Result<Trip, RepoError>;

    async fn update(&self, id: Uuid, input: &TripInput) -> Result<(), RepoError>;

    /// Archives or un-archives without touching any other field.
    async fn set_completed(&self, id: Uuid, is_completed: bool) -> Result<(), RepoError>;

    async fn delete(&self, id: Uuid) -> Result<(), RepoError>;
}

/// Repository trait for scheduled departures of a trip.
#[async_trait]
pub trait DepartureRepository: Send + Sync {
    /// Every departure of the trip, date ascending (admin view).
    async fn list_for_trip(&self, trip_id: Uuid) -> Result<Vec<TripDeparture>, RepoError>;

    /// Only departures visitors may book: switched on and not before
    /// `today`, date ascending.
    async fn list_active(
        &self,
        trip_id: Uuid,
        today: NaiveDate,
    ) -> Result<Vec<TripDeparture>, RepoError>;

    /// Fails with [`RepoError::Duplicate`] when the trip already has a
    /// departure on that date.
    async fn insert(&self, input: &DepartureInput) -> Result<TripDeparture, RepoError>;

    async fn set_available(&self, id: Uuid, is_available: bool) -> Result<(), RepoError>;

    async fn delete(&self, id: Uuid) -> Result<(), RepoError>;
}

/// Repository trait for partner logos.
#[async_trait]
pub trait PartnerRepository: Send + Sync {
    /// All partners, `display_order` ascending.
    async fn list(&self) -> Result<Vec<Partner>, RepoError>;

    async fn insert(&self, input: &PartnerInput) -> Result<Partner, RepoError>;

    async fn update(&self, id: Uuid, input: &PartnerInput) -> Result<(), RepoError>;

    /// Exchanges the display_order values of exactly two partners in one
    /// transaction. Survivors are never renumbered.
    async fn swap_display_order(
        &self,
        first: (Uuid, i32),
        second: (Uuid, i32),
    ) -> Result<(), RepoError>;

    async fn delete(&self, id: Uuid) -> Result<(), RepoError>;
}

/// Repository trait for visitor feedback.
#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    /// Reviews for one trip, newest first.
    async fn list_for_trip(&self, trip_id: Uuid) -> Result<Vec<Feedback>, RepoError>;

    /// Inserts with `likes = 0`.
    async fn insert(&self, input: &FeedbackInput) -> Result<Feedback, RepoError>;

    /// Atomically bumps the counter by one and returns the new value.
    async fn increment_likes(&self, id: Uuid) -> Result<i32, RepoError>;
}

/// Repository trait for curated company testimonials.
#[async_trait]
pub trait TestimonialRepository: Send + Sync {
    /// All testimonials, newest first (admin view).
    async fn list(&self) -> Result<Vec<CompanyTestimonial>, RepoError>;

    /// Featured rows only, newest first, capped at `limit` (public
    /// rotation).
    async fn list_featured(&self, limit: i64) -> Result<Vec<CompanyTestimonial>, RepoError>;

    async fn insert(&self, input: &TestimonialInput) -> Result<CompanyTestimonial, RepoError>;

    async fn update(&self, id: Uuid, input: &TestimonialInput) -> Result<(), RepoError>;

    async fn set_featured(&self, id: Uuid, is_featured: bool) -> Result<(), RepoError>;

    async fn delete(&self, id: Uuid) -> Result<(), RepoError>;
}
