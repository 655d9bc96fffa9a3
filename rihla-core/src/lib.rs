pub mod error;
pub mod records;
pub mod repository;
pub mod validate;

pub use error::{RepoError, ValidationError};
pub use records::{
    CompanyTestimonial, DepartureInput, Feedback, FeedbackInput, Partner, PartnerInput,
    TestimonialInput, Trip, TripDeparture, TripInput,
};
pub use repository::{
    DepartureRepository, FeedbackRepository, PartnerRepository, TestimonialRepository,
    TripRepository,
};
