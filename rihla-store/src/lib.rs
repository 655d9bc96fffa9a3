pub mod app_config;
pub mod database;
pub mod departure_repo;
pub mod error;
pub mod feedback_repo;
pub mod partner_repo;
pub mod testimonial_repo;
pub mod trip_repo;

pub use app_config::{Config, ConfigError};
pub use database::{classify_startup_error, connect, migrate, StartupErrorKind};
pub use departure_repo::PgDepartureRepository;
pub use feedback_repo::PgFeedbackRepository;
pub use partner_repo::PgPartnerRepository;
pub use testimonial_repo::PgTestimonialRepository;
pub use trip_repo::PgTripRepository;
