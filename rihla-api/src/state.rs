use std::sync::Arc;

use rihla_core::{
    DepartureRepository, FeedbackRepository, PartnerRepository, TestimonialRepository,
    TripRepository,
};

#[derive(Clone)]
pub struct AuthConfig {
    pub secret: String,
    pub expiration: u64,
    pub admin_email: String,
    pub admin_password: String,
}

#[derive(Clone)]
pub struct ContactInfo {
    pub whatsapp_phone: String,
}

#[derive(Clone)]
pub struct AppState {
    pub trips: Arc<dyn TripRepository>,
    pub departures: Arc<dyn DepartureRepository>,
    pub partners: Arc<dyn PartnerRepository>,
    pub feedbacks: Arc<dyn FeedbackRepository>,
    pub testimonials: Arc<dyn TestimonialRepository>,
    pub auth: AuthConfig,
    pub contact: ContactInfo,
}
