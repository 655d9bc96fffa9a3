use std::net::SocketAddr;
use std::sync::Arc;

use rihla_api::{app, AppState, AuthConfig, ContactInfo};
use rihla_store::{
    PgDepartureRepository, PgFeedbackRepository, PgPartnerRepository, PgTestimonialRepository,
    PgTripRepository, StartupErrorKind,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rihla_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match rihla_store::Config::load() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("Failed to load configuration: {err}");
            std::process::exit(1);
        }
    };

    // Placeholder credentials fail here, before any connection attempt.
    if let Err(err) = config.validate() {
        tracing::error!(
            "{err}. Set it via config/local.toml or a RIHLA__-prefixed environment variable, \
             then restart."
        );
        std::process::exit(1);
    }

    tracing::info!("Starting Rihla API on port {}", config.server.port);

    let pool = match rihla_store::connect(&config.database.url).await {
        Ok(pool) => pool,
        Err(err) => {
            match rihla_store::classify_startup_error(&err) {
                StartupErrorKind::Connectivity => tracing::error!(
                    "Could not connect to the database: {err}. Check the network and the \
                     database host, then restart."
                ),
                StartupErrorKind::Other => tracing::error!(
                    "Database initialization failed: {err}. Check the configuration, then restart."
                ),
            }
            std::process::exit(1);
        }
    };

    if let Err(err) = rihla_store::migrate(&pool).await {
        tracing::error!("Database migration failed: {err}");
        std::process::exit(1);
    }

    let state = AppState {
        trips: Arc::new(PgTripRepository::new(pool.clone())),
        departures: Arc::new(PgDepartureRepository::new(pool.clone())),
        partners: Arc::new(PgPartnerRepository::new(pool.clone())),
        feedbacks: Arc::new(PgFeedbackRepository::new(pool.clone())),
        testimonials: Arc::new(PgTestimonialRepository::new(pool)),
        auth: AuthConfig {
            secret: config.auth.jwt_secret.clone(),
            expiration: config.auth.jwt_expiration_seconds,
            admin_email: config.auth.admin_email.clone(),
            admin_password: config.auth.admin_password.clone(),
        },
        contact: ContactInfo {
            whatsapp_phone: config.contact.whatsapp_phone.clone(),
        },
    };

    let app = app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server failed");
}
