use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use regi_auto::carousel::{Carousel, CarouselHandle};
use regi_auto::catalog::{BusinessInfo, ServiceCatalog};
use regi_auto::clock::SystemClock;
use regi_auto::config::AppConfig;
use regi_auto::forms::FormRegistry;
use regi_auto::handlers;
use regi_auto::sink::{HttpSink, LogSink, SubmissionSink};
use regi_auto::slides;
use regi_auto::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let catalog = match &config.catalog_path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read service catalog {path}"))?;
            let catalog = ServiceCatalog::from_json(&raw)?;
            tracing::info!(path = %path, services = catalog.len(), "loaded service catalog");
            catalog
        }
        None => ServiceCatalog::shipped(),
    };

    let sink: Arc<dyn SubmissionSink> = if config.submission_endpoint.is_empty() {
        tracing::info!("no SUBMISSION_ENDPOINT set, submissions will only be logged");
        Arc::new(LogSink::new(
            Duration::from_millis(config.booking_delay_ms),
            Duration::from_millis(config.contact_delay_ms),
        ))
    } else {
        tracing::info!(endpoint = %config.submission_endpoint, "using HTTP submission sink");
        Arc::new(HttpSink::new(
            config.submission_endpoint.clone(),
            config.submission_timeout(),
        )?)
    };

    let slides = slides::shipped();
    let carousel = CarouselHandle::spawn(Carousel::new(slides.len())?, config.carousel_interval());

    let state = Arc::new(AppState {
        config: config.clone(),
        catalog: Arc::new(catalog),
        business: BusinessInfo::shipped(),
        slides,
        clock: Arc::new(SystemClock),
        sink,
        carousel,
        bookings: FormRegistry::new(config.form_idle_ttl()),
        contacts: FormRegistry::new(config.form_idle_ttl()),
    });

    let app = handlers::router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
