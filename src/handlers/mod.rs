pub mod booking;
pub mod carousel;
pub mod catalog;
pub mod contact;
pub mod health;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/services", get(catalog::get_services))
        .route("/api/business", get(catalog::get_business))
        .route("/api/slides", get(catalog::get_slides))
        .route("/api/carousel", get(carousel::get_carousel))
        .route("/api/carousel/next", post(carousel::next))
        .route("/api/carousel/previous", post(carousel::previous))
        .route("/api/carousel/goto/:index", post(carousel::go_to))
        .route("/api/carousel/gesture", post(carousel::gesture))
        .route("/api/carousel/events", get(carousel::events_stream))
        .route("/api/booking/forms", post(booking::create_form))
        .route(
            "/api/booking/forms/:id",
            get(booking::get_form).delete(booking::delete_form),
        )
        .route("/api/booking/forms/:id/service", post(booking::select_service))
        .route("/api/booking/forms/:id/field", post(booking::update_field))
        .route("/api/booking/forms/:id/submit", post(booking::submit))
        .route("/api/contact/forms", post(contact::create_form))
        .route(
            "/api/contact/forms/:id",
            get(contact::get_form).delete(contact::delete_form),
        )
        .route("/api/contact/forms/:id/field", post(contact::update_field))
        .route("/api/contact/forms/:id/submit", post(contact::submit))
        .with_state(state)
}
