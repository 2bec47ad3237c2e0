use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::catalog::{BusinessInfo, Service};
use crate::icons::Icon;
use crate::slides::CarouselSlide;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceView {
    #[serde(flatten)]
    pub service: Service,
    pub display_price: String,
    /// `None` when the tag is not in the icon set; the client renders no icon.
    pub resolved_icon: Option<&'static str>,
}

impl From<&Service> for ServiceView {
    fn from(service: &Service) -> Self {
        Self {
            display_price: service.display_price(),
            resolved_icon: Icon::resolve(&service.icon).map(|i| i.name()),
            service: service.clone(),
        }
    }
}

// GET /api/services?popular=true
#[derive(Debug, Deserialize)]
pub struct ServicesQuery {
    #[serde(default)]
    pub popular: bool,
}

pub async fn get_services(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ServicesQuery>,
) -> Json<Vec<ServiceView>> {
    let services: Vec<ServiceView> = if query.popular {
        state.catalog.popular().map(ServiceView::from).collect()
    } else {
        state.catalog.iter().map(ServiceView::from).collect()
    };
    Json(services)
}

// GET /api/business
pub async fn get_business(State(state): State<Arc<AppState>>) -> Json<BusinessInfo> {
    Json(state.business.clone())
}

// GET /api/slides
pub async fn get_slides(State(state): State<Arc<AppState>>) -> Json<Vec<CarouselSlide>> {
    Json(state.slides.clone())
}
