use std::convert::Infallible;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::Json;
use serde::{Deserialize, Serialize};
use tokio_stream::wrappers::WatchStream;
use tokio_stream::StreamExt;

use crate::carousel::{CarouselState, Direction};
use crate::errors::AppError;
use crate::slides::CarouselSlide;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CarouselView {
    pub index: usize,
    pub direction: Direction,
    pub slide: Option<CarouselSlide>,
}

fn view(state: &AppState, carousel: CarouselState) -> CarouselView {
    CarouselView {
        index: carousel.index,
        direction: carousel.direction,
        slide: state.slides.get(carousel.index).cloned(),
    }
}

// GET /api/carousel
pub async fn get_carousel(State(state): State<Arc<AppState>>) -> Json<CarouselView> {
    Json(view(&state, state.carousel.state()))
}

// POST /api/carousel/next
pub async fn next(State(state): State<Arc<AppState>>) -> Result<Json<CarouselView>, AppError> {
    let carousel = state.carousel.next().await?;
    Ok(Json(view(&state, carousel)))
}

// POST /api/carousel/previous
pub async fn previous(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CarouselView>, AppError> {
    let carousel = state.carousel.previous().await?;
    Ok(Json(view(&state, carousel)))
}

// POST /api/carousel/goto/:index
pub async fn go_to(
    State(state): State<Arc<AppState>>,
    Path(index): Path<usize>,
) -> Result<Json<CarouselView>, AppError> {
    let carousel = state.carousel.go_to(index).await?;
    Ok(Json(view(&state, carousel)))
}

// POST /api/carousel/gesture
#[derive(Debug, Deserialize)]
pub struct GestureRequest {
    pub offset: f64,
    pub velocity: f64,
}

pub async fn gesture(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GestureRequest>,
) -> Result<Json<CarouselView>, AppError> {
    let carousel = state.carousel.gesture(req.offset, req.velocity).await?;
    Ok(Json(view(&state, carousel)))
}

// GET /api/carousel/events
pub async fn events_stream(
    State(state): State<Arc<AppState>>,
) -> Sse<impl tokio_stream::Stream<Item = Result<Event, Infallible>>> {
    let app = Arc::clone(&state);
    let stream = WatchStream::new(state.carousel.subscribe()).map(move |carousel| {
        let data = serde_json::to_string(&view(&app, carousel)).unwrap_or_default();
        Ok::<_, Infallible>(Event::default().data(data).event("slide"))
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}
