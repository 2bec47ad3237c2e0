use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::NaiveDate;
use serde_json::{json, Value};
use tokio::sync::Notify;
use tower::ServiceExt;

use regi_auto::carousel::{Carousel, CarouselHandle};
use regi_auto::catalog::{BusinessInfo, ServiceCatalog};
use regi_auto::clock::FixedClock;
use regi_auto::config::AppConfig;
use regi_auto::forms::FormRegistry;
use regi_auto::handlers;
use regi_auto::models::Submission;
use regi_auto::sink::{SinkError, SubmissionSink};
use regi_auto::slides;
use regi_auto::state::AppState;

// ── Mock Sinks ──

struct MockSink {
    delivered: Arc<Mutex<Vec<Value>>>,
    fail: bool,
}

#[async_trait]
impl SubmissionSink for MockSink {
    async fn deliver(&self, submission: &Submission) -> Result<(), SinkError> {
        if self.fail {
            return Err(SinkError::Network("connection refused".to_string()));
        }
        self.delivered
            .lock()
            .unwrap()
            .push(serde_json::to_value(submission).unwrap());
        Ok(())
    }
}

/// Blocks deliveries until `release` is notified.
struct GateSink {
    release: Arc<Notify>,
}

#[async_trait]
impl SubmissionSink for GateSink {
    async fn deliver(&self, _submission: &Submission) -> Result<(), SinkError> {
        self.release.notified().await;
        Ok(())
    }
}

// ── Helpers ──

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
}

fn test_state(sink: Arc<dyn SubmissionSink>) -> Arc<AppState> {
    let slides = slides::shipped();
    let carousel = CarouselHandle::spawn(
        Carousel::new(slides.len()).unwrap(),
        Duration::from_secs(6),
    );
    Arc::new(AppState {
        config: AppConfig::default(),
        catalog: Arc::new(ServiceCatalog::shipped()),
        business: BusinessInfo::shipped(),
        slides,
        clock: Arc::new(FixedClock::on(today())),
        sink,
        carousel,
        bookings: FormRegistry::new(Duration::from_secs(1800)),
        contacts: FormRegistry::new(Duration::from_secs(1800)),
    })
}

fn test_app_with_sent() -> (Router, Arc<Mutex<Vec<Value>>>) {
    let delivered = Arc::new(Mutex::new(vec![]));
    let sink = MockSink {
        delivered: Arc::clone(&delivered),
        fail: false,
    };
    (handlers::router(test_state(Arc::new(sink))), delivered)
}

fn test_app() -> Router {
    test_app_with_sent().0
}

fn failing_app() -> Router {
    let sink = MockSink {
        delivered: Arc::new(Mutex::new(vec![])),
        fail: true,
    };
    handlers::router(test_state(Arc::new(sink)))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let res = app.clone().oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

fn valid_booking() -> Value {
    json!({
        "serviceId": "brake-service",
        "customerName": "John Doe",
        "customerEmail": "john@example.com",
        "customerPhone": "(305) 555-0123",
        "vehicleMake": "Honda",
        "vehicleModel": "Civic",
        "vehicleYear": 2020,
        "preferredDate": "2026-10-21",
        "preferredTime": "2:00 PM",
        "notes": "Grinding noise when stopping"
    })
}

fn jane_doe() -> Value {
    json!({
        "name": "Jane Doe",
        "email": "jane@x.com",
        "phone": "3055550100",
        "subject": "AC noise",
        "message": "My AC makes a rattling sound at idle."
    })
}

async fn create_form(app: &Router, kind: &str) -> String {
    let (status, json) = send(app, "POST", &format!("/api/{kind}/forms"), None).await;
    assert_eq!(status, StatusCode::CREATED);
    json["id"].as_str().unwrap().to_string()
}

// ── Catalog & Health ──

#[tokio::test]
async fn test_health() {
    let app = test_app();
    let (status, json) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_services_listing() {
    let app = test_app();
    let (status, json) = send(&app, "GET", "/api/services", None).await;
    assert_eq!(status, StatusCode::OK);

    let services = json.as_array().unwrap();
    assert_eq!(services.len(), 9);
    assert_eq!(services[0]["id"], "oil-change");
    assert_eq!(services[0]["displayPrice"], "$49.99");
    assert_eq!(services[0]["popular"], true);
    assert_eq!(services[2]["icon"], "CircleStop");
    assert_eq!(services[2]["resolvedIcon"], "Disc");
}

#[tokio::test]
async fn test_popular_services_only() {
    let app = test_app();
    let (status, json) = send(&app, "GET", "/api/services?popular=true", None).await;
    assert_eq!(status, StatusCode::OK);

    let ids: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["oil-change", "tune-up", "engine-repair"]);
}

#[tokio::test]
async fn test_business_and_slides() {
    let app = test_app();
    let (_, business) = send(&app, "GET", "/api/business", None).await;
    assert_eq!(business["primaryPhone"], "786-681-2854");

    let (_, slides) = send(&app, "GET", "/api/slides", None).await;
    assert_eq!(slides.as_array().unwrap().len(), 5);
    assert_eq!(slides[4]["title"], "Call Today!");
}

// ── Carousel ──

#[tokio::test]
async fn test_carousel_navigation() {
    let app = test_app();

    let (status, json) = send(&app, "GET", "/api/carousel", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["index"], 0);
    assert_eq!(json["slide"]["id"], 1);

    let (_, json) = send(&app, "POST", "/api/carousel/previous", None).await;
    assert_eq!(json["index"], 4);
    assert_eq!(json["direction"], "backward");

    let (_, json) = send(&app, "POST", "/api/carousel/next", None).await;
    assert_eq!(json["index"], 0);
    assert_eq!(json["direction"], "forward");

    let (_, json) = send(&app, "POST", "/api/carousel/goto/3", None).await;
    assert_eq!(json["index"], 3);
    assert_eq!(json["slide"]["title"], "AC & Electrical Services");

    let (status, _) = send(&app, "POST", "/api/carousel/goto/7", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_carousel_gesture() {
    let app = test_app();

    let (_, json) = send(
        &app,
        "POST",
        "/api/carousel/gesture",
        Some(json!({"offset": -50.0, "velocity": 300.0})),
    )
    .await;
    assert_eq!(json["index"], 1);

    let (_, json) = send(
        &app,
        "POST",
        "/api/carousel/gesture",
        Some(json!({"offset": 50.0, "velocity": 50.0})),
    )
    .await;
    assert_eq!(json["index"], 1);
}

// ── Booking Form ──

#[tokio::test]
async fn test_booking_form_starts_with_current_year() {
    let app = test_app();
    let (status, json) = send(&app, "POST", "/api/booking/forms", None).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["status"], "idle");
    assert_eq!(json["draft"]["vehicleYear"], 2026);
    assert_eq!(json["draft"]["customerName"], "");
    assert!(json["selectedService"].is_null());
}

#[tokio::test]
async fn test_booking_select_service_and_update_field() {
    let app = test_app();
    let id = create_form(&app, "booking").await;

    let (status, json) = send(
        &app,
        "POST",
        &format!("/api/booking/forms/{id}/service"),
        Some(json!({"serviceId": "engine-repair"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["selectedService"]["name"], "Engine Repair");

    let (status, json) = send(
        &app,
        "POST",
        &format!("/api/booking/forms/{id}/field"),
        Some(json!({"name": "vehicleMake", "value": "Toyota"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["draft"]["vehicleMake"], "Toyota");
    assert_eq!(json["draft"]["serviceId"], "engine-repair");

    let (status, _) = send(
        &app,
        "POST",
        &format!("/api/booking/forms/{id}/field"),
        Some(json!({"name": "servicePrice", "value": "0"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        "POST",
        &format!("/api/booking/forms/{id}/field"),
        Some(json!({"name": "preferredDate", "value": "next tuesday"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_booking_submit_invalid_returns_field_errors() {
    let (app, delivered) = test_app_with_sent();
    let id = create_form(&app, "booking").await;

    let mut draft = valid_booking();
    draft["customerPhone"] = json!("");
    let (status, json) = send(
        &app,
        "POST",
        &format!("/api/booking/forms/{id}/submit"),
        Some(draft),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let fields = json["fields"].as_object().unwrap();
    assert_eq!(fields.len(), 1);
    assert_eq!(fields["customerPhone"], "Please enter a valid phone number");
    assert!(delivered.lock().unwrap().is_empty());

    let (_, json) = send(&app, "GET", &format!("/api/booking/forms/{id}"), None).await;
    assert_eq!(json["status"], "idle");
    assert_eq!(json["errors"]["customerPhone"], "Please enter a valid phone number");
}

#[tokio::test]
async fn test_booking_year_beyond_next_year_rejected() {
    let app = test_app();
    let id = create_form(&app, "booking").await;

    let mut draft = valid_booking();
    draft["vehicleYear"] = json!(2028);
    let (status, json) = send(
        &app,
        "POST",
        &format!("/api/booking/forms/{id}/submit"),
        Some(draft),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(json["fields"]["vehicleYear"].is_string());
}

#[tokio::test(start_paused = true)]
async fn test_booking_submit_success_resets_after_five_seconds() {
    let (app, delivered) = test_app_with_sent();
    let id = create_form(&app, "booking").await;

    let (status, json) = send(
        &app,
        "POST",
        &format!("/api/booking/forms/{id}/submit"),
        Some(valid_booking()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "success");
    assert_eq!(
        json["banner"],
        "Booking Confirmed! We will send you a confirmation email shortly. See you soon!"
    );
    assert_eq!(json["draft"]["vehicleYear"], 2026);
    assert_eq!(json["draft"]["serviceId"], "");
    assert!(json["draft"]["preferredDate"].is_null());

    {
        let sent = delivered.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0]["kind"], "booking");
        assert_eq!(sent[0]["data"]["serviceName"], "Brake Service");
        assert_eq!(sent[0]["data"]["status"], "pending");
        assert_eq!(sent[0]["data"]["paymentStatus"], "pending");
    }

    tokio::time::sleep(Duration::from_millis(4999)).await;
    let (_, json) = send(&app, "GET", &format!("/api/booking/forms/{id}"), None).await;
    assert_eq!(json["status"], "success");

    tokio::time::sleep(Duration::from_millis(2)).await;
    let (_, json) = send(&app, "GET", &format!("/api/booking/forms/{id}"), None).await;
    assert_eq!(json["status"], "idle");
    assert!(json["banner"].is_null());
}

#[tokio::test]
async fn test_booking_sink_failure_shows_fallback_phone() {
    let app = failing_app();
    let id = create_form(&app, "booking").await;

    let (status, json) = send(
        &app,
        "POST",
        &format!("/api/booking/forms/{id}/submit"),
        Some(valid_booking()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "error");
    assert_eq!(
        json["banner"],
        "Something went wrong. Please try again or call us at 786-681-2854"
    );
    assert_eq!(json["failure"], "network");
    // draft is kept so the user can retry
    assert_eq!(json["draft"]["customerName"], "John Doe");
}

#[tokio::test(start_paused = true)]
async fn test_abandoned_form_expires() {
    let app = test_app();
    let kept = create_form(&app, "contact").await;
    let abandoned = create_form(&app, "contact").await;

    tokio::time::advance(Duration::from_secs(1000)).await;
    let (status, _) = send(&app, "GET", &format!("/api/contact/forms/{kept}"), None).await;
    assert_eq!(status, StatusCode::OK);

    tokio::time::advance(Duration::from_secs(900)).await;
    let (status, _) = send(&app, "GET", &format!("/api/contact/forms/{abandoned}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, "GET", &format!("/api/contact/forms/{kept}"), None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_booking_submit_while_submitting_conflicts() {
    let release = Arc::new(Notify::new());
    let sink = GateSink {
        release: Arc::clone(&release),
    };
    let app = handlers::router(test_state(Arc::new(sink)));
    let id = create_form(&app, "booking").await;

    let first = {
        let app = app.clone();
        let uri = format!("/api/booking/forms/{id}/submit");
        tokio::spawn(async move { send(&app, "POST", &uri, Some(valid_booking())).await })
    };

    // wait for the first request to reach the sink
    loop {
        let (_, json) = send(&app, "GET", &format!("/api/booking/forms/{id}"), None).await;
        if json["status"] == "submitting" {
            break;
        }
        tokio::task::yield_now().await;
    }

    let mut other = valid_booking();
    other["customerName"] = json!("Someone Else");
    let (status, _) = send(
        &app,
        "POST",
        &format!("/api/booking/forms/{id}/submit"),
        Some(other),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, json) = send(&app, "GET", &format!("/api/booking/forms/{id}"), None).await;
    assert_eq!(json["status"], "submitting");
    assert_eq!(json["draft"]["customerName"], "John Doe");

    release.notify_one();
    let (status, json) = first.await.unwrap();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "success");
}

#[tokio::test]
async fn test_delete_form() {
    let app = test_app();
    let id = create_form(&app, "booking").await;

    let (status, _) = send(&app, "DELETE", &format!("/api/booking/forms/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, "GET", &format!("/api/booking/forms/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_form_not_found() {
    let app = test_app();
    let (status, json) = send(
        &app,
        "GET",
        "/api/contact/forms/6f9619ff-8b86-d011-b42d-00c04fc964ff",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json["error"].as_str().unwrap().contains("contact form"));
}

// ── Contact Form ──

#[tokio::test(start_paused = true)]
async fn test_contact_end_to_end() {
    let (app, delivered) = test_app_with_sent();
    let id = create_form(&app, "contact").await;

    for (name, value) in jane_doe().as_object().unwrap() {
        let (status, _) = send(
            &app,
            "POST",
            &format!("/api/contact/forms/{id}/field"),
            Some(json!({"name": name, "value": value})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, json) = send(&app, "POST", &format!("/api/contact/forms/{id}/submit"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "success");
    assert_eq!(json["banner"], "Thank you! We'll get back to you within 24 hours.");
    assert_eq!(json["draft"]["name"], "");
    assert_eq!(json["draft"]["message"], "");

    {
        let sent = delivered.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0]["kind"], "contact");
        assert_eq!(sent[0]["data"]["subject"], "AC noise");
    }

    tokio::time::sleep(Duration::from_millis(5001)).await;
    let (_, json) = send(&app, "GET", &format!("/api/contact/forms/{id}"), None).await;
    assert_eq!(json["status"], "idle");
}

#[tokio::test]
async fn test_contact_invalid_message() {
    let app = test_app();
    let id = create_form(&app, "contact").await;

    let mut draft = jane_doe();
    draft["message"] = json!("Help");
    let (status, json) = send(
        &app,
        "POST",
        &format!("/api/contact/forms/{id}/submit"),
        Some(draft),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        json["fields"]["message"],
        "Message must be at least 10 characters"
    );
    assert!(json["fields"].get("name").is_none());
}
