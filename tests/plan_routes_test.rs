mod common;

use actix_web::{test, web, App, HttpResponse, HttpServer};
use serial_test::serial;
use tokio::time::{sleep, Duration};

use common::TestApp;

const RESULTS_QUERY: &str = "/api/plan?source=BOM&destination=DEL&theme=Heritage+%26+Culture&depart_date=2025-03-01&return_date=2025-03-05&num_days=4&trip_type=tourist";

async fn empty_plan() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({}))
}

async fn variant_plan() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "source": "BOM",
        "destination": "DEL",
        "flights": [
            {"name": "IndiGo", "duration_text": "2h 10m"}
        ],
        "hotels": {
            "luxury": [{"name": "The Imperial", "location": "Janpath"}]
        },
        "itinerary": [{"morning": "Red Fort", "afternoon": "Chandni Chowk", "evening": "India Gate"}],
        "transport": {"best_way": "Metro", "avg_cost": "₹300/day"},
        "weather": {"summary": "Warm", "temperature": "31°C"}
    }))
}

async fn failing_plan() -> HttpResponse {
    HttpResponse::InternalServerError().body("boom")
}

// Bind a stub planner on an OS-assigned port and return its base URL.
macro_rules! start_stub {
    ($handler:ident) => {{
        let server = HttpServer::new(|| {
            App::new().route("/api/generate_plan", web::post().to($handler))
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .unwrap();
        let addr = server.addrs()[0];
        actix_rt::spawn(server.run());
        sleep(Duration::from_millis(100)).await;
        format!("http://{}", addr)
    }};
}

#[actix_rt::test]
#[serial]
async fn test_empty_upstream_response_renders_all_empty_sections() {
    let base_url = start_stub!(empty_plan);

    let test_app = TestApp::with_planner(base_url);
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri(RESULTS_QUERY).to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["source"], "BOM");
    assert_eq!(body["destination"], "DEL");

    assert_eq!(body["flights"]["empty"], "No flights found");
    assert_eq!(body["flights"]["flights"].as_array().unwrap().len(), 0);

    let tiers = body["hotels"]["tiers"].as_array().unwrap();
    assert_eq!(tiers.len(), 3);
    for tier in tiers {
        assert_eq!(tier["empty"], "No hotels found");
    }

    assert_eq!(body["itinerary"]["empty"], "No itinerary available");
    assert_eq!(body["places"]["attractions"]["empty"], "No attractions available");
    assert_eq!(body["places"]["restaurants"]["empty"], "No restaurants available");
    assert_eq!(
        body["essentials"]["transport"]["best_way"],
        "Local transit details unavailable"
    );
    assert_eq!(body["essentials"]["weather"]["summary"], "Weather data unavailable");
}

#[actix_rt::test]
#[serial]
async fn test_plan_normalizes_provider_variant_fields() {
    let base_url = start_stub!(variant_plan);

    let test_app = TestApp::with_planner(base_url);
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri(RESULTS_QUERY).to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;

    let flight = &body["flights"]["flights"][0];
    assert_eq!(flight["airline"], "IndiGo");
    assert_eq!(flight["meta"], "2h 10m • N/A");
    assert_eq!(flight["price"], "N/A");
    assert_eq!(flight["logo_sources"], serde_json::json!(["/logos/default.png"]));
    assert!(body["flights"]["empty"].is_null());

    let tiers = body["hotels"]["tiers"].as_array().unwrap();
    assert_eq!(tiers[0]["hotels"][0]["area"], "Janpath");
    assert_eq!(tiers[1]["empty"], "No hotels found");
    assert_eq!(tiers[2]["empty"], "No hotels found");

    assert_eq!(body["itinerary"]["days"][0]["label"], "Day 1");
    assert_eq!(body["essentials"]["transport"]["best_way"], "Metro");
    assert_eq!(body["essentials"]["weather"]["temperature"], "31°C");
}

#[actix_rt::test]
#[serial]
async fn test_upstream_error_status_fails_with_generic_message() {
    let base_url = start_stub!(failing_plan);

    let test_app = TestApp::with_planner(base_url);
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri(RESULTS_QUERY).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 500);

    let body = test::read_body(resp).await;
    assert_eq!(body, "Failed to load plan.");
}

#[actix_rt::test]
#[serial]
async fn test_unreachable_upstream_fails_with_generic_message() {
    // Nothing listens on port 1.
    let test_app = TestApp::with_planner("http://127.0.0.1:1");
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri(RESULTS_QUERY).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 500);

    let body = test::read_body(resp).await;
    assert_eq!(body, "Failed to load plan.");
}
