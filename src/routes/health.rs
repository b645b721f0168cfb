use actix_web::{HttpResponse, Responder};
use serde::Serialize;
use std::collections::HashMap;
use std::env;

use crate::services::planner_client::DEFAULT_BASE_URL;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    services: HashMap<String, ServiceStatus>,
    environment: String,
    version: String,
}

#[derive(Serialize, Clone)]
struct ServiceStatus {
    status: String,
    details: Option<String>,
}

pub async fn health_check() -> impl Responder {
    let mut health = HealthStatus {
        status: "ok".to_string(),
        services: HashMap::new(),
        environment: env::var("RUST_ENV").unwrap_or("development".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    let planner_result = check_planner_api();
    health
        .services
        .insert("planner_api".to_string(), planner_result.clone());

    if planner_result.status != "ok" {
        health.status = "degraded".to_string();
    }

    HttpResponse::Ok().json(health)
}

fn check_planner_api() -> ServiceStatus {
    // The upstream URL has a development default, so absence is informational
    // rather than a failure condition.
    match env::var("PLANNER_API_URL") {
        Ok(url) if !url.is_empty() => ServiceStatus {
            status: "ok".to_string(),
            details: Some(format!("Planner endpoint configured ({})", url)),
        },
        _ => ServiceStatus {
            status: "ok".to_string(),
            details: Some(format!(
                "PLANNER_API_URL not set, using default ({})",
                DEFAULT_BASE_URL
            )),
        },
    }
}
