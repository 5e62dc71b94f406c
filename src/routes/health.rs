use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use std::collections::HashMap;
use std::env;

use crate::state::AppState;

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

/*
    /health/details
    Only checks that each remote service has a key; nothing is called.
*/
pub async fn health_details(data: web::Data<AppState>) -> impl Responder {
    let config = &data.config;
    let mut health = HealthStatus {
        status: "ok".to_string(),
        services: HashMap::new(),
        environment: env::var("RUST_ENV").unwrap_or("development".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    let weather = check_key(
        "WEATHER_API_KEY",
        config.weather_api_key.as_deref(),
        &config.weather_api_url,
    );
    let maps = check_key(
        "GOOGLE_MAPS_API_KEY",
        config.maps_api_key.as_deref(),
        &config.geocoding_api_url,
    );
    let llm = check_key(
        "GROQ_API_KEY",
        config.llm_api_key.as_deref(),
        &format!("{} ({})", config.llm_api_url, data.llm.model()),
    );

    // Any missing key degrades the service as a whole
    if weather.status != "ok" || maps.status != "ok" || llm.status != "ok" {
        health.status = "degraded".to_string();
    }

    health.services.insert("weather".to_string(), weather);
    health.services.insert("maps".to_string(), maps);
    health.services.insert("llm".to_string(), llm);

    HttpResponse::Ok().json(health)
}

fn check_key(name: &str, key: Option<&str>, endpoint: &str) -> ServiceStatus {
    match key {
        Some(key) => ServiceStatus {
            status: "ok".to_string(),
            details: Some(format!(
                "{} configured ({}), endpoint {}",
                name,
                mask_key(key),
                endpoint
            )),
        },
        None => ServiceStatus {
            status: "error".to_string(),
            details: Some(format!("{} not configured", name)),
        },
    }
}

fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() > 8 {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}***{}", head, tail)
    } else {
        "***".to_string()
    }
}
