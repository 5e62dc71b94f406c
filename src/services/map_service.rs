//! Map snippet for the itinerary page.
//!
//! The city is geocoded with the Google Maps Geocoding API and drawn with
//! Leaflet on OpenStreetMap tiles. The snippet is a self-contained iframe so
//! its scripts run even when the page inserts it with `innerHTML`.

use log::{info, warn};
use reqwest::Client;
use serde::Deserialize;
use std::error::Error;
use std::fmt;
use url::Url;

const ZOOM: u8 = 12;

const MAP_DOCUMENT: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8"/>
<link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css"/>
<script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
<style>html, body, #map { height: 100%; margin: 0; }</style>
</head>
<body>
<div id="map"></div>
<script>
var map = L.map('map').setView([__LAT__, __LNG__], __ZOOM__);
L.tileLayer('https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png', {
  attribution: '&copy; OpenStreetMap contributors'
}).addTo(map);
L.marker([__LAT__, __LNG__]).addTo(map).bindPopup(__POPUP__);
</script>
</body>
</html>"#;

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>,
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    geometry: GeocodeGeometry,
}

#[derive(Debug, Deserialize)]
struct GeocodeGeometry {
    location: Coordinates,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug)]
pub enum MapError {
    Misconfigured(String),
    Http(reqwest::Error),
    Geocoding(String),
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::Misconfigured(msg) => write!(f, "Maps service misconfigured: {}", msg),
            MapError::Http(err) => write!(f, "HTTP error: {}", err),
            MapError::Geocoding(msg) => write!(f, "Geocoding error: {}", msg),
        }
    }
}

impl Error for MapError {}

impl From<reqwest::Error> for MapError {
    fn from(err: reqwest::Error) -> Self {
        MapError::Http(err)
    }
}

#[derive(Clone)]
pub struct MapService {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl MapService {
    pub fn new(client: Client, api_key: Option<String>, base_url: impl Into<String>) -> Self {
        Self {
            client,
            api_key,
            base_url: base_url.into(),
        }
    }

    pub async fn geocode(&self, city: &str) -> Result<Coordinates, MapError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| MapError::Misconfigured("GOOGLE_MAPS_API_KEY not set".to_string()))?;

        let url = Url::parse_with_params(
            &format!(
                "{}/maps/api/geocode/json",
                self.base_url.trim_end_matches('/')
            ),
            &[("address", city), ("key", api_key)],
        )
        .map_err(|e| MapError::Misconfigured(format!("invalid geocoding API URL: {}", e)))?;

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(MapError::Geocoding(format!(
                "geocoding API returned {}",
                response.status()
            )));
        }

        let geocoded: GeocodeResponse = response.json().await?;
        match geocoded.status.as_str() {
            "OK" => {}
            "REQUEST_DENIED" => {
                return Err(MapError::Misconfigured(
                    geocoded
                        .error_message
                        .unwrap_or_else(|| "request denied".to_string()),
                ))
            }
            other => return Err(MapError::Geocoding(other.to_string())),
        }

        geocoded
            .results
            .into_iter()
            .next()
            .map(|result| result.geometry.location)
            .ok_or_else(|| MapError::Geocoding(format!("no results for {}", city)))
    }

    /// Never fails: a city that cannot be placed gets a short notice instead.
    pub async fn render(&self, city: &str) -> String {
        match self.geocode(city).await {
            Ok(coordinates) => {
                info!(
                    "Geocoded {} to ({:.4}, {:.4})",
                    city, coordinates.lat, coordinates.lng
                );
                map_html(city, coordinates)
            }
            Err(e) => {
                warn!("Map unavailable for {}: {}", city, e);
                unavailable_html(city)
            }
        }
    }
}

pub fn map_html(city: &str, coordinates: Coordinates) -> String {
    // The escaped city has no quotes or angle brackets left, so its JSON form
    // is a safe JavaScript string literal.
    let popup = serde_json::Value::String(escape_html(city)).to_string();

    let document = MAP_DOCUMENT
        .replace("__LAT__", &coordinates.lat.to_string())
        .replace("__LNG__", &coordinates.lng.to_string())
        .replace("__ZOOM__", &ZOOM.to_string())
        .replace("__POPUP__", &popup);

    format!(
        r#"<iframe title="Map of {}" srcdoc="{}" style="width: 100%; height: 400px; border: 0;" loading="lazy"></iframe>"#,
        escape_html(city),
        escape_html(&document)
    )
}

pub fn unavailable_html(city: &str) -> String {
    format!(r#"<p class="map-unavailable">Map unavailable for {}.</p>"#, escape_html(city))
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
