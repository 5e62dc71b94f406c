//! Current weather for a city, from the OpenWeatherMap "current weather" API.
//!
//! Failures are typed so callers can tell a missing or rejected key apart
//! from an outage or a response in an unexpected shape. The prompt only ever
//! sees [`summary_or_fallback`], which never fails.

use log::{info, warn};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::error::Error;
use std::fmt;
use url::Url;

pub const FALLBACK_WEATHER: &str = "Unknown weather";

#[derive(Debug, Deserialize)]
struct OpenWeatherResponse {
    #[serde(default)]
    weather: Vec<OpenWeatherCondition>,
    main: OpenWeatherMain,
}

#[derive(Debug, Deserialize)]
struct OpenWeatherCondition {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OpenWeatherMain {
    temp: serde_json::Number, // kept as sent: 30 stays "30", 28.5 stays "28.5"
}

// Error body, e.g. {"cod":"404","message":"city not found"}.
#[derive(Debug, Deserialize)]
struct OpenWeatherErrorBody {
    message: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub description: String,
    pub temperature: serde_json::Number,
}

impl WeatherReport {
    pub fn summary(&self) -> String {
        format!("{}, {}°C", capitalize(&self.description), self.temperature)
    }
}

#[derive(Debug)]
pub enum WeatherError {
    Misconfigured(String),
    Unreachable(String),
    CityNotFound(String),
    MalformedResponse(String),
}

impl WeatherError {
    pub fn kind(&self) -> &'static str {
        match self {
            WeatherError::Misconfigured(_) => "misconfigured",
            WeatherError::Unreachable(_) => "unreachable",
            WeatherError::CityNotFound(_) => "city_not_found",
            WeatherError::MalformedResponse(_) => "malformed_response",
        }
    }
}

impl fmt::Display for WeatherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeatherError::Misconfigured(msg) => write!(f, "Weather service misconfigured: {}", msg),
            WeatherError::Unreachable(msg) => write!(f, "Weather service unreachable: {}", msg),
            WeatherError::CityNotFound(msg) => write!(f, "No weather for this city: {}", msg),
            WeatherError::MalformedResponse(msg) => {
                write!(f, "Malformed weather response: {}", msg)
            }
        }
    }
}

impl Error for WeatherError {}

impl From<reqwest::Error> for WeatherError {
    fn from(err: reqwest::Error) -> Self {
        WeatherError::Unreachable(err.to_string())
    }
}

#[derive(Clone)]
pub struct WeatherService {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl WeatherService {
    pub fn new(client: Client, api_key: Option<String>, base_url: impl Into<String>) -> Self {
        Self {
            client,
            api_key,
            base_url: base_url.into(),
        }
    }

    /// One GET per call, no retry and no caching.
    pub async fn lookup(&self, city: &str) -> Result<WeatherReport, WeatherError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| WeatherError::Misconfigured("WEATHER_API_KEY not set".to_string()))?;

        let url = Url::parse_with_params(
            &format!("{}/data/2.5/weather", self.base_url.trim_end_matches('/')),
            &[("q", city), ("appid", api_key), ("units", "metric")],
        )
        .map_err(|e| WeatherError::Misconfigured(format!("invalid weather API URL: {}", e)))?;

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(WeatherError::Misconfigured(format!(
                "weather API rejected the key ({})",
                status
            )));
        }
        if status == StatusCode::NOT_FOUND || status == StatusCode::BAD_REQUEST {
            let body = response.text().await.unwrap_or_default();
            return Err(WeatherError::CityNotFound(format!(
                "weather API answered {} for {:?}: {}",
                status,
                city,
                error_message(&body)
            )));
        }
        if !status.is_success() {
            return Err(WeatherError::Unreachable(format!(
                "weather API returned {}",
                status
            )));
        }

        let body = response.text().await?;
        let parsed: OpenWeatherResponse = serde_json::from_str(&body)
            .map_err(|e| WeatherError::MalformedResponse(e.to_string()))?;

        let condition = parsed.weather.into_iter().next().ok_or_else(|| {
            WeatherError::MalformedResponse("response has no weather conditions".to_string())
        })?;

        info!("Weather for {}: {}, {}", city, condition.description, parsed.main.temp);

        Ok(WeatherReport {
            description: condition.description,
            temperature: parsed.main.temp,
        })
    }
}

/// The line interpolated into the prompt: the report summary, or
/// [`FALLBACK_WEATHER`] for every kind of failure.
pub fn summary_or_fallback(outcome: &Result<WeatherReport, WeatherError>) -> String {
    match outcome {
        Ok(report) => report.summary(),
        Err(err) => {
            warn!("{}", err);
            FALLBACK_WEATHER.to_string()
        }
    }
}

// The API's own "message" field, or the raw body when it has none.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<OpenWeatherErrorBody>(body) {
        Ok(OpenWeatherErrorBody {
            message: Some(message),
        }) => message,
        _ => body.trim().to_string(),
    }
}

// First character upper-cased, the rest lower-cased.
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
