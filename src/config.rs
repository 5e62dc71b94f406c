use std::env;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;

pub const DEFAULT_WEATHER_API_URL: &str = "https://api.openweathermap.org";
pub const DEFAULT_GEOCODING_API_URL: &str = "https://maps.googleapis.com";
pub const DEFAULT_LLM_API_URL: &str = "https://api.groq.com";
pub const DEFAULT_LLM_MODEL: &str = "llama3-70b-8192";

/// Process configuration, read once at startup.
///
/// The three API keys are optional on purpose: a missing key does not stop
/// the server, it shows up later as a "misconfigured" error from the service
/// that needed it.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub weather_api_key: Option<String>,
    pub maps_api_key: Option<String>,
    pub llm_api_key: Option<String>,
    pub weather_api_url: String,
    pub geocoding_api_url: String,
    pub llm_api_url: String,
    pub llm_model: String,
}

impl Config {
    pub fn from_env() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| HOST.to_string());
        let port: u16 = env::var("PORT")
            .unwrap_or_else(|_| PORT.to_string())
            .parse()
            .unwrap_or(PORT);

        Self {
            host,
            port,
            weather_api_key: secret("WEATHER_API_KEY"),
            maps_api_key: secret("GOOGLE_MAPS_API_KEY"),
            llm_api_key: secret("GROQ_API_KEY"),
            weather_api_url: env::var("WEATHER_API_URL")
                .unwrap_or_else(|_| DEFAULT_WEATHER_API_URL.to_string()),
            geocoding_api_url: env::var("GEOCODING_API_URL")
                .unwrap_or_else(|_| DEFAULT_GEOCODING_API_URL.to_string()),
            llm_api_url: env::var("LLM_API_URL").unwrap_or_else(|_| DEFAULT_LLM_API_URL.to_string()),
            llm_model: env::var("LLM_MODEL").unwrap_or_else(|_| DEFAULT_LLM_MODEL.to_string()),
        }
    }
}

// An empty variable counts as unset.
fn secret(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}
