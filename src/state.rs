use reqwest::Client;

use crate::config::Config;
use crate::services::{
    llm::groq::GroqProvider, map_service::MapService, weather_service::WeatherService,
};

/// Shared, read-only handles injected into every handler.
pub struct AppState {
    pub config: Config,
    pub weather: WeatherService,
    pub maps: MapService,
    pub llm: GroqProvider,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        // One connection pool for all three remote APIs.
        let client = Client::new();

        let weather = WeatherService::new(
            client.clone(),
            config.weather_api_key.clone(),
            config.weather_api_url.clone(),
        );
        let maps = MapService::new(
            client.clone(),
            config.maps_api_key.clone(),
            config.geocoding_api_url.clone(),
        );
        let llm = GroqProvider::new(
            client,
            config.llm_api_key.clone(),
            config.llm_api_url.clone(),
            config.llm_model.clone(),
        );

        Self {
            config,
            weather,
            maps,
            llm,
        }
    }
}
