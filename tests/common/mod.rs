#![allow(dead_code)]

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App};
use mockito::{Matcher, Mock, ServerGuard};

use trip_planner::{config::Config, routes, state::AppState};

pub const WEATHER_KEY: &str = "test-weather-key";
pub const MAPS_KEY: &str = "test-maps-key";
pub const GROQ_KEY: &str = "test-groq-key";
pub const MODEL: &str = "llama3-70b-8192";

/// Three mock servers standing in for the weather, geocoding and LLM APIs.
pub struct TestApp {
    pub weather: ServerGuard,
    pub maps: ServerGuard,
    pub llm: ServerGuard,
    pub config: Config,
}

impl TestApp {
    pub async fn new() -> Self {
        let weather = mockito::Server::new_async().await;
        let maps = mockito::Server::new_async().await;
        let llm = mockito::Server::new_async().await;

        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 0,
            weather_api_key: Some(WEATHER_KEY.to_string()),
            maps_api_key: Some(MAPS_KEY.to_string()),
            llm_api_key: Some(GROQ_KEY.to_string()),
            weather_api_url: weather.url(),
            geocoding_api_url: maps.url(),
            llm_api_url: llm.url(),
            llm_model: MODEL.to_string(),
        };

        Self {
            weather,
            maps,
            llm,
            config,
        }
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(AppState::new(self.config.clone())))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .configure(routes::configure)
    }

    pub async fn mock_weather(&mut self, city: &str, description: &str, temp: &str) -> Mock {
        self.weather
            .mock("GET", "/data/2.5/weather")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("q".into(), city.into()),
                Matcher::UrlEncoded("appid".into(), WEATHER_KEY.into()),
                Matcher::UrlEncoded("units".into(), "metric".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(format!(
                r#"{{"weather":[{{"description":"{}"}}],"main":{{"temp":{}}}}}"#,
                description, temp
            ))
            .create_async()
            .await
    }

    pub async fn mock_geocode(&mut self, city: &str, lat: f64, lng: f64) -> Mock {
        self.maps
            .mock("GET", "/maps/api/geocode/json")
            .match_query(Matcher::UrlEncoded("address".into(), city.into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(format!(
                r#"{{"status":"OK","results":[{{"geometry":{{"location":{{"lat":{},"lng":{}}}}}}}]}}"#,
                lat, lng
            ))
            .create_async()
            .await
    }

    /// Answers every chat completion whose body matches `body` with `reply`.
    pub async fn mock_completion(&mut self, body: Matcher, reply: &str) -> Mock {
        let response = serde_json::json!({
            "id": "chatcmpl-test",
            "object": "chat.completion",
            "model": MODEL,
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": reply },
                "finish_reason": "stop"
            }]
        });

        self.llm
            .mock("POST", "/openai/v1/chat/completions")
            .match_header("authorization", format!("Bearer {}", GROQ_KEY).as_str())
            .match_body(body)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(response.to_string())
            .create_async()
            .await
    }
}
