use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;
use log::{info, warn};

use trip_planner::{config::Config, routes, state::AppState};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    env_logger::init_from_env(Env::default().default_filter_or("info"));
    info!("Application starting...");

    let config = Config::from_env();
    for (name, key) in [
        ("WEATHER_API_KEY", &config.weather_api_key),
        ("GOOGLE_MAPS_API_KEY", &config.maps_api_key),
        ("GROQ_API_KEY", &config.llm_api_key),
    ] {
        if key.is_none() {
            warn!("{} is not set; requests needing it will fail", name);
        }
    }

    let host = config.host.clone();
    let port = config.port;
    let state = web::Data::new(AppState::new(config));

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(routes::configure)
    })
    .bind((host, port))?
    .run()
    .await
}
