use actix_web::web;

pub mod form;
pub mod health;
pub mod plan;
pub mod preference;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(form::index))
        .route("/health", web::get().to(|| async { "OK" }))
        .route("/health/details", web::get().to(health::health_details))
        .service(
            web::scope("/api")
                .route("/plan", web::post().to(plan::plan))
                .route(
                    "/preferences",
                    web::get().to(preference::get_preferences),
                ),
        );
}
