use actix_web::{web, HttpResponse, Responder};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use log::{error, info, warn};
use serde_json::json;

use crate::models::plan::{
    split_interests, PdfAttachment, PlanRequest, PlanResponse, WeatherErrorBody, WeatherStatus,
};
use crate::models::trip::TripState;
use crate::services::itinerary_service::create_itinerary;
use crate::services::markdown_service::render_markdown;
use crate::services::pdf_service::{pdf_filename, render_itinerary_pdf};
use crate::state::AppState;

/*
    /api/plan
*/
pub async fn plan(data: web::Data<AppState>, input: web::Json<PlanRequest>) -> impl Responder {
    let request = input.into_inner();
    info!(
        "Planning trip to {} (preferences: {:?}, pdf: {})",
        request.city, request.preferences, request.export_pdf
    );

    let state = TripState::new(
        request.city,
        split_interests(&request.interests),
        request.preferences,
    );

    let planned = match create_itinerary(state, &data.weather, &data.llm).await {
        Ok(planned) => planned,
        Err(err) => {
            error!("Failed to generate itinerary: {}", err);
            return HttpResponse::BadGateway().json(json!({
                "error": format!("Failed to generate itinerary: {}", err)
            }));
        }
    };
    let trip = planned.state;

    let map_html = data.maps.render(&trip.city).await;

    let pdf = if request.export_pdf {
        export_pdf(&trip).await
    } else {
        None
    };

    HttpResponse::Ok().json(PlanResponse {
        weather: WeatherStatus {
            summary: trip.weather_info,
            error: planned.weather_error.map(|err| WeatherErrorBody {
                kind: err.kind().to_string(),
                message: err.to_string(),
            }),
        },
        itinerary_html: render_markdown(&trip.itinerary),
        itinerary: trip.itinerary,
        map_html,
        pdf,
    })
}

async fn export_pdf(trip: &TripState) -> Option<PdfAttachment> {
    let city = trip.city.clone();
    let itinerary = trip.itinerary.clone();

    match web::block(move || render_itinerary_pdf(&city, &itinerary)).await {
        Ok(Ok(bytes)) => Some(PdfAttachment {
            filename: pdf_filename(&trip.city),
            content_type: "application/pdf".to_string(),
            content_base64: STANDARD.encode(bytes),
        }),
        Ok(Err(err)) => {
            warn!("{}", err);
            None
        }
        Err(err) => {
            warn!("PDF rendering was cancelled: {}", err);
            None
        }
    }
}
