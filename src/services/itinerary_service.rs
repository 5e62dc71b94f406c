use log::info;

use crate::models::trip::{ChatMessage, TripState};
use crate::services::llm::interface::{ChatCompletion, LlmError};
use crate::services::prompt_service::build_prompt;
use crate::services::weather_service::{summary_or_fallback, WeatherError, WeatherService};

// Pinned so the same form input gives the same itinerary.
const TEMPERATURE: f32 = 0.0;

pub struct PlannedTrip {
    pub state: TripState,
    pub weather_error: Option<WeatherError>,
}

/// Looks up the weather, asks the model for an itinerary and records the
/// answer on the state.
///
/// A weather failure only degrades the prompt; it is handed back alongside
/// the state. A model failure fails the whole call.
pub async fn create_itinerary<M: ChatCompletion>(
    mut state: TripState,
    weather: &WeatherService,
    model: &M,
) -> Result<PlannedTrip, LlmError> {
    let outcome = weather.lookup(&state.city).await;
    state.weather_info = summary_or_fallback(&outcome);

    let prompt = build_prompt(&state, &state.weather_info);
    let text = model.complete(&prompt, TEMPERATURE).await?;

    info!(
        "Generated itinerary for {} ({} characters)",
        state.city,
        text.len()
    );

    state.messages.push(ChatMessage::assistant(text.clone()));
    state.itinerary = text;

    Ok(PlannedTrip {
        state,
        weather_error: outcome.err(),
    })
}
