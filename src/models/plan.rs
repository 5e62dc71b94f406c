use serde::{Deserialize, Serialize};

/// Body posted by the form.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlanRequest {
    pub city: String,
    #[serde(default)]
    pub interests: String, // comma-separated, as typed
    #[serde(default)]
    pub preferences: Vec<String>,
    #[serde(default)]
    pub export_pdf: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PlanResponse {
    pub itinerary: String,      // markdown, as the model wrote it
    pub itinerary_html: String, // rendered, raw HTML escaped
    pub map_html: String,
    pub weather: WeatherStatus,
    pub pdf: Option<PdfAttachment>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WeatherStatus {
    pub summary: String,
    pub error: Option<WeatherErrorBody>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WeatherErrorBody {
    pub kind: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PdfAttachment {
    pub filename: String,
    pub content_type: String,
    pub content_base64: String,
}

/// Splits the interests text box on commas, trimming each piece and dropping
/// the empty ones. Order is preserved.
pub fn split_interests(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|interest| !interest.is_empty())
        .map(String::from)
        .collect()
}
