use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "system")]
    System,
    #[serde(rename = "user")]
    Human,
    #[serde(rename = "assistant")]
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn human(content: impl Into<String>) -> Self {
        Self {
            role: Role::Human,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Everything known about one planning request. Built per submission and
/// dropped when the response is sent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TripState {
    pub city: String,
    pub interests: Vec<String>,
    pub preferences: Vec<String>, // raw checkbox labels, unknown ones are ignored downstream
    pub messages: Vec<ChatMessage>,
    pub itinerary: String,
    pub weather_info: String,
}

impl TripState {
    pub fn new(city: impl Into<String>, interests: Vec<String>, preferences: Vec<String>) -> Self {
        Self {
            city: city.into(),
            interests,
            preferences,
            ..Default::default()
        }
    }
}
