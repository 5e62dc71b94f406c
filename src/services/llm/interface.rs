use crate::models::trip::ChatMessage;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum LlmError {
    Misconfigured(String),
    Http(reqwest::Error),
    Api { status: u16, body: String },
    EmptyCompletion,
}

impl fmt::Display for LlmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LlmError::Misconfigured(msg) => write!(f, "LLM service misconfigured: {}", msg),
            LlmError::Http(err) => write!(f, "HTTP error: {}", err),
            LlmError::Api { status, body } => write!(f, "LLM API error ({}): {}", status, body),
            LlmError::EmptyCompletion => write!(f, "LLM returned no completion"),
        }
    }
}

impl Error for LlmError {}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        LlmError::Http(err)
    }
}

pub trait ChatCompletion {
    /// Sends the whole conversation and returns the raw text of the reply.
    async fn complete(&self, messages: &[ChatMessage], temperature: f32)
        -> Result<String, LlmError>;
}
