pub mod groq;
pub mod interface;
