pub mod itinerary_service;
pub mod llm;
pub mod map_service;
pub mod markdown_service;
pub mod pdf_service;
pub mod prompt_service;
pub mod weather_service;
