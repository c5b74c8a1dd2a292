//! TripKit Server - HTTP API for the travel assistant
//!
//! Exposes the trip guide over REST:
//!
//! - `GET /health` - liveness probe
//! - `GET /api/{city}` - current weather, air quality, and an AI-generated
//!   packing suggestion for the city, merged into one payload
//!
//! Weather and air-quality data come from OpenWeather; packing suggestions
//! come from the RAG pipeline in `tripkit-core`. A failed suggestion is
//! replaced with a static fallback list, so the guide endpoint degrades
//! instead of erroring when the model backend is down.

pub mod clients;
pub mod config;
pub mod error;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::start_server;
pub use state::AppState;
