//! HTTP route handlers

pub mod guide;
pub mod health;

pub use guide::city_guide;
pub use health::health_check;
