//! Marine Abundance Predictor
//!
//! Environmental-suitability prediction for marine monitoring stations:
//! a deterministic model mapping seven oceanographic measurements to
//! predicted fish abundance, species diversity, biomass, and confidence,
//! with threshold-driven impact findings and recommendations.
//!
//! - `prediction/`: the pure model (factors, diversity, confidence,
//!   advice, batch trends)
//! - `store`: injected in-memory dataset registry
//! - `api_server`: axum REST surface (behind the `api` feature)

pub mod error;
pub mod prediction;
pub mod store;

#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
pub use error::PredictionError;
pub use prediction::{assess, Assessment, EnvironmentalSample, Prediction};
pub use store::{Dataset, DatasetStatus, DatasetStore, MemStore};

#[cfg(feature = "api")]
pub use api_server::{create_router, ApiConfig, AppState};
