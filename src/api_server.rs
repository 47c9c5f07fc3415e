// Axum API server module.
//
// REST surface over the prediction model plus the dataset registry.
// Handlers validate at the model boundary and compute inline; there is
// no worker pool and no response cache.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};

use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::error::PredictionError;
use crate::prediction::{self, EnvironmentalSample};
use crate::store::{DatasetStatus, DatasetStore, MemStore, NewDataset};

/// Simulated ingest pipeline latency before an upload flips to
/// `processed`.
const PROCESSING_DELAY: Duration = Duration::from_secs(5);

// ============================================================================
// Configuration and application state
// ============================================================================

/// Server knobs, read from the environment by the binary.
#[derive(Debug, Clone, Copy)]
pub struct ApiConfig {
    /// Upper bound on scenarios per trend request.
    pub max_scenarios: usize,
    /// Reject physically implausible measurements instead of scoring them.
    pub strict_validation: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            max_scenarios: 500,
            strict_validation: false,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub store: Arc<dyn DatasetStore>,
    /// Scenario predictions served since startup, for the dashboard.
    predictions_served: Arc<AtomicU64>,
}

impl AppState {
    pub fn new(config: ApiConfig, store: Arc<dyn DatasetStore>) -> Self {
        Self {
            config,
            store,
            predictions_served: Arc::new(AtomicU64::new(0)),
        }
    }

    /// State with an empty in-memory registry.
    pub fn in_memory(config: ApiConfig) -> Self {
        Self::new(config, Arc::new(MemStore::new()))
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Prediction endpoints
        .route("/api/ml/predict-abundance", post(predict_abundance))
        .route("/api/ml/predict-trends", post(predict_trends))
        // Dataset registry
        .route("/api/datasets", get(list_datasets))
        .route("/api/datasets/:id", get(get_dataset))
        .route("/api/upload", post(upload_dataset))
        // Dashboard
        .route("/api/dashboard/summary", get(dashboard_summary))
        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new()) // gzip + brotli compression
        .layer(CorsLayer::permissive()) // Allow all origins (adjust for production)
        .layer(TraceLayer::new_for_http()) // Request logging
        .with_state(state)
}

// ============================================================================
// Error mapping
// ============================================================================

enum AppError {
    BadRequest(String),
    NotFound(String),
}

impl From<PredictionError> for AppError {
    fn from(err: PredictionError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

// ============================================================================
// Endpoint handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Parse and validate one sample at the model boundary.
fn sample_from_body(body: &Value, strict: bool) -> Result<EnvironmentalSample, PredictionError> {
    let sample = EnvironmentalSample::from_value(body)?;
    if strict {
        sample.check_ranges()?;
    }
    Ok(sample)
}

/// Single-sample prediction.
///
/// POST /api/ml/predict-abundance
/// Body: flat JSON object with the seven measurement fields.
async fn predict_abundance(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, AppError> {
    let sample = sample_from_body(&body, state.config.strict_validation)?;

    let assessment = prediction::assess(&sample);
    state.predictions_served.fetch_add(1, Ordering::Relaxed);

    tracing::debug!(
        fish_count = assessment.prediction.fish_count,
        confidence = assessment.prediction.confidence,
        "abundance prediction served"
    );

    Ok(Json(json!({
        "predictions": assessment.prediction,
        "environmentalImpacts": assessment.impacts,
        "recommendations": assessment.recommendations,
        "modelInfo": prediction::model_info(),
    })))
}

/// Batch trend prediction.
///
/// POST /api/ml/predict-trends
/// Body: { "scenarios": [sample, ...] }
async fn predict_trends(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, AppError> {
    let scenarios = body
        .get("scenarios")
        .and_then(Value::as_array)
        .ok_or_else(|| AppError::BadRequest("missing 'scenarios' array".to_string()))?;

    if scenarios.len() > state.config.max_scenarios {
        return Err(AppError::BadRequest(format!(
            "too many scenarios: {} (maximum {})",
            scenarios.len(),
            state.config.max_scenarios
        )));
    }

    let samples = scenarios
        .iter()
        .enumerate()
        .map(|(index, scenario)| {
            sample_from_body(scenario, state.config.strict_validation)
                .map_err(|err| AppError::BadRequest(format!("scenario {}: {}", index + 1, err)))
        })
        .collect::<Result<Vec<_>, AppError>>()?;

    let report = prediction::predict_trends(&samples)?;
    state
        .predictions_served
        .fetch_add(report.trends.len() as u64, Ordering::Relaxed);

    tracing::debug!(
        scenarios = report.summary.total_scenarios,
        avg_fish_count = report.summary.avg_fish_count,
        "trend prediction served"
    );

    let trends: Vec<Value> = report
        .trends
        .iter()
        .map(|entry| {
            json!({
                "scenario": entry.scenario,
                "input": entry.input,
                "predictions": {
                    "fishCount": entry.fish_count,
                    "speciesDiversity": entry.species_diversity,
                    "biomass": entry.biomass,
                },
            })
        })
        .collect();

    Ok(Json(json!({
        "trends": trends,
        "summary": {
            "totalScenarios": report.summary.total_scenarios,
            "avgFishCount": report.summary.avg_fish_count,
            "maxFishCount": report.summary.max_fish_count,
            "minFishCount": report.summary.min_fish_count,
        },
    })))
}

/// GET /api/datasets
async fn list_datasets(State(state): State<AppState>) -> Json<Value> {
    let datasets = state.store.list();
    Json(json!(datasets))
}

/// GET /api/datasets/:id
async fn get_dataset(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let dataset = state
        .store
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("Dataset {} not found", id)))?;
    Ok(Json(json!(dataset)))
}

/// Register an upload and kick off the simulated processing flip.
///
/// POST /api/upload
async fn upload_dataset(
    State(state): State<AppState>,
    Json(new): Json<NewDataset>,
) -> Json<Value> {
    let dataset = state.store.create(new);
    tracing::info!(id = %dataset.id, name = %dataset.name, "dataset registered");

    let store = Arc::clone(&state.store);
    let id = dataset.id.clone();
    tokio::spawn(async move {
        tokio::time::sleep(PROCESSING_DELAY).await;
        if store.update_status(&id, DatasetStatus::Processed).is_none() {
            tracing::warn!(id = %id, "dataset vanished before processing finished");
        }
    });

    Json(json!({
        "message": "Upload successful",
        "dataset": {
            "id": dataset.id,
            "name": dataset.name,
            "status": dataset.status,
        },
    }))
}

/// GET /api/dashboard/summary
async fn dashboard_summary(State(state): State<AppState>) -> Json<Value> {
    let datasets = state.store.list();
    let recent: Vec<Value> = datasets
        .iter()
        .rev()
        .take(5)
        .map(|d| {
            json!({
                "id": d.id,
                "name": d.name,
                "type": d.kind,
                "location": d.location,
                "date": d.created_at,
                "status": d.status,
            })
        })
        .collect();

    Json(json!({
        "datasets": datasets.len(),
        "predictionsServed": state.predictions_served.load(Ordering::Relaxed),
        "recentUploads": recent,
    }))
}
