use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::gemini::{GeminiClient, GenerationResult};
use crate::models::{FocusArea, NarrationStyle, TourStyle};
use crate::validation::{self, RequestError, DEFAULT_VIDEO_DURATION};

#[derive(Clone)]
pub struct AppState {
    pub gemini: Arc<GeminiClient>,
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/marketing/generate-video", post(generate_marketing_video))
        .route("/api/marketing/validate-parameters", post(validate_marketing_parameters))
        .route("/api/marketing/suggested-features", get(suggested_features))
        .route("/api/marketing/info", get(marketing_info))
        .route("/api/real-estate/generate-video", post(generate_real_estate_video))
        .route("/api/real-estate/validate-parameters", post(validate_real_estate_parameters))
        .route("/api/real-estate/info", get(real_estate_info))
        .fallback(not_found)
        .with_state(state)
}

// Unexpected handler failures: 500 with a generic message, detail only in
// development mode.
pub struct ApiError {
    context: &'static str,
    source: anyhow::Error,
}

impl ApiError {
    fn new(context: &'static str, source: anyhow::Error) -> Self {
        Self { context, source }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!("❌ {}: {:#}", self.context, self.source);
        let mut body = json!({
            "success": false,
            "message": self.context,
            "error": self.source.to_string(),
        });
        if development_mode() {
            body["stack"] = Value::String(format!("{:?}", self.source));
        }
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

fn development_mode() -> bool {
    std::env::var("APP_ENV").map(|v| v == "development").unwrap_or(false)
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        let body = match self {
            RequestError::MissingFields { received_fields, .. } => json!({
                "success": false,
                "message": message,
                "receivedFields": received_fields,
            }),
            RequestError::BadArray { .. } => json!({
                "success": false,
                "message": message,
            }),
            RequestError::InvalidEnum { field, allowed, .. } => json!({
                "success": false,
                "message": message,
                "field": field,
                "validStyles": allowed,
            }),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

pub async fn generate_marketing_video(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Response {
    let video = match validation::normalize_marketing(&body) {
        Ok(video) => video,
        Err(e) => return e.into_response(),
    };

    tracing::info!("🚀 Generating marketing video with data: {:?}", video);
    let result = state.gemini.generate_marketing_video(&video).await;

    match video_envelope(result, &video, "Marketing video generated successfully") {
        Ok(response) => response,
        Err(e) => e.into_response(),
    }
}

pub async fn generate_real_estate_video(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Response {
    let tour = match validation::normalize_real_estate(&body) {
        Ok(tour) => tour,
        Err(e) => return e.into_response(),
    };

    tracing::info!("🎬 Generating real estate video with data: {:?}", tour);
    let result = state.gemini.generate_real_estate_video(&tour).await;

    match video_envelope(result, &tour, "Real estate video generated successfully") {
        Ok(response) => response,
        Err(e) => e.into_response(),
    }
}

fn video_envelope<T: serde::Serialize>(
    result: GenerationResult,
    parameters: &T,
    success_message: &str,
) -> Result<Response, ApiError> {
    let parameters = serde_json::to_value(parameters)
        .map_err(|e| ApiError::new("Failed to generate video", e.into()))?;

    if let Some(provider_error) = &result.provider_error {
        tracing::warn!("Provider error absorbed, serving default video: {}", provider_error);
    }

    let message = if result.is_default {
        "Using default video (no API key or error occurred)"
    } else {
        success_message
    };
    let video_url = if result.is_default {
        result.video_url.unwrap_or_default()
    } else {
        result.content
    };

    Ok((
        StatusCode::OK,
        Json(json!({
            "success": true,
            "message": message,
            "data": {
                "videoUrl": video_url,
                "parameters": parameters,
                "isDefaultResponse": result.is_default,
            }
        })),
    )
        .into_response())
}

// The validate endpoints report on the raw body only; the generation
// gateway is never involved.
pub async fn validate_marketing_parameters(Json(body): Json<Value>) -> Json<Value> {
    let report = validation::validate_marketing_parameters(&body);
    let valid = report.is_valid();
    Json(json!({
        "success": true,
        "valid": valid,
        "validationResults": report,
        "message": if valid { "All parameters are valid" } else { "Some parameters need attention" },
    }))
}

pub async fn validate_real_estate_parameters(Json(body): Json<Value>) -> Json<Value> {
    let report = validation::validate_real_estate_parameters(&body);
    let valid = report.is_valid();
    Json(json!({
        "success": true,
        "valid": valid,
        "validationResults": report,
        "message": if valid { "All parameters are valid" } else { "Some parameters need attention" },
    }))
}

pub async fn suggested_features() -> Json<Value> {
    let features = json!({
        "energyFeatures": [
            "High caffeine content (200mg per can)",
            "Long-lasting energy boost",
            "No crash or jitters",
            "Quick energy absorption"
        ],
        "healthFeatures": [
            "Zero sugar formula",
            "Natural ingredients",
            "Vitamin B complex enriched",
            "Electrolyte balance",
            "Low calorie content"
        ],
        "performanceFeatures": [
            "Enhanced mental focus",
            "Improved physical performance",
            "Faster recovery time",
            "Increased alertness"
        ],
        "tasteFeatures": [
            "Refreshing taste",
            "Multiple flavor options",
            "Smooth texture",
            "No artificial aftertaste"
        ]
    });

    let total: usize = features
        .as_object()
        .map(|groups| {
            groups
                .values()
                .filter_map(Value::as_array)
                .map(Vec::len)
                .sum()
        })
        .unwrap_or(0);

    Json(json!({
        "success": true,
        "message": "Suggested features for Suplimax Energy Drink",
        "data": features,
        "totalFeatures": total,
    }))
}

pub async fn marketing_info() -> Json<Value> {
    Json(json!({
        "success": true,
        "message": "Marketing Video Generation API for Suplimax Energy Drink",
        "product": "Suplimax Energy Drink",
        "endpoints": {
            "generateVideo": {
                "method": "POST",
                "path": "/api/marketing/generate-video",
                "description": "Generate a marketing video script for Suplimax Energy Drink",
                "requiredFields": ["productFeatures", "videoTone", "targetAudience", "videoStyle"],
                "optionalFields": ["videoDuration", "additionalNotes"]
            },
            "validateParameters": {
                "method": "POST",
                "path": "/api/marketing/validate-parameters",
                "description": "Validate marketing video parameters"
            },
            "suggestedFeatures": {
                "method": "GET",
                "path": "/api/marketing/suggested-features",
                "description": "Get suggested product features for Suplimax Energy Drink"
            }
        },
        "examples": {
            "generateVideo": {
                "productFeatures": ["high caffeine content", "zero sugar", "natural ingredients", "great taste"],
                "videoTone": "energetic",
                "targetAudience": "young adults (18-25)",
                "videoStyle": "modern",
                "videoDuration": DEFAULT_VIDEO_DURATION,
                "additionalNotes": "Include gym and outdoor activity scenes"
            }
        }
    }))
}

pub async fn real_estate_info() -> Json<Value> {
    Json(json!({
        "success": true,
        "message": "Real Estate Video Generation API",
        "endpoints": {
            "generateVideo": {
                "method": "POST",
                "path": "/api/real-estate/generate-video",
                "description": "Generate a real estate property video tour script",
                "requiredFields": ["tourStyle", "narrationStyle", "focusAreas"],
                "optionalFields": ["tourDuration", "additionalRequirements"],
                "validValues": {
                    "tourStyle": TourStyle::names(),
                    "narrationStyle": NarrationStyle::names(),
                    "focusAreas": FocusArea::names(),
                }
            },
            "validateParameters": {
                "method": "POST",
                "path": "/api/real-estate/validate-parameters",
                "description": "Validate real estate video parameters"
            }
        },
        "examples": {
            "generateVideo": {
                "tourStyle": "professional",
                "narrationStyle": "informative",
                "focusAreas": ["kitchen", "bedrooms", "living room", "outdoor space"],
                "tourDuration": "3 minutes",
                "additionalRequirements": "Focus on luxury finishes and smart home features"
            }
        }
    }))
}

pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "success",
        "message": "AI Video Generation Backend is running!",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub async fn not_found(uri: Uri) -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "status": "error",
            "message": format!("Route {} not found", uri.path()),
        })),
    )
}
