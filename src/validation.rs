use serde_json::Value;
use thiserror::Error;

use crate::models::{
    FieldReport, FocusArea, MarketingValidation, MarketingVideo, NarrationStyle,
    RealEstateTour, RealEstateValidation, TourStyle,
};

pub const DEFAULT_VIDEO_DURATION: &str = "30 seconds";
pub const DEFAULT_TOUR_DURATION: &str = "2-3 minutes";

pub const FEATURE_SUGGESTIONS: &[&str] = &[
    "high caffeine content",
    "natural ingredients",
    "zero sugar",
    "great taste",
    "long-lasting energy",
    "vitamin enriched",
    "performance boost",
    "mental focus",
];

pub const TONE_SUGGESTIONS: &[&str] = &[
    "energetic",
    "bold",
    "inspiring",
    "dynamic",
    "motivational",
    "edgy",
    "fun",
    "professional",
];

pub const AUDIENCE_SUGGESTIONS: &[&str] = &[
    "young adults (18-25)",
    "fitness enthusiasts",
    "gamers",
    "students",
    "professionals",
    "athletes",
    "active lifestyle",
    "millennials",
];

pub const STYLE_SUGGESTIONS: &[&str] = &[
    "modern",
    "cinematic",
    "fast-paced",
    "minimalist",
    "vibrant",
    "urban",
    "lifestyle",
    "action-packed",
];

pub const DURATION_SUGGESTIONS: &[&str] = &[
    "15 seconds",
    "30 seconds",
    "60 seconds",
    "90 seconds",
    "2 minutes",
];

pub const TOUR_DURATION_SUGGESTIONS: &[&str] = &[
    "30 seconds",
    "1 minute",
    "2-3 minutes",
    "5 minutes",
    "10 minutes",
];

const MARKETING_REQUIRED_MESSAGE: &str =
    "Missing required fields: productFeatures, videoTone, targetAudience, and videoStyle are required";
const REAL_ESTATE_REQUIRED_MESSAGE: &str =
    "Missing required fields: tourStyle, narrationStyle, and focusAreas are required";

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("{message}")]
    MissingFields {
        message: &'static str,
        received_fields: Vec<String>,
    },
    #[error("{field} must be a non-empty array of strings")]
    BadArray { field: &'static str },
    #[error("Invalid {label}")]
    InvalidEnum {
        label: &'static str,
        field: &'static str,
        allowed: Vec<&'static str>,
    },
}

/// Shape check then vocabulary check over a raw marketing request body.
/// Defaults for the optional fields are applied here and nowhere else.
pub fn normalize_marketing(params: &Value) -> Result<MarketingVideo, RequestError> {
    let features_present = params.get("productFeatures").filter(|v| !v.is_null());
    let (Some(_), Some(video_tone), Some(target_audience), Some(video_style)) = (
        features_present,
        trimmed_string(params, "videoTone"),
        trimmed_string(params, "targetAudience"),
        trimmed_string(params, "videoStyle"),
    ) else {
        return Err(RequestError::MissingFields {
            message: MARKETING_REQUIRED_MESSAGE,
            received_fields: received_fields(params),
        });
    };

    let product_features = string_array(params, "productFeatures").ok_or(RequestError::BadArray {
        field: "productFeatures",
    })?;

    Ok(MarketingVideo {
        product_features,
        video_tone,
        target_audience,
        video_style,
        video_duration: trimmed_string(params, "videoDuration")
            .unwrap_or_else(|| DEFAULT_VIDEO_DURATION.to_string()),
        additional_notes: trimmed_string(params, "additionalNotes").unwrap_or_default(),
    })
}

/// Same two-tier check for real estate requests, plus closed-vocabulary
/// membership for tourStyle, narrationStyle and every focus area.
pub fn normalize_real_estate(params: &Value) -> Result<RealEstateTour, RequestError> {
    let areas_present = params.get("focusAreas").filter(|v| !v.is_null());
    let (Some(_), Some(tour_style_raw), Some(narration_style_raw)) = (
        areas_present,
        trimmed_string(params, "tourStyle"),
        trimmed_string(params, "narrationStyle"),
    ) else {
        return Err(RequestError::MissingFields {
            message: REAL_ESTATE_REQUIRED_MESSAGE,
            received_fields: received_fields(params),
        });
    };

    let raw_areas = string_array(params, "focusAreas").ok_or(RequestError::BadArray {
        field: "focusAreas",
    })?;

    let tour_style = TourStyle::parse(&tour_style_raw).ok_or_else(|| RequestError::InvalidEnum {
        label: "tour style",
        field: "tourStyle",
        allowed: TourStyle::names(),
    })?;

    let narration_style =
        NarrationStyle::parse(&narration_style_raw).ok_or_else(|| RequestError::InvalidEnum {
            label: "narration style",
            field: "narrationStyle",
            allowed: NarrationStyle::names(),
        })?;

    let mut focus_areas = Vec::with_capacity(raw_areas.len());
    for area in &raw_areas {
        focus_areas.push(FocusArea::parse(area).ok_or_else(|| RequestError::InvalidEnum {
            label: "focus area",
            field: "focusAreas",
            allowed: FocusArea::names(),
        })?);
    }

    Ok(RealEstateTour {
        tour_style,
        narration_style,
        focus_areas,
        tour_duration: trimmed_string(params, "tourDuration")
            .unwrap_or_else(|| DEFAULT_TOUR_DURATION.to_string()),
        additional_requirements: trimmed_string(params, "additionalRequirements")
            .unwrap_or_default(),
    })
}

/// Per-field report over a raw marketing body. Malformed fields are reported
/// invalid, never rejected; suggestion lists are emitted either way.
pub fn validate_marketing_parameters(params: &Value) -> MarketingValidation {
    MarketingValidation {
        product_features: FieldReport {
            valid: string_array(params, "productFeatures").is_some(),
            suggestions: FEATURE_SUGGESTIONS.to_vec(),
        },
        video_tone: FieldReport {
            valid: trimmed_string(params, "videoTone").is_some(),
            suggestions: TONE_SUGGESTIONS.to_vec(),
        },
        target_audience: FieldReport {
            valid: trimmed_string(params, "targetAudience").is_some(),
            suggestions: AUDIENCE_SUGGESTIONS.to_vec(),
        },
        video_style: FieldReport {
            valid: trimmed_string(params, "videoStyle").is_some(),
            suggestions: STYLE_SUGGESTIONS.to_vec(),
        },
        video_duration: FieldReport {
            valid: optional_string_valid(params, "videoDuration"),
            suggestions: DURATION_SUGGESTIONS.to_vec(),
        },
    }
}

pub fn validate_real_estate_parameters(params: &Value) -> RealEstateValidation {
    let focus_areas_valid = string_array(params, "focusAreas")
        .is_some_and(|areas| areas.iter().all(|area| FocusArea::parse(area).is_some()));

    RealEstateValidation {
        tour_style: FieldReport {
            valid: trimmed_string(params, "tourStyle")
                .and_then(|s| TourStyle::parse(&s))
                .is_some(),
            suggestions: TourStyle::names(),
        },
        narration_style: FieldReport {
            valid: trimmed_string(params, "narrationStyle")
                .and_then(|s| NarrationStyle::parse(&s))
                .is_some(),
            suggestions: NarrationStyle::names(),
        },
        focus_areas: FieldReport {
            valid: focus_areas_valid,
            suggestions: FocusArea::names(),
        },
        tour_duration: FieldReport {
            valid: optional_string_valid(params, "tourDuration"),
            suggestions: TOUR_DURATION_SUGGESTIONS.to_vec(),
        },
    }
}

fn trimmed_string(params: &Value, field: &str) -> Option<String> {
    let trimmed = params.get(field)?.as_str()?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

// Non-empty array of non-empty strings, each trimmed.
fn string_array(params: &Value, field: &str) -> Option<Vec<String>> {
    let items = params.get(field)?.as_array()?;
    if items.is_empty() {
        return None;
    }
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        let trimmed = item.as_str()?.trim();
        if trimmed.is_empty() {
            return None;
        }
        out.push(trimmed.to_string());
    }
    Some(out)
}

// Optional fields are valid when absent; when present they must be a
// non-empty string.
fn optional_string_valid(params: &Value, field: &str) -> bool {
    match params.get(field) {
        None | Some(Value::Null) => true,
        Some(value) => value.as_str().is_some_and(|s| !s.trim().is_empty()),
    }
}

fn received_fields(params: &Value) -> Vec<String> {
    params
        .as_object()
        .map(|map| map.keys().cloned().collect())
        .unwrap_or_default()
}
