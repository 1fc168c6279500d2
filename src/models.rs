use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TourStyle {
    Professional,
    Casual,
    Luxury,
    FamilyFriendly,
    Modern,
}

impl TourStyle {
    pub const ALL: [TourStyle; 5] = [
        TourStyle::Professional,
        TourStyle::Casual,
        TourStyle::Luxury,
        TourStyle::FamilyFriendly,
        TourStyle::Modern,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TourStyle::Professional => "professional",
            TourStyle::Casual => "casual",
            TourStyle::Luxury => "luxury",
            TourStyle::FamilyFriendly => "family-friendly",
            TourStyle::Modern => "modern",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        Self::ALL.into_iter().find(|style| style.as_str() == trimmed)
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|style| style.as_str()).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NarrationStyle {
    Informative,
    Enthusiastic,
    Conversational,
    Authoritative,
    Friendly,
}

impl NarrationStyle {
    pub const ALL: [NarrationStyle; 5] = [
        NarrationStyle::Informative,
        NarrationStyle::Enthusiastic,
        NarrationStyle::Conversational,
        NarrationStyle::Authoritative,
        NarrationStyle::Friendly,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            NarrationStyle::Informative => "informative",
            NarrationStyle::Enthusiastic => "enthusiastic",
            NarrationStyle::Conversational => "conversational",
            NarrationStyle::Authoritative => "authoritative",
            NarrationStyle::Friendly => "friendly",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        Self::ALL.into_iter().find(|style| style.as_str() == trimmed)
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|style| style.as_str()).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FocusArea {
    Kitchen,
    Bedrooms,
    Bathrooms,
    #[serde(rename = "living room")]
    LivingRoom,
    #[serde(rename = "outdoor space")]
    OutdoorSpace,
    #[serde(rename = "master suite")]
    MasterSuite,
    Garage,
    Basement,
}

impl FocusArea {
    pub const ALL: [FocusArea; 8] = [
        FocusArea::Kitchen,
        FocusArea::Bedrooms,
        FocusArea::Bathrooms,
        FocusArea::LivingRoom,
        FocusArea::OutdoorSpace,
        FocusArea::MasterSuite,
        FocusArea::Garage,
        FocusArea::Basement,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FocusArea::Kitchen => "kitchen",
            FocusArea::Bedrooms => "bedrooms",
            FocusArea::Bathrooms => "bathrooms",
            FocusArea::LivingRoom => "living room",
            FocusArea::OutdoorSpace => "outdoor space",
            FocusArea::MasterSuite => "master suite",
            FocusArea::Garage => "garage",
            FocusArea::Basement => "basement",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        Self::ALL.into_iter().find(|area| area.as_str() == trimmed)
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|area| area.as_str()).collect()
    }
}

/// Canonical marketing request: trimmed, defaulted, immutable once built.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarketingVideo {
    pub product_features: Vec<String>,
    pub video_tone: String,
    pub target_audience: String,
    pub video_style: String,
    pub video_duration: String,
    pub additional_notes: String,
}

/// Canonical real estate tour request.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RealEstateTour {
    pub tour_style: TourStyle,
    pub narration_style: NarrationStyle,
    pub focus_areas: Vec<FocusArea>,
    pub tour_duration: String,
    pub additional_requirements: String,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct FieldReport {
    pub valid: bool,
    pub suggestions: Vec<&'static str>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarketingValidation {
    pub product_features: FieldReport,
    pub video_tone: FieldReport,
    pub target_audience: FieldReport,
    pub video_style: FieldReport,
    pub video_duration: FieldReport,
}

impl MarketingValidation {
    pub fn is_valid(&self) -> bool {
        self.product_features.valid
            && self.video_tone.valid
            && self.target_audience.valid
            && self.video_style.valid
            && self.video_duration.valid
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RealEstateValidation {
    pub tour_style: FieldReport,
    pub narration_style: FieldReport,
    pub focus_areas: FieldReport,
    pub tour_duration: FieldReport,
}

impl RealEstateValidation {
    pub fn is_valid(&self) -> bool {
        self.tour_style.valid
            && self.narration_style.valid
            && self.focus_areas.valid
            && self.tour_duration.valid
    }
}
