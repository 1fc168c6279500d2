use crate::models::{MarketingVideo, RealEstateTour};

/// Deterministic prompt for a Suplimax marketing spot. Identical input
/// produces a byte-identical string.
pub fn build_marketing_prompt(video: &MarketingVideo) -> String {
    let notes_line = if video.additional_notes.is_empty() {
        String::new()
    } else {
        format!("- Additional notes: {}\n", video.additional_notes)
    };

    format!(
        "Create a marketing video for \"Suplimax\" energy drink with these requirements:\n\
         \n\
         - Clearly show the product with \"Suplimax\" visible on the packaging\n\
         - Highlight these features: {features}\n\
         - Tone: {tone}\n\
         - Target audience: {audience}\n\
         - Video style: {style}\n\
         - Duration: {duration}\n\
         {notes_line}\
         \n\
         Include dynamic visuals that match the energy drink's tropical flavor theme.",
        features = video.product_features.join(", "),
        tone = video.video_tone,
        audience = video.target_audience,
        style = video.video_style,
        duration = video.video_duration,
    )
}

/// Deterministic prompt for a real estate tour script. The duration and
/// additional-requirements lines are emitted only when non-empty.
pub fn build_real_estate_prompt(tour: &RealEstateTour) -> String {
    let focus_areas = tour
        .focus_areas
        .iter()
        .map(|area| area.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let mut requirements = format!(
        "Tour Style: {}\nNarration Style: {}\nFocus Areas: {}\n",
        tour.tour_style.as_str(),
        tour.narration_style.as_str(),
        focus_areas,
    );
    if !tour.tour_duration.is_empty() {
        requirements.push_str(&format!("Duration: {}\n", tour.tour_duration));
    }
    if !tour.additional_requirements.is_empty() {
        requirements.push_str(&format!(
            "Additional Requirements: {}\n",
            tour.additional_requirements
        ));
    }

    format!(
        "Create a detailed real estate video tour script with the following requirements:\n\
         \n\
         {requirements}\
         \n\
         Please create a professional and engaging script that:\n\
         1. Introduces each focus area with appropriate transitions\n\
         2. Highlights key features and selling points\n\
         3. Uses the specified narration style to engage viewers\n\
         4. Maintains the chosen tour style throughout\n\
         5. Includes specific camera movements and angles for each area\n\
         6. Incorporates any additional requirements provided\n\
         \n\
         Format the script with clear scene descriptions, camera directions, and narration text."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FocusArea, NarrationStyle, TourStyle};
    use pretty_assertions::assert_eq;

    fn marketing_video() -> MarketingVideo {
        MarketingVideo {
            product_features: vec!["zero sugar".into(), "great taste".into()],
            video_tone: "bold".into(),
            target_audience: "students".into(),
            video_style: "modern".into(),
            video_duration: "30 seconds".into(),
            additional_notes: String::new(),
        }
    }

    fn real_estate_tour() -> RealEstateTour {
        RealEstateTour {
            tour_style: TourStyle::Luxury,
            narration_style: NarrationStyle::Enthusiastic,
            focus_areas: vec![FocusArea::Kitchen, FocusArea::OutdoorSpace],
            tour_duration: "2-3 minutes".into(),
            additional_requirements: String::new(),
        }
    }

    #[test]
    fn marketing_prompt_is_deterministic() {
        let video = marketing_video();
        assert_eq!(build_marketing_prompt(&video), build_marketing_prompt(&video));
    }

    #[test]
    fn marketing_prompt_embeds_every_parameter() {
        let prompt = build_marketing_prompt(&marketing_video());
        assert!(prompt.contains("Suplimax"));
        assert!(prompt.contains("zero sugar, great taste"));
        assert!(prompt.contains("Tone: bold"));
        assert!(prompt.contains("Target audience: students"));
        assert!(prompt.contains("Video style: modern"));
        assert!(prompt.contains("Duration: 30 seconds"));
    }

    #[test]
    fn marketing_prompt_omits_empty_notes() {
        let mut video = marketing_video();
        assert!(!build_marketing_prompt(&video).contains("Additional notes"));

        video.additional_notes = "gym scenes".into();
        assert!(build_marketing_prompt(&video).contains("- Additional notes: gym scenes"));
    }

    #[test]
    fn real_estate_prompt_embeds_styles_and_areas() {
        let prompt = build_real_estate_prompt(&real_estate_tour());
        assert!(prompt.contains("Tour Style: luxury"));
        assert!(prompt.contains("Narration Style: enthusiastic"));
        assert!(prompt.contains("Focus Areas: kitchen, outdoor space"));
        assert!(prompt.contains("Duration: 2-3 minutes"));
        assert!(prompt.contains("camera movements"));
        assert!(prompt.contains("scene descriptions, camera directions, and narration text"));
    }

    #[test]
    fn real_estate_prompt_omits_empty_optional_lines() {
        let mut tour = real_estate_tour();
        tour.tour_duration = String::new();
        let prompt = build_real_estate_prompt(&tour);
        assert!(!prompt.contains("Duration:"));
        assert!(!prompt.contains("Additional Requirements:"));

        tour.additional_requirements = "highlight smart home features".into();
        assert!(build_real_estate_prompt(&tour)
            .contains("Additional Requirements: highlight smart home features"));
    }
}
