//! Filling in missing recipe fields with the AI collaborator.
//!
//! Runs image, then video, then nutrition, each awaited before the next. A
//! failed step leaves its field empty and the save goes ahead.

use serde::{Deserialize, Serialize};

use crate::ai::{estimate_nutrition, find_tutorial_video, generate_dish_image, AiClient};
use crate::types::RecipeDraft;

/// What happened to one optional field during a save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum FieldStatus {
    /// Supplied by the user; no call made.
    AlreadyPresent,
    /// Produced by the collaborator.
    Filled,
    /// The collaborator had nothing; the field stays empty.
    Missing,
}

impl FieldStatus {
    fn from_attempt<T>(value: &Option<T>) -> Self {
        if value.is_some() {
            FieldStatus::Filled
        } else {
            FieldStatus::Missing
        }
    }
}

/// Per-field outcome of enrichment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct EnrichmentReport {
    pub image: FieldStatus,
    pub video: FieldStatus,
    pub nutrition: FieldStatus,
}

impl EnrichmentReport {
    /// Fields the collaborator could not fill.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("image", self.image),
            ("video", self.video),
            ("nutrition", self.nutrition),
        ]
        .into_iter()
        .filter(|(_, status)| *status == FieldStatus::Missing)
        .map(|(name, _)| name)
        .collect()
    }
}

/// Fill whichever of image, video and nutrition `draft` lacks.
pub async fn enrich_missing_fields(
    ai_client: &dyn AiClient,
    draft: &mut RecipeDraft,
) -> EnrichmentReport {
    let image = if draft.image.is_some() {
        FieldStatus::AlreadyPresent
    } else {
        draft.image = generate_dish_image(ai_client, &draft.title)
            .await
            .map(|image| image.to_url());
        FieldStatus::from_attempt(&draft.image)
    };

    let video = if draft.video_url.is_some() {
        FieldStatus::AlreadyPresent
    } else {
        draft.video_url = find_tutorial_video(ai_client, &draft.title).await;
        FieldStatus::from_attempt(&draft.video_url)
    };

    let nutrition = if draft.nutrition.is_some() {
        FieldStatus::AlreadyPresent
    } else {
        draft.nutrition = estimate_nutrition(ai_client, &draft.title, &draft.ingredients).await;
        FieldStatus::from_attempt(&draft.nutrition)
    };

    let report = EnrichmentReport {
        image,
        video,
        nutrition,
    };

    let missing = report.missing_fields();
    if !missing.is_empty() {
        tracing::info!(title = %draft.title, missing = ?missing, "Saving recipe without some enrichments");
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::prompts::dish_image::GENERATE_IMAGE_PROMPT_NAME;
    use crate::ai::prompts::find_video::FIND_VIDEO_PROMPT_NAME;
    use crate::ai::prompts::nutrition::NUTRITION_PROMPT_NAME;
    use crate::ai::{FakeAiClient, ImageData};
    use crate::types::Nutrition;

    fn draft() -> RecipeDraft {
        RecipeDraft {
            title: "Ratatouille".to_string(),
            ingredients: vec!["zucchini".to_string()],
            instructions: vec!["Stew".to_string()],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_calls_in_order_and_fills() {
        let client = FakeAiClient::new()
            .with_image(
                GENERATE_IMAGE_PROMPT_NAME,
                ImageData::parse("https://img.example/r.png").unwrap(),
            )
            .with_text(FIND_VIDEO_PROMPT_NAME, "https://youtu.be/rata")
            .with_text(
                NUTRITION_PROMPT_NAME,
                r#"{"calories": 200, "protein": 5, "carbs": 20, "fat": 9}"#,
            );

        let mut d = draft();
        let report = enrich_missing_fields(&client, &mut d).await;

        assert_eq!(
            client.calls(),
            vec![
                GENERATE_IMAGE_PROMPT_NAME,
                FIND_VIDEO_PROMPT_NAME,
                NUTRITION_PROMPT_NAME
            ]
        );
        assert_eq!(report.image, FieldStatus::Filled);
        assert_eq!(report.video, FieldStatus::Filled);
        assert_eq!(report.nutrition, FieldStatus::Filled);
        assert_eq!(d.image.as_deref(), Some("https://img.example/r.png"));
        assert_eq!(d.video_url.as_deref(), Some("https://youtu.be/rata"));
        assert!(report.missing_fields().is_empty());
    }

    #[tokio::test]
    async fn test_present_fields_skip_calls() {
        let client = FakeAiClient::new();
        let mut d = draft();
        d.image = Some("https://img.example/mine.png".to_string());
        d.video_url = Some("https://youtu.be/mine".to_string());
        d.nutrition = Some(Nutrition {
            calories: 1.0,
            protein: 1.0,
            carbs: 1.0,
            fat: 1.0,
            advice: None,
        });

        let report = enrich_missing_fields(&client, &mut d).await;
        assert!(client.calls().is_empty());
        assert_eq!(report.image, FieldStatus::AlreadyPresent);
        assert_eq!(report.video, FieldStatus::AlreadyPresent);
        assert_eq!(report.nutrition, FieldStatus::AlreadyPresent);
    }

    #[tokio::test]
    async fn test_failures_leave_fields_empty() {
        let client = FakeAiClient::new();
        let mut d = draft();
        let report = enrich_missing_fields(&client, &mut d).await;

        assert_eq!(client.calls().len(), 3);
        assert_eq!(report.missing_fields(), vec!["image", "video", "nutrition"]);
        assert!(d.image.is_none() && d.video_url.is_none() && d.nutrition.is_none());
    }
}
