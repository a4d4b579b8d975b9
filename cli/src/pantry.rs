//! Commands that start from ingredients on hand.

use anyhow::{bail, Context, Result};
use culinai_core::ai::ImageData;
use culinai_core::controller::DetectionOutcome;
use culinai_core::Controller;
use std::path::Path;

use crate::output;

pub async fn suggest(
    controller: &Controller,
    ingredients: Vec<String>,
    save: Option<usize>,
) -> Result<()> {
    let suggestions = controller.suggest(Some(ingredients)).await?;
    if suggestions.is_empty() {
        println!("No suggestions this time. Try again or change the ingredients.");
        return Ok(());
    }

    for (i, suggestion) in suggestions.iter().enumerate() {
        output::print_suggestion(i + 1, suggestion);
        println!();
    }

    if let Some(number) = save {
        if number == 0 || number > suggestions.len() {
            bail!("--save must be between 1 and {}", suggestions.len());
        }
        let outcome = controller
            .save_suggestion(number - 1)
            .await?
            .context("Suggestion is no longer available")?;
        output::print_enrichment(&outcome.enrichment);
        println!("Saved {} ({})", outcome.recipe.title, outcome.recipe.id);
    }

    Ok(())
}

pub async fn detect(controller: &Controller, photo: &Path, then_suggest: bool) -> Result<()> {
    let bytes = std::fs::read(photo)
        .with_context(|| format!("Failed to read {}", photo.display()))?;
    let image = ImageData::from_bytes(&bytes)
        .with_context(|| format!("{} is not a usable photo", photo.display()))?;

    let outcome = controller.detect_ingredients(&image).await;
    if outcome.detected.is_empty() {
        println!("No ingredients detected.");
        return Ok(());
    }

    println!("Detected:");
    for name in &outcome.detected {
        println!("  - {}", name);
    }

    if then_suggest {
        println!();
        suggest(controller, ingredients_to_suggest_from(&outcome), None).await?;
    }
    Ok(())
}

/// Detected names after the pantry merge, so repeats are asked about once.
fn ingredients_to_suggest_from(outcome: &DetectionOutcome) -> Vec<String> {
    outcome.pantry.fridge.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use culinai_core::PantryState;

    #[test]
    fn test_suggests_from_deduplicated_detection() {
        let detected: Vec<String> = ["eggs", "milk", "eggs", " milk "]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let mut pantry = PantryState::default();
        let added = pantry.merge_detected(&detected);

        let outcome = DetectionOutcome {
            detected,
            added,
            pantry,
        };
        assert_eq!(ingredients_to_suggest_from(&outcome), vec!["eggs", "milk"]);
    }
}
