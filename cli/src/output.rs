//! Plain-text rendering for terminal output.

use culinai_core::{EnrichmentReport, Recipe, SuggestedRecipe};

/// One line per recipe: id, stars, favorite mark, title and category.
pub fn recipe_line(recipe: &Recipe) -> String {
    let favorite = if recipe.is_favorite { "*" } else { " " };
    format!(
        "{}  {}{} {} ({})",
        recipe.id,
        stars(recipe.stars()),
        favorite,
        recipe.title,
        recipe.category.label()
    )
}

pub fn stars(count: u8) -> String {
    let filled = usize::from(count.min(culinai_core::MAX_RATING));
    let empty = usize::from(culinai_core::MAX_RATING) - filled;
    format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
}

pub fn print_recipe(recipe: &Recipe) {
    println!("{}", recipe.title);
    println!("  Id:        {}", recipe.id);
    println!("  Category:  {}", recipe.category.label());
    println!(
        "  Prep time: {}",
        recipe.prep_time.as_deref().unwrap_or("Not specified")
    );
    println!("  Rating:    {}", stars(recipe.stars()));
    if recipe.is_favorite {
        println!("  Favorite");
    }
    println!("  Image:     {}", recipe.display_image());
    if let Some(video) = &recipe.video_url {
        println!("  Video:     {}", video);
    }

    println!();
    println!("Ingredients:");
    for ingredient in &recipe.ingredients {
        println!("  - {}", ingredient);
    }

    println!();
    println!("Instructions:");
    for (i, step) in recipe.instructions.iter().enumerate() {
        println!("  {}. {}", i + 1, step);
    }

    if let Some(nutrition) = &recipe.nutrition {
        println!();
        println!(
            "Nutrition: {:.0} kcal, {:.0}g protein, {:.0}g carbs, {:.0}g fat",
            nutrition.calories, nutrition.protein, nutrition.carbs, nutrition.fat
        );
        if let Some(advice) = &nutrition.advice {
            println!("  {}", advice);
        }
    }
}

pub fn print_enrichment(report: &EnrichmentReport) {
    let missing = report.missing_fields();
    if !missing.is_empty() {
        eprintln!("Could not generate: {}", missing.join(", "));
    }
}

pub fn print_suggestion(number: usize, suggestion: &SuggestedRecipe) {
    println!("{}. {}", number, suggestion.title);
    if !suggestion.description.is_empty() {
        println!("   {}", suggestion.description);
    }
    if !suggestion.prep_time.is_empty() {
        println!("   Prep time: {}", suggestion.prep_time);
    }
    println!("   Ingredients: {}", suggestion.ingredients.join(", "));
    for (i, step) in suggestion.steps.iter().enumerate() {
        println!("   {}. {}", i + 1, step);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use culinai_core::{Category, RecipeId};

    fn recipe() -> Recipe {
        Recipe {
            id: RecipeId::from("abc"),
            title: "Leek Soup".to_string(),
            category: Category::Starter,
            ingredients: vec!["leeks".to_string()],
            instructions: vec!["Simmer".to_string()],
            image: None,
            video_url: None,
            prep_time: None,
            rating: Some(3),
            is_favorite: true,
            created_at: 0,
            nutrition: None,
        }
    }

    #[test]
    fn test_stars() {
        assert_eq!(stars(0), "☆☆☆☆☆");
        assert_eq!(stars(3), "★★★☆☆");
        assert_eq!(stars(9), "★★★★★");
    }

    #[test]
    fn test_recipe_line() {
        let line = recipe_line(&recipe());
        assert!(line.starts_with("abc  ★★★☆☆* Leek Soup"));
        assert!(line.ends_with(&format!("({})", Category::Starter.label())));
    }
}
