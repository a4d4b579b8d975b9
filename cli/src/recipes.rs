//! Commands over the saved recipe collection.

use anyhow::{bail, Context, Result};
use culinai_core::{
    CategoryFilter, Controller, DeleteOutcome, ListQuery, RecipeForm, RecipeId, SortMode,
};
use std::io::{self, BufRead, Write};

use crate::output;

pub async fn list(controller: &Controller, filter: CategoryFilter, search: String, sort: SortMode) {
    let query = ListQuery {
        filter,
        search,
        sort,
    };
    let recipes = controller.list(&query).await;
    if recipes.is_empty() {
        println!("No recipes found.");
        return;
    }
    for recipe in &recipes {
        println!("{}", output::recipe_line(recipe));
    }
}

pub async fn show(controller: &Controller, id: &str) -> Result<()> {
    let recipe = controller
        .get(&RecipeId::from(id))
        .await
        .with_context(|| format!("No recipe with id {}", id))?;
    output::print_recipe(&recipe);
    Ok(())
}

pub async fn add(controller: &Controller, form: &RecipeForm) -> Result<()> {
    println!("Saving {}...", form.title.trim());
    let outcome = controller.create_recipe(form).await?;
    output::print_enrichment(&outcome.enrichment);
    println!("Saved {} ({})", outcome.recipe.title, outcome.recipe.id);
    Ok(())
}

pub async fn delete(controller: &Controller, id: &str, yes: bool) -> Result<()> {
    let id = RecipeId::from(id);
    let recipe = controller
        .get(&id)
        .await
        .with_context(|| format!("No recipe with id {}", id))?;

    let confirmed = yes || confirm(&format!("Delete \"{}\"?", recipe.title))?;
    match controller.delete(&id, confirmed).await? {
        DeleteOutcome::NotConfirmed => println!("Kept {}", recipe.title),
        DeleteOutcome::NotFound => bail!("No recipe with id {}", id),
        DeleteOutcome::Deleted { .. } => println!("Deleted {}", recipe.title),
    }
    Ok(())
}

pub async fn favorite(controller: &Controller, id: &str) -> Result<()> {
    let recipe = controller
        .toggle_favorite(&RecipeId::from(id))
        .await?
        .with_context(|| format!("No recipe with id {}", id))?;
    if recipe.is_favorite {
        println!("Added {} to favorites", recipe.title);
    } else {
        println!("Removed {} from favorites", recipe.title);
    }
    Ok(())
}

pub async fn rate(controller: &Controller, id: &str, rating: i64) -> Result<()> {
    let recipe = controller
        .set_rating(&RecipeId::from(id), rating)
        .await?
        .with_context(|| format!("No recipe with id {}", id))?;
    println!("{} {}", output::stars(recipe.stars()), recipe.title);
    Ok(())
}

pub async fn share(controller: &Controller, id: &str) -> Result<()> {
    let text = controller
        .share(&RecipeId::from(id))
        .await
        .with_context(|| format!("No recipe with id {}", id))?;
    println!("{}", text);
    Ok(())
}

fn confirm(question: &str) -> Result<bool> {
    print!("{} [y/N] ", question);
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin()
        .lock()
        .read_line(&mut answer)
        .context("Failed to read confirmation")?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
