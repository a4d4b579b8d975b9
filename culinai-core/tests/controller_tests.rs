//! End-to-end behavior of user actions with a fake collaborator.

use std::sync::Arc;

use culinai_core::ai::prompts::detect_ingredients::DETECT_INGREDIENTS_PROMPT_NAME;
use culinai_core::ai::prompts::dish_image::{EDIT_IMAGE_PROMPT_NAME, GENERATE_IMAGE_PROMPT_NAME};
use culinai_core::ai::prompts::find_video::FIND_VIDEO_PROMPT_NAME;
use culinai_core::ai::prompts::nutrition::NUTRITION_PROMPT_NAME;
use culinai_core::ai::prompts::suggest_recipes::SUGGEST_RECIPES_PROMPT_NAME;
use culinai_core::ai::{FakeAiClient, ImageData};
use culinai_core::store::RECIPES_KEY;
use culinai_core::{
    Category, CategoryFilter, Controller, DeleteOutcome, FieldStatus, KeyValueStore, ListQuery,
    MemoryStore, PantryList, PantryMode, RecipeForm, RecipeId, RecipeRepository,
    RepositoryError, SortMode, ValidationError,
};

fn controller_with(client: FakeAiClient) -> (Arc<FakeAiClient>, Arc<MemoryStore>, Controller) {
    let client = Arc::new(client);
    let store = Arc::new(MemoryStore::new());
    let repository = RecipeRepository::empty(store.clone());
    let controller = Controller::new(
        repository,
        client.clone(),
        "https://culinai.example".to_string(),
    );
    (client, store, controller)
}

fn form(title: &str, ingredients: &str) -> RecipeForm {
    RecipeForm {
        title: title.to_string(),
        category: Category::MainCourse,
        prep_time: "30 min".to_string(),
        ingredients: ingredients.to_string(),
        instructions: "Prep\nCook".to_string(),
        ..Default::default()
    }
}

fn png() -> ImageData {
    ImageData::parse("data:image/png;base64,QUJD").unwrap()
}

#[tokio::test]
async fn test_save_survives_collaborator_failure() {
    let (client, store, controller) = controller_with(FakeAiClient::new());

    let outcome = controller
        .create_recipe(&form("Chili", "beans, tomatoes"))
        .await
        .unwrap();

    assert_eq!(
        client.calls(),
        vec![
            GENERATE_IMAGE_PROMPT_NAME,
            FIND_VIDEO_PROMPT_NAME,
            NUTRITION_PROMPT_NAME
        ]
    );
    assert_eq!(outcome.enrichment.image, FieldStatus::Missing);
    assert_eq!(outcome.enrichment.video, FieldStatus::Missing);
    assert_eq!(outcome.enrichment.nutrition, FieldStatus::Missing);
    assert!(outcome.recipe.image.is_none());
    assert!(outcome.recipe.video_url.is_none());
    assert!(outcome.recipe.nutrition.is_none());
    assert!(store.get(RECIPES_KEY).unwrap().is_some());
    assert_eq!(controller.get(&outcome.recipe.id).await, Some(outcome.recipe));
}

#[tokio::test]
async fn test_invalid_form_makes_no_calls() {
    let (client, _store, controller) = controller_with(FakeAiClient::new());

    let result = controller.create_recipe(&form("Chili", " , ")).await;
    assert!(matches!(
        result,
        Err(RepositoryError::Invalid(ValidationError::NoIngredients))
    ));
    assert!(client.calls().is_empty());
    assert!(controller.list(&ListQuery::default()).await.is_empty());
}

#[tokio::test]
async fn test_save_fills_missing_fields() {
    let client = FakeAiClient::new()
        .with_image(GENERATE_IMAGE_PROMPT_NAME, png())
        .with_text(FIND_VIDEO_PROMPT_NAME, "https://www.youtube.com/watch?v=chili")
        .with_text(
            NUTRITION_PROMPT_NAME,
            r#"{"calories": 480, "protein": 22, "carbs": 50, "fat": 18}"#,
        );
    let (_client, _store, controller) = controller_with(client);

    let outcome = controller
        .create_recipe(&form("Chili", "beans, tomatoes"))
        .await
        .unwrap();

    assert_eq!(
        outcome.recipe.image.as_deref(),
        Some("data:image/png;base64,QUJD")
    );
    assert_eq!(
        outcome.recipe.video_url.as_deref(),
        Some("https://www.youtube.com/watch?v=chili")
    );
    assert_eq!(outcome.recipe.nutrition.unwrap().calories, 480.0);
}

#[tokio::test]
async fn test_edit_keeps_identity_and_reuses_nutrition() {
    let client = FakeAiClient::new().with_text(
        NUTRITION_PROMPT_NAME,
        r#"{"calories": 300, "protein": 10, "carbs": 30, "fat": 12}"#,
    );
    let (client, _store, controller) = controller_with(client);
    let mut f = form("Chili", "beans, tomatoes");
    f.image = "https://img.example/chili.jpg".to_string();
    f.video_url = "https://youtu.be/chili".to_string();
    let created = controller.create_recipe(&f).await.unwrap().recipe;

    let mut edit = RecipeForm::from_recipe(&created);
    edit.title = "Chili sin Carne".to_string();
    edit.rating = 4;
    let edited = controller
        .update_recipe(&created.id, &edit)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(edited.recipe.id, created.id);
    assert_eq!(edited.recipe.created_at, created.created_at);
    assert_eq!(edited.recipe.title, "Chili sin Carne");
    assert_eq!(edited.recipe.rating, Some(4));
    assert_eq!(edited.enrichment.nutrition, FieldStatus::AlreadyPresent);
    assert_eq!(client.calls(), vec![NUTRITION_PROMPT_NAME]);

    let missing = controller
        .update_recipe(&RecipeId::from("nope"), &edit)
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_edit_with_new_ingredients_drops_stale_nutrition() {
    let client = FakeAiClient::new().with_text(
        NUTRITION_PROMPT_NAME,
        r#"{"calories": 300, "protein": 10, "carbs": 30, "fat": 12}"#,
    );
    let (client, _store, controller) = controller_with(client);
    let created = controller
        .create_recipe(&form("Chili", "beans, tomatoes"))
        .await
        .unwrap()
        .recipe;
    assert!(created.nutrition.is_some());

    client.set_text(NUTRITION_PROMPT_NAME, "no idea");
    let mut edit = RecipeForm::from_recipe(&created);
    edit.ingredients = "beans, tomatoes, beef".to_string();
    let edited = controller
        .update_recipe(&created.id, &edit)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(edited.enrichment.nutrition, FieldStatus::Missing);
    assert!(edited.recipe.nutrition.is_none());
    assert!(controller.get(&created.id).await.unwrap().nutrition.is_none());
}

#[tokio::test]
async fn test_favorites_filter_and_search() {
    let (_client, _store, controller) = controller_with(FakeAiClient::new());
    let tart = controller
        .create_recipe(&form("Apple Tart", "Apples, Cinnamon, Butter"))
        .await
        .unwrap()
        .recipe;
    controller
        .create_recipe(&form("Leek Soup", "Leeks, Butter"))
        .await
        .unwrap();
    controller.toggle_favorite(&tart.id).await.unwrap();

    let favorites = controller
        .list(&ListQuery {
            filter: CategoryFilter::Favorites,
            ..Default::default()
        })
        .await;
    assert_eq!(favorites.len(), 1);
    assert!(favorites.iter().all(|r| r.is_favorite));

    for needle in ["cinnamon", "CINNAMON", "CiNnAmOn"] {
        let found = controller
            .list(&ListQuery {
                search: needle.to_string(),
                ..Default::default()
            })
            .await;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, tart.id);
    }

    let butter = controller
        .list(&ListQuery {
            search: "butter".to_string(),
            sort: SortMode::Alpha,
            ..Default::default()
        })
        .await;
    let titles: Vec<&str> = butter.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Apple Tart", "Leek Soup"]);
}

#[tokio::test]
async fn test_delete_requires_confirmation_and_closes_detail() {
    let (_client, _store, controller) = controller_with(FakeAiClient::new());
    let recipe = controller
        .create_recipe(&form("Chili", "beans"))
        .await
        .unwrap()
        .recipe;

    assert!(controller.open_detail(&recipe.id).await.is_some());

    assert_eq!(
        controller.delete(&recipe.id, false).await.unwrap(),
        DeleteOutcome::NotConfirmed
    );
    assert!(controller.get(&recipe.id).await.is_some());
    assert_eq!(controller.detail().await, Some(recipe.clone()));

    assert_eq!(
        controller.delete(&recipe.id, true).await.unwrap(),
        DeleteOutcome::Deleted {
            closed_detail: true
        }
    );
    assert_eq!(controller.detail().await, None);
    assert_eq!(
        controller.delete(&recipe.id, true).await.unwrap(),
        DeleteOutcome::NotFound
    );
}

#[tokio::test]
async fn test_deleting_other_recipe_keeps_detail_open() {
    let (_client, _store, controller) = controller_with(FakeAiClient::new());
    let open = controller.create_recipe(&form("A", "x")).await.unwrap().recipe;
    let other = controller.create_recipe(&form("B", "x")).await.unwrap().recipe;

    controller.open_detail(&open.id).await;
    assert_eq!(
        controller.delete(&other.id, true).await.unwrap(),
        DeleteOutcome::Deleted {
            closed_detail: false
        }
    );
    assert_eq!(controller.detail().await.map(|r| r.id), Some(open.id));
}

#[tokio::test]
async fn test_detail_reflects_current_record() {
    let (_client, _store, controller) = controller_with(FakeAiClient::new());
    let recipe = controller
        .create_recipe(&form("Chili", "beans"))
        .await
        .unwrap()
        .recipe;
    controller.open_detail(&recipe.id).await;

    controller.set_rating(&recipe.id, 12).await.unwrap();
    controller.toggle_favorite(&recipe.id).await.unwrap();

    let shown = controller.detail().await.unwrap();
    assert_eq!(shown.rating, Some(5));
    assert!(shown.is_favorite);

    controller.close_detail().await;
    assert_eq!(controller.detail().await, None);
    assert!(controller.open_detail(&RecipeId::from("nope")).await.is_none());
    assert_eq!(controller.detail().await, None);
}

#[tokio::test]
async fn test_edit_image_success_and_failure() {
    let (client, _store, controller) = controller_with(FakeAiClient::new());
    let mut f = form("Chili", "beans");
    f.image = "https://img.example/chili.jpg".to_string();
    let recipe = controller.create_recipe(&f).await.unwrap().recipe;

    let failed = controller
        .edit_image(&recipe.id, "add a lime wedge")
        .await
        .unwrap()
        .unwrap();
    assert!(!failed.edited);
    assert_eq!(
        failed.recipe.image.as_deref(),
        Some("https://img.example/chili.jpg")
    );

    client.set_image(EDIT_IMAGE_PROMPT_NAME, png());
    let edited = controller
        .edit_image(&recipe.id, "add a lime wedge")
        .await
        .unwrap()
        .unwrap();
    assert!(edited.edited);
    assert_eq!(
        edited.recipe.image.as_deref(),
        Some("data:image/png;base64,QUJD")
    );
    assert_eq!(edited.recipe.title, recipe.title);
    assert_eq!(controller.get(&recipe.id).await, Some(edited.recipe));

    assert!(controller
        .edit_image(&RecipeId::from("nope"), "anything")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_share_uses_app_url() {
    let (_client, _store, controller) = controller_with(FakeAiClient::new());
    let recipe = controller
        .create_recipe(&form("Chili", "beans, rice"))
        .await
        .unwrap()
        .recipe;

    let text = controller.share(&recipe.id).await.unwrap();
    assert!(text.starts_with("CULINAI RECIPE: CHILI\nPREP TIME: 30 min"));
    assert!(text.contains("- beans\n- rice"));
    assert!(text.contains("1. Prep\n2. Cook"));
    assert!(text.contains("App link: https://culinai.example"));
}

const TWO_SUGGESTIONS: &str = r#"{"recipes": [
    {"title": "Fried Rice", "description": "Quick", "ingredients": ["rice", "eggs"], "steps": ["Fry"], "prepTime": "15 min"},
    {"title": "Egg Drop Soup", "description": "Light", "ingredients": ["eggs", "stock"], "steps": ["Simmer", "Drizzle eggs"], "prepTime": "10 min",
     "nutrition": {"calories": 90, "protein": 7, "carbs": 3, "fat": 5}}
]}"#;

#[tokio::test]
async fn test_suggestions_from_pantry_and_save() {
    let client = FakeAiClient::new()
        .with_text(SUGGEST_RECIPES_PROMPT_NAME, TWO_SUGGESTIONS)
        .with_image(GENERATE_IMAGE_PROMPT_NAME, png());
    let (client, _store, controller) = controller_with(client);

    assert_eq!(
        controller.suggest(None).await,
        Err(ValidationError::NoPantryIngredients)
    );
    assert!(client.calls().is_empty());

    controller
        .update_pantry(|p| {
            p.add(PantryList::Fridge, "rice");
            p.add(PantryList::Fridge, "eggs");
        })
        .await;
    let suggestions = controller.suggest(None).await.unwrap();
    assert_eq!(suggestions.len(), 2);
    assert_eq!(controller.pantry().await.suggestions, suggestions);

    let saved = controller.save_suggestion(1).await.unwrap().unwrap();
    assert_eq!(saved.recipe.title, "Egg Drop Soup");
    assert_eq!(saved.recipe.category, Category::MainCourse);
    assert!(!saved.recipe.is_favorite);
    assert_eq!(saved.recipe.instructions, vec!["Simmer", "Drizzle eggs"]);
    assert_eq!(saved.enrichment.image, FieldStatus::Filled);
    assert_eq!(saved.enrichment.nutrition, FieldStatus::AlreadyPresent);
    assert_eq!(
        client.calls(),
        vec![
            SUGGEST_RECIPES_PROMPT_NAME,
            GENERATE_IMAGE_PROMPT_NAME,
            FIND_VIDEO_PROMPT_NAME
        ]
    );

    assert!(controller.save_suggestion(5).await.unwrap().is_none());
}

#[tokio::test]
async fn test_explicit_ingredients_must_not_be_blank() {
    let (client, _store, controller) = controller_with(FakeAiClient::new());
    assert_eq!(
        controller
            .suggest(Some(vec!["  ".to_string(), String::new()]))
            .await,
        Err(ValidationError::NoPantryIngredients)
    );
    assert!(client.calls().is_empty());
}

#[tokio::test]
async fn test_detect_merges_and_switches_to_pot() {
    let client = FakeAiClient::new().with_text(
        DETECT_INGREDIENTS_PROMPT_NAME,
        "eggs, milk, eggs, spinach",
    );
    let (_client, _store, controller) = controller_with(client);
    controller
        .update_pantry(|p| p.add(PantryList::Fridge, "milk"))
        .await;

    let outcome = controller
        .detect_ingredients(&ImageData::parse("data:image/jpeg;base64,QUJD").unwrap())
        .await;

    assert_eq!(outcome.detected, vec!["eggs", "milk", "eggs", "spinach"]);
    assert_eq!(outcome.added, 2);
    assert_eq!(outcome.pantry.fridge, vec!["milk", "eggs", "spinach"]);
    assert_eq!(outcome.pantry.mode, PantryMode::Pot);

    // Pot mode with an empty pot has nothing to suggest from.
    assert_eq!(
        controller.suggest(None).await,
        Err(ValidationError::NoPantryIngredients)
    );
}

#[tokio::test]
async fn test_failed_detection_leaves_pantry_alone() {
    let (_client, _store, controller) = controller_with(FakeAiClient::new());
    let outcome = controller
        .detect_ingredients(&ImageData::parse("data:image/jpeg;base64,QUJD").unwrap())
        .await;

    assert!(outcome.detected.is_empty());
    assert_eq!(outcome.pantry.mode, PantryMode::Fridge);
}
