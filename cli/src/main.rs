mod output;
mod pantry;
mod recipes;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use culinai_core::ai::create_client_from_env;
use culinai_core::{AppConfig, Category, CategoryFilter, Controller, SortMode};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "culinai")]
#[command(about = "CulinAI recipe manager", long_about = None)]
struct Cli {
    /// Data directory (default: $CULINAI_DATA_DIR or ~/.culinai)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List recipes
    List {
        /// "all", "favorites", or a category (starter, main_course, dessert, snack, drink)
        #[arg(long, default_value = "all", value_parser = parse_filter)]
        category: CategoryFilter,
        /// Only recipes whose title or ingredients contain this text
        #[arg(long, short)]
        query: Option<String>,
        /// "recent" or "alpha"
        #[arg(long, default_value = "recent", value_parser = parse_sort)]
        sort: SortMode,
    },
    /// Show one recipe in full
    Show { id: String },
    /// Add a recipe; missing image, video and nutrition are filled by AI
    Add {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "main_course", value_parser = parse_category)]
        category: Category,
        /// Comma-separated ingredients
        #[arg(long)]
        ingredients: String,
        /// One step; repeat for each step in order
        #[arg(long = "step", required = true)]
        steps: Vec<String>,
        #[arg(long)]
        prep_time: Option<String>,
        #[arg(long)]
        image: Option<String>,
        #[arg(long)]
        video: Option<String>,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        rating: i64,
    },
    /// Delete a recipe
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
    /// Toggle a recipe's favorite flag
    Favorite { id: String },
    /// Rate a recipe from 0 to 5 (0 clears the rating)
    Rate {
        id: String,
        #[arg(allow_negative_numbers = true)]
        rating: i64,
    },
    /// Print a recipe as shareable text
    Share { id: String },
    /// Suggest recipes from ingredients you have
    Suggest {
        /// Ingredients, e.g. `culinai suggest eggs spinach feta`
        #[arg(required = true)]
        ingredients: Vec<String>,
        /// Save suggestion number N (1-based) to your recipes
        #[arg(long)]
        save: Option<usize>,
    },
    /// Detect ingredients in a photo of your fridge
    Detect {
        photo: PathBuf,
        /// Also suggest recipes from what was found
        #[arg(long)]
        suggest: bool,
    },
}

fn parse_category(s: &str) -> Result<Category, String> {
    s.parse::<Category>().map_err(|_| {
        let names: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
        format!("unknown category (expected one of: {})", names.join(", "))
    })
}

fn parse_filter(s: &str) -> Result<CategoryFilter, String> {
    s.parse::<CategoryFilter>()
        .map_err(|_| "expected all, favorites, or a category name".to_string())
}

fn parse_sort(s: &str) -> Result<SortMode, String> {
    s.parse::<SortMode>()
        .map_err(|_| "expected recent or alpha".to_string())
}

fn init_logging() {
    // Logs go to stderr so command output stays clean
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let mut config = AppConfig::from_env().context("Invalid configuration")?;
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }

    let ai_client = create_client_from_env().context("Failed to create AI client")?;
    let controller = Controller::open(&config, ai_client)
        .await
        .with_context(|| format!("Failed to load recipes from {}", config.data_dir.display()))?;

    match cli.command {
        Commands::List {
            category,
            query,
            sort,
        } => {
            recipes::list(&controller, category, query.unwrap_or_default(), sort).await;
        }
        Commands::Show { id } => recipes::show(&controller, &id).await?,
        Commands::Add {
            title,
            category,
            ingredients,
            steps,
            prep_time,
            image,
            video,
            rating,
        } => {
            let form = culinai_core::RecipeForm {
                title,
                category,
                prep_time: prep_time.unwrap_or_default(),
                ingredients,
                instructions: steps.join("\n"),
                image: image.unwrap_or_default(),
                video_url: video.unwrap_or_default(),
                rating,
            };
            recipes::add(&controller, &form).await?;
        }
        Commands::Delete { id, yes } => recipes::delete(&controller, &id, yes).await?,
        Commands::Favorite { id } => recipes::favorite(&controller, &id).await?,
        Commands::Rate { id, rating } => recipes::rate(&controller, &id, rating).await?,
        Commands::Share { id } => recipes::share(&controller, &id).await?,
        Commands::Suggest { ingredients, save } => {
            pantry::suggest(&controller, ingredients, save).await?;
        }
        Commands::Detect { photo, suggest } => {
            pantry::detect(&controller, &photo, suggest).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_add_with_steps() {
        let cli = Cli::try_parse_from([
            "culinai",
            "add",
            "--title",
            "Toast",
            "--ingredients",
            "bread, butter",
            "--step",
            "Toast the bread",
            "--step",
            "Butter it",
            "--rating",
            "-1",
        ])
        .unwrap();

        match cli.command {
            Commands::Add {
                category,
                steps,
                rating,
                ..
            } => {
                assert_eq!(category, Category::MainCourse);
                assert_eq!(steps, vec!["Toast the bread", "Butter it"]);
                assert_eq!(rating, -1);
            }
            _ => panic!("expected add"),
        }
    }

    #[test]
    fn test_parse_list_filter() {
        let cli = Cli::try_parse_from(["culinai", "list", "--category", "favorites"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::List {
                category: CategoryFilter::Favorites,
                ..
            }
        ));
        assert!(Cli::try_parse_from(["culinai", "list", "--category", "brunch"]).is_err());
    }
}
