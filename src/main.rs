use std::env;
use std::process::ExitCode;

use env_logger::Env;
use log::{error, warn};

use recipe_finder::{render_meal, FindError};

#[tokio::main]
async fn main() -> ExitCode {
    // No-match outcomes are part of the user-facing output at warn level.
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    match args.get(1).map(String::as_str) {
        Some("random") => random().await,
        Some("find") => find(&args[2..].join(" ")).await,
        _ => {
            eprintln!("Usage: recipe-finder random");
            eprintln!("       recipe-finder find <ingredients, comma-separated>");
            ExitCode::FAILURE
        }
    }
}

async fn random() -> ExitCode {
    match recipe_finder::random_recipe().await {
        Ok(meal) => {
            println!("{}", render_meal(&meal));
            ExitCode::SUCCESS
        }
        Err(err) => report(err),
    }
}

async fn find(ingredients: &str) -> ExitCode {
    match recipe_finder::find_recipes(ingredients).await {
        Ok(recipes) => {
            println!("Found {} recipe(s) matching your ingredients:", recipes.len());
            for meal in &recipes {
                println!("---");
                println!("{}", render_meal(meal));
            }
            ExitCode::SUCCESS
        }
        Err(err) => report(err),
    }
}

/// A query that legitimately matched nothing is a warning and a clean
/// exit; anything else is a failure.
fn report(err: FindError) -> ExitCode {
    if err.is_no_match() {
        warn!("{}", err);
        ExitCode::SUCCESS
    } else {
        error!("Failed to fetch recipes. Please try again later. Error: {}", err);
        ExitCode::FAILURE
    }
}
