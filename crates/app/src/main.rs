use std::fs;
use std::path::Path;

use anyhow::{Context, bail};
use serde::de::DeserializeOwned;

use barkeep_ai::{LlmContentBridge, ProviderKind, create_provider};
use barkeep_app::{AppConfig, report};
use barkeep_inventory::StockCatalog;
use barkeep_recipes::Recipe;

fn load_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let text = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    barkeep_observability::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (catalog_path, recipes_path) = match args.as_slice() {
        [catalog] => (Path::new(catalog), None),
        [catalog, recipes] => (Path::new(catalog), Some(Path::new(recipes))),
        _ => bail!("usage: barkeep-report <catalog.json> [recipes.json]"),
    };

    let config = AppConfig::from_env();
    tracing::info!(margin = config.pricing.margin.percent(), ai = ?config.ai, "configuration loaded");

    let catalog: StockCatalog = load_json(catalog_path)?;
    let recipes: Vec<Recipe> = match recipes_path {
        Some(path) => load_json(path)?,
        None => Vec::new(),
    };

    println!("== Stock alerts ==");
    let alerts = report::alert_lines(&catalog);
    if alerts.is_empty() {
        println!("(none)");
    }
    for line in alerts {
        println!("{line}");
    }

    if !recipes.is_empty() {
        println!();
        println!("== Recipes ==");
        for line in report::recipe_lines(&recipes, &catalog, &config.pricing) {
            println!("{line}");
        }
    }

    if config.ai.provider != ProviderKind::Disabled {
        match create_provider(&config.ai) {
            Ok(provider) => {
                let bridge = LlmContentBridge::from_boxed(provider);
                if let Some(analysis) = report::stock_analysis(&catalog, &bridge).await {
                    println!();
                    println!("== AI stock analysis ==");
                    for line in report::analysis_lines(&analysis) {
                        println!("{line}");
                    }
                }
            }
            Err(e) => tracing::warn!(error = %e, "AI provider unavailable; skipping stock analysis"),
        }
    }

    Ok(())
}
