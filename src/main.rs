use log::{debug, error};
use std::env;
use std::sync::Arc;

use coffee_recipes::{AppConfig, Catalog, Method, RecipeFilter};

const USAGE: &str = "Usage:
  coffee-recipes list [hot|cold|all]
  coffee-recipes show <id> [espresso|granules]
  coffee-recipes note <id> [text]";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().skip(1).collect();
    let command = args.first().ok_or(USAGE)?;

    let config = AppConfig::load()?;
    debug!("{:#?}", config);
    let catalog = Arc::new(Catalog::load(&config)?);

    match command.as_str() {
        "list" => {
            let mut filter = RecipeFilter::new(Arc::clone(&catalog));
            filter.set_filter_str(args.get(1).map(String::as_str).unwrap_or("all"));
            for recipe in &filter.current().visible {
                println!("{:<20} {:<22} {}", recipe.id, recipe.name, recipe.subtitle());
            }
        }
        "show" => {
            let id = args.get(1).ok_or(USAGE)?;
            let method = match args.get(2) {
                Some(value) => value.parse::<Method>()?,
                None => config.default_method,
            };
            let recipe = catalog.find_by_id(id)?;

            println!("{} ({})", recipe.name, recipe.subtitle());
            println!("{} min, {} kcal", recipe.meta.minutes, recipe.meta.calories);
            match recipe.variant(method) {
                Some(variant) => {
                    println!("\n[{}]", method);
                    for line in &variant.ingredients {
                        println!("  - {}", line);
                    }
                    println!();
                    for (i, step) in variant.steps.iter().enumerate() {
                        println!("  {}. {}", i + 1, step);
                    }
                    if !variant.tips.is_empty() {
                        println!("\n  Tip: {}", variant.tips);
                    }
                }
                None => println!("\nNo {} variant for this coffee.", method),
            }
            if !recipe.general_tips.is_empty() {
                println!();
                for tip in &recipe.general_tips {
                    println!("* {}", tip);
                }
            }
        }
        "note" => {
            let id = args.get(1).ok_or(USAGE)?;
            let recipe = catalog.find_by_id(id)?;
            let mut notes = coffee_recipes::open_notes(&config)?;
            match args.get(2..).filter(|rest| !rest.is_empty()) {
                Some(rest) => {
                    notes.save(&recipe.id, &rest.join(" "))?;
                    println!("Saved note for {}", recipe.name);
                }
                None => println!("{}", notes.load(&recipe.id)?),
            }
        }
        other => {
            error!("Unknown command: {}", other);
            return Err(USAGE.into());
        }
    }

    Ok(())
}
