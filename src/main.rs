#![deny(unsafe_code)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level as TraceLevel;
use tracing_subscriber::FmtSubscriber;

use easel_config::config::registry::{application_config_path, key_config_path};
use easel_config::config::validator::validate_key_bindings;
use easel_config::{ConfigRegistry, constants};

#[derive(Parser)]
#[command(name = "easel-config")]
#[command(version)]
#[command(about = "Load Easel configuration definitions and check key bindings", long_about = None)]
struct Cli {
    /// Additional definition files to register on top of the built-in sets
    #[arg(long = "definitions", value_name = "PATH")]
    definitions: Vec<PathBuf>,

    /// Saved application values to overlay (defaults to the per-user file)
    #[arg(long, value_name = "PATH")]
    app_values: Option<PathBuf>,

    /// Saved key-binding values to overlay (defaults to the per-user file)
    #[arg(long, value_name = "PATH")]
    key_values: Option<PathBuf>,

    /// Print every registered entry with its current value
    #[arg(long)]
    show: bool,

    /// Exit with a failure code if any key-binding warning is found
    #[arg(long)]
    strict: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(TraceLevel::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");

    let cli = Cli::parse();

    let mut app = ConfigRegistry::from_json(
        "application_config_definitions",
        constants::resources::APPLICATION_DEFINITIONS,
    )
    .context("Failed to load application definitions")?;
    app.register_json(
        "generator_config_definitions",
        constants::resources::GENERATOR_DEFINITIONS,
    )
    .context("Failed to load generator definitions")?;

    for path in &cli.definitions {
        app.register_file(path)
            .with_context(|| format!("Failed to register definitions from {}", path.display()))?;
    }

    let app_values = cli.app_values.unwrap_or_else(application_config_path);
    app.apply_saved(&app_values)
        .with_context(|| format!("Failed to read saved values from {}", app_values.display()))?;

    let mut keys = ConfigRegistry::from_json(
        "key_config_definitions",
        constants::resources::KEY_DEFINITIONS,
    )
    .context("Failed to load key binding definitions")?;

    let key_values = cli.key_values.unwrap_or_else(key_config_path);
    keys.apply_saved(&key_values)
        .with_context(|| format!("Failed to read saved values from {}", key_values.display()))?;

    if cli.show {
        print_entries(&app);
        print_entries(&keys);
    }

    let warnings = validate_key_bindings(&keys);
    for warning in &warnings {
        println!("warning: {warning}");
    }

    if warnings.is_empty() {
        println!(
            "Loaded {} settings and {} key bindings; no key binding issues found.",
            app.len(),
            keys.len()
        );
    } else if cli.strict {
        eprintln!("{} key binding issue(s) found", warnings.len());
        std::process::exit(1);
    }

    Ok(())
}

fn print_entries(registry: &ConfigRegistry) {
    for category in registry.categories() {
        println!("{category}:");
        for key in registry.category_keys(category, None) {
            // Keys come straight from categories(), lookup cannot fail
            if let Ok(entry) = registry.get(key) {
                println!(
                    "  {} = {} ({}, {})",
                    entry.key(),
                    entry.value(),
                    entry.value_type(),
                    if entry.saved() { "saved" } else { "not saved" },
                );
            }
        }
    }
}
