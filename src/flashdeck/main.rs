use chrono::Utc;
use clap::Parser;
use directories::ProjectDirs;
use flashdeck::api::{ConfigAction, FlashdeckApi, FlashdeckPaths};
use flashdeck::error::{FlashdeckError, Result};
use flashdeck::store::fs::FileStore;
use std::path::PathBuf;
use tracing::debug;

mod args;
mod cli;

use args::{Cli, Commands};
use cli::logging::init_logging;
use cli::print::{print_cards, print_config, print_decks, print_messages, print_stats};
use cli::reviewer::TerminalReviewer;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level);
    let mut api = init_api(&cli)?;

    match cli.command {
        Some(Commands::Decks) | None => handle_decks(&api),
        Some(Commands::Cards { deck }) => handle_cards(&api, &deck),
        Some(Commands::Review { deck }) => handle_review(&mut api, &deck),
        Some(Commands::Stats { days }) => handle_stats(&api, days),
        Some(Commands::Import { paths }) => handle_import(&mut api, paths),
        Some(Commands::Config { key, value }) => handle_config(&api, key, value),
        Some(Commands::Init) => handle_init(&api),
    }
}

fn data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    if let Some(dir) = std::env::var_os("FLASHDECK_HOME") {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "flashdeck", "flashdeck")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| FlashdeckError::Api("Could not determine data directory".into()))
}

fn init_api(cli: &Cli) -> Result<FlashdeckApi<FileStore>> {
    let data_dir = data_dir(cli)?;
    debug!(data_dir = %data_dir.display(), "using data directory");
    let store = FileStore::new(data_dir.clone());
    Ok(FlashdeckApi::new(store, FlashdeckPaths { data_dir }))
}

fn handle_decks(api: &FlashdeckApi<FileStore>) -> Result<()> {
    let result = api.list_decks()?;
    print_decks(&result.listed_decks);
    print_messages(&result.messages);
    Ok(())
}

fn handle_cards(api: &FlashdeckApi<FileStore>, deck: &str) -> Result<()> {
    let result = api.list_cards(deck)?;
    print_cards(&result.listed_cards, Utc::now());
    print_messages(&result.messages);
    Ok(())
}

fn handle_review(api: &mut FlashdeckApi<FileStore>, deck: &str) -> Result<()> {
    let mut reviewer = TerminalReviewer::new();
    let result = api.review(deck, &mut reviewer)?;
    println!();
    print_messages(&result.messages);
    Ok(())
}

fn handle_stats(api: &FlashdeckApi<FileStore>, days: Option<u64>) -> Result<()> {
    let result = api.stats(days.map(|d| d as usize))?;
    if let Some(stats) = &result.stats {
        print_stats(stats);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_import(api: &mut FlashdeckApi<FileStore>, paths: Vec<PathBuf>) -> Result<()> {
    let result = api.import_decks(paths)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(
    api: &FlashdeckApi<FileStore>,
    key: Option<String>,
    value: Option<String>,
) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = api.config(action)?;
    if let Some(config) = &result.config {
        print_config(config);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(api: &FlashdeckApi<FileStore>) -> Result<()> {
    let result = api.init()?;
    print_messages(&result.messages);
    Ok(())
}
