//! cureport library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: Option<&Path>) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(&cli.command, config_path),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, config_path),
        Commands::Day { .. } => cli::commands::day::handle(&cli.command, cfg),
        Commands::Summary { .. } => cli::commands::summary::handle(&cli.command, cfg),
        Commands::Month { .. } => cli::commands::month::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // resolve an optional --config override once, then load
    let config_path = cli.config.as_deref().map(utils::path::expand_tilde);
    let cfg = Config::load(config_path.as_deref())?;

    dispatch(&cli, &cfg, config_path.as_deref())
}
