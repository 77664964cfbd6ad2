use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use std::fs;
use std::path::Path;
use std::process::Command;

pub fn handle(cmd: &Commands, config_path: Option<&Path>) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        let file = match config_path {
            Some(p) => p.to_path_buf(),
            None => Config::config_file(),
        };

        if *print_config {
            let content = fs::read_to_string(&file).map_err(|_| AppError::ConfigLoad)?;
            println!("{}", content);
        }

        if *edit_config {
            let ed = editor
                .clone()
                .or_else(|| std::env::var("EDITOR").ok())
                .unwrap_or_else(|| "nano".into());

            Command::new(ed)
                .arg(&file)
                .status()
                .map_err(|e| AppError::Config(e.to_string()))?;
        }
    }
    Ok(())
}
