use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use std::path::Path;

pub fn handle(cmd: &Commands, config_path: Option<&Path>) -> AppResult<()> {
    if let Commands::Init {
        api_key,
        team_id,
        timezone,
    } = cmd
    {
        let mut cfg = Config::default();
        if let Some(key) = api_key {
            cfg.api_key = key.clone();
        }
        if let Some(id) = team_id {
            cfg.team_id = id.clone();
        }
        if let Some(tz) = timezone {
            cfg.timezone = tz.clone();
            // fail now, not on the first report
            cfg.tz()?;
        }

        let written = cfg.save(config_path)?;
        success(format!("Config file: {:?}", written));

        if cfg.api_key.is_empty() || cfg.team_id.is_empty() {
            warning("api_key/team_id still empty; edit the config file or re-run init with --api-key and --team-id");
        }
    }
    Ok(())
}
