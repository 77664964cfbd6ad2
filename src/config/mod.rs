use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub api_key: String,
    pub team_id: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default = "default_inception")]
    pub inception: NaiveDate,
}

fn default_base_url() -> String {
    "https://api.clickup.com/api/v2".to_string()
}
fn default_timezone() -> String {
    "Europe/Madrid".to_string()
}
fn default_inception() -> NaiveDate {
    // first day tracked in the workspace; reports never look further back
    NaiveDate::from_ymd_opt(2022, 10, 1).unwrap()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            team_id: String::new(),
            base_url: default_base_url(),
            timezone: default_timezone(),
            inception: default_inception(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("cureport")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".cureport")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("cureport.conf")
    }

    /// Load configuration from the given file, or from the standard
    /// location when `path` is `None`. A missing file yields defaults so
    /// `init` and `config` keep working before first setup.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let file = match path {
            Some(p) => p.to_path_buf(),
            None => Self::config_file(),
        };

        if file.exists() {
            let content = fs::read_to_string(&file).map_err(|_| AppError::ConfigLoad)?;
            serde_yaml::from_str(&content).map_err(|_| AppError::ConfigLoad)
        } else {
            Ok(Config::default())
        }
    }

    /// Write this configuration to `path` (or the standard location),
    /// creating parent directories as needed.
    pub fn save(&self, path: Option<&Path>) -> AppResult<PathBuf> {
        let file = match path {
            Some(p) => p.to_path_buf(),
            None => Self::config_file(),
        };

        if let Some(dir) = file.parent() {
            fs::create_dir_all(dir)?;
        }
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        let mut f = fs::File::create(&file).map_err(|_| AppError::ConfigSave)?;
        f.write_all(yaml.as_bytes()).map_err(|_| AppError::ConfigSave)?;
        Ok(file)
    }

    /// The configured report time zone.
    pub fn tz(&self) -> AppResult<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| AppError::InvalidTimezone(self.timezone.clone()))
    }

    /// Commands that hit the remote source need credentials; fail early
    /// with a pointer to `init` instead of a bare 401 later.
    pub fn require_credentials(&self) -> AppResult<()> {
        if self.api_key.is_empty() || self.team_id.is_empty() {
            return Err(AppError::Config(
                "api_key/team_id not set; run `cureport init --api-key <KEY> --team-id <ID>`"
                    .to_string(),
            ));
        }
        Ok(())
    }
}
