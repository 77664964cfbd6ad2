use crate::api::ClickUpClient;
use crate::cli::parser::Commands;
use crate::cli::render::{self, TableKind};
use crate::config::Config;
use crate::core::reports::Reporter;
use crate::errors::{AppError, AppResult};
use crate::models::report::Report;
use crate::ui::messages::header;
use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Day { date } = cmd {
        cfg.require_credentials()?;
        let tz = cfg.tz()?;
        let day = resolve_day(date.as_deref(), tz)?;

        let client = ClickUpClient::from_config(cfg)?;
        let reporter = Reporter::new(&client, tz, cfg.inception);
        let report = reporter.build_day_report(day)?;

        header(format!("Tasks at {}", day));
        match report {
            Report::Rows(rows) => render::print_rows(&TableKind::Tasks, &rows),
            Report::NoEntries => render::print_no_entries(),
        }
    }
    Ok(())
}

fn resolve_day(date: Option<&str>, tz: Tz) -> AppResult<NaiveDate> {
    match date {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| AppError::InvalidDate(s.to_string())),
        None => Ok(Utc::now().with_timezone(&tz).date_naive()),
    }
}
