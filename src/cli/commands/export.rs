use crate::api::ClickUpClient;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::reports::Reporter;
use crate::errors::{AppError, AppResult};
use crate::models::report::{MonthMode, Report};
use crate::ui::messages::warning;
use chrono::{Datelike, NaiveDate};
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        day,
        month,
        by_task,
        force,
    } = cmd
    {
        cfg.require_credentials()?;
        let tz = cfg.tz()?;

        let client = ClickUpClient::from_config(cfg)?;
        let reporter = Reporter::new(&client, tz, cfg.inception);

        let rows = match (day, month) {
            (Some(date), None) => {
                let d = NaiveDate::parse_from_str(date, "%Y-%m-%d")
                    .map_err(|_| AppError::InvalidDate(date.to_string()))?;
                match reporter.build_day_report(d)? {
                    Report::Rows(rows) => rows,
                    Report::NoEntries => {
                        warning("No time entries; nothing to export");
                        return Ok(());
                    }
                }
            }
            (None, Some(ym)) => {
                let first = NaiveDate::parse_from_str(&format!("{}-01", ym), "%Y-%m-%d")
                    .map_err(|_| AppError::InvalidMonth(ym.to_string()))?;
                let mode = if *by_task {
                    MonthMode::ByTask
                } else {
                    MonthMode::ByDay
                };
                let rows = reporter.build_month_report(first.year(), first.month(), mode)?;
                if rows.is_empty() {
                    warning("No time entries; nothing to export");
                    return Ok(());
                }
                rows
            }
            _ => {
                return Err(AppError::InvalidPeriod(
                    "specify exactly one of --day or --month".to_string(),
                ));
            }
        };

        crate::export::write_report(Path::new(file), format, &rows, *force)?;
    }
    Ok(())
}
