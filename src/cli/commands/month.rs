use crate::api::ClickUpClient;
use crate::cli::parser::Commands;
use crate::cli::render::{self, TableKind};
use crate::config::Config;
use crate::core::reports::Reporter;
use crate::errors::AppResult;
use crate::models::report::MonthMode;
use crate::ui::messages::header;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Month {
        year,
        month,
        by_task,
    } = cmd
    {
        cfg.require_credentials()?;
        let tz = cfg.tz()?;
        let mode = if *by_task {
            MonthMode::ByTask
        } else {
            MonthMode::ByDay
        };

        let client = ClickUpClient::from_config(cfg)?;
        let reporter = Reporter::new(&client, tz, cfg.inception);
        let rows = reporter.build_month_report(*year, *month, mode)?;

        header(format!("Monthly report: {:02}/{}", month, year));
        if rows.is_empty() {
            render::print_no_entries();
        } else {
            let kind = match mode {
                MonthMode::ByDay => TableKind::MonthByDay,
                MonthMode::ByTask => TableKind::MonthByTask,
            };
            render::print_rows(&kind, &rows);
        }
    }
    Ok(())
}
