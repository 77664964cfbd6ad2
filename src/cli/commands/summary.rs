use crate::api::ClickUpClient;
use crate::cli::parser::Commands;
use crate::cli::render::{self, TableKind};
use crate::config::Config;
use crate::core::period::PeriodSpec;
use crate::core::reports::Reporter;
use crate::errors::AppResult;
use crate::models::report::Report;
use crate::ui::messages::header;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { period, shares } = cmd {
        cfg.require_credentials()?;
        let tz = cfg.tz()?;
        let spec = PeriodSpec::parse(period)?;

        let client = ClickUpClient::from_config(cfg)?;
        let reporter = Reporter::new(&client, tz, cfg.inception);
        let report = reporter.build_period_summary(&spec)?;

        header(title_for(&spec, period));
        let kind = match spec {
            PeriodSpec::Today | PeriodSpec::Day(_) => TableKind::Tasks,
            _ => TableKind::Spaces { shares: *shares },
        };
        match report {
            Report::Rows(rows) => render::print_rows(&kind, &rows),
            Report::NoEntries => render::print_no_entries(),
        }
    }
    Ok(())
}

fn title_for(spec: &PeriodSpec, raw: &str) -> String {
    match spec {
        PeriodSpec::Today => "Today".to_string(),
        PeriodSpec::CurrentWeek => "Current week".to_string(),
        PeriodSpec::CurrentMonth => "Current month".to_string(),
        PeriodSpec::AllTime => "All time".to_string(),
        _ => raw.to_string(),
    }
}
