//! Calendar windows for report periods.
//!
//! All boundaries are midnights in one configured time zone, expressed as
//! millisecond timestamps. Windows are half-open `[start, end)`.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone};
use chrono_tz::Tz;

/// A named or explicit calendar window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodSpec {
    Today,
    CurrentWeek,
    CurrentMonth,
    AllTime,
    Day(NaiveDate),
    Month { year: i32, month: u32 },
}

impl PeriodSpec {
    /// Parse a CLI period argument: a named period, `YYYY-MM-DD`, or
    /// `YYYY-MM`.
    pub fn parse(s: &str) -> AppResult<Self> {
        match s {
            "today" => return Ok(PeriodSpec::Today),
            "week" | "current_week" => return Ok(PeriodSpec::CurrentWeek),
            "month" | "current_month" => return Ok(PeriodSpec::CurrentMonth),
            "all" | "all_time" => return Ok(PeriodSpec::AllTime),
            _ => {}
        }

        if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Ok(PeriodSpec::Day(d));
        }
        if let Ok(first) = NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d") {
            return Ok(PeriodSpec::Month {
                year: first.year(),
                month: first.month(),
            });
        }

        Err(AppError::InvalidPeriod(s.to_string()))
    }
}

/// Millisecond window for `spec`, relative to `now`.
///
/// The end is `now` for every open-ended period. An explicit past day runs
/// midnight → next midnight; an explicit past month runs from midnight of
/// its day 1 to midnight of day 1 of the following month. When the
/// explicit day/month is the current one, the window ends at `now`
/// (in-progress period). `AllTime` starts at the configured inception day.
pub fn window_for(
    spec: &PeriodSpec,
    now: DateTime<Tz>,
    inception: NaiveDate,
) -> AppResult<(i64, i64)> {
    let tz = now.timezone();
    let today = now.date_naive();
    let now_ms = now.timestamp_millis();

    match *spec {
        PeriodSpec::Today => Ok((midnight_ms(today, tz)?, now_ms)),
        PeriodSpec::CurrentWeek => {
            let monday = today - Duration::days(today.weekday().num_days_from_monday() as i64);
            Ok((midnight_ms(monday, tz)?, now_ms))
        }
        PeriodSpec::CurrentMonth => {
            let first = first_of_month(today.year(), today.month())?;
            Ok((midnight_ms(first, tz)?, now_ms))
        }
        PeriodSpec::AllTime => Ok((midnight_ms(inception, tz)?, now_ms)),
        PeriodSpec::Day(day) => {
            if day == today {
                Ok((midnight_ms(day, tz)?, now_ms))
            } else {
                let next = day
                    .succ_opt()
                    .ok_or_else(|| AppError::InvalidDate(day.to_string()))?;
                Ok((midnight_ms(day, tz)?, midnight_ms(next, tz)?))
            }
        }
        PeriodSpec::Month { year, month } => {
            let first = first_of_month(year, month)?;
            if year == today.year() && month == today.month() {
                Ok((midnight_ms(first, tz)?, now_ms))
            } else {
                let (ny, nm) = if month == 12 {
                    (year + 1, 1)
                } else {
                    (year, month + 1)
                };
                let next_first = first_of_month(ny, nm)?;
                Ok((midnight_ms(first, tz)?, midnight_ms(next_first, tz)?))
            }
        }
    }
}

fn first_of_month(year: i32, month: u32) -> AppResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| AppError::InvalidMonth(format!("{}-{:02}", year, month)))
}

/// Midnight of `date` in `tz`, as ms since epoch. On transition days
/// without a real midnight the earliest valid local time is used.
fn midnight_ms(date: NaiveDate, tz: Tz) -> AppResult<i64> {
    let naive = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
    tz.from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.timestamp_millis())
        .ok_or_else(|| AppError::InvalidDate(date.to_string()))
}
