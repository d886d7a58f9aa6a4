use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::weather::Weather;
use crate::store::drives::DriveStore;
use crate::store::kv::KvStore;
use crate::ui::messages::success;
use crate::utils::time::{local_to_utc, parse_date, parse_time};
use chrono::{Local, NaiveDate, NaiveTime};

/// Handle the `edit` subcommand: partial update of one drive, keeping its id.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        date,
        start,
        end,
        end_date,
        day,
        night,
        weather,
        cycle_weather,
        notes,
    } = cmd
    {
        let mut store = KvStore::open(&cfg.database)?;
        let mut record = DriveStore::resolve(&mut store, id)?;

        // work on the record's local wall-clock components so a date or time
        // flag replaces just that component
        let (mut start_date, mut start_time) = local_parts(&record.start);
        let (mut end_date_cur, mut end_time) = local_parts(&record.end);

        if let Some(d) = date {
            let parsed = parse_date(d).ok_or_else(|| AppError::InvalidDate(d.clone()))?;
            start_date = parsed;
            // keeps both ends on the same day unless --end-date says otherwise
            end_date_cur = parsed;
        }
        if let Some(d) = end_date {
            end_date_cur = parse_date(d).ok_or_else(|| AppError::InvalidDate(d.clone()))?;
        }
        if let Some(t) = start {
            start_time = parse_time(t).ok_or_else(|| AppError::InvalidTime(t.clone()))?;
        }
        if let Some(t) = end {
            end_time = parse_time(t).ok_or_else(|| AppError::InvalidTime(t.clone()))?;
        }

        record.start = local_to_utc(start_date, start_time)?;
        record.end = local_to_utc(end_date_cur, end_time)?;

        if *day {
            record.day = true;
        }
        if *night {
            record.day = false;
        }

        if let Some(name) = weather {
            record.weather =
                Weather::from_name(name).ok_or_else(|| AppError::InvalidWeather(name.clone()))?;
        }
        if *cycle_weather {
            record.weather = record.weather.next();
        }

        if let Some(n) = notes {
            record.notes = if n.is_empty() { None } else { Some(n.clone()) };
        }

        record.validate()?;

        let record_id = record.id;
        let short_id = record.short_id();
        if !DriveStore::replace_by_id(&mut store, record_id, record)? {
            // resolved above, so the id can only vanish if a concurrent
            // writer removed it between the two loads
            return Err(AppError::UnknownId(id.clone()));
        }

        success(format!("Drive {} updated.", short_id));
    }

    Ok(())
}

fn local_parts(t: &chrono::DateTime<chrono::Utc>) -> (NaiveDate, NaiveTime) {
    let local = t.with_timezone(&Local);
    (local.date_naive(), local.time())
}
