use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregate::duration_minutes;
use crate::errors::{AppError, AppResult};
use crate::models::drive::DriveRecord;
use crate::models::weather::Weather;
use crate::store::drives::DriveStore;
use crate::store::kv::KvStore;
use crate::ui::messages::success;
use crate::utils::time::{format_duration, local_to_utc, parse_date, parse_time};

/// Handle the `add` subcommand: record a past drive.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        start,
        end,
        end_date,
        night,
        weather,
        notes,
    } = cmd
    {
        let start_date = parse_date(date).ok_or_else(|| AppError::InvalidDate(date.clone()))?;
        let end_date = match end_date {
            Some(d) => parse_date(d).ok_or_else(|| AppError::InvalidDate(d.clone()))?,
            None => start_date,
        };

        let start_time = parse_time(start).ok_or_else(|| AppError::InvalidTime(start.clone()))?;
        let end_time = parse_time(end).ok_or_else(|| AppError::InvalidTime(end.clone()))?;

        let weather = match weather {
            Some(name) => Weather::from_name(name)
                .ok_or_else(|| AppError::InvalidWeather(name.clone()))?,
            None => Weather::default(),
        };

        let notes = notes.clone().filter(|n| !n.is_empty());

        let record = DriveRecord::new(
            local_to_utc(start_date, start_time)?,
            local_to_utc(end_date, end_time)?,
            !night,
            weather,
            notes,
        )?;

        let length = format_duration(duration_minutes(&record));
        let short_id = record.short_id();

        let mut store = KvStore::open(&cfg.database)?;
        DriveStore::append(&mut store, record)?;

        success(format!("Recorded a {} drive on {} ({})", length, date, short_id));
    }

    Ok(())
}
