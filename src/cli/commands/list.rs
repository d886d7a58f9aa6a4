use crate::config::Config;
use crate::core::aggregate::duration_minutes;
use crate::errors::AppResult;
use crate::store::drives::DriveStore;
use crate::store::kv::KvStore;
use crate::ui::messages::info;
use crate::utils::table::{Column, Table};
use crate::utils::time::{format_duration, local_date_str, local_time_str};

/// Handle the `list` subcommand: all drives, most recent first.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut store = KvStore::open(&cfg.database)?;
    let records = DriveStore::load_all(&mut store)?;

    if records.is_empty() {
        info("No drives recorded yet. Use `drivelog add` to log one.");
        return Ok(());
    }

    let mut table = Table::new(vec![
        Column {
            header: "ID".to_string(),
            width: 8,
        },
        Column {
            header: "DATE".to_string(),
            width: 10,
        },
        Column {
            header: "FROM".to_string(),
            width: 5,
        },
        Column {
            header: "TO".to_string(),
            width: 5,
        },
        Column {
            header: "LENGTH".to_string(),
            width: 8,
        },
        Column {
            header: "TIME".to_string(),
            width: 5,
        },
        Column {
            header: "WEATHER".to_string(),
            width: 7,
        },
        Column {
            header: "NOTES".to_string(),
            width: 5,
        },
    ]);

    for record in &records {
        table.add_row(vec![
            record.short_id(),
            local_date_str(&record.start),
            local_time_str(&record.start),
            local_time_str(&record.end),
            format_duration(duration_minutes(record)),
            (if record.day { "Day" } else { "Night" }).to_string(),
            record.weather.as_str().to_string(),
            record.notes.clone().unwrap_or_default(),
        ]);
    }

    print!("{}", table.render());
    println!("\n{} drive(s) recorded.", records.len());

    Ok(())
}
