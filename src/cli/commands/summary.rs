use crate::config::Config;
use crate::core::aggregate::build_summary;
use crate::errors::AppResult;
use crate::store::drives::DriveStore;
use crate::store::kv::KvStore;
use crate::store::prefs::PrefsStore;
use crate::ui::messages::info;
use crate::ui::progress::render_bar;
use crate::utils::time::format_duration;

/// Handle the `summary` subcommand: accumulated drive time against the
/// configured goals, honoring the four visibility toggles.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut store = KvStore::open(&cfg.database)?;
    let records = DriveStore::load_all(&mut store)?;
    let prefs = PrefsStore::load(&mut store)?;

    let summary = build_summary(&records, &prefs);
    let width = cfg.progress_bar_width;

    if prefs.show_drive_time {
        println!(
            "Total drive time: {} / {}",
            format_duration(summary.drive_minutes),
            format_duration(prefs.required_drive_time)
        );
    }

    if prefs.show_drive_progress {
        // the bar still gets a title when its time line is hidden
        if !prefs.show_drive_time {
            println!("Total drive time");
        }
        println!("  {}", render_bar(summary.drive_ratio, width));
    }

    if prefs.show_night_drive_time {
        println!(
            "Total night drive time: {} / {}",
            format_duration(summary.night_minutes),
            format_duration(prefs.required_night_drive_time)
        );
    }

    if prefs.show_night_drive_progress {
        if !prefs.show_night_drive_time {
            println!("Total night drive time");
        }
        println!("  {}", render_bar(summary.night_ratio, width));
    }

    let nothing_shown = !prefs.show_drive_time
        && !prefs.show_drive_progress
        && !prefs.show_night_drive_time
        && !prefs.show_night_drive_progress;

    if nothing_shown {
        info("All summary displays are hidden. Use `drivelog prefs` to enable them.");
    }

    Ok(())
}
