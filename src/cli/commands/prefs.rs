use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::kv::KvStore;
use crate::store::prefs::PrefsStore;
use crate::ui::messages::success;
use crate::utils::time::format_duration;

/// Handle the `prefs` subcommand: read-modify-save of the single
/// preferences record. The record is written back wholesale.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Prefs {
        print_prefs,
        required_time,
        required_night_time,
        show_drive_time,
        show_drive_progress,
        show_night_time,
        show_night_progress,
    } = cmd
    {
        let mut store = KvStore::open(&cfg.database)?;
        let mut prefs = PrefsStore::load(&mut store)?;

        let mut changed = false;

        if let Some(minutes) = required_time {
            prefs.required_drive_time = *minutes;
            changed = true;
        }
        if let Some(minutes) = required_night_time {
            prefs.required_night_drive_time = *minutes;
            changed = true;
        }
        if let Some(v) = show_drive_time {
            prefs.show_drive_time = *v;
            changed = true;
        }
        if let Some(v) = show_drive_progress {
            prefs.show_drive_progress = *v;
            changed = true;
        }
        if let Some(v) = show_night_time {
            prefs.show_night_drive_time = *v;
            changed = true;
        }
        if let Some(v) = show_night_progress {
            prefs.show_night_drive_progress = *v;
            changed = true;
        }

        if changed {
            PrefsStore::save(&mut store, &prefs)?;
            success("Preferences saved.");
        }

        if *print_prefs || !changed {
            println!("📄 Current preferences:\n");
            println!("show_drive_time:           {}", prefs.show_drive_time);
            println!("show_drive_progress:       {}", prefs.show_drive_progress);
            println!("show_night_drive_time:     {}", prefs.show_night_drive_time);
            println!(
                "show_night_drive_progress: {}",
                prefs.show_night_drive_progress
            );
            println!(
                "required_drive_time:       {} min ({})",
                prefs.required_drive_time,
                format_duration(prefs.required_drive_time)
            );
            println!(
                "required_night_drive_time: {} min ({})",
                prefs.required_night_drive_time,
                format_duration(prefs.required_night_drive_time)
            );
        }
    }

    Ok(())
}
