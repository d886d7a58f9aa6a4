use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregate::duration_minutes;
use crate::errors::{AppError, AppResult};
use crate::store::drives::DriveStore;
use crate::store::kv::KvStore;
use crate::ui::messages::{info, success, warning};
use crate::utils::time::{format_duration, local_date_str};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

/// Handle the `del` subcommand: remove one drive by id.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let mut store = KvStore::open(&cfg.database)?;
        let record = DriveStore::resolve(&mut store, id)?;

        let prompt = format!(
            "Delete the {} drive on {} ({})? This action is irreversible.",
            format_duration(duration_minutes(&record)),
            local_date_str(&record.start),
            record.short_id()
        );

        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        if !DriveStore::remove_by_id(&mut store, record.id)? {
            return Err(AppError::UnknownId(id.clone()));
        }

        success(format!("Drive {} has been deleted.", record.short_id()));
    }

    Ok(())
}
