use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::kv::KvStore;
use crate::ui::messages::success;

/// Handle the `init` subcommand: create the config directory, the config
/// file, and the store file with its schema.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;

    // opening the store creates the file and the kv table
    let path_str = db_path.to_string_lossy().to_string();
    KvStore::open(&path_str)?;

    success(format!("Store ready: {:?}", db_path));
    Ok(())
}
