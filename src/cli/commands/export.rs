use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::logic::ExportLogic;
use crate::store::kv::KvStore;

/// Handle the `export` subcommand.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        columns,
        force,
    } = cmd
    {
        let mut store = KvStore::open(&cfg.database)?;
        ExportLogic::export(&mut store, *format, file, columns, *force)?;
    }
    Ok(())
}
