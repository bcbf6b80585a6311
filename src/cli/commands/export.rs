use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Session;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let session = Session::open(cfg.data_path())?;
        ExportLogic::export(session.store(), *format, file, *force)?;
    }
    Ok(())
}
