use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{CloseLogic, Session};
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Out { ids } = cmd {
        let mut session = Session::open(cfg.data_path())?;
        CloseLogic::apply(&mut session, ids)?;
        session.commit()?;
    }
    Ok(())
}
