use crate::cli::parser::Commands;
use crate::cli::commands::list::print_records;
use crate::config::Config;
use crate::core::Session;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Search { term } = cmd {
        let term = term.trim();
        let session = Session::open(cfg.data_path())?;
        let rows: Vec<_> = session.store().search(term).collect();

        if rows.is_empty() {
            info(format!("No records matching '{term}'."));
            return Ok(());
        }

        header(format!("{} record(s) matching '{term}'", rows.len()));
        print_records(&rows);
    }
    Ok(())
}
