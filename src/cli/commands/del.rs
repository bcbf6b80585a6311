use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{DeleteLogic, Session};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};

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

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { ids, yes } = cmd {
        let mut ids = ids.clone();
        ids.sort_unstable();
        ids.dedup();

        let mut session = Session::open(cfg.data_path())?;

        // Validate up front so the prompt only lists real records
        let mut names = Vec::with_capacity(ids.len());
        for &id in &ids {
            let rec = session.store().get(id).ok_or(AppError::NotFound(id))?;
            names.push(format!("#{id} {}", rec.full_name));
        }

        if cfg.confirm_delete && !*yes {
            let prompt = format!(
                "Delete {}? This action is irreversible and renumbers the remaining records.",
                names.join(", ")
            );
            if !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        let removed = DeleteLogic::apply(&mut session, &ids)?;
        session.commit()?;
        success(format!("{removed} record(s) have been deleted."));
    }

    Ok(())
}
