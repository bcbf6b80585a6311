use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        if !*print_config && !*edit_config {
            warning("Nothing to do: use --print or --edit.");
        }

        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", cfg.to_yaml()?);
        }

        if *edit_config {
            let path = Config::config_file();
            if !path.exists() {
                return Err(AppError::Config(format!(
                    "{} not found: run `gatelog init` first",
                    path.display()
                )));
            }

            let default_editor = std::env::var("EDITOR")
                .or_else(|_| std::env::var("VISUAL"))
                .unwrap_or_else(|_| {
                    if cfg!(target_os = "windows") {
                        "notepad".to_string()
                    } else {
                        "nano".to_string()
                    }
                });
            let editor_to_use = editor.clone().unwrap_or(default_editor);

            let status = Command::new(&editor_to_use)
                .arg(&path)
                .status()
                .map_err(|e| AppError::Config(format!("cannot run '{editor_to_use}': {e}")))?;

            if !status.success() {
                return Err(AppError::Config(format!(
                    "editor '{editor_to_use}' exited with {status}"
                )));
            }

            // catch syntax errors right away rather than on the next run
            Config::load()?;
            success(format!(
                "Configuration file edited successfully using '{editor_to_use}'"
            ));
        }
    }
    Ok(())
}
