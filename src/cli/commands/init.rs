use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - an empty data file, unless one already exists
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    // `cfg.data_file` already carries a resolved --data override
    let cfg = Config::init_all(cfg.data_path(), cli.test)?;
    let data_path = cfg.data_path();

    info("Initializing gatelog…");
    if !cli.test {
        info(format!("Config file : {}", Config::config_file().display()));
    }
    info(format!("Data file   : {}", data_path.display()));

    if data_path.exists() {
        let store = RecordStore::load(&data_path)?;
        info(format!(
            "Data file already present with {} record(s), left untouched",
            store.len()
        ));
    } else {
        RecordStore::new().save(&data_path)?;
    }

    success("gatelog initialization completed!");
    Ok(())
}
