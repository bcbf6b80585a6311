use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Session;
use crate::errors::AppResult;
use crate::models::{COLUMNS, Record};
use crate::ui::messages::{header, info};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List = cmd {
        let session = Session::open(cfg.data_path())?;
        let rows = session.store().list_sorted();

        if rows.is_empty() {
            info("No records.");
            return Ok(());
        }

        header(format!("{} record(s)", rows.len()));
        print_records(&rows);
    }
    Ok(())
}

/// Render `(id, record)` pairs as a text table, `id` first.
pub(crate) fn render_records(rows: &[(usize, &Record)]) -> String {
    let columns = std::iter::once("id")
        .chain(COLUMNS)
        .map(Column::new)
        .collect();
    let mut table = Table::new(columns);

    for (id, rec) in rows {
        let mut row = vec![id.to_string()];
        row.extend(rec.to_row());
        table.add_row(row);
    }

    table.render()
}

pub(crate) fn print_records(rows: &[(usize, &Record)]) {
    print!("{}", render_records(rows));
}
