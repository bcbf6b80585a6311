use crate::core::session::Session;
use crate::errors::AppResult;
use crate::models::NewRecord;
use crate::ui::messages::success;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Register an arrival; returns the new record id.
    pub fn apply(session: &mut Session, new: NewRecord) -> AppResult<usize> {
        let id = session.apply(|store| store.insert(new))?;

        if let Some(rec) = session.store().get(id) {
            success(format!(
                "Entry registered for '{}' (id {id}) at {} {}",
                rec.full_name,
                rec.entry_date(),
                rec.entry_time()
            ));
        }
        Ok(id)
    }
}
