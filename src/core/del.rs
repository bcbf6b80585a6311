use crate::core::session::Session;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Remove the given records; the remaining ones are renumbered from 0.
    pub fn apply(session: &mut Session, ids: &[usize]) -> AppResult<usize> {
        if ids.is_empty() {
            info("Nothing to delete.");
            return Ok(0);
        }

        let removed = session.apply(|store| store.delete(ids))?;
        info(format!(
            "Deleted {removed} record(s), {} left",
            session.store().len()
        ));
        Ok(removed)
    }
}
