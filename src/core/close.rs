use crate::core::session::Session;
use crate::errors::{AppError, AppResult};
use crate::store::CloseOutcome;
use crate::ui::messages::{success, warning};
use crate::utils::date::{format_date, format_time};

/// Business logic for the `out` command.
pub struct CloseLogic;

impl CloseLogic {
    /// Register the exit for every id. Ids that cannot be closed are
    /// reported and skipped; the call fails only if none could be closed.
    pub fn apply(session: &mut Session, ids: &[usize]) -> AppResult<Vec<CloseOutcome>> {
        if ids.is_empty() {
            return Err(AppError::Validation("no record selected".into()));
        }

        session.apply(|store| {
            let outcomes = store.close_many(ids);

            for outcome in &outcomes {
                match &outcome.result {
                    Ok(stamp) => success(format!(
                        "Exit registered for id {} at {} {}",
                        outcome.id,
                        format_date(stamp),
                        format_time(stamp)
                    )),
                    Err(e) => warning(e),
                }
            }

            // nothing changed, so the session stays clean
            if outcomes.iter().all(|o| o.result.is_err()) {
                return Err(AppError::Validation("no exit was registered".into()));
            }

            Ok(outcomes)
        })
    }
}
