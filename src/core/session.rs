use crate::errors::AppResult;
use crate::store::RecordStore;
use std::path::{Path, PathBuf};

/// One run of the program against the data file: the table is read when
/// the session opens and written back once, on commit, if anything changed.
pub struct Session {
    path: PathBuf,
    store: RecordStore,
    dirty: bool,
}

impl Session {
    pub fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref().to_path_buf();
        let store = RecordStore::load(&path)?;
        Ok(Self {
            path,
            store,
            dirty: false,
        })
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Run a mutating operation on the table. The session is marked for
    /// saving only when `op` succeeds.
    pub fn apply<T>(
        &mut self,
        op: impl FnOnce(&mut RecordStore) -> AppResult<T>,
    ) -> AppResult<T> {
        let out = op(&mut self.store)?;
        self.dirty = true;
        Ok(out)
    }

    /// Write the table back if it was touched. Returns whether a write happened.
    pub fn commit(self) -> AppResult<bool> {
        if !self.dirty {
            return Ok(false);
        }
        self.store.save(&self.path)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewRecord;
    use tempfile::TempDir;

    fn ana() -> NewRecord {
        NewRecord {
            full_name: "Ana Silva".into(),
            id_document: "1".into(),
            car_model: "Uno".into(),
            plate: "AAA0A00".into(),
            address: "Rua A".into(),
            number: "1".into(),
            visitor_type: "Visitor".into(),
        }
    }

    #[test]
    fn read_only_session_does_not_create_the_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("records.csv");

        let session = Session::open(&path).unwrap();
        assert!(session.store().is_empty());
        assert!(!session.commit().unwrap());
        assert!(!path.exists());
    }

    #[test]
    fn failed_operation_does_not_write() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("records.csv");

        let mut session = Session::open(&path).unwrap();
        let mut blank = ana();
        blank.plate.clear();
        assert!(session.apply(|store| store.insert(blank)).is_err());
        assert!(session.apply(|store| store.close(0)).is_err());

        assert!(!session.commit().unwrap());
        assert!(!path.exists());
    }

    #[test]
    fn changes_survive_into_next_session() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("records.csv");

        let mut session = Session::open(&path).unwrap();
        session.apply(|store| store.insert(ana())).unwrap();
        assert!(session.commit().unwrap());

        let session = Session::open(&path).unwrap();
        assert_eq!(session.store().len(), 1);
        assert_eq!(session.store().get(0).unwrap().full_name, "Ana Silva");
    }
}
