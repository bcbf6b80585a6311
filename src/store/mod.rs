//! In-memory record table.
//!
//! The identifier of a record is its position in the table, so ids are always
//! dense (0..N-1) and match the row order of the data file.

mod persist;

use crate::errors::{AppError, AppResult};
use crate::models::{NewRecord, Record, VisitorType};
use crate::utils::date;
use chrono::NaiveDateTime;
use std::collections::BTreeSet;

/// Result of closing one id within a batch.
#[derive(Debug)]
pub struct CloseOutcome {
    pub id: usize,
    pub result: AppResult<NaiveDateTime>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: usize) -> Option<&Record> {
        self.records.get(id)
    }

    /// Records with their ids, in id order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Record)> {
        self.records.iter().enumerate()
    }

    pub fn contains_name(&self, full_name: &str) -> bool {
        self.records.iter().any(|r| r.full_name == full_name)
    }

    /// Register an arrival stamped with the current local time.
    pub fn insert(&mut self, new: NewRecord) -> AppResult<usize> {
        self.insert_at(new, date::now())
    }

    /// Register an arrival stamped with `at`.
    ///
    /// Blank fields are reported before an unknown visitor type, which is
    /// reported before a name collision.
    pub fn insert_at(&mut self, new: NewRecord, at: NaiveDateTime) -> AppResult<usize> {
        let missing = new.missing_fields();
        if !missing.is_empty() {
            return Err(AppError::Validation(format!(
                "all fields must be filled in (missing: {})",
                missing.join(", ")
            )));
        }

        let visitor_type = VisitorType::from_label(&new.visitor_type).ok_or_else(|| {
            AppError::Validation(format!(
                "invalid visitor type '{}' (expected one of: {})",
                new.visitor_type.trim(),
                VisitorType::choices()
            ))
        })?;

        let full_name = new.full_name.trim().to_string();
        if self.contains_name(&full_name) {
            return Err(AppError::DuplicateName(full_name));
        }

        let id = self.records.len();
        self.records.push(Record {
            full_name,
            id_document: new.id_document.trim().to_string(),
            car_model: new.car_model.trim().to_string(),
            plate: new.plate.trim().to_string(),
            address: new.address.trim().to_string(),
            number: new.number.trim().to_string(),
            entry: date::truncate_to_seconds(at),
            exit: None,
            visitor_type,
        });

        Ok(id)
    }

    /// Register the departure for `id` at the current local time.
    pub fn close(&mut self, id: usize) -> AppResult<NaiveDateTime> {
        self.close_at(id, date::now())
    }

    pub fn close_at(&mut self, id: usize, at: NaiveDateTime) -> AppResult<NaiveDateTime> {
        let record = self.records.get_mut(id).ok_or(AppError::NotFound(id))?;

        if record.exit.is_some() {
            return Err(AppError::AlreadyClosed(id));
        }

        let stamp = date::truncate_to_seconds(at);
        record.exit = Some(stamp);
        Ok(stamp)
    }

    /// Close every id independently; one outcome per input id, in input order.
    pub fn close_many(&mut self, ids: &[usize]) -> Vec<CloseOutcome> {
        let at = date::now();
        self.close_many_at(ids, at)
    }

    pub fn close_many_at(&mut self, ids: &[usize], at: NaiveDateTime) -> Vec<CloseOutcome> {
        ids.iter()
            .map(|&id| CloseOutcome {
                id,
                result: self.close_at(id, at),
            })
            .collect()
    }

    /// Remove the given records and re-index the rest from 0.
    ///
    /// Every id is checked before anything is removed: an unknown id leaves
    /// the table untouched. Returns the number of records removed.
    pub fn delete(&mut self, ids: &[usize]) -> AppResult<usize> {
        let doomed: BTreeSet<usize> = ids.iter().copied().collect();

        if let Some(&bad) = doomed.iter().find(|&&id| id >= self.records.len()) {
            return Err(AppError::NotFound(bad));
        }

        let mut position = 0;
        self.records.retain(|_| {
            let keep = !doomed.contains(&position);
            position += 1;
            keep
        });

        Ok(doomed.len())
    }

    /// Records whose name contains `term`, ignoring case. An empty term
    /// matches everything.
    pub fn search<'a>(
        &'a self,
        term: &str,
    ) -> impl Iterator<Item = (usize, &'a Record)> + use<'a> {
        let needle = term.to_lowercase();
        self.iter()
            .filter(move |(_, r)| r.full_name.to_lowercase().contains(&needle))
    }

    /// Most recent arrival first; equal stamps keep reverse insertion order.
    pub fn list_sorted(&self) -> Vec<(usize, &Record)> {
        let mut rows: Vec<(usize, &Record)> = self.iter().collect();
        rows.sort_by(|(ia, a), (ib, b)| b.entry.cmp(&a.entry).then(ib.cmp(ia)));
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::date::parse_stamp;

    fn form(name: &str, kind: &str) -> NewRecord {
        NewRecord {
            full_name: name.to_string(),
            id_document: "MG-12.345.678".to_string(),
            car_model: "Fiat Uno".to_string(),
            plate: "ABC1D23".to_string(),
            address: "Rua das Flores".to_string(),
            number: "42".to_string(),
            visitor_type: kind.to_string(),
        }
    }

    fn at(date: &str, time: &str) -> NaiveDateTime {
        parse_stamp(date, time).unwrap()
    }

    #[test]
    fn insert_assigns_sequential_ids_and_leaves_visit_open() {
        let mut store = RecordStore::new();
        let a = store.insert(form("Ana Silva", "Visitor")).unwrap();
        let b = store.insert(form("Bruno Costa", "Employee")).unwrap();

        assert_eq!((a, b), (0, 1));
        let rec = store.get(a).unwrap();
        assert!(rec.is_open());
        assert_eq!(rec.exit_date(), "");
        assert_eq!(rec.exit_time(), "");
        assert_eq!(rec.visitor_type, VisitorType::Visitor);
    }

    #[test]
    fn insert_trims_field_values() {
        let mut store = RecordStore::new();
        let id = store.insert(form("  Ana Silva ", " resident ")).unwrap();
        let rec = store.get(id).unwrap();
        assert_eq!(rec.full_name, "Ana Silva");
        assert_eq!(rec.visitor_type, VisitorType::Resident);
    }

    #[test]
    fn insert_rejects_blank_fields() {
        let mut store = RecordStore::new();
        let mut new = form("Ana Silva", "Visitor");
        new.plate = "   ".to_string();

        let err = store.insert(new).unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m.contains("plate")));
        assert!(store.is_empty());
    }

    #[test]
    fn insert_rejects_unknown_visitor_type() {
        let mut store = RecordStore::new();
        let err = store.insert(form("Ana Silva", "Contractor")).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(store.is_empty());
    }

    #[test]
    fn blank_field_is_reported_before_duplicate_name() {
        let mut store = RecordStore::new();
        store.insert(form("Ana Silva", "Visitor")).unwrap();

        let mut again = form("Ana Silva", "Visitor");
        again.address.clear();
        let err = store.insert(again).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn duplicate_name_leaves_table_unchanged() {
        let mut store = RecordStore::new();
        store.insert(form("Ana Silva", "Visitor")).unwrap();
        let before = store.clone();

        let err = store.insert(form("Ana Silva", "Resident")).unwrap_err();
        assert!(matches!(err, AppError::DuplicateName(ref n) if n == "Ana Silva"));
        assert_eq!(store, before);
    }

    #[test]
    fn duplicate_check_is_case_sensitive() {
        let mut store = RecordStore::new();
        store.insert(form("Ana Silva", "Visitor")).unwrap();
        assert!(store.insert(form("ana silva", "Visitor")).is_ok());
    }

    #[test]
    fn second_close_fails_and_keeps_first_stamp() {
        let mut store = RecordStore::new();
        let id = store.insert(form("Ana Silva", "Visitor")).unwrap();

        let first = at("10-01-2025", "17:30:00");
        store.close_at(id, first).unwrap();

        let err = store.close_at(id, at("11-01-2025", "09:00:00")).unwrap_err();
        assert!(matches!(err, AppError::AlreadyClosed(0)));

        let rec = store.get(id).unwrap();
        assert_eq!(rec.exit, Some(first));
        assert_eq!(rec.exit_date(), "10-01-2025");
        assert_eq!(rec.exit_time(), "17:30:00");
    }

    #[test]
    fn close_unknown_id_is_not_found() {
        let mut store = RecordStore::new();
        assert!(matches!(store.close(3), Err(AppError::NotFound(3))));
    }

    #[test]
    fn close_many_reports_each_id_independently() {
        let mut store = RecordStore::new();
        store.insert(form("Ana Silva", "Visitor")).unwrap();
        store.insert(form("Bruno Costa", "Visitor")).unwrap();
        store.close(0).unwrap();

        let outcomes = store.close_many(&[0, 1, 9]);

        assert_eq!(outcomes.len(), 3);
        assert!(matches!(outcomes[0].result, Err(AppError::AlreadyClosed(0))));
        assert!(outcomes[1].result.is_ok());
        assert!(matches!(outcomes[2].result, Err(AppError::NotFound(9))));
        assert!(!store.get(1).unwrap().is_open());
    }

    #[test]
    fn delete_reindexes_remaining_records_in_order() {
        let mut store = RecordStore::new();
        for name in ["A", "B", "C", "D", "E"] {
            store.insert(form(name, "Visitor")).unwrap();
        }

        let removed = store.delete(&[3, 1, 1]).unwrap();
        assert_eq!(removed, 2);

        let names: Vec<(usize, &str)> = store
            .search("")
            .map(|(id, r)| (id, r.full_name.as_str()))
            .collect();
        assert_eq!(names, vec![(0, "A"), (1, "C"), (2, "E")]);
    }

    #[test]
    fn delete_nothing_is_a_noop() {
        let mut store = RecordStore::new();
        store.insert(form("Ana Silva", "Visitor")).unwrap();
        assert_eq!(store.delete(&[]).unwrap(), 0);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn delete_with_stale_id_removes_nothing() {
        let mut store = RecordStore::new();
        store.insert(form("Ana Silva", "Visitor")).unwrap();
        store.insert(form("Bruno Costa", "Visitor")).unwrap();
        let before = store.clone();

        let err = store.delete(&[0, 2]).unwrap_err();
        assert!(matches!(err, AppError::NotFound(2)));
        assert_eq!(store, before);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let mut store = RecordStore::new();
        store.insert(form("Ana Silva", "Visitor")).unwrap();
        store.insert(form("ana souza", "Resident")).unwrap();
        store.insert(form("Carlos Lima", "Employee")).unwrap();

        let ana: Vec<usize> = store.search("ana").map(|(id, _)| id).collect();
        assert_eq!(ana, vec![0, 1]);

        let silva: Vec<usize> = store.search("Silva").map(|(id, _)| id).collect();
        assert_eq!(silva, vec![0]);

        assert_eq!(store.search("").count(), 3);
        assert_eq!(store.search("zzz").count(), 0);
    }

    #[test]
    fn search_treats_term_literally() {
        let mut store = RecordStore::new();
        store.insert(form("Ana Silva", "Visitor")).unwrap();
        assert_eq!(store.search("a.a").count(), 0);
        assert_eq!(store.search(".*").count(), 0);
    }

    #[test]
    fn list_sorted_puts_latest_arrival_first() {
        let mut store = RecordStore::new();
        store
            .insert_at(form("Early", "Visitor"), at("31-12-2024", "23:00:00"))
            .unwrap();
        store
            .insert_at(form("Late", "Visitor"), at("01-01-2025", "08:00:00"))
            .unwrap();
        store
            .insert_at(form("Middle", "Visitor"), at("01-01-2025", "07:59:59"))
            .unwrap();

        let order: Vec<&str> = store
            .list_sorted()
            .into_iter()
            .map(|(_, r)| r.full_name.as_str())
            .collect();
        assert_eq!(order, vec!["Late", "Middle", "Early"]);
    }

    #[test]
    fn list_sorted_breaks_ties_by_reverse_insertion() {
        let mut store = RecordStore::new();
        let same = at("02-02-2025", "10:00:00");
        store.insert_at(form("First", "Visitor"), same).unwrap();
        store.insert_at(form("Second", "Visitor"), same).unwrap();

        let ids: Vec<usize> = store.list_sorted().into_iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![1, 0]);
    }

    #[test]
    fn visit_lifecycle_scenario() {
        let mut store = RecordStore::new();

        let a = store.insert(form("Ana Silva", "Visitor")).unwrap();
        assert_eq!(store.len(), 1);
        assert!(store.get(a).unwrap().is_open());

        let dup = store.insert(form("Ana Silva", "Visitor"));
        assert!(matches!(dup, Err(AppError::DuplicateName(_))));
        assert_eq!(store.len(), 1);

        store.close(a).unwrap();
        let rec = store.get(a).unwrap();
        assert!(!rec.exit_date().is_empty());
        assert!(!rec.exit_time().is_empty());

        store.delete(&[a]).unwrap();
        assert_eq!(store.len(), 0);
        assert!(store.list_sorted().is_empty());
    }
}
