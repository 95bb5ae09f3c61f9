use jiff::Timestamp;

use super::builtins::{builtin_problems, is_builtin};
use super::draft::ProblemDraft;
use crate::error::{CatalogError, ModelError};
use crate::model::{DataPoint, ProblemId, ProblemModel};
use crate::report::ReportTable;
use crate::sampler::{SamplerSettings, evaluate_at, sample_scenario};
use crate::storage::{KeyValueStore, PROBLEMS_KEY, load_list, save_list};

/// The problem catalog: built-ins followed by custom problems, with exactly
/// one active entry at all times.
///
/// Built-ins are never persisted or deleted, so the catalog can never become
/// empty and selection always has somewhere to fall back to. Every successful
/// `create` or `delete` rewrites the full custom subset to storage.
pub struct ScenarioStore<S: KeyValueStore> {
    storage: S,
    problems: Vec<ProblemModel>,
    /// Index into `problems`, always in bounds
    active: usize,
    current_value: f64,
    last_issued_millis: i64,
}

impl<S: KeyValueStore> ScenarioStore<S> {
    /// Build the catalog from the built-ins plus whatever custom problems are
    /// stored. Unreadable storage means no custom problems.
    pub fn new(storage: S) -> Self {
        let mut problems = builtin_problems();
        let builtin_count = problems.len();

        for mut stored in load_list::<ProblemModel>(&storage, PROBLEMS_KEY) {
            if !stored.is_custom {
                tracing::warn!(id = %stored.id, "Ignoring stored problem not marked custom");
                continue;
            }
            if is_builtin(&stored.id) {
                tracing::warn!(id = %stored.id, "Ignoring stored problem with a built-in id");
                continue;
            }
            if let Err(e) = stored.range.domain().validate() {
                tracing::warn!(id = %stored.id, error = %e, "Ignoring stored problem with invalid range");
                continue;
            }
            if problems.iter().any(|p| p.id == stored.id) {
                tracing::warn!(id = %stored.id, "Ignoring stored problem with duplicate id");
                continue;
            }
            stored.range.default_val = stored.range.clamp(stored.range.default_val);
            problems.push(stored);
        }

        tracing::debug!(
            builtin = builtin_count,
            custom = problems.len() - builtin_count,
            "Problem catalog loaded"
        );

        let current_value = problems[0].range.default_val;
        Self {
            storage,
            problems,
            active: 0,
            current_value,
            last_issued_millis: 0,
        }
    }

    /// All problems in catalog order.
    pub fn problems(&self) -> &[ProblemModel] {
        &self.problems
    }

    pub fn custom_problems(&self) -> impl Iterator<Item = &ProblemModel> {
        self.problems.iter().filter(|p| p.is_custom)
    }

    pub fn get(&self, id: &ProblemId) -> Option<&ProblemModel> {
        self.problems.iter().find(|p| &p.id == id)
    }

    pub fn active(&self) -> &ProblemModel {
        &self.problems[self.active]
    }

    pub fn active_id(&self) -> &ProblemId {
        &self.active().id
    }

    pub fn is_active(&self, id: &ProblemId) -> bool {
        self.active_id() == id
    }

    /// The input value currently fed to the active problem.
    pub fn current_value(&self) -> f64 {
        self.current_value
    }

    /// Set the input value, clamped into the active problem's range.
    pub fn set_current_value(&mut self, value: f64) -> Result<f64, CatalogError> {
        if !value.is_finite() {
            return Err(CatalogError::NonFiniteValue(value));
        }
        self.current_value = self.active().range.clamp(value);
        Ok(self.current_value)
    }

    /// Add a custom problem and select it.
    ///
    /// A blank title abandons the creation and leaves the catalog untouched.
    pub fn create(&mut self, draft: ProblemDraft) -> Result<&ProblemModel, CatalogError> {
        let id = self.fresh_id();
        let problem = draft
            .into_problem(id)
            .ok_or(CatalogError::MissingTitle)?;

        tracing::info!(id = %problem.id, title = %problem.title, "Created custom problem");
        self.problems.push(problem);
        self.persist();

        self.activate(self.problems.len() - 1);
        Ok(self.active())
    }

    /// Make `id` the active problem and reset the input value to its default.
    pub fn select(&mut self, id: &ProblemId) -> Result<&ProblemModel, CatalogError> {
        let index = self
            .index_of(id)
            .ok_or_else(|| CatalogError::ProblemNotFound(id.clone()))?;
        self.activate(index);
        Ok(self.active())
    }

    /// Remove a custom problem. Built-ins are rejected. Deleting the active
    /// problem moves the selection to the first entry of the catalog.
    pub fn delete(&mut self, id: &ProblemId) -> Result<ProblemModel, CatalogError> {
        let index = self
            .index_of(id)
            .ok_or_else(|| CatalogError::ProblemNotFound(id.clone()))?;
        if !self.problems[index].is_custom {
            return Err(CatalogError::BuiltInImmutable(id.clone()));
        }

        let removed = self.problems.remove(index);
        self.persist();
        tracing::info!(id = %removed.id, "Deleted custom problem");

        if index == self.active {
            self.activate(0);
        } else if index < self.active {
            self.active -= 1;
        }
        Ok(removed)
    }

    /// Sample the active problem over its range.
    pub fn sample_active(&self) -> Result<Vec<DataPoint>, ModelError> {
        let problem = self.active();
        sample_scenario(&problem.model, &problem.range.domain())
    }

    /// Evaluate the active problem at the current input value.
    pub fn evaluate_current(&self) -> Option<DataPoint> {
        evaluate_at(
            &self.active().model,
            self.current_value,
            SamplerSettings::SCENARIO.decimals,
        )
    }

    pub fn report_active(&self, rows: usize) -> Result<ReportTable, ModelError> {
        let points = self.sample_active()?;
        Ok(ReportTable::for_problem(self.active(), &points, rows))
    }

    fn index_of(&self, id: &ProblemId) -> Option<usize> {
        self.problems.iter().position(|p| &p.id == id)
    }

    fn activate(&mut self, index: usize) {
        self.active = index;
        self.current_value = self.problems[index].range.default_val;
        tracing::debug!(id = %self.problems[index].id, "Selected problem");
    }

    /// `custom-<millis>`, strictly after anything issued before and not
    /// colliding with an existing entry.
    fn fresh_id(&mut self) -> ProblemId {
        let mut millis = Timestamp::now()
            .as_millisecond()
            .max(self.last_issued_millis.saturating_add(1));
        let mut id = custom_id(millis);
        while self.index_of(&id).is_some() {
            millis += 1;
            id = custom_id(millis);
        }
        self.last_issued_millis = millis;
        id
    }

    fn persist(&self) {
        let custom: Vec<&ProblemModel> = self.custom_problems().collect();
        if let Err(e) = save_list(&self.storage, PROBLEMS_KEY, &custom) {
            tracing::error!(error = %e, "Failed to persist custom problems");
        }
    }
}

fn custom_id(millis: i64) -> ProblemId {
    ProblemId(format!("custom-{millis}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtins::{DRUG_DECAY, PHONE_PLANS, TAXI_FARE};
    use crate::catalog::draft::DraftModel;
    use crate::model::{LinearParams, ModelParams};
    use crate::storage::MemoryStore;

    fn draft(title: &str) -> ProblemDraft {
        ProblemDraft::new(title, DraftModel::default())
    }

    #[test]
    fn test_initial_state() {
        let store = ScenarioStore::new(MemoryStore::new());
        assert_eq!(store.active_id().as_str(), TAXI_FARE);
        assert_eq!(store.current_value(), store.active().range.default_val);
        assert_eq!(store.custom_problems().count(), 0);
    }

    #[test]
    fn test_create_selects_and_persists() {
        let storage = MemoryStore::new();
        let mut store = ScenarioStore::new(storage.clone());

        let id = store.create(draft("Gym fees")).unwrap().id.clone();
        assert!(store.is_active(&id));
        assert_eq!(
            store.active().model,
            ModelParams::LinearSimple(LinearParams::new(1.0, 0.0))
        );

        let saved: Vec<ProblemModel> =
            serde_json::from_str(&storage.raw(PROBLEMS_KEY).unwrap()).unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].id, id);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut store = ScenarioStore::new(MemoryStore::new());
        let ids: Vec<ProblemId> = (0..20)
            .map(|i| store.create(draft(&format!("P{i}"))).unwrap().id.clone())
            .collect();
        for (i, id) in ids.iter().enumerate() {
            assert!(ids[i + 1..].iter().all(|other| other != id));
        }
    }

    #[test]
    fn test_blank_title_adds_nothing() {
        let storage = MemoryStore::new();
        let mut store = ScenarioStore::new(storage.clone());
        let before = store.problems().len();

        assert_eq!(store.create(draft("  ")), Err(CatalogError::MissingTitle));
        assert_eq!(store.problems().len(), before);
        assert_eq!(store.active_id().as_str(), TAXI_FARE);
        assert!(storage.raw(PROBLEMS_KEY).is_none());
    }

    #[test]
    fn test_select_unknown_is_noop() {
        let mut store = ScenarioStore::new(MemoryStore::new());
        store.select(&ProblemId::new(PHONE_PLANS)).unwrap();

        let err = store.select(&ProblemId::new("missing")).unwrap_err();
        assert_eq!(err, CatalogError::ProblemNotFound(ProblemId::new("missing")));
        assert_eq!(store.active_id().as_str(), PHONE_PLANS);
    }

    #[test]
    fn test_select_resets_current_value() {
        let mut store = ScenarioStore::new(MemoryStore::new());
        store.set_current_value(12.0).unwrap();
        store.select(&ProblemId::new(PHONE_PLANS)).unwrap();
        assert_eq!(store.current_value(), 40.0);
    }

    #[test]
    fn test_current_value_is_clamped() {
        let mut store = ScenarioStore::new(MemoryStore::new());
        assert_eq!(store.set_current_value(500.0), Ok(20.0));
        assert!(store.set_current_value(f64::NAN).is_err());
        assert_eq!(store.current_value(), 20.0);
    }

    #[test]
    fn test_builtin_delete_rejected() {
        let mut store = ScenarioStore::new(MemoryStore::new());
        let before: Vec<ProblemId> = store.problems().iter().map(|p| p.id.clone()).collect();

        let err = store.delete(&ProblemId::new(DRUG_DECAY)).unwrap_err();
        assert_eq!(err, CatalogError::BuiltInImmutable(ProblemId::new(DRUG_DECAY)));

        let after: Vec<ProblemId> = store.problems().iter().map(|p| p.id.clone()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_delete_active_falls_back_to_first() {
        let storage = MemoryStore::new();
        let mut store = ScenarioStore::new(storage.clone());
        let id = store.create(draft("Temp")).unwrap().id.clone();

        let removed = store.delete(&id).unwrap();
        assert_eq!(removed.title, "Temp");
        assert_eq!(store.active_id().as_str(), TAXI_FARE);
        assert_eq!(storage.raw(PROBLEMS_KEY).as_deref(), Some("[]"));
    }

    #[test]
    fn test_delete_before_active_keeps_selection() {
        let mut store = ScenarioStore::new(MemoryStore::new());
        let first = store.create(draft("First")).unwrap().id.clone();
        let second = store.create(draft("Second")).unwrap().id.clone();

        store.delete(&first).unwrap();
        assert!(store.is_active(&second));
    }

    #[test]
    fn test_reload_restores_custom_in_order() {
        let storage = MemoryStore::new();
        let mut store = ScenarioStore::new(storage.clone());
        store.create(draft("One")).unwrap();
        store.create(draft("Two")).unwrap();

        let reloaded = ScenarioStore::new(storage);
        let titles: Vec<&str> = reloaded.custom_problems().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["One", "Two"]);
        assert_eq!(reloaded.active_id().as_str(), TAXI_FARE);
    }

    #[test]
    fn test_stored_builtin_ids_are_ignored() {
        let storage = MemoryStore::new();
        let mut forged = builtin_problems().remove(0);
        forged.is_custom = true;
        forged.title = "Forged".to_string();
        save_list(&storage, PROBLEMS_KEY, &[forged]).unwrap();

        let store = ScenarioStore::new(storage);
        assert_eq!(store.custom_problems().count(), 0);
        assert_eq!(store.active().title, "Taxi fare");
    }

    #[test]
    fn test_stored_problem_with_inverted_range_is_ignored() {
        let storage = MemoryStore::new();
        storage
            .set(
                PROBLEMS_KEY,
                r#"[{"id":"custom-1","title":"Backwards","isCustom":true,
                    "family":"linearSimple","params":{"m":1.0,"n":0.0},
                    "labels":{"x":"x","y":"y","series1":"Backwards"},
                    "range":{"min":10.0,"max":0.0,"step":1.0,"defaultVal":5.0}}]"#,
            )
            .unwrap();

        let mut store = ScenarioStore::new(storage);
        assert_eq!(store.problems().len(), builtin_problems().len());
        assert_eq!(
            store.select(&ProblemId::new("custom-1")),
            Err(CatalogError::ProblemNotFound(ProblemId::new("custom-1")))
        );
        assert_eq!(store.set_current_value(3.0), Ok(3.0));
    }

    #[test]
    fn test_stored_default_value_is_clamped_on_load() {
        let storage = MemoryStore::new();
        storage
            .set(
                PROBLEMS_KEY,
                r#"[{"id":"custom-2","title":"Overshoot","isCustom":true,
                    "family":"linearSimple","params":{"m":2.0,"n":1.0},
                    "labels":{"x":"x","y":"y","series1":"Overshoot"},
                    "range":{"min":0.0,"max":10.0,"step":1.0,"defaultVal":99.0}}]"#,
            )
            .unwrap();

        let mut store = ScenarioStore::new(storage);
        let problem = store.select(&ProblemId::new("custom-2")).unwrap();
        assert_eq!(problem.range.default_val, 10.0);
        assert_eq!(store.current_value(), 10.0);
    }

    #[test]
    fn test_corrupt_storage_starts_empty() {
        let storage = MemoryStore::new();
        storage.set(PROBLEMS_KEY, "not json at all").unwrap();
        let store = ScenarioStore::new(storage);
        assert_eq!(store.problems().len(), builtin_problems().len());
    }
}
