use metrics_exporter_prometheus::PrometheusHandle;
use prenatal_screening::error::AppError;
use prenatal_screening::screening::{
    RepositoryError, RuleTable, ScreeningId, ScreeningRecord, ScreeningRepository,
};
use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryScreeningRepository {
    records: Arc<Mutex<HashMap<ScreeningId, ScreeningRecord>>>,
}

impl ScreeningRepository for InMemoryScreeningRepository {
    fn save(&self, record: ScreeningRecord) -> Result<ScreeningRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn find_by_id(&self, id: &ScreeningId) -> Result<Option<ScreeningRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn find_all(&self) -> Result<Vec<ScreeningRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        let mut records: Vec<_> = guard.values().cloned().collect();
        records.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(records)
    }
}

/// Resolve the rule table once at startup. A configured table that fails to load is fatal.
pub(crate) fn load_rule_table(path: Option<&Path>) -> Result<RuleTable, AppError> {
    match path {
        Some(path) => {
            let table = RuleTable::from_path(path)?;
            info!(path = %path.display(), criteria = table.len(), "loaded external rule table");
            Ok(table)
        }
        None => Ok(RuleTable::standard()),
    }
}
