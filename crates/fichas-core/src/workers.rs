use crate::error::FichasError;
use crate::model::{ExtractedFields, FichaDraft};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A worker who can be assigned as the drafter of a ficha.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    pub id: i64,
    pub name: String,
}

/// Lookup of workers by (partial) name.
pub trait WorkerDirectory: Send + Sync {
    /// Find a worker whose name contains `name`, ignoring case.
    fn find_by_partial_name(&self, name: &str) -> Result<Option<Worker>, FichasError>;
}

/// Worker directory held in memory, searched in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryWorkers {
    workers: Vec<Worker>,
}

impl InMemoryWorkers {
    pub fn new(workers: Vec<Worker>) -> Self {
        InMemoryWorkers { workers }
    }

    pub fn len(&self) -> usize {
        self.workers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workers.is_empty()
    }
}

impl WorkerDirectory for InMemoryWorkers {
    fn find_by_partial_name(&self, name: &str) -> Result<Option<Worker>, FichasError> {
        let needle = name.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(None);
        }
        Ok(self
            .workers
            .iter()
            .find(|w| w.name.to_lowercase().contains(&needle))
            .cloned())
    }
}

/// Load a worker directory from a JSON array of `{ "id", "name" }` objects.
pub fn load_workers(path: &Path) -> Result<InMemoryWorkers, FichasError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        FichasError::WorkerDirectory(format!("failed to read {}: {}", path.display(), e))
    })?;
    let workers: Vec<Worker> = serde_json::from_str(&content).map_err(|e| {
        FichasError::WorkerDirectory(format!("failed to parse {}: {}", path.display(), e))
    })?;
    Ok(InMemoryWorkers::new(workers))
}

/// Turn extracted fields into a draft, resolving the raw drafter name to a
/// worker id.
///
/// A miss or a failed lookup drops the drafter; it never fails the draft.
pub fn resolve_drafted_by(fields: &ExtractedFields, directory: &dyn WorkerDirectory) -> FichaDraft {
    let mut draft = FichaDraft::from_fields(fields);

    let Some(raw) = fields.drafted_by_raw.as_deref() else {
        return draft;
    };

    match directory.find_by_partial_name(raw) {
        Ok(Some(worker)) => {
            tracing::debug!(raw, worker_id = worker.id, worker = %worker.name, "drafter resolved");
            draft.drafted_by = Some(worker.id);
        }
        Ok(None) => {
            tracing::debug!(raw, "no worker matches drafter name");
        }
        Err(e) => {
            tracing::warn!(raw, error = %e, "worker lookup failed, dropping drafter");
        }
    }

    draft
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    struct FailingDirectory;

    impl WorkerDirectory for FailingDirectory {
        fn find_by_partial_name(&self, _name: &str) -> Result<Option<Worker>, FichasError> {
            Err(FichasError::WorkerDirectory("connection refused".into()))
        }
    }

    fn directory() -> InMemoryWorkers {
        InMemoryWorkers::new(vec![
            Worker {
                id: 1,
                name: "Ana Ruiz Gómez".into(),
            },
            Worker {
                id: 2,
                name: "María López".into(),
            },
        ])
    }

    fn fields_with_drafter(raw: &str) -> ExtractedFields {
        ExtractedFields {
            title: Some("Bono Joven".into()),
            drafted_by_raw: Some(raw.into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_partial_case_insensitive_match() {
        let found = directory().find_by_partial_name("maría").unwrap().unwrap();
        assert_eq!(found.id, 2);
        let found = directory().find_by_partial_name("RUIZ").unwrap().unwrap();
        assert_eq!(found.id, 1);
    }

    #[test]
    fn test_blank_name_never_matches() {
        assert!(directory().find_by_partial_name("  ").unwrap().is_none());
    }

    #[test]
    fn test_resolved_drafter_sets_id() {
        let draft = resolve_drafted_by(&fields_with_drafter("Ana Ruiz"), &directory());
        assert_eq!(draft.drafted_by, Some(1));
        assert_eq!(draft.title.as_deref(), Some("Bono Joven"));
    }

    #[test]
    fn test_unknown_drafter_dropped() {
        let draft = resolve_drafted_by(&fields_with_drafter("Pedro"), &directory());
        assert_eq!(draft.drafted_by, None);
        assert_eq!(draft.title.as_deref(), Some("Bono Joven"));
    }

    #[test]
    fn test_lookup_error_dropped() {
        let draft = resolve_drafted_by(&fields_with_drafter("Ana"), &FailingDirectory);
        assert_eq!(draft.drafted_by, None);
        assert_eq!(draft.title.as_deref(), Some("Bono Joven"));
    }

    #[test]
    fn test_load_workers_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(r#"[{"id": 10, "name": "Laura Pérez"}]"#.as_bytes()).unwrap();
        let workers = load_workers(file.path()).unwrap();
        assert_eq!(workers.len(), 1);
        assert_eq!(workers.find_by_partial_name("laura").unwrap().unwrap().id, 10);
    }

    #[test]
    fn test_load_workers_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();
        assert!(matches!(
            load_workers(file.path()).unwrap_err(),
            FichasError::WorkerDirectory(_)
        ));
    }
}
