//! Scenario lookup.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::Result;
use crate::scenario::{Scenario, ScenarioStep};
use crate::types::ScenarioId;

use super::documents::{find_document, read_document, spawn_lookup};

/// Source of scenarios.
#[async_trait]
pub trait ScenarioRepository: Send + Sync {
    /// Look up a scenario by id. `Ok(None)` means no such scenario.
    async fn find_by_id(&self, id: &ScenarioId) -> Result<Option<Scenario>>;
}

/// In-memory scenario store.
#[derive(Debug, Default)]
pub struct MemoryScenarioRepository {
    scenarios: RwLock<HashMap<ScenarioId, Scenario>>,
}

impl MemoryScenarioRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a scenario.
    pub fn insert(&self, scenario: Scenario) {
        self.scenarios
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(scenario.id.clone(), scenario);
    }

    /// Remove a scenario.
    pub fn remove(&self, id: &ScenarioId) -> Option<Scenario> {
        self.scenarios.write().unwrap_or_else(PoisonError::into_inner).remove(id)
    }
}

#[async_trait]
impl ScenarioRepository for MemoryScenarioRepository {
    async fn find_by_id(&self, id: &ScenarioId) -> Result<Option<Scenario>> {
        Ok(self
            .scenarios
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned())
    }
}

/// On-disk scenario. Step validation happens while parsing `steps`.
#[derive(Debug, Deserialize)]
struct ScenarioDocument {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    title: String,
    #[serde(default)]
    steps: Vec<ScenarioStep>,
}

/// Scenarios stored as JSON files under a directory.
#[derive(Debug, Clone)]
pub struct FileScenarioRepository {
    root: PathBuf,
}

impl FileScenarioRepository {
    /// Create a repository over `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn load(root: &Path, id: &ScenarioId) -> Result<Option<Scenario>> {
        let Some(path) = find_document(root, id.as_str()) else {
            tracing::debug!("No scenario document for id {id} under {}", root.display());
            return Ok(None);
        };

        let doc: ScenarioDocument = read_document(&path)?;
        if let Some(doc_id) = doc.id.as_deref().filter(|doc_id| *doc_id != id.as_str()) {
            tracing::debug!("Scenario {} declares id {doc_id:?}; using the file name id", path.display());
        }
        Ok(Some(Scenario::new(id.clone(), doc.title, doc.steps)))
    }
}

#[async_trait]
impl ScenarioRepository for FileScenarioRepository {
    async fn find_by_id(&self, id: &ScenarioId) -> Result<Option<Scenario>> {
        let root = self.root.clone();
        let id = id.clone();
        spawn_lookup(move || Self::load(&root, &id)).await
    }
}
