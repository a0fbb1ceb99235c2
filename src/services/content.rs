//! Text document lookup.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use serde::Deserialize;

use crate::content::ContentItem;
use crate::error::Result;
use crate::types::ContentId;

use super::documents::{find_document, read_document, spawn_lookup};

/// Source of text documents.
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// Look up a document by id. `Ok(None)` means no such document.
    async fn find_by_id(&self, id: &ContentId) -> Result<Option<ContentItem>>;
}

/// In-memory document store.
#[derive(Debug, Default)]
pub struct MemoryContentRepository {
    items: RwLock<HashMap<ContentId, ContentItem>>,
}

impl MemoryContentRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a document.
    pub fn insert(&self, item: ContentItem) {
        self.items
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(item.id.clone(), item);
    }

    /// Remove a document.
    pub fn remove(&self, id: &ContentId) -> Option<ContentItem> {
        self.items.write().unwrap_or_else(PoisonError::into_inner).remove(id)
    }
}

#[async_trait]
impl ContentRepository for MemoryContentRepository {
    async fn find_by_id(&self, id: &ContentId) -> Result<Option<ContentItem>> {
        Ok(self
            .items
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned())
    }
}

/// On-disk text document.
#[derive(Debug, Deserialize)]
struct TextDocument {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    title: String,
    #[serde(default)]
    content: String,
}

/// Text documents stored as JSON files under a directory.
///
/// Files are re-read on every lookup so external edits show up on the next
/// navigation.
#[derive(Debug, Clone)]
pub struct FileContentRepository {
    root: PathBuf,
}

impl FileContentRepository {
    /// Create a repository over `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn load(root: &std::path::Path, id: &ContentId) -> Result<Option<ContentItem>> {
        let Some(path) = find_document(root, id.as_str()) else {
            tracing::debug!("No text document for id {id} under {}", root.display());
            return Ok(None);
        };

        let doc: TextDocument = read_document(&path)?;
        if let Some(doc_id) = doc.id.as_deref().filter(|doc_id| *doc_id != id.as_str()) {
            tracing::debug!("Text {} declares id {doc_id:?}; using the file name id", path.display());
        }
        Ok(Some(ContentItem::from_raw(id.clone(), doc.title, &doc.content)))
    }
}

#[async_trait]
impl ContentRepository for FileContentRepository {
    async fn find_by_id(&self, id: &ContentId) -> Result<Option<ContentItem>> {
        let root = self.root.clone();
        let id = id.clone();
        spawn_lookup(move || Self::load(&root, &id)).await
    }
}
