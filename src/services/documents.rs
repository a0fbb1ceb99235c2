//! Shared lookup for JSON documents in the data directory.
//!
//! Documents are named `<slug>__<id>.json` or `<id>.json` and may sit in
//! nested folders (`texts/songs/amazing-grace__42.json`).

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use walkdir::WalkDir;

use crate::constants::storage::DOCUMENT_EXTENSION;
use crate::error::{Error, Result};
use crate::types::extract_id;

/// Find the first document under `root` whose file stem carries `id`.
pub fn find_document(root: &Path, id: &str) -> Option<PathBuf> {
    if id.is_empty() || !root.is_dir() {
        return None;
    }

    WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == DOCUMENT_EXTENSION))
        .find(|e| {
            e.path()
                .file_stem()
                .and_then(|s| s.to_str())
                .is_some_and(|stem| extract_id(stem) == id)
        })
        .map(walkdir::DirEntry::into_path)
}

/// Read and parse one JSON document.
pub fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs_err::read_to_string(path).map_err(|e| Error::io(e, path.to_path_buf()))?;
    serde_json::from_str(&raw).map_err(|e| Error::parse(e.to_string(), path.to_path_buf()))
}

/// Run a blocking document lookup off the async executor.
pub async fn spawn_lookup<T, F>(f: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T> + Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| Error::Msg(format!("Document lookup task failed: {e}")))?
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn finds_by_suffix_and_plain_stem() {
        let dir = tempfile::tempdir().unwrap();
        let songs = dir.path().join("songs");
        std::fs::create_dir_all(&songs).unwrap();
        std::fs::write(songs.join("amazing-grace__42.json"), "{}").unwrap();
        std::fs::write(dir.path().join("welcome.json"), "{}").unwrap();
        std::fs::write(dir.path().join("notes__42.txt"), "").unwrap();

        let found = find_document(dir.path(), "42").unwrap();
        assert!(found.ends_with("songs/amazing-grace__42.json"));
        assert!(find_document(dir.path(), "welcome").is_some());
        assert!(find_document(dir.path(), "amazing-grace").is_none());
        assert!(find_document(dir.path(), "").is_none());
    }

    #[test]
    fn missing_root_finds_nothing() {
        assert!(find_document(Path::new("/tmp/nonexistent_stageflow_root"), "42").is_none());
    }

    #[test]
    fn parse_errors_name_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "not json").unwrap();
        let err = read_document::<serde_json::Value>(&path).unwrap_err();
        assert!(matches!(err, Error::Parse { file: Some(_), .. }));
    }
}
