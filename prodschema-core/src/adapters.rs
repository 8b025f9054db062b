//! File-system and in-memory implementations of the pipeline ports.

use crate::ports::{PageSource, WritePort};
use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use prodschema_page::PageDoc;

/// Loads the page document from disk.
#[derive(Debug, Clone)]
pub struct FsPageSource {
    path: Utf8PathBuf,
}

impl FsPageSource {
    pub fn new(path: Utf8PathBuf) -> Self {
        Self { path }
    }
}

impl PageSource for FsPageSource {
    fn load_page(&self) -> anyhow::Result<PageDoc> {
        prodschema_page::load_page(&self.path).with_context(|| format!("load {}", self.path))
    }
}

/// Serves a pre-built page document; used by tests and embedders that
/// already hold the page in memory.
#[derive(Debug, Clone)]
pub struct InMemoryPageSource {
    page: PageDoc,
}

impl InMemoryPageSource {
    pub fn new(page: PageDoc) -> Self {
        Self { page }
    }
}

impl PageSource for InMemoryPageSource {
    fn load_page(&self) -> anyhow::Result<PageDoc> {
        Ok(self.page.clone())
    }
}

/// Writes artifacts straight to disk.
#[derive(Debug, Clone, Default)]
pub struct FsWritePort;

impl WritePort for FsWritePort {
    fn write_file(&self, path: &Utf8Path, contents: &[u8]) -> anyhow::Result<()> {
        fs::write(path, contents).with_context(|| format!("write {}", path))
    }

    fn create_dir_all(&self, path: &Utf8Path) -> anyhow::Result<()> {
        fs::create_dir_all(path).with_context(|| format!("create {}", path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn fs_page_source_round_trips() {
        let dir = TempDir::new().expect("tempdir");
        let path = Utf8PathBuf::from_path_buf(dir.path().join("page.json")).expect("utf8");
        fs::write(
            &path,
            serde_json::to_vec(&json!({"title": "T", "fields": {}})).unwrap(),
        )
        .expect("write");

        let page = FsPageSource::new(path).load_page().expect("load");
        assert_eq!(page.title, "T");
    }

    #[test]
    fn fs_page_source_missing_file_has_path_context() {
        let err = FsPageSource::new(Utf8PathBuf::from("/missing/page.json"))
            .load_page()
            .unwrap_err();
        assert!(format!("{err:#}").contains("/missing/page.json"));
    }

    #[test]
    fn in_memory_source_returns_the_page() {
        let page: PageDoc = serde_json::from_value(json!({"title": "X"})).unwrap();
        let got = InMemoryPageSource::new(page).load_page().expect("load");
        assert_eq!(got.title, "X");
    }
}
