//! Port traits abstracting all I/O away from the pipeline.

use camino::Utf8Path;
use prodschema_page::PageDoc;

/// Source of the page document.
pub trait PageSource {
    fn load_page(&self) -> anyhow::Result<PageDoc>;
}

/// File-system write operations.
pub trait WritePort {
    fn write_file(&self, path: &Utf8Path, contents: &[u8]) -> anyhow::Result<()>;
    fn create_dir_all(&self, path: &Utf8Path) -> anyhow::Result<()>;
}
