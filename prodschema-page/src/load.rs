use crate::PageDoc;
use camino::Utf8Path;
use fs_err as fs;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, Clone)]
pub enum PageLoadError {
    #[error("io error: {message}")]
    Io { message: String },

    #[error("json parse error: {message}")]
    Json { message: String },
}

/// Reads and parses one page document.
///
/// I/O and parse failures are real errors: without a page document there is
/// nothing to transform. Missing optional *content* inside a well-formed
/// document is never an error; the rules default or skip.
pub fn load_page(path: &Utf8Path) -> Result<PageDoc, PageLoadError> {
    debug!(path = %path, "loading page document");

    let contents = fs::read_to_string(path).map_err(|e| PageLoadError::Io {
        message: e.to_string(),
    })?;

    let page: PageDoc = serde_json::from_str(&contents).map_err(|e| PageLoadError::Json {
        message: e.to_string(),
    })?;

    if let Some(schema) = &page.schema {
        if schema != prodschema_types::schema::PRODSCHEMA_PAGE_V1 {
            debug!(schema = %schema, "unexpected page schema id, continuing");
        }
    }

    Ok(page)
}
