//! Clap-free settings for the transform pipeline.

use camino::Utf8PathBuf;
use prodschema_domain::Activation;

/// Settings for one transform run.
#[derive(Debug, Clone)]
pub struct TransformSettings {
    /// Page document to transform.
    pub page_path: Utf8PathBuf,

    /// Where graph.json / report.json / summary.md land.
    pub out_dir: Utf8PathBuf,

    /// Verbose/development output: pretty-printed artifacts. The page's
    /// own debug field forces this too.
    pub debug: bool,

    /// Activation gate resolution; `FromPage` is production behaviour.
    pub activation: Activation,
}

impl Default for TransformSettings {
    fn default() -> Self {
        Self {
            page_path: Utf8PathBuf::from("page.json"),
            out_dir: Utf8PathBuf::from("artifacts/prodschema"),
            debug: false,
            activation: Activation::FromPage,
        }
    }
}
