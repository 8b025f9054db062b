//! Transform pipeline, extracted from the CLI.
//!
//! The entry points are I/O-agnostic: page loading and artifact writes go
//! through the port traits so the pipeline can be embedded or tested
//! in-memory.

mod adapters;
mod pipeline;
mod ports;
mod render;
mod settings;

pub use adapters::{FsPageSource, FsWritePort, InMemoryPageSource};
pub use pipeline::{run_transform, write_transform_artifacts, TransformOutcome};
pub use ports::{PageSource, WritePort};
pub use render::render_summary_md;
pub use settings::TransformSettings;
