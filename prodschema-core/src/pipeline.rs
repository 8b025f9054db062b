use crate::ports::{PageSource, WritePort};
use crate::render::render_summary_md;
use crate::settings::TransformSettings;
use anyhow::Context;
use camino::Utf8Path;
use chrono::Utc;
use prodschema_domain::Patcher;
use prodschema_types::report::{PatchReport, ToolInfo};
use prodschema_types::SchemaGraph;
use tracing::debug;

/// Outcome of `run_transform`.
///
/// The caller is responsible for writing artifacts (via `WritePort` and the
/// convenience `write_transform_artifacts` helper).
pub struct TransformOutcome {
    pub graph: SchemaGraph,
    pub report: PatchReport,
    pub summary_md: String,

    /// Development output mode: settings debug flag or the page's own debug
    /// field. Switches artifacts to pretty-printed JSON.
    pub verbose: bool,
}

/// Run the transform pipeline: load the page, patch its graph, assemble the
/// report.
pub fn run_transform(
    settings: &TransformSettings,
    pages: &dyn PageSource,
) -> anyhow::Result<TransformOutcome> {
    let started = Utc::now();

    let page = pages.load_page().context("load page document")?;
    let verbose = settings.debug || page.debug_enabled();
    if verbose {
        debug!("development output mode enabled");
    }

    let patched = Patcher::new()
        .patch(&page, settings.activation)
        .context("patch graph")?;

    let mut report = PatchReport::new(ToolInfo::prodschema(), patched.activated);
    report.changes = patched.changes;
    report.summary = patched.summary;
    report.data = patched.data;

    let ended = Utc::now();
    report.run.started_at = started.to_rfc3339();
    report.run.ended_at = Some(ended.to_rfc3339());
    report.run.duration_ms = Some((ended - started).num_milliseconds().max(0) as u64);

    let summary_md = render_summary_md(&report);

    Ok(TransformOutcome {
        graph: patched.graph,
        report,
        summary_md,
        verbose,
    })
}

/// Write all transform artifacts to the output directory.
pub fn write_transform_artifacts(
    outcome: &TransformOutcome,
    out_dir: &Utf8Path,
    writer: &dyn WritePort,
) -> anyhow::Result<()> {
    writer.create_dir_all(out_dir)?;

    let graph_json = to_json(&outcome.graph, outcome.verbose).context("serialize graph")?;
    writer.write_file(&out_dir.join("graph.json"), graph_json.as_bytes())?;

    let report_json = to_json(&outcome.report, outcome.verbose).context("serialize report")?;
    writer.write_file(&out_dir.join("report.json"), report_json.as_bytes())?;

    writer.write_file(&out_dir.join("summary.md"), outcome.summary_md.as_bytes())?;

    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryPageSource;
    use camino::Utf8PathBuf;
    use pretty_assertions::assert_eq;
    use prodschema_domain::Activation;
    use prodschema_page::PageDoc;
    use serde_json::json;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemWritePort {
        files: Mutex<HashMap<String, Vec<u8>>>,
        dirs: Mutex<Vec<String>>,
    }

    impl WritePort for MemWritePort {
        fn write_file(&self, path: &Utf8Path, contents: &[u8]) -> anyhow::Result<()> {
            self.files
                .lock()
                .expect("lock files")
                .insert(path.as_str().to_string(), contents.to_vec());
            Ok(())
        }

        fn create_dir_all(&self, path: &Utf8Path) -> anyhow::Result<()> {
            self.dirs
                .lock()
                .expect("lock dirs")
                .push(path.as_str().to_string());
            Ok(())
        }
    }

    fn page(value: serde_json::Value) -> PageDoc {
        serde_json::from_value(value).expect("page")
    }

    fn activated_page() -> PageDoc {
        page(json!({
            "title": "Review Widget",
            "fields": {"activate_product_schema": "on"},
            "graph": [
                {"@type": "BreadcrumbList"},
                {"@type": "WebPage", "name": "Review Widget"},
            ],
        }))
    }

    fn settings() -> TransformSettings {
        TransformSettings::default()
    }

    #[test]
    fn run_transform_patches_and_reports() {
        let source = InMemoryPageSource::new(activated_page());
        let outcome = run_transform(&settings(), &source).expect("run");

        assert!(outcome.report.activated);
        assert_eq!(outcome.graph.len(), 1);
        assert_eq!(outcome.graph.get(0).unwrap().node_type(), Some("Product"));
        assert_eq!(outcome.report.summary.rules_run, 4);
        assert!(!outcome.report.run.started_at.is_empty());
        assert!(outcome.report.run.ended_at.is_some());
        assert!(outcome.summary_md.contains("Activated: true"));
    }

    #[test]
    fn run_transform_passthrough_when_gate_closed() {
        let p = page(json!({
            "title": "T",
            "graph": [{"@type": "WebPage"}, {"@type": "BreadcrumbList"}],
        }));
        let source = InMemoryPageSource::new(p.clone());

        let outcome = run_transform(&settings(), &source).expect("run");
        assert!(!outcome.report.activated);
        assert_eq!(outcome.graph, p.graph);
        assert!(outcome.summary_md.contains("passed through unchanged"));
    }

    #[test]
    fn page_debug_field_turns_on_verbose() {
        let p = page(json!({
            "title": "T",
            "fields": {"debug_product_schema": "1"},
        }));

        let outcome = run_transform(&settings(), &InMemoryPageSource::new(p)).expect("run");
        assert!(outcome.verbose);
    }

    #[test]
    fn settings_debug_flag_turns_on_verbose() {
        let mut s = settings();
        s.debug = true;

        let outcome =
            run_transform(&s, &InMemoryPageSource::new(activated_page())).expect("run");
        assert!(outcome.verbose);
    }

    #[test]
    fn activation_override_is_honoured() {
        let p = page(json!({"title": "T", "graph": [{"@type": "WebPage"}]}));
        let mut s = settings();
        s.activation = Activation::ForceOn;

        let outcome = run_transform(&s, &InMemoryPageSource::new(p)).expect("run");
        assert!(outcome.report.activated);
    }

    #[test]
    fn write_artifacts_emits_expected_files() {
        let outcome =
            run_transform(&settings(), &InMemoryPageSource::new(activated_page())).expect("run");

        let writer = MemWritePort::default();
        let out_dir = Utf8PathBuf::from("out");
        write_transform_artifacts(&outcome, &out_dir, &writer).expect("write artifacts");

        let files = writer.files.lock().expect("files");
        assert!(files.contains_key("out/graph.json"));
        assert!(files.contains_key("out/report.json"));
        assert!(files.contains_key("out/summary.md"));

        let report: serde_json::Value =
            serde_json::from_slice(files.get("out/report.json").unwrap()).expect("report json");
        assert_eq!(report["schema"], json!("prodschema.report.v1"));
        assert_eq!(report["activated"], json!(true));
    }

    #[test]
    fn verbose_artifacts_are_pretty_printed() {
        let mut s = settings();
        s.debug = true;
        let outcome =
            run_transform(&s, &InMemoryPageSource::new(activated_page())).expect("run");

        let writer = MemWritePort::default();
        write_transform_artifacts(&outcome, Utf8Path::new("out"), &writer).expect("write");

        let files = writer.files.lock().expect("files");
        let graph = String::from_utf8(files.get("out/graph.json").unwrap().clone()).unwrap();
        assert!(graph.contains('\n'));
    }
}
