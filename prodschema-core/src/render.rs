//! Rendering helpers (markdown) for human-readable artifacts.

use prodschema_types::report::PatchReport;

pub fn render_summary_md(report: &PatchReport) -> String {
    let mut out = String::new();
    out.push_str("# prodschema transform\n\n");
    out.push_str(&format!("- Activated: {}\n", report.activated));

    if !report.activated {
        out.push_str("\n_Gate closed; graph passed through unchanged._\n");
        return out;
    }

    out.push_str(&format!("- Rules run: {}\n", report.summary.rules_run));
    out.push_str(&format!("- Keys set: {}\n", report.summary.keys_set));
    out.push_str(&format!("- Keys removed: {}\n", report.summary.keys_removed));
    out.push_str(&format!(
        "- Nodes dropped: {}\n",
        report.summary.nodes_dropped
    ));
    out.push_str(&format!(
        "- Reviews emitted: {}\n",
        report.summary.reviews_emitted
    ));

    out.push_str("\n## Rules\n\n");
    for (i, change) in report.changes.iter().enumerate() {
        out.push_str(&format!("### {}. {}\n\n", i + 1, change.rule_id));
        if let Some(idx) = change.node_index {
            out.push_str(&format!("- Node: {}\n", idx));
        }
        if !change.keys_set.is_empty() {
            out.push_str(&format!("- Set: {}\n", change.keys_set.join(", ")));
        }
        if !change.keys_removed.is_empty() {
            out.push_str(&format!("- Removed: {}\n", change.keys_removed.join(", ")));
        }
        if change.nodes_dropped > 0 {
            out.push_str(&format!("- Nodes dropped: {}\n", change.nodes_dropped));
        }
        out.push('\n');
    }

    out
}
