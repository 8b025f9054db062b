use crate::rules::{self, PatchContext, Rule};
use anyhow::Context;
use prodschema_page::PageDoc;
use prodschema_types::report::{ChangeRecord, ReportSummary};
use prodschema_types::{types, SchemaGraph};
use serde_json::{Map, Value};
use tracing::debug;

/// How the activation gate is resolved. `FromPage` is the production
/// behaviour; the overrides exist for local testing through the CLI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Activation {
    #[default]
    FromPage,
    ForceOn,
    ForceOff,
}

/// The page node: first `WebPage`-typed node, or (after the type override
/// has run) the first `Product`-typed node, or the graph's first node.
pub fn page_node_index(graph: &SchemaGraph) -> Option<usize> {
    graph
        .position_of_type(types::WEB_PAGE)
        .or_else(|| graph.position_of_type(types::PRODUCT))
        .or(if graph.is_empty() { None } else { Some(0) })
}

/// Result of one patch run. When the gate stays closed, `graph` is the
/// input graph unchanged and `changes` is empty.
#[derive(Debug, Clone)]
pub struct PatchOutcome {
    pub graph: SchemaGraph,
    pub activated: bool,
    pub changes: Vec<ChangeRecord>,
    pub summary: ReportSummary,

    /// Per-rule detail blobs keyed by rule id.
    pub data: Option<Value>,
}

/// Runs the builtin rules in their fixed order against one page.
pub struct Patcher {
    rules: Vec<Box<dyn Rule>>,
}

impl Default for Patcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Patcher {
    pub fn new() -> Self {
        Self {
            rules: rules::builtin_rules(),
        }
    }

    pub fn with_rules(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    pub fn patch(&self, page: &PageDoc, activation: Activation) -> anyhow::Result<PatchOutcome> {
        let mut graph = page.graph.clone();

        let activated = match activation {
            Activation::FromPage => page.activation_enabled(),
            Activation::ForceOn => true,
            Activation::ForceOff => false,
        };

        if !activated {
            debug!("activation gate closed, graph passes through unchanged");
            return Ok(PatchOutcome {
                graph,
                activated: false,
                changes: vec![],
                summary: ReportSummary::default(),
                data: None,
            });
        }

        let mut changes: Vec<ChangeRecord> = Vec::new();
        let mut reviews_emitted = 0u64;
        let mut data = Map::new();

        for rule in &self.rules {
            // Recomputed per rule: graph-level rules can shift the index.
            let ctx = PatchContext {
                page_node: page_node_index(&graph),
            };
            let change = rule
                .apply(&mut graph, page, &ctx)
                .with_context(|| format!("rule {}", rule.meta().id))?;

            reviews_emitted += change.reviews_emitted;
            if let Some(d) = change.data {
                data.insert(rule.meta().id.to_string(), d);
            }
            changes.push(change.record);
        }

        let summary = ReportSummary::from_changes(&changes, reviews_emitted);
        Ok(PatchOutcome {
            graph,
            activated: true,
            changes,
            summary,
            data: if data.is_empty() {
                None
            } else {
                Some(Value::Object(data))
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn page(value: serde_json::Value) -> PageDoc {
        serde_json::from_value(value).unwrap()
    }

    fn activated_page() -> PageDoc {
        page(json!({
            "title": "Local Rank Tracker",
            "fields": {"activate_product_schema": "on"},
            "graph": [
                {"@type": "WebSite", "name": "BrightLocal"},
                {"@type": "BreadcrumbList", "itemListElement": []},
                {"@type": "WebPage", "name": "Local Rank Tracker",
                 "datePublished": "2020-01-01", "inLanguage": "en-GB"},
            ],
        }))
    }

    #[test]
    fn gate_closed_returns_input_unchanged() {
        for fields in [json!({}), json!({"activate_product_schema": "off"})] {
            let p = page(json!({
                "title": "T",
                "fields": fields,
                "graph": [{"@type": "WebPage"}, {"@type": "BreadcrumbList"}],
            }));

            let outcome = Patcher::new().patch(&p, Activation::FromPage).unwrap();
            assert!(!outcome.activated);
            assert_eq!(outcome.graph, p.graph);
            assert!(outcome.changes.is_empty());
            assert_eq!(outcome.summary, ReportSummary::default());
        }
    }

    #[test]
    fn activated_run_relabels_and_prunes() {
        let p = activated_page();
        let outcome = Patcher::new().patch(&p, Activation::FromPage).unwrap();

        assert!(outcome.activated);
        assert_eq!(outcome.graph.len(), 2);
        assert!(outcome
            .graph
            .nodes()
            .iter()
            .all(|n| !n.has_type(types::BREADCRUMB_LIST)));

        // Page node kept its position relative to the surviving nodes.
        let product = outcome.graph.get(1).unwrap();
        assert_eq!(product.node_type(), Some("Product"));
        assert_eq!(product.get("sku"), Some(&json!("local-rank-tracker")));
        assert_eq!(product.get("mpn"), Some(&json!("Local Rank Tracker")));
        assert!(!product.contains("datePublished"));
        assert!(!product.contains("inLanguage"));

        assert_eq!(outcome.changes.len(), 4);
        assert_eq!(outcome.summary.nodes_dropped, 1);
    }

    #[test]
    fn force_on_overrides_missing_flag() {
        let p = page(json!({
            "title": "T",
            "graph": [{"@type": "WebPage"}],
        }));

        let outcome = Patcher::new().patch(&p, Activation::ForceOn).unwrap();
        assert!(outcome.activated);
        assert_eq!(outcome.graph.get(0).unwrap().node_type(), Some("Product"));
    }

    #[test]
    fn force_off_overrides_on_flag() {
        let p = activated_page();
        let outcome = Patcher::new().patch(&p, Activation::ForceOff).unwrap();
        assert!(!outcome.activated);
        assert_eq!(outcome.graph, p.graph);
    }

    #[test]
    fn page_node_prefers_webpage_then_product_then_first() {
        let webpage: SchemaGraph = serde_json::from_value(json!([
            {"@type": "WebSite"}, {"@type": "WebPage"},
        ]))
        .unwrap();
        assert_eq!(page_node_index(&webpage), Some(1));

        let product: SchemaGraph = serde_json::from_value(json!([
            {"@type": "WebSite"}, {"@type": "Product"},
        ]))
        .unwrap();
        assert_eq!(page_node_index(&product), Some(1));

        let untyped: SchemaGraph =
            serde_json::from_value(json!([{"name": "no type"}])).unwrap();
        assert_eq!(page_node_index(&untyped), Some(0));

        assert_eq!(page_node_index(&SchemaGraph::default()), None);
    }

    #[test]
    fn patch_is_idempotent_end_to_end() {
        let p = activated_page();
        let patcher = Patcher::new();

        let once = patcher.patch(&p, Activation::FromPage).unwrap();

        let mut again = p.clone();
        again.graph = once.graph.clone();
        let twice = patcher.patch(&again, Activation::FromPage).unwrap();

        assert_eq!(twice.graph, once.graph);
    }
}
