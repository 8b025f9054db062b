use crate::rules::{PatchContext, Rule, RuleChange, RuleMeta};
use prodschema_page::PageDoc;
use prodschema_types::report::ChangeRecord;
use prodschema_types::{types, SchemaGraph};
use tracing::debug;

/// Removes every breadcrumb node from the graph. Order of the remaining
/// nodes is preserved; a graph without breadcrumbs passes through unchanged.
pub struct BreadcrumbPruneRule;

impl BreadcrumbPruneRule {
    pub const RULE_ID: &'static str = "schema.breadcrumb_prune";
}

impl Rule for BreadcrumbPruneRule {
    fn meta(&self) -> RuleMeta {
        RuleMeta {
            id: Self::RULE_ID,
            title: "Breadcrumb prune",
            description: "Drops BreadcrumbList nodes from the graph, preserving node order.",
        }
    }

    fn apply(
        &self,
        graph: &mut SchemaGraph,
        _page: &PageDoc,
        _ctx: &PatchContext,
    ) -> anyhow::Result<RuleChange> {
        let dropped = graph.drop_nodes_of_type(types::BREADCRUMB_LIST);
        if dropped > 0 {
            debug!(dropped, "pruned breadcrumb nodes");
        }

        Ok(RuleChange {
            record: ChangeRecord {
                rule_id: Self::RULE_ID.to_string(),
                nodes_dropped: dropped,
                ..Default::default()
            },
            ..Default::default()
        })
    }
}
