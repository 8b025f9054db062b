use prodschema_page::PageDoc;
use prodschema_types::report::ChangeRecord;
use prodschema_types::SchemaGraph;

mod breadcrumb;
mod product_type;
mod properties;
mod reviews;

pub use breadcrumb::BreadcrumbPruneRule;
pub use product_type::ProductTypeRule;
pub use properties::ProductPropertiesRule;
pub use reviews::ReviewExtractionRule;

/// Context handed to every rule. The page-node index is recomputed by the
/// patcher before each rule because graph-level rules can shift it.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatchContext {
    pub page_node: Option<usize>,
}

/// What one rule did. Rules never fail on content: missing inputs default
/// or skip, and the record just comes back empty.
#[derive(Debug, Clone, Default)]
pub struct RuleChange {
    pub record: ChangeRecord,
    pub reviews_emitted: u64,
    pub data: Option<serde_json::Value>,
}

/// Catalog entry describing a rule, for `list-rules` and `explain`.
#[derive(Debug, Clone)]
pub struct RuleMeta {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub trait Rule {
    fn meta(&self) -> RuleMeta;

    fn apply(
        &self,
        graph: &mut SchemaGraph,
        page: &PageDoc,
        ctx: &PatchContext,
    ) -> anyhow::Result<RuleChange>;
}

/// The rules in their fixed execution order. Order matters: the type
/// override runs first so later rules can find the product node, and the
/// breadcrumb prune runs before the node index is used again.
pub fn builtin_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(ProductTypeRule),
        Box::new(BreadcrumbPruneRule),
        Box::new(ProductPropertiesRule),
        Box::new(ReviewExtractionRule),
    ]
}

pub fn builtin_rule_metas() -> Vec<RuleMeta> {
    builtin_rules().iter().map(|r| r.meta()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_rules_keep_their_order() {
        let ids: Vec<_> = builtin_rule_metas().iter().map(|m| m.id).collect();
        assert_eq!(
            ids,
            vec![
                "schema.product_type_override",
                "schema.breadcrumb_prune",
                "schema.product_properties",
                "schema.review_extraction",
            ]
        );
    }

    #[test]
    fn rule_ids_are_unique() {
        let mut ids: Vec<_> = builtin_rule_metas().iter().map(|m| m.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), builtin_rules().len());
    }
}
