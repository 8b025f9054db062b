use crate::rules::{PatchContext, Rule, RuleChange, RuleMeta};
use prodschema_page::PageDoc;
use prodschema_types::report::ChangeRecord;
use prodschema_types::{keys, types, SchemaGraph};

/// Forces the page node's `@type` to `Product`. No validation; an empty
/// graph is the only case with nothing to do.
pub struct ProductTypeRule;

impl ProductTypeRule {
    pub const RULE_ID: &'static str = "schema.product_type_override";
}

impl Rule for ProductTypeRule {
    fn meta(&self) -> RuleMeta {
        RuleMeta {
            id: Self::RULE_ID,
            title: "Product type override",
            description: "Relabels the page node's @type discriminator as Product.",
        }
    }

    fn apply(
        &self,
        graph: &mut SchemaGraph,
        _page: &PageDoc,
        ctx: &PatchContext,
    ) -> anyhow::Result<RuleChange> {
        let mut record = ChangeRecord {
            rule_id: Self::RULE_ID.to_string(),
            ..Default::default()
        };

        if let Some(idx) = ctx.page_node {
            if let Some(node) = graph.get_mut(idx) {
                node.set_type(types::PRODUCT);
                record.node_index = Some(idx as u64);
                record.keys_set.push(keys::TYPE.to_string());
            }
        }

        Ok(RuleChange {
            record,
            ..Default::default()
        })
    }
}
