use crate::rules::{PatchContext, Rule, RuleChange, RuleMeta};
use prodschema_page::{field_keys, PageDoc};
use prodschema_types::report::ChangeRecord;
use prodschema_types::{keys, objects, SchemaGraph};
use serde_json::json;

/// Prunes webpage-only properties from the page node and sets the product
/// enrichment keys: image, sku/mpn, brand, aggregateRating.
///
/// Idempotent: enrichment keys are overwritten with identical values and
/// pruned keys stay absent on a second application.
pub struct ProductPropertiesRule;

impl ProductPropertiesRule {
    pub const RULE_ID: &'static str = "schema.product_properties";
}

impl Rule for ProductPropertiesRule {
    fn meta(&self) -> RuleMeta {
        RuleMeta {
            id: Self::RULE_ID,
            title: "Product properties",
            description: "Sets image/sku/mpn/brand/aggregateRating on the page node and \
                          removes webpage-only properties.",
        }
    }

    fn apply(
        &self,
        graph: &mut SchemaGraph,
        page: &PageDoc,
        ctx: &PatchContext,
    ) -> anyhow::Result<RuleChange> {
        let mut record = ChangeRecord {
            rule_id: Self::RULE_ID.to_string(),
            ..Default::default()
        };

        let idx = match ctx.page_node {
            Some(idx) => idx,
            None => {
                return Ok(RuleChange {
                    record,
                    ..Default::default()
                })
            }
        };
        let node = match graph.get_mut(idx) {
            Some(n) => n,
            None => {
                return Ok(RuleChange {
                    record,
                    ..Default::default()
                })
            }
        };
        record.node_index = Some(idx as u64);

        if let Some(image) = page.field(field_keys::PRODUCT_IMAGE) {
            node.set(keys::IMAGE, image.clone());
            record.keys_set.push(keys::IMAGE.to_string());
        }

        // sku is the normalized title; mpn stays verbatim. The asymmetry is
        // part of the output contract.
        node.set(keys::SKU, json!(objects::normalize_sku(&page.title)));
        record.keys_set.push(keys::SKU.to_string());
        node.set(keys::MPN, json!(page.title));
        record.keys_set.push(keys::MPN.to_string());

        node.set(keys::BRAND, objects::brand());
        record.keys_set.push(keys::BRAND.to_string());

        node.set(
            keys::AGGREGATE_RATING,
            objects::aggregate_rating(
                page.field(field_keys::AGGREGATE_RATING).cloned(),
                page.field(field_keys::BEST_RATING).cloned(),
                page.field(field_keys::TOTAL_REVIEWS).cloned(),
            ),
        );
        record.keys_set.push(keys::AGGREGATE_RATING.to_string());

        for key in keys::PRUNED {
            if node.remove(key).is_some() {
                record.keys_removed.push((*key).to_string());
            }
        }

        Ok(RuleChange {
            record,
            ..Default::default()
        })
    }
}
