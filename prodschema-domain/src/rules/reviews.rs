use crate::rules::{PatchContext, Rule, RuleChange, RuleMeta};
use prodschema_page::{PageDoc, TestimonialEntry};
use prodschema_types::report::ChangeRecord;
use prodschema_types::{keys, objects, SchemaGraph};
use serde_json::{json, Value};
use tracing::debug;

/// Builds the `review` array from visible `testimonials` section rows.
///
/// Rows iterate in stored order, entries within a row likewise. The key is
/// only written when at least one entry qualifies; an empty review array is
/// never emitted.
pub struct ReviewExtractionRule;

impl ReviewExtractionRule {
    pub const RULE_ID: &'static str = "schema.review_extraction";
}

fn review_from_entry(entry: &TestimonialEntry) -> Value {
    let field = |v: &Option<Value>| v.clone().unwrap_or(Value::Null);
    objects::review(
        field(&entry.what_they_said),
        field(&entry.score),
        field(&entry.out_of),
        field(&entry.who_said_it),
        field(&entry.their_company),
    )
}

impl Rule for ReviewExtractionRule {
    fn meta(&self) -> RuleMeta {
        RuleMeta {
            id: Self::RULE_ID,
            title: "Review extraction",
            description: "Collects scored testimonial entries from visible sections into the \
                          page node's review array.",
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

        let mut reviews: Vec<Value> = Vec::new();
        let mut rows_hidden = 0u64;
        let mut entries_skipped = 0u64;

        for row in &page.sections_content {
            if !row.is_visible() {
                rows_hidden += 1;
                continue;
            }
            if !row.is_testimonials() {
                continue;
            }
            for entry in &row.testimonial {
                if !entry.has_score() {
                    entries_skipped += 1;
                    continue;
                }
                reviews.push(review_from_entry(entry));
            }
        }

        let reviews_emitted = reviews.len() as u64;
        let data = json!({
            "rows_seen": page.sections_content.len() as u64,
            "rows_hidden": rows_hidden,
            "entries_skipped": entries_skipped,
            "reviews_emitted": reviews_emitted,
        });

        if !reviews.is_empty() {
            if let Some(idx) = ctx.page_node {
                if let Some(node) = graph.get_mut(idx) {
                    node.set(keys::REVIEW, Value::Array(reviews));
                    record.node_index = Some(idx as u64);
                    record.keys_set.push(keys::REVIEW.to_string());
                }
            }
        } else {
            debug!("no qualifying testimonial entries, review key left unset");
        }

        Ok(RuleChange {
            record,
            reviews_emitted,
            data: Some(data),
        })
    }
}
