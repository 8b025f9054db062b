//! Rule explanation module for the `prodschema explain` command.
//!
//! Provides detailed explanations of each patch rule: what it changes,
//! which page inputs feed it, and how its defaults behave.

/// Information about one patch rule.
#[derive(Debug, Clone)]
pub struct RuleExplanation {
    /// Short key for the rule (user-facing, e.g. "product-type").
    pub key: &'static str,
    /// Internal rule id (e.g. "schema.product_type_override").
    pub rule_id: &'static str,
    /// Human-readable title.
    pub title: &'static str,
    /// Detailed description of what the rule does.
    pub description: &'static str,
    /// Page inputs the rule reads.
    pub inputs: &'static [&'static str],
}

/// Registry of all rule explanations, in execution order.
pub static RULE_REGISTRY: &[RuleExplanation] = &[
    RuleExplanation {
        key: "product-type",
        rule_id: "schema.product_type_override",
        title: "Product type override",
        description: r#"Relabels the page node's @type discriminator as "Product".

The page node is the first WebPage-typed node in the graph (falling back to
the first node). The override replaces a JSON-LD type array as well as a
plain string type. There is no validation; the rule always succeeds."#,
        inputs: &[],
    },
    RuleExplanation {
        key: "breadcrumb-prune",
        rule_id: "schema.breadcrumb_prune",
        title: "Breadcrumb prune",
        description: r#"Removes every BreadcrumbList node from the graph.

The relative order of the remaining nodes is preserved. A graph without
breadcrumb nodes passes through unchanged."#,
        inputs: &[],
    },
    RuleExplanation {
        key: "product-properties",
        rule_id: "schema.product_properties",
        title: "Product properties",
        description: r#"Sets the product enrichment keys on the page node and removes
webpage-only properties.

- image: copied verbatim from the product_image field when set.
- sku: lowercase title with spaces replaced by hyphens.
- mpn: the title verbatim (the sku/mpn asymmetry is intentional).
- brand: fixed {"@type": "Brand", "name": "BrightLocal"}.
- aggregateRating: ratingValue / bestRating / reviewCount from the
  aggregate_rating / best_rating / total_reviews fields, defaulting
  independently to 0 / 5 / 5. Presence is "is set": an empty string or a
  zero is used verbatim, never replaced by the default.

Removed when present: breadcrumb, potentialAction, datePublished,
dateModified, inLanguage, isPartOf."#,
        inputs: &[
            "title",
            "product_image",
            "aggregate_rating",
            "best_rating",
            "total_reviews",
        ],
    },
    RuleExplanation {
        key: "review-extraction",
        rule_id: "schema.review_extraction",
        title: "Review extraction",
        description: r#"Collects testimonial entries from the sections_content rows into the
page node's review array.

Rows iterate in stored order. A row is hidden only when its show_hide field
is set to a concrete value other than "show"; an unset field counts as
visible. Only rows with layout "testimonials" contribute. An entry is
skipped when its score is unset, null, or the empty string; a numeric zero
counts. The review key is only written when at least one entry qualifies;
an empty array is never emitted."#,
        inputs: &["sections_content"],
    },
];

/// Finds an explanation by short key or internal rule id.
pub fn find(key: &str) -> Option<&'static RuleExplanation> {
    RULE_REGISTRY
        .iter()
        .find(|e| e.key == key || e.rule_id == key)
}

pub fn render(explanation: &RuleExplanation) -> String {
    let mut out = String::new();
    out.push_str(&format!("# {}\n\n", explanation.title));
    out.push_str(&format!("- Key: {}\n", explanation.key));
    out.push_str(&format!("- Rule id: {}\n", explanation.rule_id));
    if !explanation.inputs.is_empty() {
        out.push_str(&format!("- Inputs: {}\n", explanation.inputs.join(", ")));
    }
    out.push_str(&format!("\n{}\n", explanation.description));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_matches_builtin_rules() {
        let metas = prodschema_domain::builtin_rule_metas();
        assert_eq!(RULE_REGISTRY.len(), metas.len());
        for (entry, meta) in RULE_REGISTRY.iter().zip(metas.iter()) {
            assert_eq!(entry.rule_id, meta.id);
        }
    }

    #[test]
    fn find_accepts_key_and_rule_id() {
        assert!(find("product-type").is_some());
        assert!(find("schema.product_type_override").is_some());
        assert!(find("nope").is_none());
    }

    #[test]
    fn render_contains_title_and_id() {
        let text = render(&RULE_REGISTRY[0]);
        assert!(text.contains("Product type override"));
        assert!(text.contains("schema.product_type_override"));
    }
}
