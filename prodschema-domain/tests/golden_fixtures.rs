//! Golden fixture tests: the patcher produces the exact expected graph for
//! a representative activated page, and a byte-identical passthrough when
//! the gate is closed.

use prodschema_domain::{Activation, Patcher};
use prodschema_page::PageDoc;
use pretty_assertions::assert_eq;
use serde_json::Value;

const ACTIVATED_PAGE: &str = include_str!("fixtures/activated_page.json");
const EXPECTED_GRAPH: &str = include_str!("fixtures/expected_graph.json");

fn load_page() -> PageDoc {
    serde_json::from_str(ACTIVATED_PAGE).expect("fixture page")
}

#[test]
fn activated_page_produces_expected_graph() {
    let page = load_page();
    let outcome = Patcher::new()
        .patch(&page, Activation::FromPage)
        .expect("patch");

    assert!(outcome.activated);

    let got: Value = serde_json::to_value(&outcome.graph).expect("graph json");
    let expected: Value = serde_json::from_str(EXPECTED_GRAPH).expect("fixture graph");
    assert_eq!(got, expected);
}

#[test]
fn summary_counts_match_fixture() {
    let page = load_page();
    let outcome = Patcher::new()
        .patch(&page, Activation::FromPage)
        .expect("patch");

    assert_eq!(outcome.summary.rules_run, 4);
    assert_eq!(outcome.summary.nodes_dropped, 1);
    assert_eq!(outcome.summary.reviews_emitted, 1);
    // @type, image, sku, mpn, brand, aggregateRating, review
    assert_eq!(outcome.summary.keys_set, 7);
    // breadcrumb, potentialAction, datePublished, dateModified, inLanguage, isPartOf
    assert_eq!(outcome.summary.keys_removed, 6);
}

#[test]
fn review_detail_counters_match_fixture() {
    let page = load_page();
    let outcome = Patcher::new()
        .patch(&page, Activation::FromPage)
        .expect("patch");

    let data = outcome.data.expect("rule data");
    let counters = &data["schema.review_extraction"];
    assert_eq!(counters["rows_seen"], serde_json::json!(3));
    assert_eq!(counters["rows_hidden"], serde_json::json!(1));
    assert_eq!(counters["entries_skipped"], serde_json::json!(1));
    assert_eq!(counters["reviews_emitted"], serde_json::json!(1));
}

#[test]
fn deactivated_page_passes_through() {
    let mut page = load_page();
    page.fields.remove("activate_product_schema");

    let outcome = Patcher::new()
        .patch(&page, Activation::FromPage)
        .expect("patch");

    assert!(!outcome.activated);
    assert_eq!(outcome.graph, page.graph);
    assert!(outcome.changes.is_empty());
    assert!(outcome.data.is_none());
}
