//! Builders for the fixed Schema.org sub-objects the patch emits.
//!
//! Field values arrive from page content as arbitrary JSON and are copied
//! verbatim; only the `@type` discriminators and the brand name are owned
//! here.

use crate::{keys, types};
use serde_json::{json, Value};

/// The brand attached to every patched product node. Hard-coded upstream,
/// not configurable from content.
pub const BRAND_NAME: &str = "BrightLocal";

/// Default `ratingValue` when the page carries no aggregate-rating field.
pub const DEFAULT_RATING_VALUE: i64 = 0;
/// Default `bestRating` when the page carries no best-rating field.
pub const DEFAULT_BEST_RATING: i64 = 5;
/// Default `reviewCount` when the page carries no total-reviews field.
pub const DEFAULT_REVIEW_COUNT: i64 = 5;

/// `sku` normalization: lowercase, spaces replaced by hyphens.
///
/// `mpn` intentionally stays the verbatim title; the asymmetry is part of
/// the output contract.
pub fn normalize_sku(title: &str) -> String {
    title.replace(' ', "-").to_lowercase()
}

pub fn brand() -> Value {
    json!({
        (keys::TYPE): types::BRAND,
        (keys::NAME): BRAND_NAME,
    })
}

/// The `aggregateRating` object. Each argument is the page field value used
/// verbatim; pass `None` to fall back to that field's default. The three
/// fields default independently.
pub fn aggregate_rating(
    rating_value: Option<Value>,
    best_rating: Option<Value>,
    review_count: Option<Value>,
) -> Value {
    json!({
        (keys::TYPE): types::AGGREGATE_RATING,
        (keys::RATING_VALUE): rating_value.unwrap_or_else(|| json!(DEFAULT_RATING_VALUE)),
        (keys::BEST_RATING): best_rating.unwrap_or_else(|| json!(DEFAULT_BEST_RATING)),
        (keys::REVIEW_COUNT): review_count.unwrap_or_else(|| json!(DEFAULT_REVIEW_COUNT)),
    })
}

/// One `Review` object derived from a testimonial entry. Values are copied
/// verbatim from the entry's sub-fields (null when a sub-field is absent).
pub fn review(
    text: Value,
    score: Value,
    out_of: Value,
    author_name: Value,
    organization: Value,
) -> Value {
    json!({
        (keys::TYPE): types::REVIEW,
        (keys::NAME): text,
        (keys::REVIEW_RATING): {
            (keys::TYPE): types::RATING,
            (keys::RATING_VALUE): score,
            (keys::BEST_RATING): out_of,
        },
        (keys::AUTHOR): {
            (keys::TYPE): types::PERSON,
            (keys::NAME): author_name,
        },
        (keys::PUBLISHER): {
            (keys::TYPE): types::ORGANIZATION,
            (keys::NAME): organization,
        },
    })
}
