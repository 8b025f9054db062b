//! Shared DTOs (schemas-as-code) for the prodschema workspace.
//!
//! # Design constraints
//! - These types are serialized into artifacts and consumed downstream.
//! - Be conservative with breaking changes.
//! - Prefer adding optional fields over changing semantics.

pub mod node;
pub mod objects;
pub mod report;

pub use node::{SchemaGraph, SchemaNode};

/// Schema identifiers.
pub mod schema {
    pub const PRODSCHEMA_REPORT_V1: &str = "prodschema.report.v1";
    pub const PRODSCHEMA_PAGE_V1: &str = "prodschema.page.v1";
}

/// Graph-node keys touched by the patch rules.
///
/// Every mutation goes through these constants so a key typo is a compile
/// error, not a silently wrong artifact.
pub mod keys {
    pub const TYPE: &str = "@type";
    pub const IMAGE: &str = "image";
    pub const SKU: &str = "sku";
    pub const MPN: &str = "mpn";
    pub const BRAND: &str = "brand";
    pub const AGGREGATE_RATING: &str = "aggregateRating";
    pub const REVIEW: &str = "review";
    pub const NAME: &str = "name";
    pub const RATING_VALUE: &str = "ratingValue";
    pub const BEST_RATING: &str = "bestRating";
    pub const REVIEW_COUNT: &str = "reviewCount";
    pub const REVIEW_RATING: &str = "reviewRating";
    pub const AUTHOR: &str = "author";
    pub const PUBLISHER: &str = "publisher";

    /// Keys pruned from the page node when the product patch fires.
    pub const PRUNED: &[&str] = &[
        "breadcrumb",
        "potentialAction",
        "datePublished",
        "dateModified",
        "inLanguage",
        "isPartOf",
    ];
}

/// Schema.org type discriminators.
pub mod types {
    pub const PRODUCT: &str = "Product";
    pub const BRAND: &str = "Brand";
    pub const AGGREGATE_RATING: &str = "AggregateRating";
    pub const REVIEW: &str = "Review";
    pub const RATING: &str = "Rating";
    pub const PERSON: &str = "Person";
    pub const ORGANIZATION: &str = "Organization";
    pub const BREADCRUMB_LIST: &str = "BreadcrumbList";
    pub const WEB_PAGE: &str = "WebPage";
}
