//! Page document model: the content item's title, custom fields, and
//! repeatable section rows, with the exact presence semantics the patch
//! rules depend on.
//!
//! Presence is "is set": a field explicitly set to the empty string or to
//! zero counts as present and is used verbatim. Only a missing key or a
//! JSON null counts as absent.

mod doc;
mod load;

pub use doc::{PageDoc, SectionRow, TestimonialEntry};
pub use load::{load_page, PageLoadError};

/// Custom-field names read from the page document.
pub mod field_keys {
    /// Per-page gate; the rules fire only when this equals `"on"`.
    pub const ACTIVATE_PRODUCT_SCHEMA: &str = "activate_product_schema";
    /// Global flag forcing verbose/development output.
    pub const DEBUG_PRODUCT_SCHEMA: &str = "debug_product_schema";
    pub const AGGREGATE_RATING: &str = "aggregate_rating";
    pub const BEST_RATING: &str = "best_rating";
    pub const TOTAL_REVIEWS: &str = "total_reviews";
    pub const PRODUCT_IMAGE: &str = "product_image";
}

/// Section-row layout kinds the rules care about.
pub mod layouts {
    pub const TESTIMONIALS: &str = "testimonials";
}
