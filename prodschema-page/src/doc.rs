use crate::field_keys;
use crate::layouts;
use prodschema_types::SchemaGraph;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One rendered content page: title, custom fields, repeatable section
/// rows, and the JSON-LD graph the upstream pipeline built for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageDoc {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Always available from the host; required in the document.
    pub title: String,

    /// Free-form custom-field map (key -> JSON value).
    #[serde(default)]
    pub fields: Map<String, Value>,

    /// Repeatable content sections, in stored order.
    #[serde(default)]
    pub sections_content: Vec<SectionRow>,

    /// The graph to patch, in the order the upstream pipeline emitted it.
    #[serde(default)]
    pub graph: SchemaGraph,
}

impl PageDoc {
    /// A custom field, `isset`-style: `None` for a missing key or a JSON
    /// null, `Some` for everything else including `""` and `0`.
    pub fn field(&self, key: &str) -> Option<&Value> {
        match self.fields.get(key) {
            Some(Value::Null) | None => None,
            Some(v) => Some(v),
        }
    }

    /// True only when the activation field is set to the literal `"on"`.
    pub fn activation_enabled(&self) -> bool {
        self.field(field_keys::ACTIVATE_PRODUCT_SCHEMA)
            .and_then(Value::as_str)
            == Some("on")
    }

    /// True when the global debug field is set (any non-null value).
    pub fn debug_enabled(&self) -> bool {
        self.field(field_keys::DEBUG_PRODUCT_SCHEMA).is_some()
    }
}

/// One row of the repeatable `sections_content` field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SectionRow {
    /// Layout discriminator; only `testimonials` rows feed the rules.
    #[serde(default)]
    pub layout: String,

    /// Tri-state visibility: unset or `"show"` means visible; any other
    /// concrete value hides the row. An empty string behaves like unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_hide: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub testimonial: Vec<TestimonialEntry>,
}

impl SectionRow {
    pub fn is_visible(&self) -> bool {
        match self.show_hide.as_deref() {
            None | Some("") | Some("show") => true,
            Some(_) => false,
        }
    }

    pub fn is_testimonials(&self) -> bool {
        self.layout == layouts::TESTIMONIALS
    }
}

/// One testimonial entry inside a `testimonials` row. Sub-fields are
/// arbitrary JSON copied verbatim into the review object.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TestimonialEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out_of: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub what_they_said: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub who_said_it: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub their_company: Option<Value>,
}

impl TestimonialEntry {
    /// An entry counts only when its score is set to something other than
    /// null or the empty string. Numeric zero counts.
    pub fn has_score(&self) -> bool {
        match &self.score {
            None | Some(Value::Null) => false,
            Some(Value::String(s)) => !s.is_empty(),
            Some(_) => true,
        }
    }
}
