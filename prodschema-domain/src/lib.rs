//! Domain logic: turn one page document into a patched JSON-LD graph.
//!
//! This crate owns *what* changes and in which order. It does not own how
//! pages are loaded or where artifacts go; that's `prodschema-page` and
//! `prodschema-core`.

mod patcher;
mod rules;

pub use patcher::{page_node_index, Activation, PatchOutcome, Patcher};
pub use rules::{builtin_rule_metas, builtin_rules, PatchContext, Rule, RuleChange, RuleMeta};
