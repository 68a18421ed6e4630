//! Turns a GraphQL introspection `__schema` JSON payload into the same
//! [`ast::Document`] shape [`crate::parser::parse_document`] produces from
//! SDL source text.
//!
//! [`scanner::scan_tokens`] does the real work of reconstructing SDL token
//! order out of a key-order-agnostic JSON tree; this module's job is just to
//! give those tokens the same [`Item`]/[`Registry`] scaffolding a lexed
//! document would have, then hand them to [`parser::parse_items`] unchanged.

mod model;
mod scanner;
#[cfg(test)]
mod tests;
mod value;

use crate::ast;
use crate::error::ParseError;
use crate::parser::{self, Mode};
use crate::registry::Registry;
use crate::token::Item;

/// Parses `json` as an introspection `__schema` payload, registering it with
/// `registry` under `name` the same way [`crate::parser::parse_document`]
/// registers source text.
///
/// The registry gets one synthetic offset per token; offsets and line
/// numbers are ordering-only (they do not reflect any real byte width in
/// the original JSON) but resolve correctly through [`Registry::position`].
pub fn parse_introspection<'reg>(
    registry: &'reg Registry,
    name: &str,
    json: &str,
    mode: Mode,
) -> Result<ast::Document<'reg>, ParseError> {
    let groups = scanner::scan_tokens(json);
    let total: usize = groups.iter().map(|g| g.len()).sum();
    let doc = registry
        .add_document(name, None, total as u32 + 1)
        .map_err(|e| ParseError::new(name, 0, e.into()))?;

    let mut items = Vec::with_capacity(total);
    let mut index: u32 = 0;
    for group in groups {
        // One `note_line` per group: every token in the group then resolves
        // to the same line, which is what lets the parser's same-line
        // directive check attach a synthesized `@deprecated` to its field
        // or enum value.
        registry
            .note_line(doc.id(), doc.base_offset + index)
            .map_err(|e| ParseError::new(name, 0, e.into()))?;
        for (kind, text) in group {
            let position = doc.base_offset + index;
            let line = registry.line(position).map_err(|e| ParseError::new(name, 0, e.into()))?;
            items.push(Item::new(position, line, kind, text));
            index += 1;
        }
    }

    parser::parse_items(registry, name, items, mode)
}
