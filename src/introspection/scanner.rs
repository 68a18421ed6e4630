//! Builds the token sequence for an introspection payload.
//!
//! JSON object keys carry no order guarantee, but SDL output needs a fixed
//! order. [`PendingItem`]/[`BinaryHeap`] reproduce the documented priority
//! buckets (see the module-level scan functions below) so that, within one
//! type/field/directive entry, tokens come out in the declared SDL shape
//! regardless of which order this scanner visited the corresponding JSON
//! fields in.
//!
//! Tokens are grouped into synthetic "lines": one field, one enum value, one
//! top-level declaration. The grouping matters because the parser only
//! attaches an applied directive to its owner when both sit on the same
//! line — any synthesized directive for a field or enum value has to land
//! in that entry's own group. [`super`] turns each group into one shared
//! `note_line` call.
//!
//! Positions assigned here are synthetic: they preserve ordering and
//! uniqueness, not the byte width the JSON text actually had, so recovering
//! an accurate column for a reordered token is not attempted.

use super::model::{
    DirectiveEntry, EnumValueEntry, FieldEntry, IntrospectionDocument, InputValueEntry,
    SchemaBody, TypeEntry, TypeKind, TypeRefJson,
};
use super::value;
use crate::token::TokenKind;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

type Tokens = Vec<(TokenKind, String)>;

/// Scans `json` into token groups, each destined for one synthetic source
/// line, terminated by a group holding exactly one `EOF` (success) or `ERR`
/// (failure) entry — mirroring the lexer's own termination contract.
pub fn scan_tokens(json: &str) -> Vec<Tokens> {
    match build(json) {
        Ok(mut groups) => {
            groups.push(vec![(TokenKind::Eof, String::new())]);
            groups
        }
        Err(message) => vec![vec![(TokenKind::Err, message)]],
    }
}

fn build(json: &str) -> Result<Vec<Tokens>, String> {
    let doc: IntrospectionDocument =
        serde_json::from_str(json).map_err(|e| format!("malformed introspection JSON: {e}"))?;
    let schema = doc.schema;
    let mut groups = Vec::new();

    let has_roots = schema.query_type.is_some()
        || schema.mutation_type.is_some()
        || schema.subscription_type.is_some();
    if has_roots {
        groups.push(schema_block_tokens(&schema));
    }
    for directive in &schema.directives {
        groups.push(directive_entry_tokens(directive)?);
    }
    for ty in &schema.types {
        groups.extend(type_entry_tokens(ty)?);
    }
    Ok(groups)
}

fn schema_block_tokens(schema: &SchemaBody) -> Tokens {
    let mut out = vec![
        (TokenKind::Schema, "schema".to_string()),
        (TokenKind::LBrace, "{".to_string()),
    ];
    let roots = [
        ("query", &schema.query_type),
        ("mutation", &schema.mutation_type),
        ("subscription", &schema.subscription_type),
    ];
    for (operation, target) in roots {
        if let Some(target) = target {
            out.push((TokenKind::Ident, operation.to_string()));
            out.push((TokenKind::Colon, ":".to_string()));
            out.push((TokenKind::Ident, target.name.clone()));
        }
    }
    out.push((TokenKind::RBrace, "}".to_string()));
    out
}

/// The type entry's own head (description/keyword/name/implements-or-`=
/// members`) is one group; each field, enum value, or input field it
/// contains is its own trailing group.
fn type_entry_tokens(ty: &TypeEntry) -> Result<Vec<Tokens>, String> {
    let mut heap = BinaryHeap::new();
    let mut seq = 0u32;

    if let Some(desc) = &ty.description {
        push_all(&mut heap, &mut seq, 0, description_tokens(desc));
    }

    let keyword = match ty.kind {
        TypeKind::Scalar => TokenKind::Scalar,
        TypeKind::Object => TokenKind::Type,
        TypeKind::Interface => TokenKind::Interface,
        TypeKind::Union => TokenKind::Union,
        TypeKind::Enum => TokenKind::Enum,
        TypeKind::InputObject => TokenKind::Input,
        TypeKind::List | TypeKind::NonNull => {
            return Err(format!("{:?} is not a valid top-level type kind", ty.kind))
        }
    };
    let name = ty.name.clone().ok_or("type entry missing a name")?;
    push_all(&mut heap, &mut seq, 1, vec![(keyword, keyword_text(keyword))]);
    push_all(&mut heap, &mut seq, 2, vec![(TokenKind::Ident, name)]);

    match ty.kind {
        TypeKind::Object | TypeKind::Interface => {
            if let Some(interfaces) = ty.interfaces.as_ref().filter(|i| !i.is_empty()) {
                push_all(&mut heap, &mut seq, 3, implements_tokens(interfaces)?);
            }
        }
        TypeKind::Union => {
            if let Some(members) = ty.possible_types.as_ref().filter(|m| !m.is_empty()) {
                let mut assign = vec![(TokenKind::Assign, "=".to_string())];
                assign.extend(union_member_tokens(members)?);
                push_all(&mut heap, &mut seq, 3, assign);
            }
        }
        TypeKind::Scalar | TypeKind::Enum | TypeKind::InputObject | TypeKind::List | TypeKind::NonNull => {}
    }

    let head = drain(heap);
    let mut groups = vec![head];

    match ty.kind {
        TypeKind::Object | TypeKind::Interface => {
            if let Some(fields) = &ty.fields {
                groups.extend(field_list_groups(fields)?);
            }
        }
        TypeKind::Enum => {
            if let Some(values) = &ty.enum_values {
                groups.extend(enum_value_list_groups(values));
            }
        }
        TypeKind::InputObject => {
            if let Some(fields) = &ty.input_fields {
                groups.extend(input_value_list_groups(fields)?);
            }
        }
        TypeKind::Scalar | TypeKind::Union | TypeKind::List | TypeKind::NonNull => {}
    }

    Ok(groups)
}

fn implements_tokens(interfaces: &[TypeRefJson]) -> Result<Tokens, String> {
    let mut out = vec![(TokenKind::Implements, "implements".to_string())];
    for (i, iface) in interfaces.iter().enumerate() {
        if i > 0 {
            out.push((TokenKind::And, "&".to_string()));
        }
        let name = iface.name.clone().ok_or("interface reference missing a name")?;
        out.push((TokenKind::Ident, name));
    }
    Ok(out)
}

fn union_member_tokens(members: &[TypeRefJson]) -> Result<Tokens, String> {
    let mut out = Vec::new();
    for (i, member) in members.iter().enumerate() {
        if i > 0 {
            out.push((TokenKind::Or, "|".to_string()));
        }
        let name = member.name.clone().ok_or("union member missing a name")?;
        out.push((TokenKind::Ident, name));
    }
    Ok(out)
}

/// `{`, one group per field, `}` — each field is a group of its own so a
/// directive attached to it would share a line with the rest of the field.
fn field_list_groups(fields: &[FieldEntry]) -> Result<Vec<Tokens>, String> {
    let mut groups = vec![vec![(TokenKind::LBrace, "{".to_string())]];
    for field in fields {
        groups.push(field_entry_tokens(field)?);
    }
    groups.push(vec![(TokenKind::RBrace, "}".to_string())]);
    Ok(groups)
}

fn field_entry_tokens(field: &FieldEntry) -> Result<Tokens, String> {
    let mut heap = BinaryHeap::new();
    let mut seq = 0u32;

    if let Some(desc) = &field.description {
        push_all(&mut heap, &mut seq, 0, description_tokens(desc));
    }
    push_all(&mut heap, &mut seq, 1, vec![(TokenKind::Ident, field.name.clone())]);
    if !field.args.is_empty() {
        push_all(&mut heap, &mut seq, 2, input_value_paren_list_tokens(&field.args)?);
    }
    let mut type_tokens = vec![(TokenKind::Colon, ":".to_string())];
    type_tokens.extend(type_ref_tokens(&field.type_)?);
    push_all(&mut heap, &mut seq, 3, type_tokens);
    // TODO: priority 4 is the deprecation directive (`field.is_deprecated`/
    // `field.deprecation_reason`); reconstructing `@deprecated(reason: …)`
    // from those two booleans/strings is not implemented yet.

    Ok(drain(heap))
}

fn input_value_paren_list_tokens(values: &[InputValueEntry]) -> Result<Tokens, String> {
    let mut out = vec![(TokenKind::LParen, "(".to_string())];
    for value in values {
        out.extend(input_value_tokens(value)?);
    }
    out.push((TokenKind::RParen, ")".to_string()));
    Ok(out)
}

/// `{`, one group per input field, `}`.
fn input_value_list_groups(values: &[InputValueEntry]) -> Result<Vec<Tokens>, String> {
    let mut groups = vec![vec![(TokenKind::LBrace, "{".to_string())]];
    for value in values {
        groups.push(input_value_tokens(value)?);
    }
    groups.push(vec![(TokenKind::RBrace, "}".to_string())]);
    Ok(groups)
}

fn input_value_tokens(v: &InputValueEntry) -> Result<Tokens, String> {
    let mut out = Vec::new();
    if let Some(desc) = &v.description {
        out.extend(description_tokens(desc));
    }
    out.push((TokenKind::Ident, v.name.clone()));
    out.push((TokenKind::Colon, ":".to_string()));
    out.extend(type_ref_tokens(&v.type_)?);
    if let Some(default) = &v.default_value {
        out.push((TokenKind::Assign, "=".to_string()));
        let value_tokens = value::tokenize_value(default).map_err(|e| e.0)?;
        out.extend(value_tokens);
    }
    Ok(out)
}

/// `{`, one group per enum value, `}`.
fn enum_value_list_groups(values: &[EnumValueEntry]) -> Vec<Tokens> {
    let mut groups = vec![vec![(TokenKind::LBrace, "{".to_string())]];
    for value in values {
        let mut out = Vec::new();
        if let Some(desc) = &value.description {
            out.extend(description_tokens(desc));
        }
        out.push((TokenKind::Ident, value.name.clone()));
        // TODO: same deprecation-directive gap as field_entry_tokens above.
        let _ = value.is_deprecated;
        let _ = &value.deprecation_reason;
        groups.push(out);
    }
    groups.push(vec![(TokenKind::RBrace, "}".to_string())]);
    groups
}

fn type_ref_tokens(t: &TypeRefJson) -> Result<Tokens, String> {
    match t.kind {
        TypeKind::NonNull => {
            let inner = t.of_type.as_deref().ok_or("NON_NULL type reference missing ofType")?;
            let mut out = type_ref_tokens(inner)?;
            out.push((TokenKind::Not, "!".to_string()));
            Ok(out)
        }
        TypeKind::List => {
            let inner = t.of_type.as_deref().ok_or("LIST type reference missing ofType")?;
            let mut out = vec![(TokenKind::LBrack, "[".to_string())];
            out.extend(type_ref_tokens(inner)?);
            out.push((TokenKind::RBrack, "]".to_string()));
            Ok(out)
        }
        _ => {
            let name = t.name.clone().ok_or("named type reference missing a name")?;
            Ok(vec![(TokenKind::Ident, name)])
        }
    }
}

fn directive_entry_tokens(d: &DirectiveEntry) -> Result<Tokens, String> {
    let mut heap = BinaryHeap::new();
    let mut seq = 0u32;

    if let Some(desc) = &d.description {
        push_all(&mut heap, &mut seq, 0, description_tokens(desc));
    }
    push_all(
        &mut heap,
        &mut seq,
        1,
        vec![
            (TokenKind::Directive, "directive".to_string()),
            (TokenKind::At, "@".to_string()),
            (TokenKind::Ident, d.name.clone()),
        ],
    );
    if !d.args.is_empty() {
        push_all(&mut heap, &mut seq, 2, input_value_paren_list_tokens(&d.args)?);
    }
    if d.is_repeatable {
        push_all(&mut heap, &mut seq, 3, vec![(TokenKind::Repeatable, "repeatable".to_string())]);
    }
    let mut on_tokens = vec![(TokenKind::On, "on".to_string())];
    for (i, location) in d.locations.iter().enumerate() {
        if i > 0 {
            on_tokens.push((TokenKind::Or, "|".to_string()));
        }
        on_tokens.push((TokenKind::Ident, location.clone()));
    }
    push_all(&mut heap, &mut seq, 4, on_tokens);

    Ok(drain(heap))
}

fn description_tokens(desc: &str) -> Tokens {
    let text = if desc.contains('\n') {
        format!("\"\"\"{desc}\"\"\"")
    } else {
        quote(desc)
    };
    vec![(TokenKind::Description, text)]
}

fn quote(text: &str) -> String {
    format!("\"{}\"", text.replace('\\', "\\\\").replace('"', "\\\""))
}

fn keyword_text(kind: TokenKind) -> String {
    match kind {
        TokenKind::Schema => "schema",
        TokenKind::Scalar => "scalar",
        TokenKind::Type => "type",
        TokenKind::Interface => "interface",
        TokenKind::Union => "union",
        TokenKind::Enum => "enum",
        TokenKind::Input => "input",
        TokenKind::Directive => "directive",
        TokenKind::Extend => "extend",
        TokenKind::Implements => "implements",
        TokenKind::On => "on",
        TokenKind::Repeatable => "repeatable",
        other => unreachable!("{other:?} has no keyword spelling"),
    }
    .to_string()
}

/// A token still waiting to be placed in its priority bucket. `seq` breaks
/// ties within a bucket so pushes made in call order come back out in that
/// same order.
struct PendingItem {
    priority: u8,
    seq: u32,
    kind: TokenKind,
    text: String,
}

impl PartialEq for PendingItem {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl Eq for PendingItem {}

impl PartialOrd for PendingItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PendingItem {
    /// Reversed so the `BinaryHeap` (a max-heap) pops the lowest priority
    /// (and, within a priority, the lowest sequence number) first.
    fn cmp(&self, other: &Self) -> Ordering {
        other.priority.cmp(&self.priority).then_with(|| other.seq.cmp(&self.seq))
    }
}

fn push_all(heap: &mut BinaryHeap<PendingItem>, seq: &mut u32, priority: u8, items: Tokens) {
    for (kind, text) in items {
        heap.push(PendingItem { priority, seq: *seq, kind, text });
        *seq += 1;
    }
}

fn drain(mut heap: BinaryHeap<PendingItem>) -> Tokens {
    let mut out = Vec::with_capacity(heap.len());
    while let Some(item) = heap.pop() {
        out.push((item.kind, item.text));
    }
    out
}
