//! `serde` deserialization targets mirroring a GraphQL `__schema`
//! introspection response. `deny_unknown_fields` enforces the "unknown keys
//! are an error" rule; field/struct order here is irrelevant to parsing
//! (serde is key-order-agnostic) — the fixed SDL order is reconstructed by
//! [`super::scanner`], not by this module.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IntrospectionDocument {
    #[serde(rename = "__schema")]
    pub schema: SchemaBody,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SchemaBody {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub query_type: Option<NamedRef>,
    #[serde(default)]
    pub mutation_type: Option<NamedRef>,
    #[serde(default)]
    pub subscription_type: Option<NamedRef>,
    #[serde(default)]
    pub directives: Vec<DirectiveEntry>,
    #[serde(default)]
    pub types: Vec<TypeEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NamedRef {
    pub name: String,
}

#[derive(Debug, Clone, Copy, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeKind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
    List,
    NonNull,
}

/// A type reference as it appears nested inside `ofType` chains, or as the
/// `type` of a field/input-value/argument.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeRefJson {
    pub kind: TypeKind,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub of_type: Option<Box<TypeRefJson>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TypeEntry {
    pub kind: TypeKind,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub fields: Option<Vec<FieldEntry>>,
    #[serde(default)]
    pub interfaces: Option<Vec<TypeRefJson>>,
    #[serde(default)]
    pub possible_types: Option<Vec<TypeRefJson>>,
    #[serde(default)]
    pub enum_values: Option<Vec<EnumValueEntry>>,
    #[serde(default)]
    pub input_fields: Option<Vec<InputValueEntry>>,
    #[serde(default)]
    pub of_type: Option<Box<TypeRefJson>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FieldEntry {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub args: Vec<InputValueEntry>,
    #[serde(rename = "type")]
    pub type_: TypeRefJson,
    #[serde(default)]
    pub is_deprecated: bool,
    #[serde(default)]
    pub deprecation_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct InputValueEntry {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub type_: TypeRefJson,
    #[serde(default)]
    pub default_value: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EnumValueEntry {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_deprecated: bool,
    #[serde(default)]
    pub deprecation_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DirectiveEntry {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub locations: Vec<String>,
    #[serde(default)]
    pub args: Vec<InputValueEntry>,
    #[serde(default)]
    pub is_repeatable: bool,
}
