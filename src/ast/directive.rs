use crate::ast::{Name, Value};
use crate::span::Span;

/// An applied directive (`@name(args...)`), as opposed to a directive
/// *declaration* (see [`crate::ast::DirectiveSpec`]).
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveLit<'src> {
    pub name: Name<'src>,
    pub args: Vec<Argument<'src>>,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Argument<'src> {
    pub name: Name<'src>,
    pub value: Value<'src>,
    pub span: Span,
}

/// The closed set of contexts a directive declaration may list in its `on`
/// clause.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum DirectiveLocation {
    Schema,
    Scalar,
    Object,
    FieldDefinition,
    EnumValue,
    InputFieldDefinition,
    InputObject,
    Union,
    Enum,
    Interface,
    ArgumentDefinition,
    Field,
    Query,
    Mutation,
    Subscription,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    VariableDefinition,
}

impl DirectiveLocation {
    /// Maps the all-caps spelling used in SDL source to its variant.
    pub fn lookup(spelling: &str) -> Option<Self> {
        use DirectiveLocation::*;
        Some(match spelling {
            "SCHEMA" => Schema,
            "SCALAR" => Scalar,
            "OBJECT" => Object,
            "FIELD_DEFINITION" => FieldDefinition,
            "ENUM_VALUE" => EnumValue,
            "INPUT_FIELD_DEFINITION" => InputFieldDefinition,
            "INPUT_OBJECT" => InputObject,
            "UNION" => Union,
            "ENUM" => Enum,
            "INTERFACE" => Interface,
            "ARGUMENT_DEFINITION" => ArgumentDefinition,
            "FIELD" => Field,
            "QUERY" => Query,
            "MUTATION" => Mutation,
            "SUBSCRIPTION" => Subscription,
            "FRAGMENT_DEFINITION" => FragmentDefinition,
            "FRAGMENT_SPREAD" => FragmentSpread,
            "INLINE_FRAGMENT" => InlineFragment,
            "VARIABLE_DEFINITION" => VariableDefinition,
            _ => return None,
        })
    }
}
