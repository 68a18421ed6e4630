use crate::ast::{DirectiveLit, EnumValue, Field, InputValue, Name};
use crate::ast::directive::DirectiveLocation;
use crate::span::Span;

/// The payload of a declaration, one of the eight SDL construct kinds.
///
/// `extend` wraps one of these (see
/// [`Declaration`](crate::ast::Declaration)); `directive` is not a valid
/// extension target, which is enforced by the parser rather than by this
/// type, since extension-validity depends on the `extend` keyword context
/// rather than on the spec's own shape.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeSpec<'src> {
    Schema(SchemaSpec<'src>),
    Scalar(ScalarSpec<'src>),
    Object(ObjectSpec<'src>),
    Interface(InterfaceSpec<'src>),
    Union(UnionSpec<'src>),
    Enum(EnumSpec<'src>),
    Input(InputSpec<'src>),
    Directive(DirectiveSpec<'src>),
}

impl<'src> TypeSpec<'src> {
    /// The type's own name, for every variant but `Schema` (which has none —
    /// a document has at most one schema declaration).
    pub fn name(&self) -> Option<&Name<'src>> {
        match self {
            TypeSpec::Schema(_) => None,
            TypeSpec::Scalar(s) => Some(&s.name),
            TypeSpec::Object(o) => Some(&o.name),
            TypeSpec::Interface(i) => Some(&i.name),
            TypeSpec::Union(u) => Some(&u.name),
            TypeSpec::Enum(e) => Some(&e.name),
            TypeSpec::Input(i) => Some(&i.name),
            TypeSpec::Directive(d) => Some(&d.name),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum RootOperation {
    Query,
    Mutation,
    Subscription,
}

impl RootOperation {
    pub fn lookup(spelling: &str) -> Option<Self> {
        match spelling {
            "query" => Some(RootOperation::Query),
            "mutation" => Some(RootOperation::Mutation),
            "subscription" => Some(RootOperation::Subscription),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RootOperationField<'src> {
    pub operation: RootOperation,
    pub type_name: Name<'src>,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct SchemaSpec<'src> {
    pub root_fields: Vec<RootOperationField<'src>>,
    pub directives: Vec<DirectiveLit<'src>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScalarSpec<'src> {
    pub name: Name<'src>,
    pub directives: Vec<DirectiveLit<'src>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectSpec<'src> {
    pub name: Name<'src>,
    pub implements: Vec<Name<'src>>,
    pub directives: Vec<DirectiveLit<'src>>,
    pub fields: Vec<Field<'src>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceSpec<'src> {
    pub name: Name<'src>,
    pub implements: Vec<Name<'src>>,
    pub directives: Vec<DirectiveLit<'src>>,
    pub fields: Vec<Field<'src>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UnionSpec<'src> {
    pub name: Name<'src>,
    pub directives: Vec<DirectiveLit<'src>>,
    pub members: Vec<Name<'src>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumSpec<'src> {
    pub name: Name<'src>,
    pub directives: Vec<DirectiveLit<'src>>,
    pub values: Vec<EnumValue<'src>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InputSpec<'src> {
    pub name: Name<'src>,
    pub directives: Vec<DirectiveLit<'src>>,
    pub input_values: Vec<InputValue<'src>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveSpec<'src> {
    pub name: Name<'src>,
    pub args: Vec<InputValue<'src>>,
    pub repeatable: bool,
    pub locations: Vec<DirectiveLocation>,
}
