use crate::ast::{DirectiveLit, DocGroup, Name, TypeRef, Value};
use crate::span::Span;

/// An input-value definition: a field argument or an input-object field.
#[derive(Clone, Debug, PartialEq)]
pub struct InputValue<'src> {
    pub name: Name<'src>,
    pub type_ref: TypeRef<'src>,
    pub default: Option<Value<'src>>,
    pub directives: Vec<DirectiveLit<'src>>,
    pub docs: Option<DocGroup>,
    pub span: Span,
}
