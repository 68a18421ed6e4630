use crate::ast::{DirectiveLit, DocGroup, InputValue, Name, TypeRef};
use crate::span::Span;

/// A field definition inside an object or interface type's field list.
#[derive(Clone, Debug, PartialEq)]
pub struct Field<'src> {
    pub name: Name<'src>,
    pub args: Vec<InputValue<'src>>,
    pub type_ref: TypeRef<'src>,
    pub directives: Vec<DirectiveLit<'src>>,
    pub docs: Option<DocGroup>,
    pub span: Span,
}

/// An enum value: a name plus optional directives/docs. Modeled separately
/// from [`Field`] rather than reusing it with empty args/type, since an enum
/// value has neither.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue<'src> {
    pub name: Name<'src>,
    pub directives: Vec<DirectiveLit<'src>>,
    pub docs: Option<DocGroup>,
    pub span: Span,
}
