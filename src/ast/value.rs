use crate::ast::Name;
use crate::span::Span;
use crate::token::TokenKind;
use std::borrow::Cow;

/// A GraphQL value literal: either a basic scalar literal or a composite
/// (list or object) literal. Composite literals may nest arbitrarily.
#[derive(Clone, Debug, PartialEq)]
pub enum Value<'src> {
    Basic(BasicLit<'src>),
    List(CompositeList<'src>),
    Object(CompositeObject<'src>),
}

impl<'src> Value<'src> {
    pub fn span(&self) -> Span {
        match self {
            Value::Basic(b) => b.span,
            Value::List(l) => l.span,
            Value::Object(o) => o.span,
        }
    }
}

/// `kind` is the lexed token kind of the literal (`STRING`, `INT`, `FLOAT`,
/// `BOOL`, `NULL`, or `IDENT` for an enum-value literal); `text` is the raw
/// token text.
#[derive(Clone, Debug, PartialEq)]
pub struct BasicLit<'src> {
    pub kind: TokenKind,
    pub text: Cow<'src, str>,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CompositeList<'src> {
    pub elements: Vec<Value<'src>>,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CompositeObject<'src> {
    pub fields: Vec<ObjectField<'src>>,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectField<'src> {
    pub name: Name<'src>,
    pub value: Value<'src>,
    pub span: Span,
}
