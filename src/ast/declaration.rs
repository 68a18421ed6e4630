use crate::ast::{DocGroup, TypeSpec};
use crate::span::Span;
use crate::token::TokenKind;

/// Whether a declaration introduces a new construct or extends an existing
/// one (`extend type Foo { ... }`).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DeclTag {
    Normal,
    Extension,
}

/// A top-level (or extension) declaration: the `extend`/construct keyword,
/// its doc group, and the construct's payload.
#[derive(Clone, Debug, PartialEq)]
pub struct Declaration<'src> {
    pub tag: DeclTag,
    pub keyword: TokenKind,
    pub docs: Option<DocGroup>,
    pub spec: TypeSpec<'src>,
    pub span: Span,
}
