use crate::span::Span;
use std::borrow::Cow;

/// A GraphQL name (identifier): a type name, field name, argument name,
/// directive name, or enum value.
///
/// `text` borrows from the source document when the AST was built by the
/// SDL parser (zero-copy), or owns its string when built by the
/// introspection adapter, which has no contiguous source text to borrow
/// from.
#[derive(Clone, Debug, PartialEq)]
pub struct Name<'src> {
    pub text: Cow<'src, str>,
    pub span: Span,
}

impl<'src> Name<'src> {
    pub fn new(text: impl Into<Cow<'src, str>>, span: Span) -> Self {
        Self {
            text: text.into(),
            span,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}
