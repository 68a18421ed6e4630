use crate::span::Offset;
use crate::token::TokenKind;
use std::borrow::Cow;

/// A position-tagged token emitted by the lexer (or the introspection
/// scanner) and consumed exactly once by the parser.
///
/// `value` is the exact byte slice that produced the token: for keywords
/// this is the lowercase spelling, for strings it includes the surrounding
/// quotes, and for comments it includes the leading `#` and trailing
/// newline. `Cow` lets a source-backed lexer borrow straight from the input
/// while the introspection scanner, which has no contiguous source text to
/// borrow from, synthesizes owned values.
#[derive(Clone, Debug, PartialEq)]
pub struct Item<'src> {
    /// Absolute offset of the first byte this item covers, in the owning
    /// [`Registry`](crate::registry::Registry)'s address space.
    pub position: Offset,
    /// 1-based line number, as resolved by the registry at emission time.
    pub line: u32,
    pub kind: TokenKind,
    pub value: Cow<'src, str>,
}

impl<'src> Item<'src> {
    pub fn new(position: Offset, line: u32, kind: TokenKind, value: impl Into<Cow<'src, str>>) -> Self {
        Self {
            position,
            line,
            kind,
            value: value.into(),
        }
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    pub fn is_err(&self) -> bool {
        self.kind == TokenKind::Err
    }
}
