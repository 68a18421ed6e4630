use crate::span::{Offset, Span};

/// A single documentation entry: either a `# comment` or a `"…"`/`"""…"""`
/// description, kept as raw source text (quotes/leading `#` included, as
/// emitted by the lexer).
#[derive(Clone, Debug, PartialEq)]
pub struct Doc {
    pub raw_text: String,
    pub start: Offset,
    pub is_comment: bool,
}

/// An ordered run of [`Doc`] entries attached to a declaration, field, input
/// value, or enum value, or left free-standing on the document.
///
/// Entries in a group are separated by at most one blank line; the parser
/// ends a group and starts a new one once it sees a bigger gap.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DocGroup {
    pub docs: Vec<Doc>,
}

impl DocGroup {
    pub fn span(&self) -> Option<Span> {
        let first = self.docs.first()?;
        let last = self.docs.last()?;
        Some(Span::new(
            first.start,
            last.start + last.raw_text.len() as u32,
        ))
    }
}
