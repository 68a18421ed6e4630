use super::Parser;
use crate::ast;
use crate::error::ParseError;
use crate::token::TokenKind;

impl<'src> Parser<'src> {
    /// Collects a run of consecutive documentation tokens (descriptions,
    /// plus comments when [`super::Mode::parse_comments`] is set). A gap of
    /// more than one blank line between two docs starts a fresh group;
    /// only the group nearest to what follows is returned, since an earlier
    /// group can never attach to anything this call sees.
    pub(super) fn collect_docs(&mut self) -> Result<Option<ast::DocGroup>, ParseError> {
        let mut group: Option<ast::DocGroup> = None;
        loop {
            let is_doc = match self.peek_kind()? {
                TokenKind::Description => true,
                TokenKind::Comment => self.mode.parse_comments,
                _ => false,
            };
            if !is_doc {
                return Ok(group);
            }
            let item = self.next()?;
            let doc = ast::Doc {
                raw_text: item.value.into_owned(),
                start: item.position,
                is_comment: item.kind == TokenKind::Comment,
            };
            group = Some(match group {
                Some(mut g) if self.same_group(g.docs.last().expect("non-empty"), &doc) => {
                    g.docs.push(doc);
                    g
                }
                _ => ast::DocGroup { docs: vec![doc] },
            });
        }
    }

    /// Like [`Self::collect_docs`], but drops the group rather than
    /// returning it if it does not attach (within one blank line) to
    /// whatever follows. Used everywhere except the document's own leading
    /// docs, which have a free-standing fallback instead of being dropped.
    pub(super) fn collect_attached_docs(&mut self) -> Result<Option<ast::DocGroup>, ParseError> {
        match self.collect_docs()? {
            Some(group) => Ok(if self.docs_attach(&group)? { Some(group) } else { None }),
            None => Ok(None),
        }
    }

    /// Whether `group`'s last doc is close enough to whatever token follows
    /// (at most one blank line) to attach to it.
    pub(super) fn docs_attach(&mut self, group: &ast::DocGroup) -> Result<bool, ParseError> {
        let last = group.docs.last().expect("non-empty group");
        let next_line = self.peek()?.line;
        Ok(self.doc_end_line(last) + 1 >= next_line)
    }

    fn doc_end_line(&self, doc: &ast::Doc) -> u32 {
        let end = doc.start + doc.raw_text.len() as u32;
        self.registry.line(end.saturating_sub(1)).unwrap_or(u32::MAX)
    }

    fn same_group(&self, prev: &ast::Doc, next: &ast::Doc) -> bool {
        let next_line = self.registry.line(next.start).unwrap_or(0);
        self.doc_end_line(prev) + 1 >= next_line
    }
}
