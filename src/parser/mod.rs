//! The recursive-descent SDL parser: consumes an [`Item`] stream from a
//! [`lexer::Handle`] with one-token look-ahead and builds a [`ast::Document`].
//!
//! Errors abort the parse immediately (see [`ParseError`]); there is no
//! partial AST and no multi-error recovery. On abort the parser drains its
//! lexer handle exactly once so the producer thread is never left blocked.

mod body;
mod directive;
mod doc;
mod top_level;
mod value;

use crate::ast;
use crate::error::{ParseError, ParseErrorKind};
use crate::lexer;
use crate::registry::Registry;
use crate::span::Offset;
use crate::token::{Item, TokenKind};
use std::thread;

/// Parse options. `parse_comments` controls whether `#`-comments are
/// collected into doc groups alongside descriptions, or discarded as pure
/// trivia.
#[derive(Clone, Copy, Debug, Default)]
pub struct Mode {
    pub parse_comments: bool,
}

/// Parses `source` as a single SDL document named `name`, registering it
/// with `registry` first.
///
/// Runs the lexer on a dedicated producer thread (see [`crate::lexer`]) and
/// the parser on the calling thread, joined via [`std::thread::scope`].
pub fn parse_document<'src>(
    registry: &'src Registry,
    name: &str,
    source: &'src str,
    mode: Mode,
) -> Result<ast::Document<'src>, ParseError> {
    let doc = registry
        .add_document(name, None, source.len() as u32)
        .map_err(|e| ParseError::new(name, 0, ParseErrorKind::Registry(e)))?;
    thread::scope(|scope| {
        let handle = lexer::spawn(scope, registry, doc, source);
        let mut parser = Parser::new(handle, registry, name.to_string(), mode);
        let result = parser.parse();
        if result.is_err() {
            parser.handle.drain();
        }
        result
    })
}

/// Parses a pre-built [`Item`] stream instead of lexing source text.
///
/// Used by [`crate::introspection`] to feed its synthesized token sequence
/// through the same parser that consumes lexed SDL — `items` is already
/// positioned against `registry`, so this differs from [`parse_document`]
/// only in swapping [`lexer::spawn`] for [`lexer::spawn_items`].
pub fn parse_items<'src>(
    registry: &'src Registry,
    name: &str,
    items: Vec<Item<'src>>,
    mode: Mode,
) -> Result<ast::Document<'src>, ParseError> {
    thread::scope(|scope| {
        let handle = lexer::spawn_items(scope, items);
        let mut parser = Parser::new(handle, registry, name.to_string(), mode);
        let result = parser.parse();
        if result.is_err() {
            parser.handle.drain();
        }
        result
    })
}

/// Recursive-descent parser state: the lexer handle, one buffered item, and
/// everything needed to resolve positions and build error messages.
pub(crate) struct Parser<'src> {
    handle: lexer::Handle<'src>,
    registry: &'src Registry,
    name: String,
    mode: Mode,
    pk: Option<Item<'src>>,
    last_end: Offset,
}

impl<'src> Parser<'src> {
    fn new(handle: lexer::Handle<'src>, registry: &'src Registry, name: String, mode: Mode) -> Self {
        Self {
            handle,
            registry,
            name,
            mode,
            pk: None,
            last_end: 0,
        }
    }

    fn pull(&mut self) -> Item<'src> {
        self.handle
            .next_item()
            .expect("lexer producer closed without a terminal item")
    }

    /// Consumes and returns the next item, converting a lexer `ERR` item
    /// into an abort immediately.
    fn next(&mut self) -> Result<Item<'src>, ParseError> {
        let item = match self.pk.take() {
            Some(item) => item,
            None => self.pull(),
        };
        if item.kind == TokenKind::Err {
            return Err(self.error(item.line, ParseErrorKind::LexerError));
        }
        self.last_end = item.position + item.value.len() as u32;
        Ok(item)
    }

    /// Returns the next item without consuming it.
    fn peek(&mut self) -> Result<&Item<'src>, ParseError> {
        if self.pk.is_none() {
            let item = self.pull();
            self.pk = Some(item);
        }
        let item = self.pk.as_ref().expect("just populated");
        if item.kind == TokenKind::Err {
            let line = item.line;
            return Err(self.error(line, ParseErrorKind::LexerError));
        }
        Ok(item)
    }

    fn peek_kind(&mut self) -> Result<TokenKind, ParseError> {
        Ok(self.peek()?.kind)
    }

    fn expect(&mut self, kind: TokenKind, ctx: &str) -> Result<Item<'src>, ParseError> {
        let item = self.next()?;
        if item.kind == kind {
            Ok(item)
        } else {
            Err(self.error(
                item.line,
                ParseErrorKind::UnexpectedToken {
                    expected: ctx.to_string(),
                    found: describe(&item),
                },
            ))
        }
    }

    fn expect_name(&mut self) -> Result<ast::Name<'src>, ParseError> {
        let item = self.next()?;
        if item.kind != TokenKind::Ident {
            return Err(self.error(item.line, ParseErrorKind::MissingName { found: describe(&item) }));
        }
        let span = crate::span::Span::new(item.position, item.position + item.value.len() as u32);
        Ok(ast::Name::new(item.value, span))
    }

    fn expect_colon(&mut self) -> Result<(), ParseError> {
        let item = self.next()?;
        if item.kind != TokenKind::Colon {
            return Err(self.error(item.line, ParseErrorKind::MissingColon { found: describe(&item) }));
        }
        Ok(())
    }

    fn line_of(&self, offset: Offset) -> u32 {
        self.registry.line(offset).unwrap_or(0)
    }

    fn error(&self, line: u32, kind: ParseErrorKind) -> ParseError {
        ParseError::new(self.name.clone(), line, kind)
    }
}

fn describe(item: &Item) -> String {
    if item.is_eof() {
        "<eof>".to_string()
    } else {
        item.value.as_ref().to_string()
    }
}

fn is_decl_keyword(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Schema
            | TokenKind::Scalar
            | TokenKind::Type
            | TokenKind::Interface
            | TokenKind::Union
            | TokenKind::Enum
            | TokenKind::Input
            | TokenKind::Directive
    )
}

#[cfg(test)]
mod tests;
