use crate::error::LexErrorKind;
use crate::registry::{Document, Registry};
use crate::span::Offset;
use crate::token::{lookup, Item, TokenKind};
use memchr::memchr3;
use smallvec::SmallVec;
use std::borrow::Cow;

/// Whether an open `(` or `{` was entered as a value container (directive
/// arguments, or a default-value list/object literal) or as plain
/// definition structure (an arg-def list, or a type's field-list body).
/// Only the former counts toward [`Scanner::value_depth`].
#[derive(Clone, Copy, PartialEq)]
enum OpenKind {
    Value,
    Definition,
}

/// A pull-based byte/rune scanner over one document's source text.
///
/// `Scanner` has no notion of a channel or a producer thread; [`lexer::spawn`]
/// (crate::lexer::spawn) drives it from a dedicated thread and forwards each
/// [`Item`] over a bounded queue. Keeping the state machine itself
/// synchronous and allocation-light makes it trivial to unit test without
/// spinning up a thread.
///
/// # DESCRIPTION vs STRING
///
/// A string/block-string literal is `DESCRIPTION` unless it occurs inside a
/// value (a default value after `=`, or anywhere inside a directive's
/// applied-argument list, which may itself nest list/object literals).
/// Definition structure — type bodies, enum/input member lists, and
/// argument-*definition* lists — is not value territory even though it is
/// also delimited by `{`/`(`, so opening one of those does not count toward
/// [`Self::value_depth`]; only [`OpenKind::Value`] opens do.
pub struct Scanner<'src> {
    doc: Document,
    registry: &'src Registry,
    src: &'src str,
    start: usize,
    pos: usize,
    /// Nesting depth of value containers (directive-argument parens,
    /// default-value list/object literals). Zero means the next string
    /// literal is a `DESCRIPTION`.
    value_depth: i32,
    /// Uses SmallVec to avoid heap allocation for typical nesting depths.
    opens: SmallVec<[OpenKind; 8]>,
    /// True for exactly the one token immediately following `=`.
    after_equals: bool,
    /// True for exactly the one token immediately following `@<name>`,
    /// i.e. while deciding whether a following `(` opens directive
    /// arguments (value) rather than an arg-definition list (definition).
    pending_directive_args: bool,
    just_saw_at: bool,
    /// True for the single token right after the `directive` keyword,
    /// i.e. while deciding whether a following `@` introduces a directive
    /// *declaration's* own name rather than an application.
    after_directive_keyword: bool,
    /// True for the single token right after an `@` that itself followed
    /// `directive`: the following name is the directive's own name, so its
    /// `(...)` is an arg-def list, never a value context.
    at_is_decl_head: bool,
    finished: bool,
}

impl<'src> Scanner<'src> {
    pub fn new(doc: Document, registry: &'src Registry, src: &'src str) -> Self {
        let src = src.strip_prefix('\u{feff}').unwrap_or(src);
        Self {
            doc,
            registry,
            src,
            start: 0,
            pos: 0,
            value_depth: 0,
            opens: SmallVec::new(),
            after_equals: false,
            pending_directive_args: false,
            just_saw_at: false,
            after_directive_keyword: false,
            at_is_decl_head: false,
            finished: false,
        }
    }

    /// Produces the next item. Once an `EOF` or `ERR` item has been
    /// returned, every subsequent call returns the same terminal item again
    /// without advancing — callers stop after seeing one.
    pub fn next_item(&mut self) -> Item<'src> {
        if self.finished {
            return self.emit(TokenKind::Eof);
        }
        self.skip_trivia_before_token()
    }

    fn skip_trivia_before_token(&mut self) -> Item<'src> {
        loop {
            match self.peek() {
                None => return self.terminal(TokenKind::Eof, String::new()),
                Some(c) if c.is_whitespace() => {
                    self.bump();
                    self.ignore();
                }
                Some('#') => return self.scan_comment(),
                Some(_) => return self.scan_token(),
            }
        }
    }

    fn scan_token(&mut self) -> Item<'src> {
        // Captured and reset up front: it governs only the single token
        // that immediately follows `=`.
        let was_after_equals = self.after_equals;
        self.after_equals = false;
        let was_pending_directive_args = self.pending_directive_args;
        self.pending_directive_args = false;
        let just_saw_at = self.just_saw_at;
        self.just_saw_at = false;
        let was_after_directive_keyword = self.after_directive_keyword;
        self.after_directive_keyword = false;
        let at_is_decl_head = self.at_is_decl_head;
        self.at_is_decl_head = false;

        let c = self.peek().expect("checked by caller");
        match c {
            '"' => self.scan_string_or_description(was_after_equals),
            '&' => self.single(TokenKind::And),
            '|' => self.single(TokenKind::Or),
            '!' => self.single(TokenKind::Not),
            '@' => {
                let item = self.single(TokenKind::At);
                self.just_saw_at = true;
                self.at_is_decl_head = was_after_directive_keyword;
                item
            }
            '$' => self.single(TokenKind::Var),
            '=' => {
                let item = self.single(TokenKind::Assign);
                self.after_equals = true;
                item
            }
            '(' => {
                let value_open = was_pending_directive_args;
                self.open(TokenKind::LParen, value_open)
            }
            '[' => self.bracket(TokenKind::LBrack, 1),
            '{' => {
                let value_open = was_after_equals || self.value_depth > 0;
                self.open(TokenKind::LBrace, value_open)
            }
            ',' => self.single(TokenKind::Comma),
            ')' => self.close(TokenKind::RParen),
            ']' => self.bracket(TokenKind::RBrack, -1),
            '}' => self.close(TokenKind::RBrace),
            ':' => self.single(TokenKind::Colon),
            '.' => self.single(TokenKind::Period),
            '-' | '0'..='9' => self.scan_number(),
            c if is_ident_start(c) => self.scan_ident(just_saw_at, at_is_decl_head),
            c => self.terminal(TokenKind::Err, LexErrorKind::InvalidByte(c).to_string()),
        }
    }

    fn scan_comment(&mut self) -> Item<'src> {
        debug_assert_eq!(self.peek(), Some('#'));
        while let Some(c) = self.peek() {
            self.bump();
            if c == '\n' {
                break;
            }
        }
        self.emit(TokenKind::Comment)
    }

    fn scan_ident(&mut self, just_saw_at: bool, at_is_decl_head: bool) -> Item<'src> {
        while self.peek().is_some_and(is_ident_continue) {
            self.bump();
        }
        let text = &self.src[self.start..self.pos];
        let kind = lookup(text);
        // A name immediately after `@` is a directive name; the `(` that
        // may follow opens its argument list, a value context — unless
        // this `@name` is itself a `directive @name(...)` declaration
        // head, in which case the parens are an arg-def list.
        self.pending_directive_args = just_saw_at && !at_is_decl_head;
        self.after_directive_keyword = kind == TokenKind::Directive;
        self.emit(kind)
    }

    fn scan_number(&mut self) -> Item<'src> {
        let mut is_float = false;
        if self.peek() == Some('-') {
            self.bump();
        }
        if !self.peek().is_some_and(|c| c.is_ascii_digit()) {
            return self.terminal(TokenKind::Err, LexErrorKind::UnexpectedEof.to_string());
        }
        self.consume_digits();
        if self.peek() == Some('.') && self.peek_at(1).is_some_and(|c| c.is_ascii_digit()) {
            is_float = true;
            self.bump();
            self.consume_digits();
        }
        if matches!(self.peek(), Some('e' | 'E')) {
            let save = self.pos;
            self.bump();
            if matches!(self.peek(), Some('+' | '-')) {
                self.bump();
            }
            if self.peek().is_some_and(|c| c.is_ascii_digit()) {
                is_float = true;
                self.consume_digits();
            } else {
                self.pos = save;
            }
        }
        self.emit(if is_float { TokenKind::Float } else { TokenKind::Int })
    }

    fn consume_digits(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.bump();
        }
    }

    fn scan_string_or_description(&mut self, was_after_equals: bool) -> Item<'src> {
        let is_block = self.src[self.pos..].starts_with("\"\"\"");
        if is_block {
            self.pos += 3;
            loop {
                if self.src[self.pos..].starts_with("\\\"\"\"") {
                    self.pos += 4;
                    continue;
                }
                if self.src[self.pos..].starts_with("\"\"\"") {
                    self.pos += 3;
                    break;
                }
                match self.bump() {
                    Some(_) => {}
                    None => {
                        return self.terminal(
                            TokenKind::Err,
                            LexErrorKind::UnterminatedString.to_string(),
                        )
                    }
                }
            }
        } else {
            self.bump(); // opening quote
            loop {
                // Jump straight to the next quote, backslash, or newline
                // instead of walking one char at a time through ordinary
                // string content.
                let rest = self.src.as_bytes();
                match memchr3(b'"', b'\\', b'\n', &rest[self.pos..]) {
                    None => {
                        return self.terminal(
                            TokenKind::Err,
                            LexErrorKind::BadStringSyntax.to_string(),
                        )
                    }
                    Some(offset) => {
                        self.pos += offset;
                        match rest[self.pos] {
                            b'\n' => {
                                return self.terminal(
                                    TokenKind::Err,
                                    LexErrorKind::BadStringSyntax.to_string(),
                                )
                            }
                            b'"' => {
                                self.bump();
                                break;
                            }
                            b'\\' => {
                                self.bump();
                                if self.bump().is_none() {
                                    return self.terminal(
                                        TokenKind::Err,
                                        LexErrorKind::BadStringSyntax.to_string(),
                                    );
                                }
                            }
                            _ => unreachable!("memchr3 only matches these three bytes"),
                        }
                    }
                }
            }
        }
        let kind = if self.value_depth == 0 && !was_after_equals {
            TokenKind::Description
        } else {
            TokenKind::String
        };
        self.emit(kind)
    }

    fn single(&mut self, kind: TokenKind) -> Item<'src> {
        self.bump();
        self.emit(kind)
    }

    /// Opens a `(` or `{`. `value_open` tags whether this bracket is value
    /// territory (directive-application args, default-value object
    /// literal) as opposed to definition structure (arg-def list, type
    /// body) — only the former counts toward `value_depth`.
    fn open(&mut self, kind: TokenKind, value_open: bool) -> Item<'src> {
        self.bump();
        let open_kind = if value_open { OpenKind::Value } else { OpenKind::Definition };
        if value_open {
            self.value_depth += 1;
        }
        self.opens.push(open_kind);
        self.emit(kind)
    }

    /// Closes a `)` or `}`, undoing whatever its matching [`Self::open`]
    /// recorded. `[`/`]` never call this — see [`Self::bracket`].
    fn close(&mut self, kind: TokenKind) -> Item<'src> {
        self.bump();
        if self.opens.pop() == Some(OpenKind::Value) {
            self.value_depth -= 1;
        }
        self.emit(kind)
    }

    /// `[`/`]` always count toward `value_depth`: a list-sugar bracket in a
    /// type reference never contains a string literal, so treating it as
    /// value territory unconditionally is safe and avoids needing to track
    /// type-ref-vs-list-literal context separately.
    fn bracket(&mut self, kind: TokenKind, delta: i32) -> Item<'src> {
        self.bump();
        self.value_depth += delta;
        self.emit(kind)
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn peek_at(&self, ahead: usize) -> Option<char> {
        self.src[self.pos..].chars().nth(ahead)
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            let _ = self
                .registry
                .note_line(self.doc.id(), self.current_offset());
        }
        Some(c)
    }

    fn current_offset(&self) -> Offset {
        self.doc.base_offset + self.pos as u32
    }

    fn ignore(&mut self) {
        self.start = self.pos;
    }

    fn emit(&mut self, kind: TokenKind) -> Item<'src> {
        self.emit_with_value(kind, Cow::Borrowed(&self.src[self.start..self.pos]))
    }

    fn emit_with_value(&mut self, kind: TokenKind, value: Cow<'src, str>) -> Item<'src> {
        let position = self.doc.base_offset + self.start as u32;
        let line = self.registry.line(position).unwrap_or(1);
        self.start = self.pos;
        Item::new(position, line, kind, value)
    }

    fn terminal(&mut self, kind: TokenKind, detail: String) -> Item<'src> {
        self.finished = true;
        self.emit_with_value(kind, Cow::Owned(detail))
    }
}

fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_ascii_alphabetic()
}

fn is_ident_continue(c: char) -> bool {
    c == '_' || c.is_ascii_alphanumeric()
}

#[cfg(test)]
mod tests;
