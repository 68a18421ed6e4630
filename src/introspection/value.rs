//! A small value tokenizer for `defaultValue` strings.
//!
//! `defaultValue` comes back from the introspected server as SDL-serialized
//! text (e.g. `"3"`, `"[1, 2]"`, `"{a: 1}"`), not as a fixed literal kind —
//! it always denotes a *value* position, so unlike the main lexer it never
//! needs to distinguish DESCRIPTION from STRING.

use crate::token::TokenKind;

pub struct ScanError(pub String);

/// Tokenizes `src` as a single GraphQL value, returning the flat token
/// sequence in source order (composite literals are not nested into a tree
/// here — [`super::scanner`] just splices the flat sequence into the
/// surrounding Item stream).
pub fn tokenize_value(src: &str) -> Result<Vec<(TokenKind, String)>, ScanError> {
    let mut tokens = Vec::new();
    let mut cursor = Cursor { src, pos: 0 };
    cursor.skip_ws();
    scan_value(&mut cursor, &mut tokens)?;
    cursor.skip_ws();
    if cursor.pos != src.len() {
        return Err(ScanError(format!("trailing input in default value: {src:?}")));
    }
    Ok(tokens)
}

struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_ws(&mut self) {
        while self.peek().is_some_and(|c| c.is_whitespace() || c == ',') {
            self.bump();
        }
    }
}

fn scan_value(cursor: &mut Cursor, out: &mut Vec<(TokenKind, String)>) -> Result<(), ScanError> {
    match cursor.peek() {
        Some('"') => scan_string(cursor, out),
        Some('[') => scan_list(cursor, out),
        Some('{') => scan_object(cursor, out),
        Some(c) if c == '-' || c.is_ascii_digit() => scan_number(cursor, out),
        Some(c) if is_ident_start(c) => scan_ident(cursor, out),
        other => Err(ScanError(format!("unexpected character in default value: {other:?}"))),
    }
}

fn scan_string(cursor: &mut Cursor, out: &mut Vec<(TokenKind, String)>) -> Result<(), ScanError> {
    let start = cursor.pos;
    cursor.bump();
    loop {
        match cursor.bump() {
            None => return Err(ScanError("unterminated string in default value".to_string())),
            Some('"') => break,
            Some('\\') => {
                if cursor.bump().is_none() {
                    return Err(ScanError("unterminated string in default value".to_string()));
                }
            }
            Some(_) => {}
        }
    }
    out.push((TokenKind::String, cursor.src[start..cursor.pos].to_string()));
    Ok(())
}

fn scan_number(cursor: &mut Cursor, out: &mut Vec<(TokenKind, String)>) -> Result<(), ScanError> {
    let start = cursor.pos;
    let mut is_float = false;
    if cursor.peek() == Some('-') {
        cursor.bump();
    }
    while cursor.peek().is_some_and(|c| c.is_ascii_digit()) {
        cursor.bump();
    }
    if cursor.peek() == Some('.') {
        is_float = true;
        cursor.bump();
        while cursor.peek().is_some_and(|c| c.is_ascii_digit()) {
            cursor.bump();
        }
    }
    if matches!(cursor.peek(), Some('e' | 'E')) {
        is_float = true;
        cursor.bump();
        if matches!(cursor.peek(), Some('+' | '-')) {
            cursor.bump();
        }
        while cursor.peek().is_some_and(|c| c.is_ascii_digit()) {
            cursor.bump();
        }
    }
    let kind = if is_float { TokenKind::Float } else { TokenKind::Int };
    out.push((kind, cursor.src[start..cursor.pos].to_string()));
    Ok(())
}

fn scan_ident(cursor: &mut Cursor, out: &mut Vec<(TokenKind, String)>) -> Result<(), ScanError> {
    let start = cursor.pos;
    while cursor.peek().is_some_and(is_ident_continue) {
        cursor.bump();
    }
    let text = &cursor.src[start..cursor.pos];
    let kind = match text {
        "true" | "false" => TokenKind::Bool,
        "null" => TokenKind::Null,
        _ => TokenKind::Ident,
    };
    out.push((kind, text.to_string()));
    Ok(())
}

fn scan_list(cursor: &mut Cursor, out: &mut Vec<(TokenKind, String)>) -> Result<(), ScanError> {
    out.push((TokenKind::LBrack, "[".to_string()));
    cursor.bump();
    cursor.skip_ws();
    while cursor.peek() != Some(']') {
        scan_value(cursor, out)?;
        cursor.skip_ws();
    }
    cursor.bump();
    out.push((TokenKind::RBrack, "]".to_string()));
    Ok(())
}

fn scan_object(cursor: &mut Cursor, out: &mut Vec<(TokenKind, String)>) -> Result<(), ScanError> {
    out.push((TokenKind::LBrace, "{".to_string()));
    cursor.bump();
    cursor.skip_ws();
    while cursor.peek() != Some('}') {
        scan_ident(cursor, out)?;
        cursor.skip_ws();
        if cursor.peek() != Some(':') {
            return Err(ScanError("expected ':' in default value object".to_string()));
        }
        cursor.bump();
        out.push((TokenKind::Colon, ":".to_string()));
        cursor.skip_ws();
        scan_value(cursor, out)?;
        cursor.skip_ws();
    }
    cursor.bump();
    out.push((TokenKind::RBrace, "}".to_string()));
    Ok(())
}

fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_ascii_alphabetic()
}

fn is_ident_continue(c: char) -> bool {
    c == '_' || c.is_ascii_alphanumeric()
}
