use super::Parser;
use crate::ast;
use crate::error::{ParseError, ParseErrorKind};
use crate::span::Span;
use crate::token::TokenKind;

impl<'src> Parser<'src> {
    /// `Type := Name | Type '!' | '[' Type ']'`, with the `NonNull`-of-
    /// `NonNull` exclusion enforced by [`ast::Nullable`] rather than by a
    /// check here.
    pub(super) fn parse_type_ref(&mut self) -> Result<ast::TypeRef<'src>, ParseError> {
        let nullable = self.parse_nullable_type_ref()?;
        if self.peek_kind()? == TokenKind::Not {
            let bang = self.next()?;
            let start = nullable.span().start;
            let span = Span::new(start, bang.position + bang.value.len() as u32);
            Ok(ast::TypeRef::NonNull(Box::new(nullable), span))
        } else {
            Ok(nullable.into_type_ref())
        }
    }

    fn parse_nullable_type_ref(&mut self) -> Result<ast::Nullable<'src>, ParseError> {
        if self.peek_kind()? == TokenKind::LBrack {
            let open = self.next()?;
            let inner = self.parse_type_ref()?;
            let close = self.expect(TokenKind::RBrack, "']'")?;
            let span = Span::new(open.position, close.position + close.value.len() as u32);
            Ok(ast::Nullable::List(Box::new(inner), span))
        } else {
            Ok(ast::Nullable::Named(self.expect_name()?))
        }
    }

    /// `Value := INT | FLOAT | STRING | BOOL | NULL | IDENT | '[' Value* ']'
    /// | '{' (Name ':' Value)* '}'`.
    pub(super) fn parse_value(&mut self) -> Result<ast::Value<'src>, ParseError> {
        match self.peek_kind()? {
            TokenKind::LBrack => self.parse_list_value(),
            TokenKind::LBrace => self.parse_object_value(),
            TokenKind::Int
            | TokenKind::Float
            | TokenKind::String
            | TokenKind::Bool
            | TokenKind::Null
            | TokenKind::Ident => {
                let item = self.next()?;
                let span = Span::new(item.position, item.position + item.value.len() as u32);
                Ok(ast::Value::Basic(ast::BasicLit {
                    kind: item.kind,
                    text: item.value,
                    span,
                }))
            }
            _ => {
                let item = self.next()?;
                Err(self.error(
                    item.line,
                    ParseErrorKind::UnexpectedToken {
                        expected: "a value".to_string(),
                        found: super::describe(&item),
                    },
                ))
            }
        }
    }

    fn parse_list_value(&mut self) -> Result<ast::Value<'src>, ParseError> {
        let open = self.next()?;
        let mut elements = Vec::new();
        while self.peek_kind()? != TokenKind::RBrack {
            elements.push(self.parse_value()?);
            if self.peek_kind()? == TokenKind::Comma {
                self.next()?;
            }
        }
        let close = self.expect(TokenKind::RBrack, "']'")?;
        if mixed_basic_kinds(&elements) {
            return Err(self.error(open.line, ParseErrorKind::MixedListElementTypes));
        }
        let span = Span::new(open.position, close.position + close.value.len() as u32);
        Ok(ast::Value::List(ast::CompositeList { elements, span }))
    }

    fn parse_object_value(&mut self) -> Result<ast::Value<'src>, ParseError> {
        let open = self.next()?;
        let mut fields = Vec::new();
        while self.peek_kind()? != TokenKind::RBrace {
            let name = self.expect_name()?;
            self.expect_colon()?;
            let value = self.parse_value()?;
            let span = Span::new(name.span.start, value.span().end);
            fields.push(ast::ObjectField { name, value, span });
            if self.peek_kind()? == TokenKind::Comma {
                self.next()?;
            }
        }
        let close = self.expect(TokenKind::RBrace, "'}'")?;
        let span = Span::new(open.position, close.position + close.value.len() as u32);
        Ok(ast::Value::Object(ast::CompositeObject { fields, span }))
    }
}

/// True only when every element is a basic literal and they don't all share
/// a token kind; a list holding any nested list/object element is exempt.
fn mixed_basic_kinds(elements: &[ast::Value]) -> bool {
    let kinds: Option<Vec<TokenKind>> = elements
        .iter()
        .map(|v| match v {
            ast::Value::Basic(b) => Some(b.kind),
            _ => None,
        })
        .collect();
    match kinds {
        Some(kinds) => match kinds.first() {
            Some(&first) => kinds.iter().any(|&k| k != first),
            None => false,
        },
        None => false,
    }
}
