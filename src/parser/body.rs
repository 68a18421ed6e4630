use super::Parser;
use crate::ast;
use crate::error::{ParseError, ParseErrorKind};
use crate::span::Span;
use crate::token::TokenKind;

impl<'src> Parser<'src> {
    pub(super) fn parse_schema_body(&mut self, keyword_line: u32) -> Result<ast::SchemaSpec<'src>, ParseError> {
        let directives = self.parse_same_line_directives(keyword_line)?;
        let mut root_fields = Vec::new();
        self.expect(TokenKind::LBrace, "'{'")?;
        loop {
            self.collect_docs()?;
            if self.peek_kind()? == TokenKind::RBrace {
                break;
            }
            let name_item = self.expect(TokenKind::Ident, "a root operation name")?;
            let operation = ast::RootOperation::lookup(&name_item.value).ok_or_else(|| {
                self.error(
                    name_item.line,
                    ParseErrorKind::InvalidRootOperationName(name_item.value.to_string()),
                )
            })?;
            self.expect_colon()?;
            let type_name = self.expect_name()?;
            let span = Span::new(name_item.position, type_name.span.end);
            root_fields.push(ast::RootOperationField { operation, type_name, span });
            if self.peek_kind()? == TokenKind::Comma {
                self.next()?;
            }
        }
        self.expect(TokenKind::RBrace, "'}'")?;
        Ok(ast::SchemaSpec { root_fields, directives })
    }

    pub(super) fn parse_scalar_body(&mut self) -> Result<ast::ScalarSpec<'src>, ParseError> {
        let name = self.expect_name()?;
        let head_line = self.line_of(name.span.start);
        let directives = self.parse_same_line_directives(head_line)?;
        Ok(ast::ScalarSpec { name, directives })
    }

    pub(super) fn parse_object_body(&mut self) -> Result<ast::ObjectSpec<'src>, ParseError> {
        let name = self.expect_name()?;
        let head_line = self.line_of(name.span.start);
        let implements = self.parse_implements()?;
        let directives = self.parse_same_line_directives(head_line)?;
        let fields = if self.peek_kind()? == TokenKind::LBrace {
            self.parse_fields()?
        } else {
            Vec::new()
        };
        Ok(ast::ObjectSpec { name, implements, directives, fields })
    }

    pub(super) fn parse_interface_body(&mut self) -> Result<ast::InterfaceSpec<'src>, ParseError> {
        let name = self.expect_name()?;
        let head_line = self.line_of(name.span.start);
        let implements = self.parse_implements()?;
        let directives = self.parse_same_line_directives(head_line)?;
        let fields = if self.peek_kind()? == TokenKind::LBrace {
            self.parse_fields()?
        } else {
            Vec::new()
        };
        Ok(ast::InterfaceSpec { name, implements, directives, fields })
    }

    pub(super) fn parse_union_body(&mut self) -> Result<ast::UnionSpec<'src>, ParseError> {
        let name = self.expect_name()?;
        let head_line = self.line_of(name.span.start);
        let directives = self.parse_same_line_directives(head_line)?;
        let mut members = Vec::new();
        if self.peek_kind()? == TokenKind::Assign {
            self.next()?;
            if self.peek_kind()? == TokenKind::Or {
                self.next()?;
            }
            loop {
                let item = self.next()?;
                if item.kind != TokenKind::Ident {
                    return Err(self.error(item.line, ParseErrorKind::NonIdentUnionMember));
                }
                let span = Span::new(item.position, item.position + item.value.len() as u32);
                members.push(ast::Name::new(item.value, span));
                if self.peek_kind()? == TokenKind::Or {
                    self.next()?;
                    continue;
                }
                break;
            }
        }
        Ok(ast::UnionSpec { name, directives, members })
    }

    pub(super) fn parse_enum_body(&mut self) -> Result<ast::EnumSpec<'src>, ParseError> {
        let name = self.expect_name()?;
        let head_line = self.line_of(name.span.start);
        let directives = self.parse_same_line_directives(head_line)?;
        let mut values = Vec::new();
        if self.peek_kind()? == TokenKind::LBrace {
            self.next()?;
            loop {
                let docs = self.collect_attached_docs()?;
                if self.peek_kind()? == TokenKind::RBrace {
                    break;
                }
                let value_name = self.expect_name()?;
                let value_head_line = self.line_of(value_name.span.start);
                let value_directives = self.parse_same_line_directives(value_head_line)?;
                let span = Span::new(value_name.span.start, self.last_end);
                values.push(ast::EnumValue {
                    name: value_name,
                    directives: value_directives,
                    docs,
                    span,
                });
                if self.peek_kind()? == TokenKind::Comma {
                    self.next()?;
                }
            }
            self.expect(TokenKind::RBrace, "'}'")?;
        }
        Ok(ast::EnumSpec { name, directives, values })
    }

    pub(super) fn parse_input_body(&mut self) -> Result<ast::InputSpec<'src>, ParseError> {
        let name = self.expect_name()?;
        let head_line = self.line_of(name.span.start);
        let directives = self.parse_same_line_directives(head_line)?;
        let input_values = if self.peek_kind()? == TokenKind::LBrace {
            self.parse_input_value_list(TokenKind::LBrace, TokenKind::RBrace, "'{'", "'}'")?
        } else {
            Vec::new()
        };
        Ok(ast::InputSpec { name, directives, input_values })
    }

    pub(super) fn parse_directive_decl_body(&mut self) -> Result<ast::DirectiveSpec<'src>, ParseError> {
        self.expect(TokenKind::At, "'@'")?;
        let name = self.expect_name()?;
        let args = if self.peek_kind()? == TokenKind::LParen {
            self.parse_input_value_list(TokenKind::LParen, TokenKind::RParen, "'('", "')'")?
        } else {
            Vec::new()
        };
        let repeatable = if self.peek_kind()? == TokenKind::Repeatable {
            self.next()?;
            true
        } else {
            false
        };
        self.expect(TokenKind::On, "'on'")?;
        if self.peek_kind()? == TokenKind::Or {
            self.next()?;
        }
        let mut locations = Vec::new();
        loop {
            let item = self.expect(TokenKind::Ident, "a directive location")?;
            let location = ast::DirectiveLocation::lookup(&item.value).ok_or_else(|| {
                self.error(item.line, ParseErrorKind::InvalidDirectiveLocation(item.value.to_string()))
            })?;
            locations.push(location);
            if self.peek_kind()? == TokenKind::Or {
                self.next()?;
                continue;
            }
            break;
        }
        Ok(ast::DirectiveSpec { name, args, repeatable, locations })
    }

    fn parse_implements(&mut self) -> Result<Vec<ast::Name<'src>>, ParseError> {
        let mut names = Vec::new();
        if self.peek_kind()? != TokenKind::Implements {
            return Ok(names);
        }
        self.next()?;
        if self.peek_kind()? == TokenKind::And {
            self.next()?;
        }
        loop {
            names.push(self.expect_name()?);
            if self.peek_kind()? == TokenKind::And {
                self.next()?;
                continue;
            }
            break;
        }
        Ok(names)
    }

    fn parse_fields(&mut self) -> Result<Vec<ast::Field<'src>>, ParseError> {
        self.expect(TokenKind::LBrace, "'{'")?;
        let mut fields = Vec::new();
        loop {
            let docs = self.collect_attached_docs()?;
            if self.peek_kind()? == TokenKind::RBrace {
                break;
            }
            let name = self.expect_name()?;
            let args = if self.peek_kind()? == TokenKind::LParen {
                self.parse_input_value_list(TokenKind::LParen, TokenKind::RParen, "'('", "')'")?
            } else {
                Vec::new()
            };
            self.expect_colon()?;
            let type_ref = self.parse_type_ref()?;
            let head_line = self.line_of(name.span.start);
            let directives = self.parse_same_line_directives(head_line)?;
            let span = Span::new(name.span.start, self.last_end);
            fields.push(ast::Field { name, args, type_ref, directives, docs, span });
            if self.peek_kind()? == TokenKind::Comma {
                self.next()?;
            }
        }
        self.expect(TokenKind::RBrace, "'}'")?;
        Ok(fields)
    }

    /// Shared shape for both argument-definition lists (`(name: Type = ...)`)
    /// and input-object field lists (`{name: Type = ...}`) — the grammar is
    /// identical, only the delimiters differ.
    pub(super) fn parse_input_value_list(
        &mut self,
        open_kind: TokenKind,
        close_kind: TokenKind,
        open_ctx: &str,
        close_ctx: &str,
    ) -> Result<Vec<ast::InputValue<'src>>, ParseError> {
        self.expect(open_kind, open_ctx)?;
        let mut values = Vec::new();
        loop {
            let docs = self.collect_attached_docs()?;
            if self.peek_kind()? == close_kind {
                break;
            }
            let name = self.expect_name()?;
            self.expect_colon()?;
            let type_ref = self.parse_type_ref()?;
            let default = if self.peek_kind()? == TokenKind::Assign {
                self.next()?;
                Some(self.parse_value()?)
            } else {
                None
            };
            let head_line = self.line_of(name.span.start);
            let directives = self.parse_same_line_directives(head_line)?;
            let span = Span::new(name.span.start, self.last_end);
            values.push(ast::InputValue { name, type_ref, default, directives, docs, span });
            if self.peek_kind()? == TokenKind::Comma {
                self.next()?;
            }
        }
        self.expect(close_kind, close_ctx)?;
        Ok(values)
    }
}
