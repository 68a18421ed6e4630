use super::{is_decl_keyword, Parser};
use crate::ast::{self, TypeSpec};
use crate::error::{ParseError, ParseErrorKind};
use crate::span::Span;
use crate::token::TokenKind;

impl<'src> Parser<'src> {
    pub(super) fn parse(&mut self) -> Result<ast::Document<'src>, ParseError> {
        let mut document = ast::Document::new(self.name.clone());
        loop {
            let group = self.collect_docs()?;
            if self.peek_kind()? == TokenKind::Eof {
                if let Some(g) = group {
                    if document.docs.is_none() {
                        document.docs = Some(g);
                    }
                }
                break;
            }
            let attaches = match &group {
                Some(g) => self.docs_attach(g)?,
                None => false,
            };
            let docs = if attaches {
                group
            } else {
                if let Some(g) = group {
                    if document.docs.is_none() {
                        document.docs = Some(g);
                    }
                }
                None
            };

            match self.peek_kind()? {
                TokenKind::At => {
                    let directive = self.parse_directive_lit()?;
                    document.directives.push(directive);
                }
                TokenKind::Extend => {
                    let decl = self.parse_extension(docs)?;
                    document.push_declaration(decl);
                }
                kind if is_decl_keyword(kind) => {
                    let decl = self.parse_type_decl(docs)?;
                    document.push_declaration(decl);
                }
                _ => {
                    let item = self.next()?;
                    return Err(self.error(
                        item.line,
                        ParseErrorKind::UnexpectedToken {
                            expected: "a declaration".to_string(),
                            found: super::describe(&item),
                        },
                    ));
                }
            }
        }
        Ok(document)
    }

    fn parse_type_decl(&mut self, docs: Option<ast::DocGroup>) -> Result<ast::Declaration<'src>, ParseError> {
        let keyword_item = self.next()?;
        let keyword = keyword_item.kind;
        let spec = match keyword {
            TokenKind::Schema => TypeSpec::Schema(self.parse_schema_body(keyword_item.line)?),
            TokenKind::Scalar => TypeSpec::Scalar(self.parse_scalar_body()?),
            TokenKind::Type => TypeSpec::Object(self.parse_object_body()?),
            TokenKind::Interface => TypeSpec::Interface(self.parse_interface_body()?),
            TokenKind::Union => TypeSpec::Union(self.parse_union_body()?),
            TokenKind::Enum => TypeSpec::Enum(self.parse_enum_body()?),
            TokenKind::Input => TypeSpec::Input(self.parse_input_body()?),
            TokenKind::Directive => TypeSpec::Directive(self.parse_directive_decl_body()?),
            _ => unreachable!("caller only dispatches on declaration keywords"),
        };
        let span = Span::new(keyword_item.position, self.last_end);
        Ok(ast::Declaration {
            tag: ast::DeclTag::Normal,
            keyword,
            docs,
            spec,
            span,
        })
    }

    fn parse_extension(&mut self, docs: Option<ast::DocGroup>) -> Result<ast::Declaration<'src>, ParseError> {
        let extend_item = self.expect(TokenKind::Extend, "'extend'")?;
        let next_kind = self.peek_kind()?;
        if next_kind == TokenKind::Directive {
            let item = self.next()?;
            return Err(self.error(item.line, ParseErrorKind::ExtendDirectiveNotAllowed));
        }
        if !is_decl_keyword(next_kind) {
            let item = self.next()?;
            return Err(self.error(
                item.line,
                ParseErrorKind::UnexpectedToken {
                    expected: "a declaration keyword".to_string(),
                    found: super::describe(&item),
                },
            ));
        }
        let mut decl = self.parse_type_decl(docs)?;
        decl.tag = ast::DeclTag::Extension;
        decl.span = Span::new(extend_item.position, decl.span.end);
        Ok(decl)
    }
}
