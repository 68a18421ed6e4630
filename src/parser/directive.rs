use super::Parser;
use crate::ast;
use crate::error::ParseError;
use crate::span::Span;
use crate::token::TokenKind;

impl<'src> Parser<'src> {
    /// Consumes applied directives (`@name(args...)+`) as long as each one
    /// starts on `head_line`. A directive starting on a later line ends the
    /// list without being consumed — it belongs to whatever comes next.
    pub(super) fn parse_same_line_directives(
        &mut self,
        head_line: u32,
    ) -> Result<Vec<ast::DirectiveLit<'src>>, ParseError> {
        let mut directives = Vec::new();
        loop {
            let item = self.peek()?;
            if item.kind != TokenKind::At || item.line != head_line {
                break;
            }
            directives.push(self.parse_directive_lit()?);
        }
        Ok(directives)
    }

    pub(super) fn parse_directive_lit(&mut self) -> Result<ast::DirectiveLit<'src>, ParseError> {
        let at = self.expect(TokenKind::At, "'@'")?;
        let name = self.expect_name()?;
        let mut args = Vec::new();
        if self.peek_kind()? == TokenKind::LParen {
            self.next()?;
            while self.peek_kind()? != TokenKind::RParen {
                let arg_name = self.expect_name()?;
                self.expect_colon()?;
                let value = self.parse_value()?;
                let span = Span::new(arg_name.span.start, value.span().end);
                args.push(ast::Argument { name: arg_name, value, span });
                if self.peek_kind()? == TokenKind::Comma {
                    self.next()?;
                }
            }
            self.expect(TokenKind::RParen, "')'")?;
        }
        let span = Span::new(at.position, self.last_end);
        Ok(ast::DirectiveLit { name, args, span })
    }
}
