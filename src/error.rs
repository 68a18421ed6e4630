//! Error taxonomy for the lexer, introspection scanner, and parser.
//!
//! Every error that escapes [`crate::parser::parse_document`] is a single
//! [`ParseError`] carrying the document name and line it was raised at,
//! formatted as `parser: {document}:{line}: {detail}`. There is no
//! multi-error reporting and no partial AST on failure.

use crate::registry::RegistryError;

/// Errors the lexer state machine can raise. These surface to the parser as
/// an `ERR` [`Item`](crate::token::Item) whose value starts with the
/// message text; the parser itself only ever sees "unexpected ERR" once it
/// converts that item into an abort (see [`ParseErrorKind::LexerError`]).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LexErrorKind {
    #[error("bad string syntax")]
    BadStringSyntax,
    #[error("unterminated string")]
    UnterminatedString,
    #[error("malformed directive arguments")]
    MalformedDirectiveArgs,
    #[error("unknown type declaration keyword: `{0}`")]
    UnknownTypeDeclarationKeyword(String),
    #[error("unexpected end of input")]
    UnexpectedEof,
    #[error("invalid byte {0:?}")]
    InvalidByte(char),
}

/// Errors the recursive-descent parser can raise.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("expected {expected}, found `{found}`")]
    UnexpectedToken { expected: String, found: String },
    #[error("expected `:`, found `{found}`")]
    MissingColon { found: String },
    #[error("expected a name, found `{found}`")]
    MissingName { found: String },
    #[error("invalid directive location: `{0}`")]
    InvalidDirectiveLocation(String),
    #[error("invalid root operation name: `{0}`")]
    InvalidRootOperationName(String),
    #[error("union member must be a name")]
    NonIdentUnionMember,
    #[error("`extend directive` is not allowed")]
    ExtendDirectiveNotAllowed,
    #[error("mixed element types in list literal")]
    MixedListElementTypes,
    /// The lexer emitted an `ERR` item; per the propagation rule this
    /// collapses to a single fixed message regardless of the lexer's own
    /// detail (which is still visible on the raw `Item.value`).
    #[error("unexpected ERR")]
    LexerError,
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error("I/O error: {0}")]
    Io(String),
}

/// The single error type returned by a failed parse.
#[derive(Debug, Clone, thiserror::Error)]
#[error("parser: {document}:{line}: {detail}")]
pub struct ParseError {
    pub document: String,
    pub line: u32,
    pub detail: ParseErrorKind,
}

impl ParseError {
    pub fn new(document: impl Into<String>, line: u32, detail: ParseErrorKind) -> Self {
        Self {
            document: document.into(),
            line,
            detail,
        }
    }
}
