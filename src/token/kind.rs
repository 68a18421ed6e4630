/// The closed set of lexical categories an [`Item`](crate::token::Item) can
/// carry.
///
/// Variant declaration order is load-bearing: [`TokenKind::is_literal`],
/// [`TokenKind::is_operator`], and [`TokenKind::is_keyword`] are expressed as
/// range comparisons over the derived [`Ord`] so they stay O(1) and the
/// ranges must never be reordered independently of the predicates below.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum TokenKind {
    // --- Structural ---------------------------------------------------
    Unknown,
    Err,
    Eof,
    Comment,
    Description,

    // --- Literals (DESCRIPTION < k < AND) ------------------------------
    Ident,
    String,
    Int,
    Float,
    Bool,
    Null,

    // --- Operators/punctuation (NULL < k < PACKAGE) --------------------
    And,
    Or,
    Not,
    At,
    Var,
    Assign,
    LParen,
    LBrack,
    LBrace,
    Comma,
    Period,
    RParen,
    RBrack,
    RBrace,
    Colon,

    // --- Keywords (k > COLON) ------------------------------------------
    Package,
    Schema,
    Type,
    Scalar,
    Enum,
    Interface,
    Implements,
    Union,
    Input,
    Extend,
    Directive,
    On,
    Repeatable,
}

impl TokenKind {
    /// `DESCRIPTION < k < AND`.
    pub fn is_literal(self) -> bool {
        self > TokenKind::Description && self < TokenKind::And
    }

    /// `NULL < k < PACKAGE`.
    pub fn is_operator(self) -> bool {
        self > TokenKind::Null && self < TokenKind::Package
    }

    /// `k > COLON`.
    pub fn is_keyword(self) -> bool {
        self > TokenKind::Colon
    }

    /// The punctuation character this operator kind represents, or `None`
    /// for non-operator kinds.
    pub fn punctuation(self) -> Option<char> {
        Some(match self {
            TokenKind::And => '&',
            TokenKind::Or => '|',
            TokenKind::Not => '!',
            TokenKind::At => '@',
            TokenKind::Var => '$',
            TokenKind::Assign => '=',
            TokenKind::LParen => '(',
            TokenKind::LBrack => '[',
            TokenKind::LBrace => '{',
            TokenKind::Comma => ',',
            TokenKind::Period => '.',
            TokenKind::RParen => ')',
            TokenKind::RBrack => ']',
            TokenKind::RBrace => '}',
            TokenKind::Colon => ':',
            _ => return None,
        })
    }
}

/// Maps an already-scanned identifier to the keyword kind it spells, or to
/// `BOOL`/`NULL` for the literal spellings `true`/`false`/`null`, or to
/// `IDENT` otherwise. Total: every `&str` has a defined image.
pub fn lookup(identifier: &str) -> TokenKind {
    match identifier {
        "true" | "false" => TokenKind::Bool,
        "null" => TokenKind::Null,
        "schema" => TokenKind::Schema,
        "scalar" => TokenKind::Scalar,
        "type" => TokenKind::Type,
        "interface" => TokenKind::Interface,
        "union" => TokenKind::Union,
        "enum" => TokenKind::Enum,
        "input" => TokenKind::Input,
        "directive" => TokenKind::Directive,
        "extend" => TokenKind::Extend,
        "implements" => TokenKind::Implements,
        "on" => TokenKind::On,
        "repeatable" => TokenKind::Repeatable,
        _ => TokenKind::Ident,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_total_over_keywords() {
        for (spelling, kind) in [
            ("schema", TokenKind::Schema),
            ("scalar", TokenKind::Scalar),
            ("type", TokenKind::Type),
            ("interface", TokenKind::Interface),
            ("union", TokenKind::Union),
            ("enum", TokenKind::Enum),
            ("input", TokenKind::Input),
            ("directive", TokenKind::Directive),
            ("extend", TokenKind::Extend),
            ("implements", TokenKind::Implements),
            ("on", TokenKind::On),
            ("repeatable", TokenKind::Repeatable),
        ] {
            assert_eq!(lookup(spelling), kind);
        }
    }

    #[test]
    fn lookup_maps_bool_and_null_literals() {
        assert_eq!(lookup("true"), TokenKind::Bool);
        assert_eq!(lookup("false"), TokenKind::Bool);
        assert_eq!(lookup("null"), TokenKind::Null);
    }

    #[test]
    fn lookup_falls_back_to_ident() {
        assert_eq!(lookup("myType"), TokenKind::Ident);
        assert_eq!(lookup("Query"), TokenKind::Ident);
        assert_eq!(lookup("Schema"), TokenKind::Ident);
    }

    #[test]
    fn predicates_partition_without_overlap() {
        use TokenKind::*;
        let all = [
            Unknown, Err, Eof, Comment, Description, Ident, String, Int, Float, Bool, Null, And,
            Or, Not, At, Var, Assign, LParen, LBrack, LBrace, Comma, Period, RParen, RBrack,
            RBrace, Colon, Package, Schema, Type, Scalar, Enum, Interface, Implements, Union,
            Input, Extend, Directive, On, Repeatable,
        ];
        for k in all {
            let flags = [k.is_literal(), k.is_operator(), k.is_keyword()];
            assert!(flags.iter().filter(|b| **b).count() <= 1, "{k:?} in >1 category");
        }
        assert!(Ident.is_literal());
        assert!(Null.is_literal());
        assert!(And.is_operator());
        assert!(Colon.is_operator());
        assert!(Package.is_keyword());
        assert!(Repeatable.is_keyword());
        assert!(!Description.is_literal());
        assert!(!Eof.is_literal());
        assert!(!Eof.is_operator());
        assert!(!Eof.is_keyword());
    }
}
