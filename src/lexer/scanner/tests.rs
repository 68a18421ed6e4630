use super::*;
use crate::registry::Registry;
use crate::token::TokenKind;

fn scan_all(src: &str) -> (Registry, Vec<(TokenKind, String)>) {
    let registry = Registry::new();
    let doc = registry.add_document("t.graphql", None, src.len() as u32).unwrap();
    let mut items = Vec::new();
    {
        let mut scanner = Scanner::new(doc, &registry, src);
        loop {
            let item = scanner.next_item();
            let terminal = item.is_eof() || item.is_err();
            items.push((item.kind, item.value.into_owned()));
            if terminal {
                break;
            }
        }
    }
    (registry, items)
}

#[test]
fn empty_object_type() {
    let (_, items) = scan_all("type Test {}");
    let kinds: Vec<_> = items.iter().map(|(k, _)| *k).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Type,
            TokenKind::Ident,
            TokenKind::LBrace,
            TokenKind::RBrace,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn non_null_list_of_non_null() {
    let (_, items) = scan_all("type T { a: [A!]! }");
    let kinds: Vec<_> = items.iter().map(|(k, _)| *k).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Type,
            TokenKind::Ident,
            TokenKind::LBrace,
            TokenKind::Ident,
            TokenKind::Colon,
            TokenKind::LBrack,
            TokenKind::Ident,
            TokenKind::Not,
            TokenKind::RBrack,
            TokenKind::Not,
            TokenKind::RBrace,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn unterminated_description_is_err() {
    let (_, items) = scan_all("\"hello");
    let (kind, value) = &items[0];
    assert_eq!(*kind, TokenKind::Err);
    assert!(value.starts_with("bad string syntax"), "{value}");
    assert_eq!(items.len(), 1, "stream must close after the ERR item");
}

#[test]
fn default_value_string_is_not_a_description() {
    let (_, items) = scan_all(r#"input X { a: String = "hi" }"#);
    let string_items: Vec<_> = items
        .iter()
        .filter(|(k, _)| matches!(k, TokenKind::String | TokenKind::Description))
        .collect();
    assert_eq!(string_items.len(), 1);
    assert_eq!(string_items[0].0, TokenKind::String);
}

#[test]
fn leading_description_is_tagged() {
    let (_, items) = scan_all("\"doc\" type Test {}");
    assert_eq!(items[0].0, TokenKind::Description);
}

#[test]
fn block_string_description() {
    let (_, items) = scan_all("\"\"\"multi\nline\"\"\" scalar Foo");
    assert_eq!(items[0].0, TokenKind::Description);
    assert_eq!(items[0].1, "\"\"\"multi\nline\"\"\"");
}

#[test]
fn leading_description_inside_type_body_is_tagged() {
    let (_, items) = scan_all("type T { \"doc\" a: Int }");
    let descs: Vec<_> = items.iter().filter(|(k, _)| *k == TokenKind::Description).collect();
    assert_eq!(descs.len(), 1, "{items:?}");
}

#[test]
fn leading_description_inside_arg_def_list_is_tagged() {
    let (_, items) = scan_all("type T { f(\"doc\" a: Int): String }");
    let descs: Vec<_> = items.iter().filter(|(k, _)| *k == TokenKind::Description).collect();
    assert_eq!(descs.len(), 1, "{items:?}");
}

#[test]
fn directive_declaration_arg_def_string_is_a_description() {
    let (_, items) = scan_all(r#"directive @d("doc" a: Int) on FIELD"#);
    let descs: Vec<_> = items.iter().filter(|(k, _)| *k == TokenKind::Description).collect();
    assert_eq!(descs.len(), 1, "{items:?}");
}

#[test]
fn nested_list_values_inside_directive_args_are_strings() {
    let (_, items) = scan_all(r#"union Test @c(c: ["a", "b"]) = A | B"#);
    let strings: Vec<_> = items
        .iter()
        .filter(|(k, v)| *k == TokenKind::String && (v == "\"a\"" || v == "\"b\""))
        .collect();
    assert_eq!(strings.len(), 2, "{items:?}");
}

#[test]
fn default_object_literal_string_is_not_a_description() {
    let (_, items) = scan_all(r#"input X { a: Y = {b: "hi"} }"#);
    let descs: Vec<_> = items.iter().filter(|(k, _)| *k == TokenKind::Description).collect();
    assert!(descs.is_empty(), "{items:?}");
}

#[test]
fn directive_argument_string_is_not_a_description() {
    let (_, items) = scan_all(r#"union Test @c(a: "2") = A | B"#);
    let string_items: Vec<_> = items
        .iter()
        .filter(|(k, _)| matches!(k, TokenKind::String | TokenKind::Description))
        .collect();
    assert_eq!(string_items.len(), 1);
    assert_eq!(string_items[0].0, TokenKind::String);
}

#[test]
fn negative_and_float_numbers() {
    let (_, items) = scan_all("-1 1.5 -2.5e10 0");
    let kinds: Vec<_> = items
        .iter()
        .filter(|(k, _)| !matches!(k, TokenKind::Eof))
        .map(|(k, v)| (*k, v.clone()))
        .collect();
    assert_eq!(
        kinds,
        vec![
            (TokenKind::Int, "-1".to_string()),
            (TokenKind::Float, "1.5".to_string()),
            (TokenKind::Float, "-2.5e10".to_string()),
            (TokenKind::Int, "0".to_string()),
        ]
    );
}

#[test]
fn bool_and_null_lex_as_distinct_kinds() {
    let (_, items) = scan_all("true false null");
    let kinds: Vec<_> = items.iter().map(|(k, _)| *k).collect();
    assert_eq!(
        kinds,
        vec![TokenKind::Bool, TokenKind::Bool, TokenKind::Null, TokenKind::Eof]
    );
}

#[test]
fn comment_value_includes_hash_and_newline() {
    let (_, items) = scan_all("# hi\nscalar X");
    assert_eq!(items[0].0, TokenKind::Comment);
    assert_eq!(items[0].1, "# hi\n");
}

#[test]
fn positions_are_non_decreasing() {
    let registry = Registry::new();
    let src = "type T { a: Int b: String }";
    let doc = registry.add_document("t.graphql", None, src.len() as u32).unwrap();
    let mut scanner = Scanner::new(doc, &registry, src);
    let mut last = 0;
    loop {
        let item = scanner.next_item();
        assert!(item.position >= last);
        last = item.position;
        if item.is_eof() || item.is_err() {
            break;
        }
    }
}

#[test]
fn item_line_matches_registry_line() {
    let registry = Registry::new();
    let src = "type T {\n  a: Int\n}";
    let doc = registry.add_document("t.graphql", None, src.len() as u32).unwrap();
    let mut scanner = Scanner::new(doc, &registry, src);
    loop {
        let item = scanner.next_item();
        assert_eq!(registry.line(item.position).unwrap(), item.line);
        if item.is_eof() || item.is_err() {
            break;
        }
    }
}
