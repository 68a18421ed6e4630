use super::{parse_document, Mode};
use crate::ast::{DeclTag, TypeRef, TypeSpec, Value};
use crate::registry::Registry;
use crate::token::TokenKind;

/// Leaks a fresh registry per call so the helper can hand back a `Document`
/// borrowing from it without threading a registry through every test.
fn parse(src: &str) -> crate::ast::Document<'_> {
    let registry: &'static Registry = Box::leak(Box::new(Registry::new()));
    parse_document(registry, "t.graphql", src, Mode::default()).expect("parse should succeed")
}

#[test]
fn empty_object_type() {
    let doc = parse("type Test {}");
    assert_eq!(doc.declarations.len(), 1);
    match &doc.declarations[0].spec {
        TypeSpec::Object(o) => {
            assert_eq!(o.name.as_str(), "Test");
            assert!(o.fields.is_empty());
        }
        other => panic!("expected object, got {other:?}"),
    }
}

#[test]
fn non_null_list_of_non_null_field_type() {
    let doc = parse("type Test { xs: [Int!]! }");
    let TypeSpec::Object(o) = &doc.declarations[0].spec else { panic!("expected object") };
    let field = &o.fields[0];
    match &field.type_ref {
        TypeRef::NonNull(inner, _) => match inner.as_ref() {
            crate::ast::Nullable::List(elem, _) => match elem.as_ref() {
                TypeRef::NonNull(elem_inner, _) => {
                    assert!(matches!(elem_inner.as_ref(), crate::ast::Nullable::Named(n) if n.as_str() == "Int"));
                }
                other => panic!("expected NonNull element, got {other:?}"),
            },
            other => panic!("expected list, got {other:?}"),
        },
        other => panic!("expected non-null, got {other:?}"),
    }
}

#[test]
fn union_with_directives_and_list_argument() {
    let doc = parse(r#"union Test @a @b @c(xs: [1, 2, 3]) = A | B"#);
    let TypeSpec::Union(u) = &doc.declarations[0].spec else { panic!("expected union") };
    assert_eq!(u.directives.len(), 3);
    assert_eq!(u.members.len(), 2);
    let third = &u.directives[2];
    assert_eq!(third.name.as_str(), "c");
    assert_eq!(third.args.len(), 1);
    match &third.args[0].value {
        Value::List(list) => assert_eq!(list.elements.len(), 3),
        other => panic!("expected list value, got {other:?}"),
    }
}

#[test]
fn directive_declaration_with_repeatable_and_two_locations() {
    let doc = parse("directive @d(a: Int) repeatable on FIELD | OBJECT");
    let TypeSpec::Directive(d) = &doc.declarations[0].spec else { panic!("expected directive decl") };
    assert_eq!(d.name.as_str(), "d");
    assert!(d.repeatable);
    assert_eq!(d.args.len(), 1);
    assert_eq!(d.locations.len(), 2);
}

#[test]
fn extension_of_interface_with_directive_and_field() {
    let doc = parse("extend interface Test @a { f: String }");
    let decl = &doc.declarations[0];
    assert_eq!(decl.tag, DeclTag::Extension);
    match &decl.spec {
        TypeSpec::Interface(i) => {
            assert_eq!(i.directives.len(), 1);
            assert_eq!(i.fields.len(), 1);
        }
        other => panic!("expected interface, got {other:?}"),
    }
}

#[test]
fn directive_on_later_line_is_left_for_next_top_level_item() {
    let doc = parse("scalar X @a\n@b\n");
    assert_eq!(doc.declarations.len(), 1);
    let TypeSpec::Scalar(s) = &doc.declarations[0].spec else { panic!("expected scalar") };
    assert_eq!(s.directives.len(), 1);
    assert_eq!(s.directives[0].name.as_str(), "a");
    assert_eq!(doc.directives.len(), 1);
    assert_eq!(doc.directives[0].name.as_str(), "b");
}

#[test]
fn leading_description_attaches_to_declaration() {
    let doc = parse("\"doc\" type Test { f: Int }");
    let decl = &doc.declarations[0];
    let docs = decl.docs.as_ref().expect("doc group should attach");
    assert_eq!(docs.docs.len(), 1);
}

#[test]
fn description_on_field_attaches_to_field() {
    let doc = parse("type Test {\n  \"doc\"\n  f: Int\n}");
    let TypeSpec::Object(o) = &doc.declarations[0].spec else { panic!("expected object") };
    assert!(o.fields[0].docs.is_some());
}

#[test]
fn description_on_enum_value_attaches() {
    let doc = parse("enum Test {\n  \"doc\"\n  A\n  B\n}");
    let TypeSpec::Enum(e) = &doc.declarations[0].spec else { panic!("expected enum") };
    assert!(e.values[0].docs.is_some());
    assert!(e.values[1].docs.is_none());
}

#[test]
fn description_separated_by_blank_gap_is_free_standing() {
    let doc = parse("\"doc\"\n\n\ntype Test { f: Int }");
    assert!(doc.declarations[0].docs.is_none());
    assert!(doc.docs.is_some());
}

#[test]
fn mixed_list_element_types_is_an_error() {
    let registry = Registry::new();
    let err = parse_document(&registry, "t.graphql", "scalar X @a(xs: [1, \"two\"])", Mode::default())
        .unwrap_err();
    assert!(matches!(err.detail, crate::error::ParseErrorKind::MixedListElementTypes));
}

#[test]
fn extend_directive_is_rejected() {
    let registry = Registry::new();
    let err = parse_document(&registry, "t.graphql", "extend directive @d on FIELD", Mode::default())
        .unwrap_err();
    assert!(matches!(err.detail, crate::error::ParseErrorKind::ExtendDirectiveNotAllowed));
}

#[test]
fn input_object_with_default_value() {
    let doc = parse(r#"input X { a: Int = 1 b: String = "hi" }"#);
    let TypeSpec::Input(i) = &doc.declarations[0].spec else { panic!("expected input") };
    assert_eq!(i.input_values.len(), 2);
    let default = i.input_values[0].default.as_ref().expect("default value");
    match default {
        Value::Basic(b) => {
            assert_eq!(b.kind, TokenKind::Int);
            assert_eq!(b.text.as_ref(), "1");
        }
        other => panic!("expected basic literal, got {other:?}"),
    }
}

#[test]
fn schema_with_root_operations() {
    let doc = parse("schema { query: Q mutation: M }");
    let TypeSpec::Schema(s) = &doc.declarations[0].spec else { panic!("expected schema") };
    assert_eq!(s.root_fields.len(), 2);
    assert_eq!(doc.schema_declaration().unwrap().span, doc.declarations[0].span);
}
