use super::parse_introspection;
use crate::ast::{TypeRef, TypeSpec};
use crate::parser::{parse_document, Mode};
use crate::registry::Registry;

#[test]
fn scalar_round_trip_matches_lexed_sdl() {
    let json = r#"{"__schema": {"directives": [], "types": [
        {"kind": "SCALAR", "name": "Test", "description": null}
    ]}}"#;
    let json_registry = Registry::new();
    let from_json = parse_introspection(&json_registry, "schema.json", json, Mode::default())
        .expect("introspection parse should succeed");

    let sdl_registry = Registry::new();
    let from_sdl = parse_document(&sdl_registry, "t.graphql", "scalar Test", Mode::default()).unwrap();

    assert_eq!(from_json.declarations.len(), 1);
    assert_eq!(from_sdl.declarations.len(), 1);
    let (TypeSpec::Scalar(a), TypeSpec::Scalar(b)) =
        (&from_json.declarations[0].spec, &from_sdl.declarations[0].spec)
    else {
        panic!("expected two scalar declarations");
    };
    assert_eq!(a.name.as_str(), b.name.as_str());
}

#[test]
fn object_type_with_non_null_list_field() {
    let json = r#"{"__schema": {"directives": [], "types": [
        {
            "kind": "OBJECT",
            "name": "Query",
            "interfaces": [],
            "fields": [
                {
                    "name": "items",
                    "args": [],
                    "isDeprecated": false,
                    "type": {
                        "kind": "NON_NULL",
                        "ofType": {
                            "kind": "LIST",
                            "ofType": {
                                "kind": "NON_NULL",
                                "ofType": {"kind": "SCALAR", "name": "String"}
                            }
                        }
                    }
                }
            ]
        }
    ]}}"#;
    let registry = Registry::new();
    let doc = parse_introspection(&registry, "schema.json", json, Mode::default())
        .expect("introspection parse should succeed");

    let TypeSpec::Object(o) = &doc.declarations[0].spec else { panic!("expected object") };
    assert_eq!(o.name.as_str(), "Query");
    assert_eq!(o.fields.len(), 1);
    assert_eq!(o.fields[0].name.as_str(), "items");
    match &o.fields[0].type_ref {
        TypeRef::NonNull(inner, _) => match inner.as_ref() {
            crate::ast::Nullable::List(elem, _) => match elem.as_ref() {
                TypeRef::NonNull(named, _) => {
                    assert!(matches!(named.as_ref(), crate::ast::Nullable::Named(n) if n.as_str() == "String"));
                }
                other => panic!("expected non-null element, got {other:?}"),
            },
            other => panic!("expected list, got {other:?}"),
        },
        other => panic!("expected non-null, got {other:?}"),
    }
}

#[test]
fn enum_type_with_values() {
    let json = r#"{"__schema": {"directives": [], "types": [
        {
            "kind": "ENUM",
            "name": "Color",
            "enumValues": [
                {"name": "RED", "isDeprecated": false},
                {"name": "BLUE", "isDeprecated": false}
            ]
        }
    ]}}"#;
    let registry = Registry::new();
    let doc = parse_introspection(&registry, "schema.json", json, Mode::default())
        .expect("introspection parse should succeed");

    let TypeSpec::Enum(e) = &doc.declarations[0].spec else { panic!("expected enum") };
    assert_eq!(e.name.as_str(), "Color");
    let names: Vec<_> = e.values.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, vec!["RED", "BLUE"]);
}

#[test]
fn input_object_with_default_value() {
    let json = r#"{"__schema": {"directives": [], "types": [
        {
            "kind": "INPUT_OBJECT",
            "name": "Filter",
            "inputFields": [
                {"name": "limit", "type": {"kind": "SCALAR", "name": "Int"}, "defaultValue": "10"}
            ]
        }
    ]}}"#;
    let registry = Registry::new();
    let doc = parse_introspection(&registry, "schema.json", json, Mode::default())
        .expect("introspection parse should succeed");

    let TypeSpec::Input(i) = &doc.declarations[0].spec else { panic!("expected input object") };
    assert_eq!(i.input_values.len(), 1);
    let value = i.input_values[0].default.as_ref().expect("default value present");
    match value {
        crate::ast::Value::Basic(lit) => assert_eq!(lit.text.as_ref(), "10"),
        other => panic!("expected basic literal, got {other:?}"),
    }
}

#[test]
fn union_with_possible_types() {
    let json = r#"{"__schema": {"directives": [], "types": [
        {
            "kind": "UNION",
            "name": "SearchResult",
            "possibleTypes": [{"kind": "OBJECT", "name": "Book"}, {"kind": "OBJECT", "name": "Author"}]
        }
    ]}}"#;
    let registry = Registry::new();
    let doc = parse_introspection(&registry, "schema.json", json, Mode::default())
        .expect("introspection parse should succeed");

    let TypeSpec::Union(u) = &doc.declarations[0].spec else { panic!("expected union") };
    let members: Vec<_> = u.members.iter().map(|m| m.as_str()).collect();
    assert_eq!(members, vec!["Book", "Author"]);
}

#[test]
fn directive_definition_with_repeatable_and_locations() {
    let json = r#"{"__schema": {"types": [], "directives": [
        {
            "name": "cache",
            "locations": ["FIELD_DEFINITION", "OBJECT"],
            "args": [],
            "isRepeatable": true
        }
    ]}}"#;
    let registry = Registry::new();
    let doc = parse_introspection(&registry, "schema.json", json, Mode::default())
        .expect("introspection parse should succeed");

    let TypeSpec::Directive(d) = &doc.declarations[0].spec else { panic!("expected directive") };
    assert_eq!(d.name.as_str(), "cache");
    assert!(d.repeatable);
    assert_eq!(d.locations.len(), 2);
}

#[test]
fn schema_roots_become_root_operation_fields() {
    let json = r#"{"__schema": {"directives": [], "types": [], "queryType": {"name": "Query"}, "mutationType": {"name": "Mutation"}}}"#;
    let registry = Registry::new();
    let doc = parse_introspection(&registry, "schema.json", json, Mode::default())
        .expect("introspection parse should succeed");

    let TypeSpec::Schema(s) = &doc.declarations[0].spec else { panic!("expected schema") };
    assert_eq!(s.root_fields.len(), 2);
}

#[test]
fn deprecation_fields_are_not_yet_reflected_as_a_directive() {
    let json = r#"{"__schema": {"directives": [], "types": [
        {
            "kind": "OBJECT",
            "name": "Query",
            "fields": [
                {
                    "name": "legacy",
                    "args": [],
                    "isDeprecated": true,
                    "deprecationReason": "use modern instead",
                    "type": {"kind": "SCALAR", "name": "String"}
                }
            ]
        }
    ]}}"#;
    let registry = Registry::new();
    let doc = parse_introspection(&registry, "schema.json", json, Mode::default())
        .expect("introspection parse should succeed");

    let TypeSpec::Object(o) = &doc.declarations[0].spec else { panic!("expected object") };
    assert!(o.fields[0].directives.is_empty(), "deprecation reconstruction is a tracked TODO, not yet implemented");
}

#[test]
fn unknown_type_kind_is_fatal() {
    let json = r#"{"__schema": {"directives": [], "types": [{"kind": "BOGUS", "name": "Test"}]}}"#;
    let registry = Registry::new();
    assert!(parse_introspection(&registry, "schema.json", json, Mode::default()).is_err());
}

#[test]
fn unknown_top_level_key_is_error() {
    let json = r#"{"__schema": {"directives": [], "types": [], "extraneous": 1}}"#;
    let registry = Registry::new();
    assert!(parse_introspection(&registry, "schema.json", json, Mode::default()).is_err());
}

#[test]
fn malformed_json_is_error() {
    let registry = Registry::new();
    assert!(parse_introspection(&registry, "schema.json", "not json at all", Mode::default()).is_err());
}
