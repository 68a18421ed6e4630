use super::*;

#[test]
fn add_document_allocates_contiguously() {
    let reg = Registry::new();
    let a = reg.add_document("a.graphql", None, 10).unwrap();
    let b = reg.add_document("b.graphql", None, 5).unwrap();
    assert_eq!(a.base_offset, 1);
    assert_eq!(b.base_offset, a.end_offset() + 1);
}

#[test]
fn add_document_honors_base_hint() {
    let reg = Registry::new();
    let a = reg.add_document("a.graphql", Some(100), 4).unwrap();
    assert_eq!(a.base_offset, 100);
}

#[test]
fn add_document_rejects_overlap() {
    let reg = Registry::new();
    reg.add_document("a.graphql", Some(1), 10).unwrap();
    let err = reg.add_document("b.graphql", Some(5), 10).unwrap_err();
    assert!(matches!(err, RegistryError::OverlappingDocument { .. }));
}

#[test]
fn position_out_of_range() {
    let reg = Registry::new();
    reg.add_document("a.graphql", None, 10).unwrap();
    let err = reg.position(9999).unwrap_err();
    assert!(matches!(err, RegistryError::OffsetOutOfRange(9999)));
}

#[test]
fn position_tracks_lines_as_noted() {
    let reg = Registry::new();
    let doc = reg.add_document("a.graphql", None, 20).unwrap();
    // "ab\ncd\nef" -- newlines at offsets base+2 and base+5 (0-indexed within doc)
    let base = doc.base_offset;
    reg.note_line(doc.id(), base + 3).unwrap();
    reg.note_line(doc.id(), base + 6).unwrap();

    let p1 = reg.position(base).unwrap();
    assert_eq!((p1.line, p1.column), (1, 1));

    let p2 = reg.position(base + 4).unwrap();
    assert_eq!((p2.line, p2.column), (2, 2));

    let p3 = reg.position(base + 7).unwrap();
    assert_eq!((p3.line, p3.column), (3, 2));
}

#[test]
fn line_matches_position_line() {
    let reg = Registry::new();
    let doc = reg.add_document("a.graphql", None, 20).unwrap();
    reg.note_line(doc.id(), doc.base_offset + 3).unwrap();
    let offset = doc.base_offset + 4;
    assert_eq!(reg.line(offset).unwrap(), reg.position(offset).unwrap().line);
}

#[test]
fn note_line_on_unknown_document_fails() {
    let reg = Registry::new();
    let bogus = DocumentId(7);
    let err = reg.note_line(bogus, 1).unwrap_err();
    assert!(matches!(err, RegistryError::UnknownDocument));
}
