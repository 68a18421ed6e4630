use crate::ast::{DeclTag, Declaration, DirectiveLit, DocGroup, TypeSpec};

/// The AST root produced by a single parse. Owns every declaration (and,
/// transitively, every node reachable from them); the back-reference to the
/// schema declaration is a non-owning index into `declarations`.
#[derive(Clone, Debug, PartialEq)]
pub struct Document<'src> {
    pub name: String,
    pub declarations: Vec<Declaration<'src>>,
    pub directives: Vec<DirectiveLit<'src>>,
    schema_decl_index: Option<usize>,
    pub docs: Option<DocGroup>,
}

impl<'src> Document<'src> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declarations: Vec::new(),
            directives: Vec::new(),
            schema_decl_index: None,
            docs: None,
        }
    }

    /// Appends `decl` and, if it is a non-extension schema declaration,
    /// records the back-reference used by [`Document::schema_declaration`].
    pub fn push_declaration(&mut self, decl: Declaration<'src>) {
        if decl.tag == DeclTag::Normal && matches!(decl.spec, TypeSpec::Schema(_)) {
            self.schema_decl_index = Some(self.declarations.len());
        }
        self.declarations.push(decl);
    }

    /// The document's top-level schema declaration, if any. Not an owner —
    /// the declaration lives in `declarations` and is dropped along with it.
    pub fn schema_declaration(&self) -> Option<&Declaration<'src>> {
        self.schema_decl_index.map(|i| &self.declarations[i])
    }
}
