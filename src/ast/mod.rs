//! The tagged-union AST produced by the SDL parser (or, equivalently, by
//! parsing the item stream the introspection adapter synthesizes).
//!
//! Every node carries a [`crate::span::Span`] wide enough to recover its
//! start/end offsets; resolving those offsets to `(document, line, column)`
//! goes through a [`crate::registry::Registry`], never the AST itself.

mod declaration;
mod directive;
mod doc;
mod document;
mod field;
mod input_value;
mod name;
mod type_ref;
mod type_spec;
mod value;

pub use declaration::{DeclTag, Declaration};
pub use directive::{Argument, DirectiveLit, DirectiveLocation};
pub use doc::{Doc, DocGroup};
pub use document::Document;
pub use field::{EnumValue, Field};
pub use input_value::InputValue;
pub use name::Name;
pub use type_ref::{Nullable, TypeRef};
pub use type_spec::{
    DirectiveSpec, EnumSpec, InputSpec, InterfaceSpec, ObjectSpec, RootOperation,
    RootOperationField, ScalarSpec, SchemaSpec, TypeSpec, UnionSpec,
};
pub use value::{BasicLit, CompositeList, CompositeObject, ObjectField, Value};
