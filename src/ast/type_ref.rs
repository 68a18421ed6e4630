use crate::ast::Name;
use crate::span::Span;

/// A type reference: a named type with optional list wrapping and/or a
/// non-null marker.
///
/// `NonNull` wraps either a `Named` or a `List`, never another `NonNull` —
/// that invariant is enforced by [`Nullable`] being a strict subset of
/// `TypeRef`'s variants rather than by a runtime check.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeRef<'src> {
    Named(Name<'src>),
    List(Box<TypeRef<'src>>, Span),
    NonNull(Box<Nullable<'src>>, Span),
}

/// The subset of [`TypeRef`] that is legal directly inside a `NonNull`.
#[derive(Clone, Debug, PartialEq)]
pub enum Nullable<'src> {
    Named(Name<'src>),
    List(Box<TypeRef<'src>>, Span),
}

impl<'src> TypeRef<'src> {
    pub fn span(&self) -> Span {
        match self {
            TypeRef::Named(n) => n.span,
            TypeRef::List(_, s) | TypeRef::NonNull(_, s) => *s,
        }
    }

    /// The innermost named type this reference ultimately wraps.
    pub fn inner_name(&self) -> &Name<'src> {
        match self {
            TypeRef::Named(n) => n,
            TypeRef::List(inner, _) => inner.inner_name(),
            TypeRef::NonNull(inner, _) => match inner.as_ref() {
                Nullable::Named(n) => n,
                Nullable::List(inner, _) => inner.inner_name(),
            },
        }
    }
}

impl<'src> Nullable<'src> {
    pub fn span(&self) -> Span {
        match self {
            Nullable::Named(n) => n.span,
            Nullable::List(_, s) => *s,
        }
    }

    /// Widens back to a plain [`TypeRef`], used once the parser has decided
    /// this nullable reference is not followed by `!`.
    pub fn into_type_ref(self) -> TypeRef<'src> {
        match self {
            Nullable::Named(n) => TypeRef::Named(n),
            Nullable::List(inner, s) => TypeRef::List(inner, s),
        }
    }
}
