//! The document registry maps absolute byte offsets, shared across every
//! document registered with it, onto `(document, line, column)` coordinates.
//!
//! Every [`Item`](crate::token::Item) the lexer emits and every AST node the
//! parser builds carries a [`Span`](crate::span::Span) into this address
//! space. Resolving a human-readable position always goes through a
//! `Registry`; offsets themselves are opaque to the parser.
//!
//! # Concurrency
//!
//! A `Registry` is shared across all parses that use it — every method,
//! including `add_document`, takes `&self`. Registration locks the document
//! list only for the span of its own check-then-push; once a document is
//! registered, `position`/`line` may be called concurrently with the
//! producer thread's `note_line` calls for that same document — the lexer
//! populates a document's line index while the parser is already consuming
//! tokens positioned within it, so `note_line` uses its own interior
//! mutability independent of the document list's lock.

use crate::span::Offset;
use std::sync::RwLock;

/// Identifies a document registered with a [`Registry`].
///
/// Opaque outside this module; round-trips through [`Document::id`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct DocumentId(u32);

/// A document registered with a [`Registry`].
///
/// `line_index[i]` is the offset of the first byte of line `i` (0-based).
/// It is populated incrementally by [`Registry::note_line`] as the producer
/// (lexer) consumes `\n` bytes, so a position query made before the whole
/// document has been lexed will only resolve lines seen so far.
#[derive(Debug)]
struct DocumentEntry {
    name: String,
    base_offset: Offset,
    size: u32,
    line_index: RwLock<Vec<Offset>>,
}

/// A lightweight, `Copy`-able handle to a document's static metadata.
#[derive(Clone, Debug)]
pub struct Document {
    id: DocumentId,
    pub name: String,
    pub base_offset: Offset,
    pub size: u32,
}

impl Document {
    pub fn id(&self) -> DocumentId {
        self.id
    }

    /// One past the last valid offset in this document (reserved for EOF).
    pub fn end_offset(&self) -> Offset {
        self.base_offset + self.size
    }
}

/// A resolved human-readable position.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Position {
    pub document: DocumentId,
    /// 1-based line number within the document.
    pub line: u32,
    /// 1-based column within the line.
    pub column: u32,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegistryError {
    #[error("document span [{base}, {base}+{size}] overlaps an existing document")]
    OverlappingDocument { base: Offset, size: u32 },
    #[error("offset {0} is not covered by any registered document")]
    OffsetOutOfRange(Offset),
    #[error("unknown document id")]
    UnknownDocument,
}

/// Maps offsets across every registered document onto `(document, line,
/// column)` coordinates. See the module documentation for the concurrency
/// contract.
#[derive(Debug, Default)]
pub struct Registry {
    documents: RwLock<Vec<DocumentEntry>>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            documents: RwLock::new(Vec::new()),
        }
    }

    /// Registers a new document of `size` bytes.
    ///
    /// If `base_hint` is `None`, the document is allocated contiguously right
    /// after the last registered document's reserved EOF offset. Otherwise
    /// the hint is honored verbatim if its span does not overlap an existing
    /// document.
    ///
    /// Takes `&self`: the check-then-push is serialized internally by a
    /// single write-lock guard, so concurrent registration from multiple
    /// parses racing against the same registry can't double-allocate a base
    /// offset.
    pub fn add_document(
        &self,
        name: impl Into<String>,
        base_hint: Option<Offset>,
        size: u32,
    ) -> Result<Document, RegistryError> {
        let mut documents = self.documents.write().expect("document list lock poisoned");
        let base = match base_hint {
            Some(base) => {
                if overlaps(&documents, base, size) {
                    return Err(RegistryError::OverlappingDocument { base, size });
                }
                base
            }
            None => next_base(&documents),
        };
        let id = DocumentId(documents.len() as u32);
        let name = name.into();
        documents.push(DocumentEntry {
            name: name.clone(),
            base_offset: base,
            size,
            line_index: RwLock::new(vec![base]),
        });
        Ok(Document {
            id,
            name,
            base_offset: base,
            size,
        })
    }

    /// Records that byte offset `line_start` begins a new line within
    /// `doc`. Called by the lexer each time it consumes a `\n`.
    pub fn note_line(&self, doc: DocumentId, line_start: Offset) -> Result<(), RegistryError> {
        let documents = self.documents.read().expect("document list lock poisoned");
        let entry = documents.get(doc.0 as usize).ok_or(RegistryError::UnknownDocument)?;
        let mut index = entry.line_index.write().expect("line index lock poisoned");
        if index.last().is_none_or(|&last| last < line_start) {
            index.push(line_start);
        }
        Ok(())
    }

    /// Resolves `offset` to a `(document, line, column)` triple.
    ///
    /// O(log D + log L) where D is the number of registered documents and L
    /// is the number of lines noted so far in the covering document.
    pub fn position(&self, offset: Offset) -> Result<Position, RegistryError> {
        let documents = self.documents.read().expect("document list lock poisoned");
        let idx = find_document(&documents, offset).ok_or(RegistryError::OffsetOutOfRange(offset))?;
        let entry = &documents[idx];
        let index = entry.line_index.read().expect("line index lock poisoned");
        let line_no = index.partition_point(|&start| start <= offset);
        let line_start = index[line_no - 1];
        Ok(Position {
            document: DocumentId(idx as u32),
            line: line_no as u32,
            column: (offset - line_start) + 1,
        })
    }

    /// Convenience wrapper returning just the line number.
    pub fn line(&self, offset: Offset) -> Result<u32, RegistryError> {
        self.position(offset).map(|p| p.line)
    }

    pub fn document(&self, id: DocumentId) -> Option<Document> {
        let documents = self.documents.read().expect("document list lock poisoned");
        documents.get(id.0 as usize).map(|e| Document {
            id,
            name: e.name.clone(),
            base_offset: e.base_offset,
            size: e.size,
        })
    }
}

fn next_base(documents: &[DocumentEntry]) -> Offset {
    match documents.last() {
        // last.base_offset + last.size is the reserved EOF offset; the next
        // document starts one past it.
        Some(last) => last.base_offset + last.size + 1,
        None => 1,
    }
}

fn overlaps(documents: &[DocumentEntry], base: Offset, size: u32) -> bool {
    let end = base + size;
    documents.iter().any(|d| base <= d.base_offset + d.size && d.base_offset <= end)
}

// Binary search over base_offset: documents are pushed in increasing base
// order, so partition_point gives O(log D).
fn find_document(documents: &[DocumentEntry], offset: Offset) -> Option<usize> {
    let idx = documents.partition_point(|d| d.base_offset <= offset);
    if idx == 0 {
        return None;
    }
    let candidate = &documents[idx - 1];
    if offset <= candidate.base_offset + candidate.size {
        Some(idx - 1)
    } else {
        None
    }
}

#[cfg(test)]
mod tests;
