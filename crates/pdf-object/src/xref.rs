//! In-memory cross-reference table.

use std::collections::BTreeMap;

use crate::{Object, ObjectId, ResolveError, Resolver};

/// Longest reference chain followed before giving up.
pub const DEFAULT_MAX_CHAIN: usize = 32;

/// Cross-reference table slot.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    InUse(Object),
    Free,
}

/// Object table keyed by [`ObjectId`].
///
/// Populating the table from a file is the document layer's job; this type
/// only stores already-parsed objects and resolves references against them.
#[derive(Debug, Clone)]
pub struct XRefTable {
    entries: BTreeMap<ObjectId, Entry>,
    max_chain: usize,
}

impl Default for XRefTable {
    fn default() -> Self {
        Self::new()
    }
}

impl XRefTable {
    pub fn new() -> Self {
        Self::with_max_chain(DEFAULT_MAX_CHAIN)
    }

    pub fn with_max_chain(max_chain: usize) -> Self {
        Self {
            entries: BTreeMap::new(),
            max_chain,
        }
    }

    pub fn insert(&mut self, id: ObjectId, object: impl Into<Object>) -> Option<Entry> {
        self.entries.insert(id, Entry::InUse(object.into()))
    }

    /// Marks `id` as a free slot.
    pub fn free(&mut self, id: ObjectId) -> Option<Entry> {
        self.entries.insert(id, Entry::Free)
    }

    pub fn get(&self, id: ObjectId) -> Option<&Entry> {
        self.entries.get(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_chain(&self) -> usize {
        self.max_chain
    }

    fn lookup(&self, id: ObjectId) -> Result<&Object, ResolveError> {
        match self.entries.get(&id) {
            Some(Entry::InUse(object)) => Ok(object),
            Some(Entry::Free) => Err(ResolveError::Free(id)),
            None => Err(ResolveError::Missing(id)),
        }
    }
}

impl Resolver for XRefTable {
    fn resolve<'a>(&'a self, object: &'a Object) -> Result<&'a Object, ResolveError> {
        let Object::Reference(start) = object else {
            return Ok(object);
        };
        let mut current = *start;
        for _ in 0..self.max_chain {
            let target = self.lookup(current)?;
            match target {
                Object::Reference(next) => {
                    tracing::trace!(from = %current, to = %next, "following reference chain");
                    current = *next;
                }
                direct => return Ok(direct),
            }
        }
        Err(ResolveError::ChainTooLong {
            id: *start,
            limit: self.max_chain,
        })
    }
}
