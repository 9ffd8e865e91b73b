//! pdf-object - PDF object model and indirect reference resolution.
//!
//! Provides the closed [`Object`] variant set, the [`Resolver`] capability
//! used to dereference [`Object::Reference`] values, and an in-memory
//! [`XRefTable`] implementing it.

mod object;
mod resolver;
mod xref;

pub use object::{Dictionary, Object, ObjectId, ObjectKind, Stream};
pub use resolver::{ResolveError, Resolver};
pub use xref::{Entry, XRefTable, DEFAULT_MAX_CHAIN};
