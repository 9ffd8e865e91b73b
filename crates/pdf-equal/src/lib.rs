//! pdf-equal - Deep structural equality for PDF object graphs.
//!
//! Compares two object subgraphs for logical equality:
//!
//! - indirect references are resolved through a [`Resolver`] before any
//!   value is inspected, so reference identity never matters;
//! - arrays compare positionally, dictionaries by key set and per-key value,
//!   streams by dictionary and raw payload bytes;
//! - font name keys (`BaseFont`, `FontName`, `Name` by default) compare
//!   with generated subset tags stripped.
//!
//! Inequality is `Ok(false)`. Errors mean the inputs were not comparable:
//! a reference failed to resolve, a kind has no comparison rule, a font name
//! field is not a name, or a stream payload was not loaded.
//!
//! ```
//! use pdf_equal::equal_objects;
//! use pdf_object::{Dictionary, Object, ObjectId, XRefTable};
//!
//! let mut table = XRefTable::new();
//! table.insert(ObjectId::new(4, 0), Object::name("ABCDEF+Helvetica"));
//!
//! let a: Dictionary = [("BaseFont", Object::reference(4, 0))].into_iter().collect();
//! let b: Dictionary = [("BaseFont", Object::name("Helvetica"))].into_iter().collect();
//!
//! assert_eq!(equal_objects(&Object::from(a), &Object::from(b), &table), Ok(true));
//! ```

mod comparator;
mod error;
mod font_name;
mod options;

pub use comparator::Comparator;
pub use error::EqualError;
pub use font_name::strip_subset_tag;
pub use options::{EqualOptions, DEFAULT_FONT_NAME_KEYS, DEFAULT_MAX_DEPTH};

pub use pdf_object::{Dictionary, Object, Resolver, Stream};

/// Compares two possibly-indirect objects with default options.
pub fn equal_objects<R: Resolver + ?Sized>(
    a: &Object,
    b: &Object,
    resolver: &R,
) -> Result<bool, EqualError> {
    Comparator::new(resolver).equal_objects(a, b)
}

pub fn equal_arrays<R: Resolver + ?Sized>(
    arr1: &[Object],
    arr2: &[Object],
    resolver: &R,
) -> Result<bool, EqualError> {
    Comparator::new(resolver).equal_arrays(arr1, arr2)
}

pub fn equal_dicts<R: Resolver + ?Sized>(
    d1: &Dictionary,
    d2: &Dictionary,
    resolver: &R,
) -> Result<bool, EqualError> {
    Comparator::new(resolver).equal_dicts(d1, d2)
}

pub fn equal_streams<R: Resolver + ?Sized>(
    s1: &Stream,
    s2: &Stream,
    resolver: &R,
) -> Result<bool, EqualError> {
    Comparator::new(resolver).equal_streams(s1, s2)
}

pub fn equal_font_names<R: Resolver + ?Sized>(
    v1: &Object,
    v2: &Object,
    resolver: &R,
) -> Result<bool, EqualError> {
    Comparator::new(resolver).equal_font_names(v1, v2)
}

pub fn equal_font_dicts<R: Resolver + ?Sized>(
    fd1: Option<&Dictionary>,
    fd2: Option<&Dictionary>,
    resolver: &R,
) -> Result<bool, EqualError> {
    Comparator::new(resolver).equal_font_dicts(fd1, fd2)
}
