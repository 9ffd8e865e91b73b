//! Font identifier normalization.
//!
//! Producers embedding a font subset prefix its name with a generated tag,
//! e.g. `ABCDEF+Helvetica`. Two documents differing only in that tag carry
//! the same font, so font name fields are compared with the tag removed.

use pdf_object::{Dictionary, Object, ObjectKind, Resolver};
use tracing::debug;

use crate::{Comparator, EqualError};

/// Removes a subset tag: everything up to and including the first `+`.
///
/// A leading `+` has no tag in front of it and is kept.
///
/// ```
/// use pdf_equal::strip_subset_tag;
///
/// assert_eq!(strip_subset_tag("ABCDEF+Helvetica"), "Helvetica");
/// assert_eq!(strip_subset_tag("+Helvetica"), "+Helvetica");
/// assert_eq!(strip_subset_tag("Helvetica"), "Helvetica");
/// ```
pub fn strip_subset_tag(name: &str) -> &str {
    match name.find('+') {
        Some(index) if index > 0 => &name[index + 1..],
        _ => name,
    }
}

impl<R: Resolver> Comparator<R> {
    /// Compares two font name values ignoring subset tags.
    ///
    /// Both values must resolve to names; anything else is a
    /// [`EqualError::TypeMismatch`] rather than inequality.
    pub fn equal_font_names(&self, v1: &Object, v2: &Object) -> Result<bool, EqualError> {
        self.font_names(v1, v2)
    }

    /// Compares optional font dictionaries.
    ///
    /// Two absent dictionaries are equal, one absent dictionary is not.
    pub fn equal_font_dicts(
        &self,
        fd1: Option<&Dictionary>,
        fd2: Option<&Dictionary>,
    ) -> Result<bool, EqualError> {
        match (fd1, fd2) {
            (Some(d1), Some(d2)) if std::ptr::eq(d1, d2) => Ok(true),
            (Some(d1), Some(d2)) => self.dicts(d1, d2, 0),
            (None, None) => Ok(true),
            _ => Ok(false),
        }
    }

    pub(crate) fn font_names(&self, v1: &Object, v2: &Object) -> Result<bool, EqualError> {
        let n1 = self.resolve_name(v1)?;
        let n2 = self.resolve_name(v2)?;
        let (n1, n2) = (strip_subset_tag(n1), strip_subset_tag(n2));
        debug!(left = n1, right = n2, "comparing font names");
        Ok(n1 == n2)
    }

    fn resolve_name<'a>(&'a self, value: &'a Object) -> Result<&'a str, EqualError> {
        match self.resolver.resolve(value)? {
            Object::Name(name) => Ok(name),
            other => Err(EqualError::TypeMismatch {
                expected: ObjectKind::Name,
                found: other.kind(),
            }),
        }
    }
}
