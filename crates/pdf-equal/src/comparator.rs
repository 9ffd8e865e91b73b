//! Structural comparison of resolved object graphs.

use pdf_object::{Dictionary, Object, Resolver, Stream};
use tracing::{debug, trace};

use crate::{EqualError, EqualOptions};

/// Compares object subgraphs, resolving indirect references through `R`.
///
/// Every public method starts at nesting depth zero; nested containers
/// count against [`EqualOptions::max_depth`].
#[derive(Debug, Clone)]
pub struct Comparator<R> {
    pub(crate) resolver: R,
    pub(crate) options: EqualOptions,
}

impl<R: Resolver> Comparator<R> {
    pub fn new(resolver: R) -> Self {
        Self::with_options(resolver, EqualOptions::default())
    }

    pub fn with_options(resolver: R, options: EqualOptions) -> Self {
        Self { resolver, options }
    }

    pub fn options(&self) -> &EqualOptions {
        &self.options
    }

    /// Resolves both sides and compares them by shape and content.
    pub fn equal_objects(&self, a: &Object, b: &Object) -> Result<bool, EqualError> {
        self.objects(a, b, 0)
    }

    pub fn equal_arrays(&self, arr1: &[Object], arr2: &[Object]) -> Result<bool, EqualError> {
        self.arrays(arr1, arr2, 0)
    }

    pub fn equal_dicts(&self, d1: &Dictionary, d2: &Dictionary) -> Result<bool, EqualError> {
        self.dicts(d1, d2, 0)
    }

    pub fn equal_streams(&self, s1: &Stream, s2: &Stream) -> Result<bool, EqualError> {
        self.streams(s1, s2, 0)
    }

    pub(crate) fn objects(&self, a: &Object, b: &Object, depth: usize) -> Result<bool, EqualError> {
        debug!(left = %a.kind(), right = %b.kind(), "comparing objects");
        let a = self.resolver.resolve(a)?;
        let b = self.resolver.resolve(b)?;
        self.resolved(a, b, depth)
    }

    fn resolved(&self, a: &Object, b: &Object, depth: usize) -> Result<bool, EqualError> {
        if a.kind() != b.kind() {
            debug!(left = %a.kind(), right = %b.kind(), "kind mismatch after resolution");
            return Ok(false);
        }
        match (a, b) {
            (Object::Boolean(x), Object::Boolean(y)) => Ok(x == y),
            (Object::Integer(x), Object::Integer(y)) => Ok(x == y),
            (Object::Float(x), Object::Float(y)) => Ok(x == y),
            (Object::Name(x), Object::Name(y)) => Ok(x == y),
            (Object::StringLiteral(x), Object::StringLiteral(y)) => Ok(x == y),
            (Object::HexLiteral(x), Object::HexLiteral(y)) => Ok(x == y),
            (Object::Array(x), Object::Array(y)) => self.arrays(x, y, depth),
            (Object::Dictionary(x), Object::Dictionary(y)) => self.dicts(x, y, depth),
            (Object::Stream(x), Object::Stream(y)) => self.streams(x, y, depth),
            // Null, and references a resolver handed back unresolved.
            _ => Err(EqualError::UnsupportedVariant { kind: a.kind() }),
        }
    }

    pub(crate) fn arrays(
        &self,
        arr1: &[Object],
        arr2: &[Object],
        depth: usize,
    ) -> Result<bool, EqualError> {
        if arr1.len() != arr2.len() {
            debug!(left = arr1.len(), right = arr2.len(), "array length mismatch");
            return Ok(false);
        }
        let depth = self.descend(depth)?;
        for (index, (o1, o2)) in arr1.iter().zip(arr2).enumerate() {
            trace!(index, "comparing array element");
            // Resolve before the kind check so a reference and the value it
            // points at are compared by content.
            let o1 = self.resolver.resolve(o1)?;
            let o2 = self.resolver.resolve(o2)?;
            if o1.kind() != o2.kind() {
                debug!(index, left = %o1.kind(), right = %o2.kind(), "array element kind mismatch");
                return Ok(false);
            }
            if !self.resolved(o1, o2, depth)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    pub(crate) fn dicts(
        &self,
        d1: &Dictionary,
        d2: &Dictionary,
        depth: usize,
    ) -> Result<bool, EqualError> {
        if d1.len() != d2.len() {
            debug!(left = d1.len(), right = d2.len(), "dictionary size mismatch");
            return Ok(false);
        }
        let depth = self.descend(depth)?;
        for (key, v1) in d1 {
            let Some(v2) = d2.get(key) else {
                debug!(key = %key, "dictionary key missing on right side");
                return Ok(false);
            };
            let equal = if self.options.is_font_name_key(key) {
                self.font_names(v1, v2)
            } else {
                self.objects(v1, v2, depth)
            };
            match equal {
                Ok(true) => {}
                Ok(false) => {
                    debug!(key = %key, "dictionary value mismatch");
                    return Ok(false);
                }
                Err(err) => {
                    debug!(key = %key, error = %err, "dictionary value not comparable");
                    return Err(err);
                }
            }
        }
        debug!("dictionaries equal");
        Ok(true)
    }

    pub(crate) fn streams(&self, s1: &Stream, s2: &Stream, depth: usize) -> Result<bool, EqualError> {
        if !self.dicts(&s1.dict, &s2.dict, depth)? {
            return Ok(false);
        }
        match (&s1.raw, &s2.raw) {
            (Some(raw1), Some(raw2)) => Ok(raw1 == raw2),
            _ => Err(EqualError::PayloadNotLoaded),
        }
    }

    fn descend(&self, depth: usize) -> Result<usize, EqualError> {
        let next = depth + 1;
        if next > self.options.max_depth {
            return Err(EqualError::DepthLimitExceeded {
                limit: self.options.max_depth,
            });
        }
        Ok(next)
    }
}
