//! Indirect reference resolution capability.

use thiserror::Error;

use crate::{Object, ObjectId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("unresolved reference: object {0} not found")]
    Missing(ObjectId),
    #[error("unresolved reference: object {0} is free")]
    Free(ObjectId),
    #[error("reference chain starting at {id} exceeds {limit} hops")]
    ChainTooLong { id: ObjectId, limit: usize },
}

/// Dereferences possibly-indirect objects.
///
/// Implementations return non-reference input unchanged and follow
/// references until a direct object is reached. Resolution must not have
/// side effects and must terminate.
pub trait Resolver {
    fn resolve<'a>(&'a self, object: &'a Object) -> Result<&'a Object, ResolveError>;
}

impl<R: Resolver + ?Sized> Resolver for &R {
    fn resolve<'a>(&'a self, object: &'a Object) -> Result<&'a Object, ResolveError> {
        (**self).resolve(object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Identity;

    impl Resolver for Identity {
        fn resolve<'a>(&'a self, object: &'a Object) -> Result<&'a Object, ResolveError> {
            match object {
                Object::Reference(id) => Err(ResolveError::Missing(*id)),
                other => Ok(other),
            }
        }
    }

    #[test]
    fn borrowed_resolver_delegates() {
        let resolver = &Identity;
        let value = Object::from(3i64);
        assert_eq!(resolver.resolve(&value), Ok(&value));
        assert_eq!(
            (&resolver).resolve(&Object::reference(4, 0)),
            Err(ResolveError::Missing(ObjectId::new(4, 0)))
        );
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ResolveError::Missing(ObjectId::new(4, 0)).to_string(),
            "unresolved reference: object 4 0 R not found"
        );
        assert_eq!(
            ResolveError::ChainTooLong {
                id: ObjectId::new(1, 0),
                limit: 32
            }
            .to_string(),
            "reference chain starting at 1 0 R exceeds 32 hops"
        );
    }
}
