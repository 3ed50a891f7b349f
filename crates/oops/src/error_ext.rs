// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::error::Error as StdError;
use std::iter::FusedIterator;

use crate::Sentinel;

/// Iterates an error and then each of its transitive sources, outermost first.
///
/// # Examples
///
/// ```rust
/// use oops::{AnnotateExt, chain, sentinel};
///
/// let err = Err::<(), _>(sentinel::NOT_FOUND).annotate("loading user").unwrap_err();
/// let messages: Vec<String> = chain(&err).map(ToString::to_string).collect();
///
/// assert_eq!(messages, ["loading user: resource not found", "resource not found"]);
/// ```
pub fn chain<'a>(error: &'a (dyn StdError + 'static)) -> Chain<'a> {
    Chain { next: Some(error) }
}

/// Iterator returned by [`chain`].
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn StdError + 'static)>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn StdError + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

impl FusedIterator for Chain<'_> {}

/// Chain-aware inspection of errors.
///
/// Implemented for every `E: Error + 'static` and for `dyn Error` trait objects, so it works on
/// concrete errors and on `Box<dyn Error + Send + Sync>` alike. The trait is sealed.
///
/// # Examples
///
/// ```rust
/// use oops::{AnnotateExt, ErrorExt, sentinel};
///
/// fn find_user(id: u32) -> Result<String, oops::Annotated<oops::Sentinel>> {
///     Err(sentinel::NOT_FOUND).annotate(format!("looking up user {id}"))
/// }
///
/// let err = find_user(7).unwrap_err();
/// assert!(err.is_sentinel(sentinel::NOT_FOUND));
/// assert!(!err.is_sentinel(sentinel::PERMISSION_DENIED));
/// assert_eq!(err.to_string(), "looking up user 7: resource not found");
/// ```
pub trait ErrorExt: sealed::AsChainRoot {
    /// Returns `true` if this error, or any error in its source chain, is `sentinel`.
    fn is_sentinel(&self, sentinel: Sentinel) -> bool {
        sentinels(self.as_chain_root()).any(|found| found == sentinel)
    }

    /// Returns the outermost sentinel in the chain, including this error itself.
    fn sentinel(&self) -> Option<Sentinel> {
        sentinels(self.as_chain_root()).next()
    }

    /// Finds the first source error of type `T`.
    ///
    /// Only the **source chain** is searched, not this error itself.
    fn find_source<T: StdError + 'static>(&self) -> Option<&T> {
        self.as_chain_root()
            .source()
            .and_then(|source| chain(source).find_map(|err| err.downcast_ref::<T>()))
    }

    /// Returns the deepest error in the chain. An error without a source is its own root cause.
    fn root_cause(&self) -> &(dyn StdError + 'static) {
        let mut root = self.as_chain_root();
        while let Some(source) = root.source() {
            root = source;
        }
        root
    }
}

impl<T: sealed::AsChainRoot + ?Sized> ErrorExt for T {}

fn sentinels<'a>(error: &'a (dyn StdError + 'static)) -> impl Iterator<Item = Sentinel> + 'a {
    chain(error).filter_map(|err| err.downcast_ref::<Sentinel>().copied())
}

mod sealed {
    use std::error::Error as StdError;

    pub trait AsChainRoot {
        fn as_chain_root(&self) -> &(dyn StdError + 'static);
    }

    impl<E: StdError + 'static> AsChainRoot for E {
        fn as_chain_root(&self) -> &(dyn StdError + 'static) {
            self
        }
    }

    impl AsChainRoot for dyn StdError + 'static {
        fn as_chain_root(&self) -> &(dyn StdError + 'static) {
            self
        }
    }

    impl AsChainRoot for dyn StdError + Send + Sync + 'static {
        fn as_chain_root(&self) -> &(dyn StdError + 'static) {
            self
        }
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentinel;

    #[derive(Debug, thiserror::Error)]
    #[error("outer")]
    struct Outer(#[source] std::io::Error);

    #[test]
    fn chain_of_leaf_yields_only_itself() {
        let err = sentinel::TIMEOUT;
        assert_eq!(chain(&err).count(), 1);
    }

    #[test]
    fn chain_is_fused() {
        let err = sentinel::TIMEOUT;
        let mut iter = chain(&err);
        assert!(iter.next().is_some());
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }

    #[test]
    fn find_source_skips_self() {
        let err = Outer(std::io::Error::other("disk full"));
        assert!(err.find_source::<Outer>().is_none());
        assert_eq!(err.find_source::<std::io::Error>().map(ToString::to_string).as_deref(), Some("disk full"));
    }

    #[test]
    fn root_cause_of_leaf_is_itself() {
        let err = sentinel::CONFLICT;
        assert!(err.root_cause().is::<Sentinel>());
    }

    #[test]
    fn sentinel_on_error_without_one() {
        let err = Outer(std::io::Error::other("disk full"));
        assert_eq!(err.sentinel(), None);
        assert!(!err.is_sentinel(sentinel::IO_FAILURE));
    }

    #[test]
    fn works_through_boxed_trait_objects() {
        let boxed: Box<dyn StdError + Send + Sync> = Box::new(sentinel::RATE_LIMITED);
        assert!(boxed.is_sentinel(sentinel::RATE_LIMITED));
        assert_eq!(boxed.sentinel(), Some(sentinel::RATE_LIMITED));

        let plain: Box<dyn StdError> = Box::new(sentinel::RATE_LIMITED);
        assert!(plain.is_sentinel(sentinel::RATE_LIMITED));
    }
}
