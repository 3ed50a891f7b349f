// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Well-known error categories.
//!
//! A [`Sentinel`] names a category of failure, such as "not found" or "rate limited". Code that
//! produces errors returns (or wraps) a sentinel; code that consumes errors matches on it,
//! directly or through the error chain with [`ErrorExt::is_sentinel`](crate::ErrorExt::is_sentinel).
//!
//! The built-in catalog covers the categories most applications need. Applications add their own
//! categories by declaring more constants with [`Sentinel::new`].
//!
//! # Examples
//!
//! ```rust
//! use oops::sentinel::{self, Sentinel};
//!
//! const QUOTA_EXHAUSTED: Sentinel = Sentinel::new("quota_exhausted", "quota exhausted");
//!
//! assert_eq!(sentinel::NOT_FOUND.to_string(), "resource not found");
//! assert_ne!(QUOTA_EXHAUSTED, sentinel::RATE_LIMITED);
//! ```

use std::fmt;

/// A named, comparable error category.
///
/// Sentinels are plain `Copy` values that compare by value. Two occurrences of the same category
/// are always equal, and no built-in sentinel is equal to another.
///
/// The [`Display`](fmt::Display) output is the description. The [`code`](Self::code) is a stable,
/// low-cardinality label suitable for log fields and metrics dimensions.
#[derive(Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{description}")]
pub struct Sentinel {
    code: &'static str,
    description: &'static str,
}

impl Sentinel {
    /// Declares a new category.
    ///
    /// Sentinels compare by value, not by identity, so the code must be unique across the
    /// application: a constant that repeats the code and description of another sentinel is
    /// indistinguishable from it when matching. Codes of the built-in catalog are listed in
    /// [`ALL`].
    #[must_use]
    pub const fn new(code: &'static str, description: &'static str) -> Self {
        Self { code, description }
    }

    /// Returns the stable machine-readable code, e.g. `not_found`.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.code
    }

    /// Returns the human-readable description, e.g. `resource not found`.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        self.description
    }

    /// Looks up a built-in sentinel by its code.
    ///
    /// Only the catalog in [`ALL`] is searched; application-defined sentinels are not known here.
    ///
    /// ```rust
    /// use oops::sentinel::{self, Sentinel};
    ///
    /// assert_eq!(Sentinel::from_code("timeout"), Some(sentinel::TIMEOUT));
    /// assert_eq!(Sentinel::from_code("no_such_code"), None);
    /// ```
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        ALL.iter().copied().find(|sentinel| sentinel.code == code)
    }
}

impl fmt::Debug for Sentinel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Sentinel").field(&self.code).finish()
    }
}

/// The requested resource was not found.
pub const NOT_FOUND: Sentinel = Sentinel::new("not_found", "resource not found");

/// A resource could not be created because it already exists.
pub const ALREADY_EXISTS: Sentinel = Sentinel::new("already_exists", "resource already exists");

/// An input argument is invalid.
pub const INVALID_ARGUMENT: Sentinel = Sentinel::new("invalid_argument", "invalid argument");

/// The caller lacks the privileges required for the operation.
pub const PERMISSION_DENIED: Sentinel = Sentinel::new("permission_denied", "permission denied");

/// Authentication is required but was not provided or failed.
pub const UNAUTHENTICATED: Sentinel = Sentinel::new("unauthenticated", "unauthenticated");

/// The operation exceeded its allowed time.
pub const TIMEOUT: Sentinel = Sentinel::new("timeout", "operation timed out");

/// Too many requests were made in a given time frame.
pub const RATE_LIMITED: Sentinel = Sentinel::new("rate_limited", "rate limit exceeded");

/// An input/output operation failed.
pub const IO_FAILURE: Sentinel = Sentinel::new("io_failure", "input/output operation failed");

/// A database operation failed.
pub const DATABASE_ERROR: Sentinel = Sentinel::new("database_error", "database operation failed");

/// A network request failed.
pub const NETWORK_FAILURE: Sentinel = Sentinel::new("network_failure", "network request failed");

/// The provided configuration is invalid.
pub const CONFIG_INVALID: Sentinel = Sentinel::new("config_invalid", "invalid configuration");

/// The operation conflicts with the current state of the resource.
pub const CONFLICT: Sentinel = Sentinel::new("conflict", "conflicting operation");

/// A condition required by the operation is not met.
pub const PRECONDITION_FAILED: Sentinel = Sentinel::new("precondition_failed", "precondition failed");

/// A value is outside the acceptable range.
pub const OUT_OF_RANGE: Sentinel = Sentinel::new("out_of_range", "value out of range");

/// The operation cannot be performed in the current state.
pub const STATE_INVALID: Sentinel = Sentinel::new("state_invalid", "invalid state for operation");

/// The built-in catalog, in declaration order.
pub const ALL: &[Sentinel] = &[
    NOT_FOUND,
    ALREADY_EXISTS,
    INVALID_ARGUMENT,
    PERMISSION_DENIED,
    UNAUTHENTICATED,
    TIMEOUT,
    RATE_LIMITED,
    IO_FAILURE,
    DATABASE_ERROR,
    NETWORK_FAILURE,
    CONFIG_INVALID,
    CONFLICT,
    PRECONDITION_FAILED,
    OUT_OF_RANGE,
    STATE_INVALID,
];

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::error::Error as StdError;

    use super::*;

    static_assertions::assert_impl_all!(Sentinel: Send, Sync, Copy, StdError);

    #[test]
    fn accessors() {
        assert_eq!(CONFLICT.code(), "conflict");
        assert_eq!(CONFLICT.description(), "conflicting operation");
    }

    #[test]
    fn debug_shows_code_only() {
        assert_eq!(format!("{NOT_FOUND:?}"), "Sentinel(\"not_found\")");
    }

    #[test]
    fn has_no_source() {
        assert!(NOT_FOUND.source().is_none());
    }

    #[test]
    fn codes_and_descriptions_are_unique() {
        let codes: HashSet<_> = ALL.iter().map(Sentinel::code).collect();
        let descriptions: HashSet<_> = ALL.iter().map(Sentinel::description).collect();

        assert_eq!(codes.len(), ALL.len());
        assert_eq!(descriptions.len(), ALL.len());
    }

    #[test]
    fn from_code_finds_every_entry() {
        for sentinel in ALL {
            assert_eq!(Sentinel::from_code(sentinel.code()), Some(*sentinel));
        }

        assert_eq!(Sentinel::from_code("NOT_FOUND"), None);
        assert_eq!(Sentinel::from_code(""), None);
    }

    #[test]
    fn custom_sentinel_with_same_code_but_other_text_is_distinct() {
        let impostor = Sentinel::new("not_found", "something else");
        assert_ne!(impostor, NOT_FOUND);
    }
}
