// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt::{self, Debug, Display};

/// Borrows an error as the [`source()`](StdError::source) of an [`Annotated`] error.
///
/// Implemented for every `E: Error + 'static` and for `Box<dyn Error>` and
/// `Box<dyn Error + Send + Sync>`. The `M` parameter only keeps those implementations apart and
/// is always inferred.
pub trait AsErrorSource<M> {
    /// Returns this error as a trait object.
    fn as_error_source(&self) -> &(dyn StdError + 'static);
}

#[doc(hidden)]
#[derive(Debug)]
pub struct Typed;

#[doc(hidden)]
#[derive(Debug)]
pub struct Boxed;

impl<E: StdError + 'static> AsErrorSource<Typed> for E {
    fn as_error_source(&self) -> &(dyn StdError + 'static) {
        self
    }
}

impl AsErrorSource<Boxed> for Box<dyn StdError + Send + Sync> {
    fn as_error_source(&self) -> &(dyn StdError + 'static) {
        &**self
    }
}

impl AsErrorSource<Boxed> for Box<dyn StdError> {
    fn as_error_source(&self) -> &(dyn StdError + 'static) {
        &**self
    }
}

/// An error with a contextual message prepended.
///
/// Displays as `"<message>: <source>"` and keeps the original error reachable through
/// [`source()`](StdError::source), so category matching with
/// [`ErrorExt`](crate::ErrorExt) still works after any number of annotations. The original may
/// be a concrete error type or a boxed `dyn Error`.
///
/// # Examples
///
/// ```rust
/// use std::error::Error;
/// use oops::{Annotated, sentinel};
///
/// let err = Annotated::new("opening database", sentinel::DATABASE_ERROR);
///
/// assert_eq!(err.to_string(), "opening database: database operation failed");
/// assert!(err.source().is_some());
/// ```
#[derive(Clone)]
pub struct Annotated<E> {
    message: Cow<'static, str>,
    source: E,
    as_source: fn(&E) -> &(dyn StdError + 'static),
}

impl<E> Annotated<E> {
    /// Wraps `error` with `message`.
    #[must_use]
    pub fn new<M>(message: impl Into<Cow<'static, str>>, error: E) -> Self
    where
        E: AsErrorSource<M>,
    {
        Self {
            message: message.into(),
            source: error,
            as_source: <E as AsErrorSource<M>>::as_error_source,
        }
    }

    /// Returns the context message, without the original error text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the wrapped error.
    #[must_use]
    pub fn cause(&self) -> &E {
        &self.source
    }

    /// Discards the context and returns the wrapped error.
    #[must_use]
    pub fn into_cause(self) -> E {
        self.source
    }
}

impl<E: Debug> Debug for Annotated<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Annotated")
            .field("message", &self.message)
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

impl<E: Display> Display for Annotated<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.message, self.source)
    }
}

impl<E: Debug + Display> StdError for Annotated<E> {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some((self.as_source)(&self.source))
    }
}

/// Runs `operation` and annotates its error with `message`.
///
/// The operation is invoked exactly once. On success this returns `Ok(())`.
///
/// # Errors
///
/// Returns an [`Annotated`] error wrapping whatever `operation` returned, displayed as
/// `"<message>: <original error>"`.
///
/// # Examples
///
/// ```rust
/// use oops::{ErrorExt, annotate, sentinel};
///
/// let err = annotate(|| Err(sentinel::CONFIG_INVALID), "loading config").unwrap_err();
///
/// assert_eq!(err.to_string(), "loading config: invalid configuration");
/// assert!(err.is_sentinel(sentinel::CONFIG_INVALID));
///
/// assert!(annotate(|| Ok::<(), oops::Sentinel>(()), "loading config").is_ok());
/// ```
pub fn annotate<E, F, M>(operation: F, message: &'static str) -> Result<(), Annotated<E>>
where
    F: FnOnce() -> Result<(), E>,
    E: AsErrorSource<M>,
{
    operation().annotate(message)
}

/// Adds context to the error of a `Result`.
pub trait AnnotateExt<T, E> {
    /// Wraps the error, if any, in an [`Annotated`] with `message`.
    ///
    /// # Errors
    ///
    /// Returns the annotated error if `self` is an error.
    fn annotate<M>(self, message: impl Into<Cow<'static, str>>) -> Result<T, Annotated<E>>
    where
        E: AsErrorSource<M>;

    /// Wraps the error, if any, in an [`Annotated`] with a lazily built message.
    ///
    /// `message_fn` is only called if `self` is an error.
    ///
    /// # Errors
    ///
    /// Returns the annotated error if `self` is an error.
    fn annotate_with<M, F, S>(self, message_fn: F) -> Result<T, Annotated<E>>
    where
        E: AsErrorSource<M>,
        F: FnOnce() -> S,
        S: Into<Cow<'static, str>>;
}

impl<T, E> AnnotateExt<T, E> for Result<T, E> {
    fn annotate<M>(self, message: impl Into<Cow<'static, str>>) -> Result<T, Annotated<E>>
    where
        E: AsErrorSource<M>,
    {
        self.map_err(|error| Annotated::new(message, error))
    }

    fn annotate_with<M, F, S>(self, message_fn: F) -> Result<T, Annotated<E>>
    where
        E: AsErrorSource<M>,
        F: FnOnce() -> S,
        S: Into<Cow<'static, str>>,
    {
        self.map_err(|error| Annotated::new(message_fn(), error))
    }
}
