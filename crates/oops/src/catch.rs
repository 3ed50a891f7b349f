// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

/// Runs `operation` and hands any error to `or_else`, returning a value either way.
///
/// On success the operation's value is returned and `or_else` is never called. On failure
/// `or_else` is called exactly once with the error, before this function returns, and the
/// result is `T::default()`. Callers that need to tell the two apart must do so from inside
/// the handler.
///
/// A panic raised by `or_else` propagates to the caller.
///
/// # Examples
///
/// ```rust
/// use oops::{catch, sentinel};
///
/// let mut failures = Vec::new();
///
/// let hits: u64 = catch(|| Ok::<_, oops::Sentinel>(42), |e| failures.push(e));
/// assert_eq!(hits, 42);
///
/// let hits: u64 = catch(|| Err(sentinel::TIMEOUT), |e| failures.push(e));
/// assert_eq!(hits, 0);
///
/// assert_eq!(failures, [sentinel::TIMEOUT]);
/// ```
pub fn catch<T, E, F, H>(operation: F, or_else: H) -> T
where
    T: Default,
    F: FnOnce() -> Result<T, E>,
    H: FnOnce(E),
{
    operation().or_handle(or_else)
}

/// Handles the error of a `Result` in place, yielding a value either way.
pub trait CatchExt<T, E> {
    /// Returns the success value, or calls `or_else` with the error and returns `T::default()`.
    ///
    /// ```rust
    /// use oops::{CatchExt, sentinel};
    ///
    /// let parsed: u16 = "70000".parse::<u16>().or_handle(|e| eprintln!("ignoring bad port: {e}"));
    /// assert_eq!(parsed, 0);
    /// ```
    fn or_handle<H>(self, or_else: H) -> T
    where
        H: FnOnce(E);
}

impl<T, E> CatchExt<T, E> for Result<T, E>
where
    T: Default,
{
    fn or_handle<H>(self, or_else: H) -> T
    where
        H: FnOnce(E),
    {
        match self {
            Ok(value) => value,
            Err(error) => {
                or_else(error);
                T::default()
            }
        }
    }
}
