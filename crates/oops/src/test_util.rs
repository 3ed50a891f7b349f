// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Test utilities for the oops crate.
//!
//! This module is only available when the `test-util` feature is enabled.
//!
//! The fatal path normally ends the process. [`PanicOnExit`] replaces that with a panic carrying
//! an [`ExitRequested`] payload, and [`expect_exit`] turns the panic back into a value the test
//! can assert on.

use std::panic::{AssertUnwindSafe, catch_unwind, panic_any, resume_unwind};

use crate::{Fatal, Terminate};

/// Payload of the panic raised by [`PanicOnExit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitRequested {
    /// The exit status the process would have ended with.
    pub code: i32,
}

/// A [`Terminate`] implementation that panics instead of exiting.
#[derive(Debug, Default, Clone, Copy)]
pub struct PanicOnExit;

impl Terminate for PanicOnExit {
    fn terminate(&self, code: i32) -> ! {
        panic_any(ExitRequested { code })
    }
}

/// Returns a [`Fatal`] that panics with [`ExitRequested`] instead of exiting and does not write
/// to stderr.
#[must_use]
pub fn panicking_fatal() -> Fatal {
    Fatal::builder().terminator(PanicOnExit).echo_to_stderr(false).build()
}

/// Runs `f`, which is expected to reach the fatal path, and returns the requested exit.
///
/// # Panics
///
/// Panics if `f` returns normally. Panics that are not an [`ExitRequested`] are resumed.
#[cfg_attr(coverage_nightly, coverage(off))] // coverage doesn't handle panics well
pub fn expect_exit<R>(f: impl FnOnce() -> R) -> ExitRequested {
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(_) => panic!("expected the fatal path to terminate, but the operation returned"),
        Err(payload) => match payload.downcast::<ExitRequested>() {
            Ok(exit) => *exit,
            Err(other) => resume_unwind(other),
        },
    }
}

/// Asserts that an expression reaches the fatal path with the given exit status.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "test-util")]
/// # {
/// use oops::{assert_exit, sentinel, test_util::panicking_fatal};
///
/// let fatal = panicking_fatal();
/// assert_exit!(fatal.try_or_exit(|| Err::<(), _>(sentinel::TIMEOUT), "waiting for peers"), 1);
/// # }
/// ```
#[macro_export]
#[cfg_attr(coverage_nightly, coverage(off))] // coverage doesn't handle panics well
macro_rules! assert_exit {
    ($expr:expr, $code:expr $(,)?) => {{
        let exit = $crate::test_util::expect_exit(|| $expr);
        let expected: i32 = $code;
        assert_eq!(exit.code, expected, "fatal path exited with an unexpected status");
    }};
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentinel;

    #[test]
    fn panic_on_exit_carries_code() {
        let exit = expect_exit(|| PanicOnExit.terminate(3));
        assert_eq!(exit, ExitRequested { code: 3 });
    }

    #[test]
    fn assert_exit_matches() {
        let fatal = panicking_fatal();
        assert_exit!(fatal.try_or_exit(|| Err::<(), _>(sentinel::TIMEOUT), "ctx"), 1);
    }

    #[test]
    #[should_panic(expected = "expected the fatal path to terminate")]
    fn expect_exit_rejects_normal_return() {
        let _ = expect_exit(|| 5);
    }

    #[test]
    #[should_panic(expected = "unrelated")]
    fn expect_exit_resumes_foreign_panics() {
        let _ = expect_exit(|| -> u8 { panic!("unrelated") });
    }
}
