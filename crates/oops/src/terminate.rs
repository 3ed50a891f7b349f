// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt::Debug;

/// Ends the process on behalf of [`Fatal`](crate::Fatal).
///
/// This is the seam through which the fatal path leaves the program. Production code uses
/// [`ProcessExit`]; tests substitute an implementation that does not actually exit, such as
/// `test_util::PanicOnExit` (available with the `test-util` feature).
pub trait Terminate: Debug + Send + Sync {
    /// Terminates with the given exit status. Must not return.
    fn terminate(&self, code: i32) -> !;
}

/// Terminates via [`std::process::exit`]: no unwinding, no destructors on the current stack.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessExit;

impl Terminate for ProcessExit {
    #[cfg_attr(test, mutants::skip)] // Would end the test process.
    fn terminate(&self, code: i32) -> ! {
        std::process::exit(code)
    }
}
