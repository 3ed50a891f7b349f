// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::sync::Arc;

use crate::{Fatal, ProcessExit, Terminate};

/// Exit status used by [`Fatal`] unless configured otherwise.
pub const DEFAULT_EXIT_CODE: i32 = 1;

/// Builder for creating [`Fatal`] instances with custom configurations.
#[derive(Debug)]
pub struct FatalBuilder {
    pub(crate) exit_code: i32,
    pub(crate) echo_to_stderr: bool,
    pub(crate) terminator: Arc<dyn Terminate>,
}

impl Default for FatalBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FatalBuilder {
    /// Creates a new [`FatalBuilder`] with default settings.
    ///
    /// The defaults exit with status [`DEFAULT_EXIT_CODE`], echo the message to stderr, and
    /// terminate through [`ProcessExit`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            exit_code: DEFAULT_EXIT_CODE,
            echo_to_stderr: true,
            terminator: Arc::new(ProcessExit),
        }
    }

    /// Sets the exit status passed to the terminator.
    #[must_use]
    pub fn exit_code(mut self, code: i32) -> Self {
        self.exit_code = code;
        self
    }

    /// Sets whether the fatal message is also written to stderr.
    ///
    /// The message is always emitted as a `tracing` event. The stderr copy makes it visible when
    /// the application has not installed a subscriber.
    #[must_use]
    pub fn echo_to_stderr(mut self, echo: bool) -> Self {
        self.echo_to_stderr = echo;
        self
    }

    /// Sets how the process is terminated.
    #[must_use]
    pub fn terminator(mut self, terminator: impl Terminate + 'static) -> Self {
        self.terminator = Arc::new(terminator);
        self
    }

    /// Builds the [`Fatal`] instance.
    #[must_use]
    pub fn build(self) -> Fatal {
        Fatal::from_builder(self)
    }
}
