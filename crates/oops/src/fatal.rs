// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Fatal-on-error helpers for top-level call sites.
//!
//! These are meant for startup and setup code where there is nothing sensible to do with an
//! error except report it and stop. Never use them where a caller could degrade gracefully.

use std::fmt::Display;
use std::panic::Location;
use std::sync::Arc;

use crate::{FatalBuilder, Terminate};

/// Logs a message and terminates the process when an operation fails.
///
/// A `Fatal` carries the exit status and the [`Terminate`] seam used to end the process. The
/// free functions [`try_or_exit`] and [`try_or_exit_with`] use `Fatal::default()`; construct a
/// custom instance with [`Fatal::builder`] to change the exit status or, in tests, to avoid
/// actually exiting.
///
/// On failure, the message is emitted as a `tracing` error event with target `oops::fatal`,
/// carrying the exit code and the caller's source location, and is echoed to stderr unless
/// disabled.
///
/// # Examples
///
/// ```rust
/// use oops::Fatal;
///
/// let fatal = Fatal::builder().exit_code(78).build();
/// let port: u16 = fatal.try_or_exit(|| "8080".parse::<u16>(), "parsing listen port");
/// assert_eq!(port, 8080);
/// ```
#[derive(Debug, Clone)]
pub struct Fatal {
    exit_code: i32,
    echo_to_stderr: bool,
    terminator: Arc<dyn Terminate>,
}

impl Fatal {
    /// Creates a new [`FatalBuilder`] for configuring a `Fatal` instance.
    #[must_use]
    pub fn builder() -> FatalBuilder {
        FatalBuilder::new()
    }

    pub(crate) fn from_builder(builder: FatalBuilder) -> Self {
        Self {
            exit_code: builder.exit_code,
            echo_to_stderr: builder.echo_to_stderr,
            terminator: builder.terminator,
        }
    }

    /// Returns the exit status used on failure.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        self.exit_code
    }

    /// Runs `operation` and returns its value, or terminates with `"<message>: <error>"`.
    #[track_caller]
    pub fn try_or_exit<T, E, F>(&self, operation: F, message: impl Display) -> T
    where
        F: FnOnce() -> Result<T, E>,
        E: Display,
    {
        match operation() {
            Ok(value) => value,
            Err(error) => self.exit(format!("{message}: {error}")),
        }
    }

    /// Runs `operation` and returns its value, or terminates with the message built by
    /// `message_fn` from the error.
    #[track_caller]
    pub fn try_or_exit_with<T, E, F, M, D>(&self, operation: F, message_fn: M) -> T
    where
        F: FnOnce() -> Result<T, E>,
        M: FnOnce(&E) -> D,
        D: Display,
    {
        match operation() {
            Ok(value) => value,
            Err(error) => self.exit(message_fn(&error)),
        }
    }

    /// Logs `message` and terminates.
    #[track_caller]
    pub fn exit(&self, message: impl Display) -> ! {
        let location = Location::caller();

        tracing::error!(target: "oops::fatal", exit_code = self.exit_code, %location, "{message}");

        if self.echo_to_stderr {
            eprintln!("{message}");
        }

        self.terminator.terminate(self.exit_code)
    }
}

impl Default for Fatal {
    fn default() -> Self {
        FatalBuilder::new().build()
    }
}

/// Runs `operation` and returns its value, or logs `"<message>: <error>"` and exits with status 1.
///
/// The process ends via [`std::process::exit`]: the stack is not unwound and destructors on
/// it do not run.
///
/// # Examples
///
/// ```rust
/// let home = oops::try_or_exit(|| "/srv/app".parse::<std::path::PathBuf>(), "resolving home");
/// assert_eq!(home, std::path::PathBuf::from("/srv/app"));
/// ```
#[track_caller]
pub fn try_or_exit<T, E, F>(operation: F, message: impl Display) -> T
where
    F: FnOnce() -> Result<T, E>,
    E: Display,
{
    Fatal::default().try_or_exit(operation, message)
}

/// Runs `operation` and returns its value, or logs the message built by `message_fn` from the
/// error and exits with status 1.
///
/// # Examples
///
/// ```rust
/// let retries: u32 = oops::try_or_exit_with(|| "3".parse::<u32>(), |e| format!("bad RETRIES value ({e})"));
/// assert_eq!(retries, 3);
/// ```
#[track_caller]
pub fn try_or_exit_with<T, E, F, M, D>(operation: F, message_fn: M) -> T
where
    F: FnOnce() -> Result<T, E>,
    M: FnOnce(&E) -> D,
    D: Display,
{
    Fatal::default().try_or_exit_with(operation, message_fn)
}
