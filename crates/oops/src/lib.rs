// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Small helpers for the "call a function, inspect its error" pattern.
//!
//! Each helper invokes the supplied operation exactly once, on the calling thread, and decides
//! what happens to its error:
//!
//! - [`catch`]: hand the error to a callback and carry on with a default value.
//! - [`annotate`]: prefix the error with context and propagate it, keeping the original as its
//!   source.
//! - [`try_or_exit`]: log the error and terminate the process.
//!
//! The [`sentinel`] module defines a catalog of error categories that all of these work with,
//! and [`ErrorExt`] matches them through any number of annotations.
//!
//! # Quick Start
//!
//! ```rust
//! use oops::{AnnotateExt, ErrorExt, Sentinel, catch, sentinel};
//!
//! fn load_profile(user: &str) -> Result<String, oops::Annotated<Sentinel>> {
//!     Err(sentinel::NOT_FOUND).annotate(format!("loading profile for {user}"))
//! }
//!
//! let profile = catch(
//!     || load_profile("ada"),
//!     |err| {
//!         assert!(err.is_sentinel(sentinel::NOT_FOUND));
//!         assert_eq!(err.to_string(), "loading profile for ada: resource not found");
//!     },
//! );
//!
//! assert_eq!(profile, "");
//! ```
//!
//! # Fatal errors
//!
//! [`try_or_exit`] and [`try_or_exit_with`] are for startup code where nothing sensible can be
//! done about a failure. The message is emitted as a `tracing` error event (target
//! `oops::fatal`) and echoed to stderr, then the process exits with status 1. Use [`Fatal`] to
//! configure the exit status or to swap the [`Terminate`] seam in tests:
//!
//! ```rust
//! use oops::Fatal;
//!
//! let fatal = Fatal::builder().exit_code(78).echo_to_stderr(false).build();
//! let workers: usize = fatal.try_or_exit(|| "8".parse::<usize>(), "parsing WORKERS");
//! assert_eq!(workers, 8);
//! ```

mod annotate;
mod builder;
mod catch;
mod error_ext;
mod fatal;
pub mod sentinel;
mod terminate;

#[cfg(any(feature = "test-util", test))]
pub mod test_util;

pub use annotate::{AnnotateExt, Annotated, AsErrorSource, annotate};
pub use builder::{DEFAULT_EXIT_CODE, FatalBuilder};
pub use catch::{CatchExt, catch};
pub use error_ext::{Chain, ErrorExt, chain};
pub use fatal::{Fatal, try_or_exit, try_or_exit_with};
pub use sentinel::Sentinel;
pub use terminate::{ProcessExit, Terminate};
