//! Flotilla Publish - package-manager command construction
//!
//! Builds and executes the npm/yarn commands that publish or pack a
//! package tarball. Process spawning is behind the [`ProcessExecutor`]
//! seam; this crate owns only the argument lists and execution options.

pub mod exec;
pub mod npm;

pub use exec::{ExecOptions, ExecOutput, ProcessExecutor, TokioExecutor};
pub use npm::{NpmPublisher, PublishOptions};
