#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/blackbox/src/lib.rs
//!
//! # Overview
//!
//! `blackbox` is a development-time console logging facility. Call sites
//! tag each message with a feature from a closed catalog and a syslog-style
//! [`Priority`], and the message reaches the console only when (a) the
//! build is diagnostic and (b) that feature's toggle is on. Teams can leave
//! print statements scattered through a codebase and decide, per feature
//! area, which ones are noisy right now - without touching the statements
//! themselves.
//!
//! # Design
//!
//! The pipeline is four small pieces. [`Priority`] orders the eight
//! severities and owns their uppercase display names. [`LogFeature`] is the
//! capability query; the shipped [`Feature`] catalog implements it with a
//! static per-leaf toggle table. [`render`] assembles the deterministic
//! multi-line block from a priority, a [`CallSite`], and
//! caller-pre-stringified message parts. [`emit`] is the facade: a
//! conditionally compiled build-mode gate, the feature gate, and one
//! contiguous write to a locked stdout [`ConsoleSink`](blackbox_sink::ConsoleSink).
//!
//! The [`blackbox!`] macro is the ergonomic entry: it captures the
//! call-site file, function, and line, stringifies its arguments, and
//! constant-folds to nothing outside diagnostic builds. The
//! `console-logging` cargo feature keeps diagnostics alive in release
//! builds when explicitly requested.
//!
//! # Invariants
//!
//! - Every emit call is one-shot and side-effect-only; no state is carried
//!   between invocations.
//! - The feature-toggle table is fixed at build time; there is no runtime
//!   mutation API.
//! - [`render`] is pure: identical inputs always produce byte-identical
//!   blocks.
//! - No operation here ever faults the caller. Malformed call-site paths
//!   degrade to an empty file stem; sink write errors are discarded.
//!
//! # Examples
//!
//! Drive the gate with a custom catalog and an in-memory sink:
//!
//! ```
//! use blackbox::{CallSite, LogFeature, Priority};
//! use blackbox_sink::ConsoleSink;
//!
//! #[derive(Copy, Clone)]
//! struct Verbose;
//!
//! impl LogFeature for Verbose {
//!     fn should_log(self) -> bool {
//!         true
//!     }
//! }
//!
//! let mut sink = ConsoleSink::new(Vec::new());
//! let site = CallSite { file: "/a/b/Foo.swift", function: "bar()", line: 42 };
//! blackbox::emit_to(&mut sink, &["hello"], Verbose, Priority::Error, site)?;
//!
//! let output = String::from_utf8(sink.into_inner()).unwrap();
//! assert_eq!(output, "\n[ERROR]\nFoo.bar():42\nhello\n");
//! # Ok::<(), std::io::Error>(())
//! ```
//!
//! Or tag statements in place with the macro; the shipped catalog stays
//! silent until a toggle is flipped:
//!
//! ```
//! use blackbox::{Core, Feature, Priority};
//!
//! blackbox::blackbox!(Feature::Core(Core::Api), Priority::Debug, "request sent");
//! ```
//!
//! # See also
//!
//! - [`blackbox_sink`] for the console sink primitive.
//! - The `tracing_bridge` module (feature `tracing`) to route standard
//!   tracing events through the same feature gate.

mod feature;
mod format;
mod gate;
mod macros;
mod priority;
#[cfg(feature = "tracing")]
pub mod tracing_bridge;

pub use feature::{Analytics, Core, Entitlements, Feature, LogFeature};
pub use format::{file_stem, render, CallSite};
pub use gate::{emit, emit_to, DIAGNOSTICS_ENABLED};
pub use priority::Priority;
