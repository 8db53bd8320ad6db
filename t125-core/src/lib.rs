//! Core types and utilities for the T.125 MCS PER codec
//!
//! This crate provides the error type, the injectable diagnostic sink and
//! the object identifier value type shared by the codec and its callers.

pub mod error;
pub mod diagnostics;
pub mod object_identifier;

pub use error::{McsError, McsResult};
pub use diagnostics::{DiagnosticSink, Level, LogSink, NoopSink};
pub use object_identifier::ObjectIdentifier;
