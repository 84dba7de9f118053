//! # Utilities Module
//!
//! Cross-cutting concerns shared by the lookup core and the platform layer.
//!
//! ## Modules
//!
//! - [`errors`]: Typed error hierarchy using `thiserror` for domain-specific errors
//!
//! Error types live here so that `core`, `platform`, and the roster loader can
//! all depend on them without depending on each other. The form handlers turn
//! every one of them into a user-facing message; none are fatal.

pub mod errors;

pub use errors::{ClipboardError, LookupError, RosterError, StateError};
