//! # Domain Models
//!
//! Roster records and the secure string that holds each account password.
//!
//! ## Security Design
//!
//! The [`SecureString`] type keeps passwords out of logs and debug output:
//! - Secret data is zeroed on drop
//! - Never exposed in `Debug` or `Display` implementations
//! - [`mask`] produces the placeholder shown until the user asks to reveal
//!
//! Records are immutable once built; the roster is loaded at startup and never
//! written back.

pub mod record;

pub use record::{mask, Record, SecureString};
