//! studentlookup - student account lookup
//!
//! Core library: normalisation, roster lookup, masking, and clipboard export.

// Public modules
pub mod config;
pub mod constants;
pub mod core;
pub mod logger;
pub mod models;
pub mod normalize;
pub mod platform;
pub mod roster;
pub mod utils;

// Re-export commonly used types
pub use config::AppConfig;
pub use crate::core::{
    ClipboardExporter, ClipboardWriter, DubeolsikTransliterator, FormMessage, FormOutcome,
    LookupService, MessageKind, QueryState, ResultView, Transliterator,
};
pub use models::{mask, Record, SecureString};
pub use normalize::{normalize_identifier, normalize_name, IdentifierMode};
pub use utils::{ClipboardError, LookupError, RosterError, StateError};
