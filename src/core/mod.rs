//! Core business logic (platform-agnostic)
//!
//! CRITICAL: This module MUST NOT import platform-specific code.

pub mod clipboard;
pub mod form;
pub mod lookup;
pub mod state;
pub mod transliterate;

// Test doubles for the clipboard boundary (tests only)
#[cfg(test)]
pub mod mock_clipboard;

pub use clipboard::{format_export, ClipboardExporter, ClipboardWriter, ExportPath};
pub use form::{
    handle_copy, handle_reset, handle_submit, handle_toggle, FormMessage, FormOutcome, MessageKind,
};
pub use lookup::LookupService;
pub use state::{QueryState, ResultView};
pub use transliterate::{DubeolsikTransliterator, Transliterator};
