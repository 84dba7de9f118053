//! Platform-specific clipboard writers
//!
//! All OS interaction is isolated here. [`NativeClipboard`] is the primary
//! path; [`UtilityClipboard`] is the single fallback.

pub mod native;
pub mod utility;

pub use native::NativeClipboard;
pub use utility::{default_utilities, UtilityClipboard, UtilityCommand};

use crate::core::ClipboardExporter;

/// Exporter wired with the native clipboard and the utility fallback
pub fn system_exporter() -> ClipboardExporter {
    ClipboardExporter::new(
        Box::new(NativeClipboard::new()),
        Box::new(UtilityClipboard::new()),
    )
}
