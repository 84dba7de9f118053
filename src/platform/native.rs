//! Native clipboard via `arboard`
//!
//! On X11 and Wayland the process that last wrote the clipboard serves its
//! contents, so the handle is opened once and kept for the life of the
//! writer. Dropping it would empty the clipboard for other applications.

use crate::core::ClipboardWriter;
use crate::logger;
use crate::utils::ClipboardError;
use async_trait::async_trait;
use std::sync::Mutex;

/// Platform clipboard API (Windows, macOS, X11, Wayland)
///
/// The handle is opened on first write. In headless sessions opening it
/// fails, which is the cue for the exporter to try the fallback writer.
pub struct NativeClipboard {
    handle: Mutex<Option<arboard::Clipboard>>,
}

impl NativeClipboard {
    pub fn new() -> Self {
        NativeClipboard {
            handle: Mutex::new(None),
        }
    }

    /// True while an open clipboard handle is held
    pub fn is_connected(&self) -> bool {
        self.handle
            .lock()
            .map(|guard| guard.is_some())
            .unwrap_or(false)
    }

    /// Synchronous write; the platform APIs behind arboard are blocking
    fn write_sync(&self, text: &str) -> Result<(), ClipboardError> {
        let mut guard = self
            .handle
            .lock()
            .map_err(|_| ClipboardError::Unavailable("clipboard lock poisoned".to_string()))?;

        if guard.is_none() {
            let clipboard = arboard::Clipboard::new()
                .map_err(|e| ClipboardError::Unavailable(format!("clipboard init: {}", e)))?;
            *guard = Some(clipboard);
        }

        let result = match guard.as_mut() {
            Some(clipboard) => clipboard.set_text(text.to_owned()),
            None => {
                return Err(ClipboardError::Unavailable(
                    "clipboard not initialised".to_string(),
                ))
            }
        };

        match result {
            Ok(()) => {
                logger::log_debug_verbose("Native clipboard accepted text");
                Ok(())
            }
            Err(e) => {
                // Reconnect on the next write
                *guard = None;
                Err(ClipboardError::Unavailable(format!("clipboard set: {}", e)))
            }
        }
    }
}

impl Default for NativeClipboard {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClipboardWriter for NativeClipboard {
    fn name(&self) -> &'static str {
        "native clipboard"
    }

    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.write_sync(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_without_handle() {
        assert!(!NativeClipboard::new().is_connected());
    }

    #[tokio::test]
    async fn handle_outlives_successful_write() {
        // Headless runs fail to open the clipboard; either way the handle
        // must be held exactly when the write succeeded.
        let clip = NativeClipboard::new();
        let result = clip.write_text("Google ID: a\nPW: b").await;
        assert_eq!(clip.is_connected(), result.is_ok());

        let again = clip.write_text("Google ID: a\nPW: c").await;
        assert_eq!(clip.is_connected(), again.is_ok());
    }
}
