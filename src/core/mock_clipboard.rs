//! In-memory clipboard writers for testing without a display server

use super::clipboard::ClipboardWriter;
use crate::utils::ClipboardError;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Clipboard that keeps the last written text in memory
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
    writes: AtomicUsize,
}

impl MemoryClipboard {
    pub fn contents(&self) -> Option<String> {
        self.contents.lock().ok().and_then(|c| c.clone())
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl ClipboardWriter for MemoryClipboard {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut guard = self
            .contents
            .lock()
            .map_err(|_| ClipboardError::Unavailable("poisoned".to_string()))?;
        *guard = Some(text.to_string());
        Ok(())
    }
}

// Lets a test keep a handle on the clipboard it hands to the exporter.
#[async_trait::async_trait]
impl ClipboardWriter for Arc<MemoryClipboard> {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        MemoryClipboard::write_text(self, text).await
    }
}

/// Clipboard that always fails with the given reason
#[derive(Debug)]
pub struct FailingClipboard {
    reason: String,
}

impl FailingClipboard {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait::async_trait]
impl ClipboardWriter for FailingClipboard {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable(self.reason.clone()))
    }
}
