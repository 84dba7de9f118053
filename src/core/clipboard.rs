//! Platform-agnostic clipboard export
//!
//! An export tries the primary writer once and, if that fails, the fallback
//! writer once. There is no further retry.

use crate::constants::{EXPORT_LOGIN_LABEL, EXPORT_SECRET_LABEL};
use crate::logger;
use crate::models::Record;
use crate::utils::ClipboardError;
use async_trait::async_trait;

/// Something that can put text on the system clipboard
///
/// Implementations handle the platform specifics (native clipboard API,
/// external clipboard utility, in-memory test double).
#[async_trait]
pub trait ClipboardWriter: Send + Sync {
    /// Short name used in log lines
    fn name(&self) -> &'static str;

    /// Replace the clipboard contents with `text`
    ///
    /// # Security
    /// - MUST NOT log `text`
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Which step of the chain succeeded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportPath {
    Primary,
    Fallback,
}

/// Two-line text block placed on the clipboard
pub fn format_export(record: &Record) -> String {
    format!(
        "{}: {}\n{}: {}",
        EXPORT_LOGIN_LABEL,
        record.login_id(),
        EXPORT_SECRET_LABEL,
        record.secret().as_str()
    )
}

/// Primary writer with a single fallback
pub struct ClipboardExporter {
    primary: Box<dyn ClipboardWriter>,
    fallback: Box<dyn ClipboardWriter>,
}

impl ClipboardExporter {
    pub fn new(primary: Box<dyn ClipboardWriter>, fallback: Box<dyn ClipboardWriter>) -> Self {
        Self { primary, fallback }
    }

    /// Copy the record's login and secret to the clipboard.
    ///
    /// # Returns
    /// * `Ok(ExportPath)` - Which writer succeeded
    /// * `Err(ClipboardError::Exhausted)` - Both writers failed
    pub async fn export(&self, record: &Record) -> Result<ExportPath, ClipboardError> {
        let text = format_export(record);

        let primary_err = match self.primary.write_text(&text).await {
            Ok(()) => return Ok(ExportPath::Primary),
            Err(e) => e,
        };
        logger::log_warn(&format!(
            "Clipboard write via {} failed, trying {}: {}",
            self.primary.name(),
            self.fallback.name(),
            primary_err
        ));

        match self.fallback.write_text(&text).await {
            Ok(()) => Ok(ExportPath::Fallback),
            Err(fallback_err) => {
                logger::log_error(&format!(
                    "Clipboard write via {} failed: {}",
                    self.fallback.name(),
                    fallback_err
                ));
                Err(ClipboardError::Exhausted {
                    primary: primary_err.to_string(),
                    fallback: fallback_err.to_string(),
                })
            }
        }
    }
}
