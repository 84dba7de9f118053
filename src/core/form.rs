//! Form event handlers
//!
//! Each handler takes the current [`QueryState`] by value and returns the next
//! state plus the message to show. Failures are turned into messages here and
//! never escape the event that caused them.

use crate::constants::{
    MSG_COPIED, MSG_COPY_FAILED, MSG_FOUND, MSG_MISSING_INPUT, MSG_NOT_FOUND, MSG_SEARCH_FIRST,
    MSG_TRANSLITERATION_UNAVAILABLE,
};
use crate::core::clipboard::ClipboardExporter;
use crate::core::lookup::LookupService;
use crate::core::state::QueryState;
use crate::logger;
use crate::utils::LookupError;
use std::fmt;

/// Semantic category of a user message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Error,
    Ok,
    Info,
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageKind::Error => write!(f, "error"),
            MessageKind::Ok => write!(f, "ok"),
            MessageKind::Info => write!(f, "info"),
        }
    }
}

/// Text for the message region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormMessage {
    pub text: String,
    pub kind: MessageKind,
}

impl FormMessage {
    pub fn new(text: impl Into<String>, kind: MessageKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, MessageKind::Error)
    }

    pub fn ok(text: impl Into<String>) -> Self {
        Self::new(text, MessageKind::Ok)
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(text, MessageKind::Info)
    }

    /// The cleared message region
    pub fn empty() -> Self {
        Self::info("")
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Next state and message after one event
#[derive(Debug, Clone)]
pub struct FormOutcome {
    pub state: QueryState,
    pub message: FormMessage,
}

impl FormOutcome {
    fn new(state: QueryState, message: FormMessage) -> Self {
        Self { state, message }
    }
}

fn lookup_message(err: &LookupError) -> FormMessage {
    match err {
        LookupError::MissingInput => FormMessage::error(MSG_MISSING_INPUT),
        LookupError::NotFound => FormMessage::error(MSG_NOT_FOUND),
        LookupError::TransliterationUnavailable => {
            FormMessage::error(MSG_TRANSLITERATION_UNAVAILABLE)
        }
    }
}

/// Submit: a new query always replaces the previous result
pub fn handle_submit(service: &LookupService, identifier: &str, name: &str) -> FormOutcome {
    match service.search(identifier, name) {
        Ok(record) => FormOutcome::new(
            QueryState::resolved(record.clone()),
            FormMessage::ok(MSG_FOUND),
        ),
        Err(err) => FormOutcome::new(QueryState::cleared(), lookup_message(&err)),
    }
}

/// Reset: clear the result and the message
pub fn handle_reset() -> FormOutcome {
    FormOutcome::new(QueryState::cleared(), FormMessage::empty())
}

/// Toggle reveal; without a result this leaves the state untouched
pub fn handle_toggle(state: QueryState) -> FormOutcome {
    match state.toggled() {
        Ok(next) => FormOutcome::new(next, FormMessage::empty()),
        // toggled() only fails on the cleared state
        Err(_) => FormOutcome::new(QueryState::cleared(), FormMessage::info(MSG_SEARCH_FIRST)),
    }
}

/// Copy the resolved login and secret to the clipboard
///
/// The query state is returned unchanged whatever the outcome.
pub async fn handle_copy(state: QueryState, exporter: &ClipboardExporter) -> FormOutcome {
    let Some(record) = state.record() else {
        return FormOutcome::new(state, FormMessage::info(MSG_SEARCH_FIRST));
    };

    let message = match exporter.export(record).await {
        Ok(path) => {
            logger::log_debug(&format!("Clipboard export succeeded via {:?} path", path));
            FormMessage::ok(MSG_COPIED)
        }
        Err(e) => {
            logger::log_error(&format!("Clipboard export failed: {}", e));
            FormMessage::error(MSG_COPY_FAILED)
        }
    };
    FormOutcome::new(state, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::mock_clipboard::{FailingClipboard, MemoryClipboard};
    use crate::core::transliterate::DubeolsikTransliterator;
    use crate::models::mask;
    use crate::normalize::IdentifierMode;
    use crate::roster::builtin_records;
    use std::sync::Arc;

    fn service() -> LookupService {
        LookupService::new(builtin_records(), IdentifierMode::Digits)
            .with_transliterator(Box::new(DubeolsikTransliterator::new()))
    }

    #[test]
    fn submit_match_shows_masked_result() {
        let outcome = handle_submit(&service(), "10501", "홍길동");

        assert_eq!(outcome.message, FormMessage::ok(MSG_FOUND));
        let view = outcome.state.view().expect("result shown");
        assert_eq!(view.login_id, "s10501@school.kr");
        assert_eq!(view.secret, mask("pw-10501"));
        assert!(view.secret.chars().count() >= 6);
    }

    #[test]
    fn submit_then_toggle_reveals_secret() {
        let outcome = handle_submit(&service(), "10501", "홍길동");
        let outcome = handle_toggle(outcome.state);
        assert_eq!(outcome.state.view().unwrap().secret, "pw-10501");

        let outcome = handle_toggle(outcome.state);
        assert!(!outcome.state.is_revealed());
    }

    #[test]
    fn submit_miss_clears_previous_result() {
        let svc = service();
        let found = handle_submit(&svc, "10501", "홍길동");
        assert!(found.state.has_result());

        let missed = handle_submit(&svc, "99999", "없음");
        assert_eq!(missed.message, FormMessage::error(MSG_NOT_FOUND));
        assert!(missed.state.view().is_none());
    }

    #[test]
    fn submit_blank_is_validation_error() {
        let outcome = handle_submit(&service(), "10501", "");
        assert_eq!(outcome.message, FormMessage::error(MSG_MISSING_INPUT));
        assert!(!outcome.state.has_result());
    }

    #[test]
    fn submit_reports_missing_transliterator() {
        let svc = LookupService::new(builtin_records(), IdentifierMode::Digits);
        let outcome = handle_submit(&svc, "10501", "ghdrlfehd");
        assert_eq!(
            outcome.message,
            FormMessage::error(MSG_TRANSLITERATION_UNAVAILABLE)
        );
    }

    #[test]
    fn reset_clears_everything() {
        let outcome = handle_submit(&service(), "10501", "홍길동");
        assert!(outcome.state.has_result());
        let reset = handle_reset();
        assert!(!reset.state.has_result());
        assert!(reset.message.is_empty());
    }

    #[test]
    fn toggle_without_result_is_info_noop() {
        let outcome = handle_toggle(QueryState::cleared());
        assert_eq!(outcome.message, FormMessage::info(MSG_SEARCH_FIRST));
        assert!(!outcome.state.has_result());
        assert!(!outcome.state.is_revealed());
    }

    #[tokio::test]
    async fn copy_without_result_is_info_noop() {
        let clip = Arc::new(MemoryClipboard::default());
        let exporter = ClipboardExporter::new(Box::new(clip.clone()), Box::new(clip.clone()));

        let outcome = handle_copy(QueryState::cleared(), &exporter).await;

        assert_eq!(outcome.message, FormMessage::info(MSG_SEARCH_FIRST));
        assert_eq!(clip.writes(), 0);
    }

    #[tokio::test]
    async fn copy_writes_login_and_secret() {
        let clip = Arc::new(MemoryClipboard::default());
        let exporter = ClipboardExporter::new(
            Box::new(clip.clone()),
            Box::new(FailingClipboard::new("unused")),
        );
        let state = handle_submit(&service(), "10501", "홍길동").state;

        let outcome = handle_copy(state, &exporter).await;

        assert_eq!(outcome.message, FormMessage::ok(MSG_COPIED));
        assert_eq!(
            clip.contents().as_deref(),
            Some("Google ID: s10501@school.kr\nPW: pw-10501")
        );
    }

    #[tokio::test]
    async fn copy_failure_keeps_result() {
        let exporter = ClipboardExporter::new(
            Box::new(FailingClipboard::new("denied")),
            Box::new(FailingClipboard::new("missing")),
        );
        let state = handle_toggle(handle_submit(&service(), "10501", "홍길동").state).state;

        let outcome = handle_copy(state, &exporter).await;

        assert_eq!(outcome.message, FormMessage::error(MSG_COPY_FAILED));
        assert!(outcome.state.has_result());
        assert!(outcome.state.is_revealed());
    }
}
