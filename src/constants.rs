//! # Application-Wide Constants
//!
//! Centralized configuration values, user-facing messages, and environment
//! variable names used throughout studentlookup.
//!
//! ## Usage
//!
//! ```rust
//! use studentlookup::constants::*;
//!
//! assert_eq!(MASK_MIN_LEN, 6);
//! ```

pub const APP_NAME: &str = "studentlookup";

// ============================================================================
// Masking
// ============================================================================

/// Character repeated to hide a secret
pub const MASK_CHAR: char = '•';

/// Minimum number of placeholder characters shown for a masked secret
///
/// Short secrets are padded up to this length. Longer secrets produce one
/// placeholder per character, so the mask still reveals the length of long
/// secrets.
pub const MASK_MIN_LEN: usize = 6;

// ============================================================================
// Clipboard
// ============================================================================

/// Maximum time to wait for the fallback clipboard utility
///
/// **Rationale**: `xclip`/`wl-copy` normally exit immediately. A stuck
/// utility (no display server, broken session bus) must not hang the form.
pub const CLIPBOARD_FALLBACK_TIMEOUT_SECS: u64 = 5;

/// Label in front of the login identifier in the exported text
pub const EXPORT_LOGIN_LABEL: &str = "Google ID";

/// Label in front of the secret in the exported text
pub const EXPORT_SECRET_LABEL: &str = "PW";

// ============================================================================
// Environment
// ============================================================================

/// Path to a JSON roster file that replaces the built-in sample records
pub const ENV_ROSTER_PATH: &str = "STUDENTLOOKUP_ROSTER";

/// Identifier comparison mode: `digits` (default) or `trim`
pub const ENV_ID_MODE: &str = "STUDENTLOOKUP_ID_MODE";

/// Set to `0` to disable keyboard-layout transliteration of names
pub const ENV_TRANSLITERATE: &str = "STUDENTLOOKUP_TRANSLITERATE";

/// Directory for the log file
pub const ENV_LOG_DIR: &str = "STUDENTLOOKUP_LOG_DIR";

/// Set to `1` to include verbose debug lines in the log
pub const ENV_LOG_VERBOSE: &str = "STUDENTLOOKUP_LOG_VERBOSE";

/// Set to `1` to write the log file in release builds
pub const ENV_ENABLE_LOGGING: &str = "STUDENTLOOKUP_ENABLE_LOGGING";

// ============================================================================
// Messages
// ============================================================================

pub const MSG_MISSING_INPUT: &str = "Please enter both the student number and the name.";
pub const MSG_NOT_FOUND: &str = "No matching record. Check the student number and name.";
pub const MSG_TRANSLITERATION_UNAVAILABLE: &str =
    "No matching record. The name is not in Hangul and keyboard conversion is unavailable; type the name in Korean.";
pub const MSG_FOUND: &str = "Record found.";
pub const MSG_SEARCH_FIRST: &str = "Search for a record first.";
pub const MSG_COPIED: &str = "Copied to the clipboard.";
pub const MSG_COPY_FAILED: &str = "Copy failed. Check clipboard permissions.";
