//! Domain model types for studentlookup
//!
//! SECURITY: Secret types implement Drop to clear sensitive data.

use crate::constants::{MASK_CHAR, MASK_MIN_LEN};
use crate::utils::RosterError;
use std::fmt;

/// Secret that zeros memory on drop
///
/// SECURITY: This type never implements Display or Debug in a way that reveals the secret.
pub struct SecureString(String);

impl Clone for SecureString {
    fn clone(&self) -> Self {
        SecureString(self.0.clone())
    }
}

impl SecureString {
    /// Create a new secure string
    pub fn new(secret: impl Into<String>) -> Self {
        SecureString(secret.into())
    }

    /// Get the secret as a string slice
    ///
    /// Use this sparingly: reveal display and clipboard export only.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Placeholder string shown instead of the secret
    pub fn masked(&self) -> String {
        mask(self.as_str())
    }
}

impl Drop for SecureString {
    fn drop(&mut self) {
        // SAFETY: We own this String and are zeroing it before drop; zero bytes
        // are valid UTF-8.
        unsafe {
            let bytes = self.0.as_bytes_mut();
            for byte in bytes {
                std::ptr::write_volatile(byte, 0);
            }
        }
    }
}

impl fmt::Debug for SecureString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // SECURITY: Never reveal the secret content
        write!(f, "SecureString(*** {} bytes ***)", self.0.len())
    }
}

/// Replace a secret with `max(MASK_MIN_LEN, chars)` placeholder characters.
///
/// The mask length still tracks the length of secrets longer than the minimum.
pub fn mask(secret: &str) -> String {
    let len = secret.chars().count().max(MASK_MIN_LEN);
    std::iter::repeat(MASK_CHAR).take(len).collect()
}

/// One roster entry: a student and the account issued to them
#[derive(Clone, Debug)]
pub struct Record {
    identifier: String,
    display_name: String,
    login_id: String,
    secret: SecureString,
}

impl Record {
    /// Create a record after checking that no field is blank
    pub fn new(
        identifier: impl Into<String>,
        display_name: impl Into<String>,
        login_id: impl Into<String>,
        secret: SecureString,
    ) -> Result<Self, RosterError> {
        let identifier = identifier.into();
        let display_name = display_name.into();
        let login_id = login_id.into();

        if identifier.trim().is_empty() {
            return Err(RosterError::InvalidRecord(
                "Student number cannot be empty".to_string(),
            ));
        }
        if display_name.trim().is_empty() {
            return Err(RosterError::InvalidRecord(format!(
                "Name cannot be empty (student number {})",
                identifier
            )));
        }
        if login_id.trim().is_empty() {
            return Err(RosterError::InvalidRecord(format!(
                "Login id cannot be empty (student number {})",
                identifier
            )));
        }
        if secret.is_empty() {
            return Err(RosterError::InvalidRecord(format!(
                "Password cannot be empty (student number {})",
                identifier
            )));
        }

        Ok(Record {
            identifier,
            display_name,
            login_id,
            secret,
        })
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn login_id(&self) -> &str {
        &self.login_id
    }

    pub fn secret(&self) -> &SecureString {
        &self.secret
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_pads_short_secrets() {
        assert_eq!(mask(""), "••••••");
        assert_eq!(mask("abc"), "••••••");
    }

    #[test]
    fn test_mask_tracks_long_secrets() {
        let secret = "pw-10501-long";
        let masked = mask(secret);
        assert_eq!(masked.chars().count(), secret.len());
        assert!(masked.chars().all(|c| c == MASK_CHAR));
        assert_ne!(masked, secret);
    }

    #[test]
    fn test_mask_counts_characters_not_bytes() {
        assert_eq!(mask("비밀번호입니다").chars().count(), 7);
    }

    #[test]
    fn test_mask_length_property() {
        for secret in ["", "a", "abcdef", "abcdefg", "pw-10501", "••"] {
            let masked = mask(secret);
            assert_eq!(
                masked.chars().count(),
                secret.chars().count().max(MASK_MIN_LEN)
            );
            assert!(masked.chars().all(|c| c == MASK_CHAR));
        }
    }

    #[test]
    fn test_secure_string_debug_no_leak() {
        let secret = SecureString::new("secret123");
        let debug_output = format!("{:?}", secret);
        assert!(!debug_output.contains("secret123"));
        assert!(debug_output.contains("9 bytes"));
    }

    #[test]
    fn test_record_debug_no_leak() {
        let record = Record::new(
            "10501",
            "홍길동",
            "s10501@school.kr",
            SecureString::new("pw-10501"),
        )
        .unwrap();
        assert!(!format!("{:?}", record).contains("pw-10501"));
    }

    #[test]
    fn test_record_rejects_blank_fields() {
        assert!(Record::new(" ", "a", "b", SecureString::new("c")).is_err());
        assert!(Record::new("1", "", "b", SecureString::new("c")).is_err());
        assert!(Record::new("1", "a", " ", SecureString::new("c")).is_err());
        assert!(Record::new("1", "a", "b", SecureString::new("")).is_err());
        assert!(Record::new("1", "a", "b", SecureString::new("c")).is_ok());
    }
}
