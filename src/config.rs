//! Startup configuration read from the environment
//!
//! Unset variables fall back to defaults; malformed ones are logged and
//! ignored rather than aborting startup.

use crate::constants::{ENV_ID_MODE, ENV_ROSTER_PATH, ENV_TRANSLITERATE};
use crate::core::{DubeolsikTransliterator, LookupService};
use crate::logger;
use crate::normalize::IdentifierMode;
use crate::roster;
use crate::utils::RosterError;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub roster_path: Option<PathBuf>,
    pub identifier_mode: IdentifierMode,
    pub transliterate: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            roster_path: None,
            identifier_mode: IdentifierMode::Digits,
            transliterate: true,
        }
    }
}

impl AppConfig {
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup (the process environment in `load`)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let roster_path = lookup(ENV_ROSTER_PATH)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        let identifier_mode = match lookup(ENV_ID_MODE) {
            Some(raw) => raw.parse().unwrap_or_else(|e: String| {
                logger::log_warn(&format!(
                    "{}: {}; using {}",
                    ENV_ID_MODE, e, defaults.identifier_mode
                ));
                defaults.identifier_mode
            }),
            None => defaults.identifier_mode,
        };

        let transliterate = match lookup(ENV_TRANSLITERATE).as_deref().map(str::trim) {
            Some("0") | Some("false") | Some("off") => false,
            Some("1") | Some("true") | Some("on") | None => true,
            Some(other) => {
                logger::log_warn(&format!(
                    "{}: unrecognised value '{}'; transliteration stays enabled",
                    ENV_TRANSLITERATE, other
                ));
                defaults.transliterate
            }
        };

        Self {
            roster_path,
            identifier_mode,
            transliterate,
        }
    }

    /// Load the roster and assemble the lookup service this config describes.
    pub fn build_service(&self) -> Result<LookupService, RosterError> {
        let records = match &self.roster_path {
            Some(path) => roster::load_roster(path)?,
            None => {
                logger::log_warn("No roster file configured; using built-in sample records");
                roster::builtin_records()
            }
        };

        roster::check_identifiers(&records, self.identifier_mode)?;

        let service = LookupService::new(records, self.identifier_mode);
        if service.is_empty() {
            return Err(RosterError::Empty);
        }
        Ok(if self.transliterate {
            service.with_transliterator(Box::new(DubeolsikTransliterator::new()))
        } else {
            service
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(config_from(&[]), AppConfig::default());
    }

    #[test]
    fn reads_all_settings() {
        let cfg = config_from(&[
            (ENV_ROSTER_PATH, " /tmp/roster.json "),
            (ENV_ID_MODE, "trim"),
            (ENV_TRANSLITERATE, "0"),
        ]);
        assert_eq!(cfg.roster_path, Some(PathBuf::from("/tmp/roster.json")));
        assert_eq!(cfg.identifier_mode, IdentifierMode::Trim);
        assert!(!cfg.transliterate);
    }

    #[test]
    fn bad_values_fall_back() {
        let cfg = config_from(&[
            (ENV_ROSTER_PATH, "  "),
            (ENV_ID_MODE, "hex"),
            (ENV_TRANSLITERATE, "maybe"),
        ]);
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn build_service_without_transliterator() {
        let cfg = AppConfig {
            transliterate: false,
            ..AppConfig::default()
        };
        let svc = cfg.build_service().expect("service built");
        assert_eq!(svc.len(), 2);
        assert!(!svc.has_transliterator());
    }

    #[test]
    fn build_service_fails_on_missing_roster() {
        let dir = tempfile::tempdir().expect("temp dir");
        let cfg = AppConfig {
            roster_path: Some(dir.path().join("nope.json")),
            ..AppConfig::default()
        };
        assert!(matches!(cfg.build_service(), Err(RosterError::Io(_))));
    }

    #[test]
    fn build_service_rejects_digit_free_student_numbers() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"{{"accounts":[{{"studentNo":"N/A","name":"가","googleId":"x@y","googlePw":"pw"}}]}}"#
        )
        .expect("write roster");

        let digits = AppConfig {
            roster_path: Some(file.path().to_path_buf()),
            ..AppConfig::default()
        };
        assert!(matches!(
            digits.build_service(),
            Err(RosterError::InvalidRecord(_))
        ));

        let trim = AppConfig {
            identifier_mode: IdentifierMode::Trim,
            ..digits
        };
        assert!(trim.build_service().is_ok());
    }
}
