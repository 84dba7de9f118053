//! Exact-match lookup over the resident roster

use crate::core::transliterate::{contains_hangul, Transliterator};
use crate::logger;
use crate::models::Record;
use crate::normalize::{normalize_identifier, normalize_name, strip_whitespace, IdentifierMode};
use crate::utils::LookupError;

/// Answers (student number, name) queries against a fixed record list
///
/// Records keep their insertion order; when several match, the first wins.
pub struct LookupService {
    records: Vec<Record>,
    mode: IdentifierMode,
    transliterator: Option<Box<dyn Transliterator>>,
}

impl LookupService {
    pub fn new(records: Vec<Record>, mode: IdentifierMode) -> Self {
        Self {
            records,
            mode,
            transliterator: None,
        }
    }

    /// Attach a transliterator used when a name contains no Hangul
    pub fn with_transliterator(mut self, transliterator: Box<dyn Transliterator>) -> Self {
        self.transliterator = Some(transliterator);
        self
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn has_transliterator(&self) -> bool {
        self.transliterator.is_some()
    }

    fn transliterator(&self) -> Option<&dyn Transliterator> {
        self.transliterator.as_deref()
    }

    /// Find the first record whose normalised student number and name both
    /// equal the normalised query.
    ///
    /// A query whose student number normalises to nothing never matches.
    pub fn find(&self, identifier_query: &str, name_query: &str) -> Option<&Record> {
        let id_key = normalize_identifier(identifier_query, self.mode);
        if id_key.is_empty() {
            return None;
        }
        let name_key = normalize_name(name_query, self.transliterator());

        self.records.iter().find(|record| {
            normalize_identifier(record.identifier(), self.mode) == id_key
                && normalize_name(record.display_name(), self.transliterator()) == name_key
        })
    }

    /// Validate the raw form input, then look it up.
    ///
    /// # Returns
    /// * `Ok(record)` - First matching record
    /// * `Err(LookupError::MissingInput)` - Either field is blank, or the
    ///   student number has nothing left after normalisation (no digits)
    /// * `Err(LookupError::TransliterationUnavailable)` - Miss on a non-Hangul
    ///   name with no transliterator configured
    /// * `Err(LookupError::NotFound)` - Any other miss
    pub fn search(&self, identifier_query: &str, name_query: &str) -> Result<&Record, LookupError> {
        if identifier_query.trim().is_empty() || name_query.trim().is_empty() {
            return Err(LookupError::MissingInput);
        }
        if normalize_identifier(identifier_query, self.mode).is_empty() {
            return Err(LookupError::MissingInput);
        }

        match self.find(identifier_query, name_query) {
            Some(record) => {
                logger::log_info(&format!(
                    "Lookup matched student number {}",
                    record.identifier()
                ));
                Ok(record)
            }
            None => {
                let name = strip_whitespace(name_query);
                let err = if !contains_hangul(&name) && !self.has_transliterator() {
                    LookupError::TransliterationUnavailable
                } else {
                    LookupError::NotFound
                };
                logger::log_info(&format!(
                    "Lookup miss for student number '{}': {}",
                    identifier_query.trim(),
                    err
                ));
                Err(err)
            }
        }
    }
}
