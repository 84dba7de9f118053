use crate::models::{Record, SecureString};
use crate::normalize::{normalize_identifier, IdentifierMode};
use crate::utils::RosterError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One account row as stored in a roster file
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RosterEntry {
    #[serde(rename = "studentNo")]
    pub student_no: String,
    pub name: String,
    #[serde(rename = "googleId")]
    pub google_id: String,
    #[serde(rename = "googlePw")]
    pub google_pw: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct RosterFile {
    #[serde(default)]
    pub accounts: Vec<RosterEntry>,
}

/// Sample accounts used when no roster file is configured.
///
/// These are plaintext placeholders. Real deployments must supply their own
/// roster file.
pub fn builtin_records() -> Vec<Record> {
    const SAMPLES: &[(&str, &str, &str, &str)] = &[
        ("10501", "홍길동", "s10501@school.kr", "pw-10501"),
        ("10502", "김하늘", "s10502@school.kr", "pw-10502"),
    ];

    SAMPLES
        .iter()
        .filter_map(|(no, name, id, pw)| Record::new(*no, *name, *id, SecureString::new(*pw)).ok())
        .collect()
}

/// Converts parsed roster rows into records, keeping file order.
///
/// Returns an error for the first invalid row, or if there are no rows.
pub fn records_from_entries(entries: Vec<RosterEntry>) -> Result<Vec<Record>, RosterError> {
    if entries.is_empty() {
        return Err(RosterError::Empty);
    }

    entries
        .into_iter()
        .enumerate()
        .map(|(idx, e)| {
            let secret = SecureString::new(e.google_pw);
            Record::new(e.student_no, e.name, e.google_id, secret)
                .map_err(|err| RosterError::InvalidRecord(format!("row {}: {}", idx + 1, err)))
        })
        .collect()
}

/// Rejects records whose student number normalises to nothing under `mode`.
///
/// Such a row could never be found, and in digit mode it would otherwise share
/// the empty key with every digit-free query.
pub fn check_identifiers(records: &[Record], mode: IdentifierMode) -> Result<(), RosterError> {
    for (idx, record) in records.iter().enumerate() {
        if normalize_identifier(record.identifier(), mode).is_empty() {
            return Err(RosterError::InvalidRecord(format!(
                "row {}: student number '{}' has no usable characters in {} mode",
                idx + 1,
                record.identifier(),
                mode
            )));
        }
    }
    Ok(())
}

pub fn parse_roster(json: &str) -> Result<Vec<Record>, RosterError> {
    let file: RosterFile = serde_json::from_str(json)?;
    records_from_entries(file.accounts)
}

pub fn load_roster(path: &Path) -> Result<Vec<Record>, RosterError> {
    let raw = fs::read_to_string(path)?;
    let records = parse_roster(&raw)?;
    crate::logger::log_info(&format!(
        "Loaded {} roster records from {}",
        records.len(),
        path.display()
    ));
    Ok(records)
}
