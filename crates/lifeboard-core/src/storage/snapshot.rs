//! Reading commitment snapshots.
//!
//! A snapshot is a JSON document holding the full commitment list, either as
//! a bare array or wrapped as `{"commitments": [...]}`. Writing snapshots
//! back is left to the caller.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::commitment::Commitment;
use crate::error::{CoreError, Result};

#[derive(Deserialize)]
struct WrappedSnapshot {
    commitments: Vec<Commitment>,
}

/// Parse a snapshot document, sanitizing every commitment.
///
/// # Errors
/// Returns [`CoreError::Json`] for malformed documents and
/// [`CoreError::DuplicateId`] when two commitments share an id.
pub fn parse_commitments(content: &str) -> Result<Vec<Commitment>> {
    // Dispatch on the first token so parse errors point at the real problem
    let mut commitments: Vec<Commitment> = if content.trim_start().starts_with('[') {
        serde_json::from_str(content)?
    } else {
        serde_json::from_str::<WrappedSnapshot>(content)?.commitments
    };

    let mut seen = HashSet::new();
    for commitment in &mut commitments {
        if !seen.insert(commitment.id.clone()) {
            return Err(CoreError::DuplicateId {
                id: commitment.id.clone(),
            });
        }
        commitment.sanitize();
    }
    Ok(commitments)
}

/// Read and parse the snapshot at `path`.
///
/// # Errors
/// Returns [`CoreError::Io`] if the file cannot be read, otherwise see
/// [`parse_commitments`].
pub fn load_commitments(path: &Path) -> Result<Vec<Commitment>> {
    let content = std::fs::read_to_string(path)?;
    let commitments = parse_commitments(&content)?;
    tracing::debug!(
        "loaded {} commitment(s) from {}",
        commitments.len(),
        path.display()
    );
    Ok(commitments)
}

/// Look up a commitment by id.
///
/// # Errors
/// Returns [`CoreError::NotFound`] for an unknown id.
pub fn find_commitment<'a>(commitments: &'a [Commitment], id: &str) -> Result<&'a Commitment> {
    commitments
        .iter()
        .find(|c| c.id == id)
        .ok_or_else(|| CoreError::NotFound { id: id.to_string() })
}

/// Swap in an updated commitment with the same id.
///
/// # Errors
/// Returns [`CoreError::NotFound`] when no commitment has that id.
pub fn replace_commitment(commitments: &mut [Commitment], updated: Commitment) -> Result<()> {
    let slot = commitments
        .iter_mut()
        .find(|c| c.id == updated.id)
        .ok_or_else(|| CoreError::NotFound {
            id: updated.id.clone(),
        })?;
    *slot = updated;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    const LIST: &str = r#"[
        {"id": "a", "name": "Water", "createdAt": "2024-01-01"},
        {"id": "b", "name": "Gym", "createdAt": "2024-01-01", "scheduledDays": [1, 3, 5]}
    ]"#;

    #[test]
    fn test_parse_bare_list() {
        let list = parse_commitments(LIST).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].scheduled_days().indices(), vec![1, 3, 5]);
    }

    #[test]
    fn test_parse_wrapped_document() {
        let doc = format!(r#"{{"commitments": {LIST}}}"#);
        assert_eq!(parse_commitments(&doc).unwrap().len(), 2);
    }

    #[test]
    fn test_parse_sanitizes() {
        let doc = r#"[{"id": "a", "name": "Water", "createdAt": "2024-01-05",
                       "completedDates": ["2024-01-04", "2024-01-05"]}]"#;
        let list = parse_commitments(doc).unwrap();
        assert_eq!(list[0].completed_dates().collect::<Vec<_>>(), vec![d(2024, 1, 5)]);
    }

    #[test]
    fn test_huge_weekday_index_does_not_reject_snapshot() {
        let doc = r#"[{"id": "a", "name": "Gym", "createdAt": "2024-01-01",
                       "scheduledDays": [1, 18446744073709551615]}]"#;
        let list = parse_commitments(doc).unwrap();
        assert_eq!(list[0].scheduled_days().indices(), vec![1]);

        let wrapped = format!(r#"{{"commitments": {doc}}}"#);
        let list = parse_commitments(&wrapped).unwrap();
        assert_eq!(list[0].scheduled_days().indices(), vec![1]);
    }

    #[test]
    fn test_parse_error_names_the_field() {
        let doc = r#"[{"id": "a", "createdAt": "2024-01-01"}]"#;
        let err = parse_commitments(doc).unwrap_err().to_string();
        assert!(err.contains("name"), "{err}");

        let doc = r#"{"commitments": [{"id": "a", "name": "x", "createdAt": 5}]}"#;
        let err = parse_commitments(doc).unwrap_err().to_string();
        assert!(!err.contains("untagged"), "{err}");
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let doc = r#"[{"id": "a", "name": "x", "createdAt": "2024-01-01"},
                      {"id": "a", "name": "y", "createdAt": "2024-01-02"}]"#;
        let err = parse_commitments(doc).unwrap_err();
        assert!(matches!(err, CoreError::DuplicateId { ref id } if id == "a"));
    }

    #[test]
    fn test_malformed_date_is_error() {
        let doc = r#"[{"id": "a", "name": "x", "createdAt": "01/02/2024"}]"#;
        assert!(parse_commitments(doc).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("habits.json");
        std::fs::write(&path, LIST).unwrap();
        assert_eq!(load_commitments(&path).unwrap().len(), 2);

        let missing = dir.path().join("nope.json");
        assert!(matches!(load_commitments(&missing), Err(CoreError::Io(_))));
    }

    #[test]
    fn test_find_and_replace() {
        let mut list = parse_commitments(LIST).unwrap();
        assert_eq!(find_commitment(&list, "b").unwrap().name, "Gym");
        assert!(matches!(
            find_commitment(&list, "zzz"),
            Err(CoreError::NotFound { .. })
        ));

        let mut renamed = find_commitment(&list, "a").unwrap().clone();
        renamed.name = "Hydrate".into();
        replace_commitment(&mut list, renamed).unwrap();
        assert_eq!(list[0].name, "Hydrate");

        let stranger = Commitment::with_id("c", "New", d(2024, 1, 1));
        assert!(replace_commitment(&mut list, stranger).is_err());
    }
}
