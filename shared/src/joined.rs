//! Persisted record of joined cleanup titles.
//!
//! The record is a JSON array of strings under a single storage key. It is
//! created on the first join and only ever grows.

use std::fmt;

pub const JOINED_CLEANUPS_KEY: &str = "joinedCleanups";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    Unavailable(String),
    Write(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable(e) => write!(f, "storage unavailable: {e}"),
            Self::Write(e) => write!(f, "storage write failed: {e}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Backing medium for the joined-cleanups record.
pub trait JoinedStore {
    /// `Ok(None)` when no record exists yet (or it cannot be decoded).
    fn load(&self) -> Result<Option<Vec<String>>, StoreError>;
    fn save(&self, titles: &[String]) -> Result<(), StoreError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinRecordOutcome {
    Added,
    AlreadyJoined,
    StorageUnavailable(String),
}

/// Read-modify-write the record, adding `title` unless it is already there.
/// Storage failures are reported in the outcome, never raised.
pub fn record_join<S: JoinedStore + ?Sized>(store: &S, title: &str) -> JoinRecordOutcome {
    let mut titles = match store.load() {
        Ok(titles) => titles.unwrap_or_default(),
        Err(e) => return JoinRecordOutcome::StorageUnavailable(e.to_string()),
    };
    if titles.iter().any(|t| t == title) {
        return JoinRecordOutcome::AlreadyJoined;
    }
    titles.push(title.to_string());
    match store.save(&titles) {
        Ok(()) => JoinRecordOutcome::Added,
        Err(e) => JoinRecordOutcome::StorageUnavailable(e.to_string()),
    }
}

/// Titles joined so far; empty when the medium is unreadable.
pub fn joined_titles<S: JoinedStore + ?Sized>(store: &S) -> Vec<String> {
    store.load().ok().flatten().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[derive(Default)]
    struct MemoryStore {
        titles: RefCell<Option<Vec<String>>>,
        fail_load: bool,
        fail_save: bool,
    }

    impl JoinedStore for MemoryStore {
        fn load(&self) -> Result<Option<Vec<String>>, StoreError> {
            if self.fail_load {
                return Err(StoreError::Unavailable("SecurityError".to_string()));
            }
            Ok(self.titles.borrow().clone())
        }

        fn save(&self, titles: &[String]) -> Result<(), StoreError> {
            if self.fail_save {
                return Err(StoreError::Write("QuotaExceededError".to_string()));
            }
            *self.titles.borrow_mut() = Some(titles.to_vec());
            Ok(())
        }
    }

    #[test]
    fn first_join_creates_the_record() {
        let store = MemoryStore::default();
        assert!(joined_titles(&store).is_empty());
        assert_eq!(record_join(&store, "Sunset Beach Cleanup"), JoinRecordOutcome::Added);
        assert_eq!(joined_titles(&store), ["Sunset Beach Cleanup"]);
    }

    #[test]
    fn joining_twice_never_duplicates() {
        let store = MemoryStore::default();
        record_join(&store, "Marina Bay Restoration");
        assert_eq!(
            record_join(&store, "Marina Bay Restoration"),
            JoinRecordOutcome::AlreadyJoined
        );
        record_join(&store, "Coral Cove Summer Initiative");
        record_join(&store, "Marina Bay Restoration");
        assert_eq!(
            joined_titles(&store),
            ["Marina Bay Restoration", "Coral Cove Summer Initiative"]
        );
    }

    #[test]
    fn unreadable_medium_degrades_to_outcome() {
        let store = MemoryStore {
            fail_load: true,
            ..Default::default()
        };
        let outcome = record_join(&store, "Sunset Beach Cleanup");
        assert_eq!(
            outcome,
            JoinRecordOutcome::StorageUnavailable("storage unavailable: SecurityError".to_string())
        );
        assert!(joined_titles(&store).is_empty());
    }

    #[test]
    fn failed_write_degrades_to_outcome() {
        let store = MemoryStore {
            fail_save: true,
            ..Default::default()
        };
        assert!(matches!(
            record_join(&store, "Sunset Beach Cleanup"),
            JoinRecordOutcome::StorageUnavailable(_)
        ));
        assert!(store.titles.borrow().is_none());
    }
}
