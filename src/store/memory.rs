use super::IssueStore;
use crate::error::IssueError;
use crate::fingerprint::Fingerprint;
use crate::issue::{AddResult, Issue, Location};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::debug;

/// Mutable store for the issues of one session.
///
/// All access goes through one mutex, so a shared instance can be updated
/// from several threads.
#[derive(Debug, Default)]
pub struct InMemoryIssueStore {
    issues: Mutex<HashMap<Fingerprint, Issue>>,
}

impl InMemoryIssueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from previously saved issues; later duplicates lose
    pub fn from_issues(issues: impl IntoIterator<Item = Issue>) -> Self {
        let store = Self::new();
        for issue in issues {
            if store.add_issue(issue) == AddResult::AlreadyExists {
                debug!("Dropping duplicate issue while restoring store");
            }
        }
        store
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Forget every issue
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<Fingerprint, Issue>> {
        // Every operation is a single insert or push, so a poisoned map is
        // still consistent.
        self.issues.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl IssueStore for InMemoryIssueStore {
    fn is_enumerable(&self) -> bool {
        true
    }

    fn is_updatable(&self) -> bool {
        true
    }

    fn issues(&self) -> Vec<Issue> {
        self.lock().values().cloned().collect()
    }

    fn try_find_issue(&self, fingerprint: &Fingerprint) -> Option<Issue> {
        self.lock().get(fingerprint).cloned()
    }

    fn add_issue(&self, issue: Issue) -> AddResult {
        let mut issues = self.lock();
        if issues.contains_key(issue.fingerprint()) {
            return AddResult::AlreadyExists;
        }
        issues.insert(issue.fingerprint().clone(), issue);
        AddResult::Added
    }

    fn merge_issue(&self, issue: Issue) -> AddResult {
        let mut issues = self.lock();
        match issues.entry(issue.fingerprint().clone()) {
            Entry::Vacant(entry) => {
                entry.insert(issue);
                AddResult::Added
            }
            Entry::Occupied(mut entry) => {
                let existing = entry.get_mut();
                let mut result = AddResult::AlreadyExists;
                for location in issue.locations() {
                    if existing.add_location(location.clone()) == AddResult::Added {
                        result = AddResult::Added;
                    }
                }
                result
            }
        }
    }

    fn add_location(
        &self,
        fingerprint: &Fingerprint,
        location: Location,
    ) -> Result<AddResult, IssueError> {
        let mut issues = self.lock();
        let issue = issues.get_mut(fingerprint).ok_or_else(|| {
            IssueError::InvalidArgument(format!(
                "no issue with fingerprint {}",
                fingerprint.short_id()
            ))
        })?;
        Ok(issue.add_location(location))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fingerprint::{Contribution, ScanResultFingerprint};
    use crate::issue::OutputFileLocation;
    use std::sync::{Arc, Barrier};

    fn issue_at(name: &str, file: &str) -> Issue {
        let mut issue = issue(name);
        issue.add_location(OutputFileLocation::new(file, 2, "Button").into());
        issue
    }

    fn fingerprint(name: &str) -> Fingerprint {
        ScanResultFingerprint::from_contributions(vec![
            Contribution::new("RuleId", "NameNotEmpty").unwrap(),
            Contribution::new("Name", name).unwrap(),
        ])
        .into()
    }

    fn issue(name: &str) -> Issue {
        Issue::new(fingerprint(name), "NameNotEmpty:Fail").unwrap()
    }

    #[test]
    fn test_capabilities() {
        let store = InMemoryIssueStore::new();
        assert!(store.is_enumerable());
        assert!(store.is_updatable());
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_then_find() {
        let store = InMemoryIssueStore::new();
        assert_eq!(store.add_issue(issue("OK")), AddResult::Added);

        let found = store.try_find_issue(&fingerprint("OK")).unwrap();
        assert_eq!(found.fingerprint(), &fingerprint("OK"));
        assert_eq!(found.issue_type(), "NameNotEmpty:Fail");
        assert!(store.try_find_issue(&fingerprint("Cancel")).is_none());
    }

    #[test]
    fn test_add_existing_does_not_replace() {
        let store = InMemoryIssueStore::new();
        store.add_issue(issue("OK"));

        let mut other = issue("OK");
        other.add_location(OutputFileLocation::new("a.a11ytest.json", 1, "Button").into());

        assert_eq!(store.add_issue(other), AddResult::AlreadyExists);
        let found = store.try_find_issue(&fingerprint("OK")).unwrap();
        assert!(found.locations().is_empty());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_add_location() {
        let store = InMemoryIssueStore::new();
        store.add_issue(issue("OK"));
        let loc: Location = OutputFileLocation::new("a.a11ytest.json", 1, "Button").into();

        assert_eq!(
            store.add_location(&fingerprint("OK"), loc.clone()).unwrap(),
            AddResult::Added
        );
        assert_eq!(
            store.add_location(&fingerprint("OK"), loc.clone()).unwrap(),
            AddResult::AlreadyExists
        );
        assert!(store.add_location(&fingerprint("Cancel"), loc).is_err());
    }

    #[test]
    fn test_every_issue_found_by_own_fingerprint() {
        let store = InMemoryIssueStore::from_issues(vec![issue("A"), issue("B"), issue("A")]);
        assert_eq!(store.len(), 2);
        for issue in store.issues() {
            let found = store.try_find_issue(issue.fingerprint()).unwrap();
            assert_eq!(found.fingerprint(), issue.fingerprint());
        }
    }

    #[test]
    fn test_clear() {
        let store = InMemoryIssueStore::from_issues(vec![issue("A")]);
        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn test_concurrent_adds_are_serialized() {
        let store = Arc::new(InMemoryIssueStore::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    (0..50)
                        .filter(|i| store.add_issue(issue(&format!("el-{}", i))) == AddResult::Added)
                        .count()
                })
            })
            .collect();

        let added: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
        assert_eq!(added, 50);
        assert_eq!(store.len(), 50);
    }

    #[test]
    fn test_merge_issue_inserts_then_unions_locations() {
        let store = InMemoryIssueStore::new();
        assert_eq!(store.merge_issue(issue_at("OK", "a.json")), AddResult::Added);
        assert_eq!(store.merge_issue(issue_at("OK", "b.json")), AddResult::Added);
        assert_eq!(
            store.merge_issue(issue_at("OK", "a.json")),
            AddResult::AlreadyExists
        );

        let found = store.try_find_issue(&fingerprint("OK")).unwrap();
        let files: Vec<String> = found.locations().iter().map(|l| l.source()).collect();
        assert_eq!(files, vec!["a.json".to_string(), "b.json".to_string()]);
    }

    #[test]
    fn test_concurrent_merges_keep_every_location() {
        for _ in 0..200 {
            let store = Arc::new(InMemoryIssueStore::new());
            let barrier = Arc::new(Barrier::new(2));
            let handles: Vec<_> = ["a.json", "b.json"]
                .into_iter()
                .map(|file| {
                    let store = Arc::clone(&store);
                    let barrier = Arc::clone(&barrier);
                    std::thread::spawn(move || {
                        barrier.wait();
                        store.merge_issue(issue_at("OK", file))
                    })
                })
                .collect();

            for handle in handles {
                assert_eq!(handle.join().unwrap(), AddResult::Added);
            }
            let found = store.try_find_issue(&fingerprint("OK")).unwrap();
            assert_eq!(found.locations().len(), 2);
        }
    }
}
