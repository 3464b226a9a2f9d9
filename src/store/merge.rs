use super::IssueStore;
use crate::error::IssueError;
use crate::issue::AddResult;
use tracing::debug;

/// Fold every issue of `source` into `target`.
///
/// Issues already in the target gain the source's locations; new issues are
/// inserted whole. Returns how many source issues changed the target, so
/// merging the same source twice returns 0 the second time.
pub fn merge_issues_from_store(
    target: &dyn IssueStore,
    source: &dyn IssueStore,
) -> Result<usize, IssueError> {
    if !source.is_enumerable() {
        return Err(IssueError::InvalidOperation(
            "source store is not enumerable".to_string(),
        ));
    }
    if !target.is_updatable() {
        return Err(IssueError::InvalidOperation(
            "target store is not updatable".to_string(),
        ));
    }

    let mut touched = 0;

    for issue in source.issues() {
        // Lookup and insert must stay one store operation
        if target.merge_issue(issue) == AddResult::Added {
            touched += 1;
        }
    }

    debug!("Merged {} issues into target store", touched);
    Ok(touched)
}
