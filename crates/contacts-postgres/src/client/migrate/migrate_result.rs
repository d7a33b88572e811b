//! Migration status and outcome types.

use std::time::Duration;

/// Applied and pending migration versions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MigrationStatus {
    /// Applied migration versions in chronological order.
    pub applied_versions: Vec<String>,
    /// Embedded migration versions not yet applied.
    pub pending_versions: Vec<String>,
}

impl MigrationStatus {
    /// Creates a new migration status.
    pub fn new(
        applied_versions: impl Into<Vec<String>>,
        pending_versions: impl Into<Vec<String>>,
    ) -> Self {
        Self {
            applied_versions: applied_versions.into(),
            pending_versions: pending_versions.into(),
        }
    }

    /// Derives the status from every embedded version and the applied ones.
    pub fn from_versions(embedded: Vec<String>, applied: Vec<String>) -> Self {
        let pending = embedded
            .into_iter()
            .filter(|version| !applied.contains(version))
            .collect::<Vec<_>>();

        Self::new(applied, pending)
    }

    /// Returns the last applied migration version, if any.
    pub fn last_applied_version(&self) -> Option<&str> {
        self.applied_versions.last().map(|s| s.as_str())
    }

    /// Returns the number of applied migrations.
    #[inline]
    pub fn applied_migrations(&self) -> usize {
        self.applied_versions.len()
    }

    /// Returns the number of pending migrations.
    #[inline]
    pub fn pending_migrations(&self) -> usize {
        self.pending_versions.len()
    }

    /// Returns true if all migrations have been applied.
    #[inline]
    pub fn is_up_to_date(&self) -> bool {
        self.pending_versions.is_empty()
    }
}

/// Outcome of a migration run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationResult {
    /// Total duration of the migration run.
    pub duration: Duration,
    /// Versions applied during this run.
    pub processed_versions: Vec<String>,
}

impl MigrationResult {
    /// Creates a new migration result.
    pub fn new(duration: Duration, processed_versions: Vec<String>) -> Self {
        Self {
            duration,
            processed_versions,
        }
    }

    /// Returns whether the run had nothing to apply.
    pub fn is_no_op(&self) -> bool {
        self.processed_versions.is_empty()
    }

    /// Returns the last processed migration version, if any.
    pub fn last_processed_version(&self) -> Option<&str> {
        self.processed_versions.last().map(|s| s.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn versions(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn pending_versions_exclude_applied_ones() {
        let status = MigrationStatus::from_versions(
            versions(&["001", "002", "003"]),
            versions(&["001"]),
        );

        assert_eq!(status.pending_versions, versions(&["002", "003"]));
        assert_eq!(status.last_applied_version(), Some("001"));
        assert!(!status.is_up_to_date());
    }

    #[test]
    fn fresh_database_has_everything_pending() {
        let status = MigrationStatus::from_versions(versions(&["001"]), vec![]);
        assert_eq!(status.applied_migrations(), 0);
        assert_eq!(status.pending_migrations(), 1);
    }

    #[test]
    fn migration_result_no_op() {
        let result = MigrationResult::new(Duration::from_millis(100), vec![]);
        assert!(result.is_no_op());
        assert_eq!(result.last_processed_version(), None);
    }
}
