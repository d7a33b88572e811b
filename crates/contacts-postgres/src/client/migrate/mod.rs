//! Embedded schema migrations.
//!
//! Migrations are compiled into the binary and applied at startup through
//! [`PgClientMigrationExt`]. Applying them is idempotent: versions recorded in
//! `__diesel_schema_migrations` are skipped.

mod migrate_result;
mod run_migration;

pub use migrate_result::{MigrationResult, MigrationStatus};
use run_migration::{get_applied_migrations, get_migration_status, run_pending_migrations};

use crate::{PgClient, PgResult};

/// Extension trait adding migration management to [`PgClient`].
pub trait PgClientMigrationExt {
    /// Applies every embedded migration that has not been applied yet.
    ///
    /// # Errors
    ///
    /// Returns an error if a migration fails or the database is unreachable.
    fn run_pending_migrations(&self) -> impl Future<Output = PgResult<MigrationResult>> + Send;

    /// Compares embedded migrations with the versions recorded in the database.
    fn get_migration_status(&self) -> impl Future<Output = PgResult<MigrationStatus>> + Send;

    /// Lists the migration versions recorded in the database, oldest first.
    fn get_applied_migrations(&self) -> impl Future<Output = PgResult<Vec<String>>> + Send;
}

impl PgClientMigrationExt for PgClient {
    async fn run_pending_migrations(&self) -> PgResult<MigrationResult> {
        run_pending_migrations(self).await
    }

    async fn get_migration_status(&self) -> PgResult<MigrationStatus> {
        let mut conn = self.get_pooled_connection().await?;
        get_migration_status(&mut conn).await
    }

    async fn get_applied_migrations(&self) -> PgResult<Vec<String>> {
        let mut conn = self.get_pooled_connection().await?;
        get_applied_migrations(&mut conn).await
    }
}
