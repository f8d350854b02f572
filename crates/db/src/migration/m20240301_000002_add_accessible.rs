//! Accessible flag for assets that are not readily liquid.
//!
//! Existing rows, and every liability, are accessible.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(ACCESSIBLE_SQL).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(
            "DROP INDEX IF EXISTS idx_records_inaccessible;
             ALTER TABLE records DROP COLUMN IF EXISTS accessible;",
        )
        .await?;
        Ok(())
    }
}

const ACCESSIBLE_SQL: &str = r"
ALTER TABLE records ADD COLUMN accessible BOOLEAN NOT NULL DEFAULT TRUE;

ALTER TABLE records ADD CONSTRAINT chk_records_liability_accessible
    CHECK (type <> 'liability' OR accessible);

CREATE INDEX idx_records_inaccessible ON records(date) WHERE type = 'asset' AND NOT accessible;
";
