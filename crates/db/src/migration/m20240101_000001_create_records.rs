//! Records table.
//!
//! One row per (date, type, description). Descriptions use the "C" collation
//! so ordering is by byte value on every server locale.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(RECORDS_SQL).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared("DROP TABLE IF EXISTS records CASCADE;")
            .await?;
        Ok(())
    }
}

const RECORDS_SQL: &str = r#"
CREATE TABLE records (
    id BIGSERIAL PRIMARY KEY,
    date DATE NOT NULL,
    type TEXT NOT NULL,
    description TEXT COLLATE "C" NOT NULL,
    amount NUMERIC NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT uq_records_natural_key UNIQUE (date, type, description),
    CONSTRAINT chk_records_type CHECK (type IN ('asset', 'liability')),
    CONSTRAINT chk_records_description CHECK (length(trim(description)) > 0),
    CONSTRAINT chk_records_amount CHECK (amount >= 0)
);

-- Date range scans and per-date aggregation
CREATE INDEX idx_records_date ON records(date);
"#;
