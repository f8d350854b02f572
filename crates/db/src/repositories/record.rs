//! Postgres record store.

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult, QueryFilter, QueryOrder,
    QuerySelect, Select, Set, SqlErr, TransactionTrait,
};
use tracing::{debug, info};

use asset_manager_core::store::{RecordStore, StoreError, collapse_batch, validate_record};
use asset_manager_shared::types::{DailySummary, Record};

use crate::entities::records::{self, Column};
use crate::entities::sea_orm_active_enums::RecordKind;

/// Rows per `INSERT` statement; keeps bind parameters well under the
/// Postgres limit of 65535.
const UPSERT_CHUNK: usize = 1000;

#[derive(Debug, FromQueryResult)]
struct SummaryRow {
    date: NaiveDate,
    record_type: RecordKind,
    total_amount: Decimal,
}

impl From<SummaryRow> for DailySummary {
    fn from(row: SummaryRow) -> Self {
        Self {
            date: row.date,
            record_type: row.record_type.into(),
            total_amount: row.total_amount,
        }
    }
}

/// Maps a database error onto the store's failure kinds.
fn store_error(err: DbErr) -> StoreError {
    if let Some(
        SqlErr::UniqueConstraintViolation(msg) | SqlErr::ForeignKeyConstraintViolation(msg),
    ) = err.sql_err()
    {
        return StoreError::ConstraintViolation(msg);
    }

    match err {
        DbErr::ConnectionAcquire(_) | DbErr::Conn(_) => StoreError::Unavailable(err.to_string()),
        _ if err.to_string().contains("violates check constraint") => {
            StoreError::ConstraintViolation(err.to_string())
        }
        _ => StoreError::Query(err.to_string()),
    }
}

/// Record store backed by the `records` table.
#[derive(Debug, Clone)]
pub struct PgRecordStore {
    db: DatabaseConnection,
}

impl PgRecordStore {
    /// Creates a new record store.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn ordered() -> Select<records::Entity> {
        records::Entity::find()
            .order_by_asc(Column::Date)
            .order_by_asc(Column::RecordType)
            .order_by_asc(Column::Description)
    }

    fn summary(query: Select<records::Entity>) -> Select<records::Entity> {
        query
            .select_only()
            .column(Column::Date)
            .column_as(Column::RecordType, "record_type")
            .column_as(Expr::col(Column::Amount).sum(), "total_amount")
            .group_by(Column::Date)
            .group_by(Column::RecordType)
            .order_by_asc(Column::Date)
            .order_by_asc(Column::RecordType)
    }
}

#[async_trait]
impl RecordStore for PgRecordStore {
    async fn upsert(&self, records: &[Record]) -> Result<u64, StoreError> {
        if records.is_empty() {
            return Ok(0);
        }

        let batch = collapse_batch(records);
        for record in &batch {
            validate_record(record)?;
        }

        let txn = self.db.begin().await.map_err(store_error)?;
        for chunk in batch.chunks(UPSERT_CHUNK) {
            let models = chunk.iter().map(|record| records::ActiveModel {
                date: Set(record.date),
                record_type: Set(record.record_type.into()),
                description: Set(record.description.clone()),
                amount: Set(record.amount),
                accessible: Set(record.accessible),
                ..Default::default()
            });

            records::Entity::insert_many(models)
                .on_conflict(
                    OnConflict::columns([Column::Date, Column::RecordType, Column::Description])
                        .update_columns([Column::Amount, Column::Accessible])
                        .to_owned(),
                )
                .exec_without_returning(&txn)
                .await
                .map_err(store_error)?;
            debug!(rows = chunk.len(), "Wrote upsert chunk");
        }
        txn.commit().await.map_err(store_error)?;

        let written = u64::try_from(batch.len()).unwrap_or(u64::MAX);
        info!(written, "Upserted records");
        Ok(written)
    }

    async fn get_all(&self) -> Result<Vec<Record>, StoreError> {
        let models = Self::ordered().all(&self.db).await.map_err(store_error)?;
        Ok(models.into_iter().map(Record::from).collect())
    }

    async fn get_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Record>, StoreError> {
        if start > end {
            return Ok(Vec::new());
        }

        let models = Self::ordered()
            .filter(Column::Date.between(start, end))
            .all(&self.db)
            .await
            .map_err(store_error)?;
        Ok(models.into_iter().map(Record::from).collect())
    }

    async fn get_summary_by_date(&self) -> Result<Vec<DailySummary>, StoreError> {
        let rows = Self::summary(records::Entity::find())
            .into_model::<SummaryRow>()
            .all(&self.db)
            .await
            .map_err(store_error)?;
        Ok(rows.into_iter().map(DailySummary::from).collect())
    }

    async fn get_inaccessible_assets_by_date(&self) -> Result<Vec<DailySummary>, StoreError> {
        let query = records::Entity::find()
            .filter(Column::RecordType.eq(RecordKind::Asset))
            .filter(Column::Accessible.eq(false));

        let rows = Self::summary(query)
            .into_model::<SummaryRow>()
            .all(&self.db)
            .await
            .map_err(store_error)?;
        Ok(rows.into_iter().map(DailySummary::from).collect())
    }
}
