//! `SeaORM` Entity for records table.

use asset_manager_shared::types::Record;
use chrono::Utc;
use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::RecordKind;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "records")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub date: Date,
    #[sea_orm(column_name = "type")]
    pub record_type: RecordKind,
    pub description: String,
    #[sea_orm(column_type = "Decimal(None)")]
    pub amount: Decimal,
    pub accessible: bool,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Record {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            date: model.date,
            record_type: model.record_type.into(),
            description: model.description,
            amount: model.amount,
            accessible: model.accessible,
            created_at: Some(model.created_at.with_timezone(&Utc)),
        }
    }
}
