//! `SeaORM` active enums.

use asset_manager_shared::types::RecordType;
use sea_orm::entity::prelude::*;

/// Stored text form of a record type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum RecordKind {
    /// Something owned.
    #[sea_orm(string_value = "asset")]
    Asset,
    /// Something owed.
    #[sea_orm(string_value = "liability")]
    Liability,
}

impl From<RecordType> for RecordKind {
    fn from(value: RecordType) -> Self {
        match value {
            RecordType::Asset => Self::Asset,
            RecordType::Liability => Self::Liability,
        }
    }
}

impl From<RecordKind> for RecordType {
    fn from(value: RecordKind) -> Self {
        match value {
            RecordKind::Asset => Self::Asset,
            RecordKind::Liability => Self::Liability,
        }
    }
}
