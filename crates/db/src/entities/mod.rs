//! `SeaORM` entity definitions.

pub mod records;
pub mod sea_orm_active_enums;
