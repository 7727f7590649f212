use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Shared across portfolios; rows are upserted by `key`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tech_stacks")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text", unique)]
    pub key: String,

    #[sea_orm(column_type = "Text")]
    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub icon: String,

    #[sea_orm(column_type = "Text")]
    pub level: String,

    #[sea_orm(column_type = "Text")]
    pub priority: String,

    #[sea_orm(column_name = "type", column_type = "Text")]
    pub stack_type: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
