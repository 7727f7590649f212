use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "feature_tech_stacks")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Uuid")]
    pub feature_id: Uuid,

    #[sea_orm(column_type = "Uuid")]
    pub tech_stack_id: Uuid,

    pub position: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::features::Entity",
        from = "Column::FeatureId",
        to = "super::features::Column::Id",
        on_delete = "Cascade",
        on_update = "Cascade"
    )]
    Features,

    #[sea_orm(
        belongs_to = "super::tech_stacks::Entity",
        from = "Column::TechStackId",
        to = "super::tech_stacks::Column::Id",
        on_delete = "Cascade",
        on_update = "Cascade"
    )]
    TechStacks,
}

impl Related<super::tech_stacks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TechStacks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
