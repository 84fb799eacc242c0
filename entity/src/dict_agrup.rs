use sea_orm::entity::prelude::*;

/// UI grouping section declared by an alias schema, ordered for display.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "dict_agrup")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub alias_id: i32,
    pub agrup_id: String,
    pub title: String,
    pub display_order: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::dict_alias::Entity",
        from = "Column::AliasId",
        to = "super::dict_alias::Column::Id"
    )]
    DictAlias,
}

impl Related<super::dict_alias::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DictAlias.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
