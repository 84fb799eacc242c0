use sea_orm::entity::prelude::*;

/// UI grouping tab declared by an alias schema.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "dict_folder")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub alias_id: i32,
    pub folder_id: String,
    pub title: String,
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
