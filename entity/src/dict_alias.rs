use sea_orm::entity::prelude::*;

/// One registered dictionary alias (logical table) and its human label.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "dict_alias")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub alias: String,
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::dict_field::Entity")]
    DictField,
    #[sea_orm(has_many = "super::dict_folder::Entity")]
    DictFolder,
    #[sea_orm(has_many = "super::dict_agrup::Entity")]
    DictAgrup,
}

impl Related<super::dict_field::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DictField.def()
    }
}

impl Related<super::dict_folder::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DictFolder.def()
    }
}

impl Related<super::dict_agrup::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DictAgrup.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
