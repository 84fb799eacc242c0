use sea_orm::entity::prelude::*;

/// One column of an alias: the full UI/validation contract served to clients.
///
/// `options` and `standard_query_detail` are stored as JSON since their shape
/// is owned by the UI contract, not by this service.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "dict_field")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub alias_id: i32,
    pub field: String,
    pub title: String,
    pub field_type: String,
    pub size: i32,
    pub required: bool,
    pub editable: bool,
    pub enabled: bool,
    #[sea_orm(column_name = "virtual")]
    pub is_virtual: bool,
    pub options: Json,
    pub decimals: i32,
    pub exist_trigger: bool,
    pub help: String,
    pub display_order: i32,
    pub agrup: Option<String>,
    pub folder: Option<String>,
    pub standard_query: Option<String>,
    pub standard_query_detail: Option<Json>,
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
