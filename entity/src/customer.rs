use sea_orm::entity::prelude::*;

/// Fixed-shape customer lookup row (the ERP `SA1` projection).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "customer")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub a1_cod: String,
    pub a1_loja: String,
    pub a1_nome: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
