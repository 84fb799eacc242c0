use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260702_000001_create_dict_alias_table::DictAlias;

static FK_DICT_AGRUP_ALIAS_ID: &str = "fk_dict_agrup_alias_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DictAgrup::Table)
                    .if_not_exists()
                    .col(pk_auto(DictAgrup::Id))
                    .col(integer(DictAgrup::AliasId))
                    .col(string(DictAgrup::AgrupId))
                    .col(string(DictAgrup::Title))
                    .col(integer(DictAgrup::DisplayOrder))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_DICT_AGRUP_ALIAS_ID)
                    .from_tbl(DictAgrup::Table)
                    .from_col(DictAgrup::AliasId)
                    .to_tbl(DictAlias::Table)
                    .to_col(DictAlias::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_DICT_AGRUP_ALIAS_ID)
                    .table(DictAgrup::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(DictAgrup::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum DictAgrup {
    Table,
    Id,
    AliasId,
    AgrupId,
    Title,
    DisplayOrder,
}
