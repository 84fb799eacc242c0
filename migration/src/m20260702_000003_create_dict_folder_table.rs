use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260702_000001_create_dict_alias_table::DictAlias;

static FK_DICT_FOLDER_ALIAS_ID: &str = "fk_dict_folder_alias_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DictFolder::Table)
                    .if_not_exists()
                    .col(pk_auto(DictFolder::Id))
                    .col(integer(DictFolder::AliasId))
                    .col(string(DictFolder::FolderId))
                    .col(string(DictFolder::Title))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_DICT_FOLDER_ALIAS_ID)
                    .from_tbl(DictFolder::Table)
                    .from_col(DictFolder::AliasId)
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
                    .name(FK_DICT_FOLDER_ALIAS_ID)
                    .table(DictFolder::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(DictFolder::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum DictFolder {
    Table,
    Id,
    AliasId,
    FolderId,
    Title,
}
