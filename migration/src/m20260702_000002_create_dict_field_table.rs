use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260702_000001_create_dict_alias_table::DictAlias;

static IDX_DICT_FIELD_ALIAS_ID: &str = "idx_dict_field_alias_id";
static FK_DICT_FIELD_ALIAS_ID: &str = "fk_dict_field_alias_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DictField::Table)
                    .if_not_exists()
                    .col(pk_auto(DictField::Id))
                    .col(integer(DictField::AliasId))
                    .col(string(DictField::Field))
                    .col(string(DictField::Title))
                    .col(string(DictField::FieldType))
                    .col(integer(DictField::Size))
                    .col(boolean(DictField::Required))
                    .col(boolean(DictField::Editable))
                    .col(boolean(DictField::Enabled))
                    .col(boolean(DictField::Virtual))
                    .col(json(DictField::Options))
                    .col(integer(DictField::Decimals))
                    .col(boolean(DictField::ExistTrigger))
                    .col(string(DictField::Help))
                    .col(integer(DictField::DisplayOrder))
                    .col(string_null(DictField::Agrup))
                    .col(string_null(DictField::Folder))
                    .col(string_null(DictField::StandardQuery))
                    .col(json_null(DictField::StandardQueryDetail))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_DICT_FIELD_ALIAS_ID)
                    .table(DictField::Table)
                    .col(DictField::AliasId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_DICT_FIELD_ALIAS_ID)
                    .from_tbl(DictField::Table)
                    .from_col(DictField::AliasId)
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
                    .name(FK_DICT_FIELD_ALIAS_ID)
                    .table(DictField::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_DICT_FIELD_ALIAS_ID)
                    .table(DictField::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(DictField::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum DictField {
    Table,
    Id,
    AliasId,
    Field,
    Title,
    FieldType,
    Size,
    Required,
    Editable,
    Enabled,
    Virtual,
    Options,
    Decimals,
    ExistTrigger,
    Help,
    DisplayOrder,
    Agrup,
    Folder,
    StandardQuery,
    StandardQueryDetail,
}
