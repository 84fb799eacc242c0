//! Repository for the dictionary configuration tables.
//!
//! An alias's schema is assembled from its parent row plus the field,
//! folder, and agrup child rows. Synchronization upserts the parent and
//! replaces the children wholesale; the delete-then-insert pair is not
//! wrapped in a transaction, matching the documented per-alias-at-best
//! consistency of the sync operation.

use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use serde_json::Value;

use crate::model::{
    api::SyncAliasDto,
    dictionary::{Agrup, AliasSchema, FieldDescriptor, FieldType, Folder},
};

pub struct DictSchemaRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DictSchemaRepository<'a> {
    /// Creates a new instance of [`DictSchemaRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Assembles the full [`AliasSchema`] for one alias from the
    /// configuration tables, or `None` when the alias is not registered.
    pub async fn find_by_alias(&self, alias: &str) -> Result<Option<AliasSchema>, DbErr> {
        let parent = entity::prelude::DictAlias::find()
            .filter(entity::dict_alias::Column::Alias.eq(alias))
            .one(self.db)
            .await?;

        let Some(parent) = parent else {
            return Ok(None);
        };

        let fields = entity::prelude::DictField::find()
            .filter(entity::dict_field::Column::AliasId.eq(parent.id))
            .order_by_asc(entity::dict_field::Column::DisplayOrder)
            .all(self.db)
            .await?;

        let folders = entity::prelude::DictFolder::find()
            .filter(entity::dict_folder::Column::AliasId.eq(parent.id))
            .all(self.db)
            .await?;

        let agrups = entity::prelude::DictAgrup::find()
            .filter(entity::dict_agrup::Column::AliasId.eq(parent.id))
            .order_by_asc(entity::dict_agrup::Column::DisplayOrder)
            .all(self.db)
            .await?;

        Ok(Some(AliasSchema {
            description: parent.description,
            fields: fields.into_iter().map(field_from_model).collect(),
            folders: folders
                .into_iter()
                .map(|folder| Folder {
                    id: folder.folder_id,
                    title: folder.title,
                })
                .collect(),
            agrups: agrups
                .into_iter()
                .map(|agrup| Agrup {
                    id: agrup.agrup_id,
                    title: agrup.title,
                    order: agrup.display_order,
                })
                .collect(),
        }))
    }

    /// Upserts one alias and replaces all of its child rows with the
    /// supplied schema. Returns the per-child-table counts written.
    pub async fn sync_alias(
        &self,
        alias: &str,
        schema: &AliasSchema,
    ) -> Result<SyncAliasDto, DbErr> {
        let parent = entity::dict_alias::ActiveModel {
            alias: ActiveValue::Set(alias.to_string()),
            description: ActiveValue::Set(schema.description.clone()),
            ..Default::default()
        };

        let parent = entity::prelude::DictAlias::insert(parent)
            .on_conflict(
                OnConflict::column(entity::dict_alias::Column::Alias)
                    .update_column(entity::dict_alias::Column::Description)
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await?;

        entity::prelude::DictField::delete_many()
            .filter(entity::dict_field::Column::AliasId.eq(parent.id))
            .exec(self.db)
            .await?;

        entity::prelude::DictFolder::delete_many()
            .filter(entity::dict_folder::Column::AliasId.eq(parent.id))
            .exec(self.db)
            .await?;

        entity::prelude::DictAgrup::delete_many()
            .filter(entity::dict_agrup::Column::AliasId.eq(parent.id))
            .exec(self.db)
            .await?;

        if !schema.fields.is_empty() {
            let fields = schema
                .fields
                .iter()
                .map(|field| field_to_active_model(parent.id, field));

            entity::prelude::DictField::insert_many(fields)
                .exec(self.db)
                .await?;
        }

        if !schema.folders.is_empty() {
            let folders =
                schema
                    .folders
                    .iter()
                    .map(|folder| entity::dict_folder::ActiveModel {
                        alias_id: ActiveValue::Set(parent.id),
                        folder_id: ActiveValue::Set(folder.id.clone()),
                        title: ActiveValue::Set(folder.title.clone()),
                        ..Default::default()
                    });

            entity::prelude::DictFolder::insert_many(folders)
                .exec(self.db)
                .await?;
        }

        if !schema.agrups.is_empty() {
            let agrups = schema
                .agrups
                .iter()
                .map(|agrup| entity::dict_agrup::ActiveModel {
                    alias_id: ActiveValue::Set(parent.id),
                    agrup_id: ActiveValue::Set(agrup.id.clone()),
                    title: ActiveValue::Set(agrup.title.clone()),
                    display_order: ActiveValue::Set(agrup.order),
                    ..Default::default()
                });

            entity::prelude::DictAgrup::insert_many(agrups)
                .exec(self.db)
                .await?;
        }

        Ok(SyncAliasDto {
            alias: alias.to_string(),
            fields: schema.fields.len(),
            folders: schema.folders.len(),
            agrups: schema.agrups.len(),
        })
    }
}

fn field_from_model(model: entity::dict_field::Model) -> FieldDescriptor {
    FieldDescriptor {
        field: model.field,
        title: model.title,
        field_type: FieldType::from_code(&model.field_type).unwrap_or(FieldType::Character),
        size: model.size,
        required: model.required,
        editable: model.editable,
        enabled: model.enabled,
        is_virtual: model.is_virtual,
        options: serde_json::from_value(model.options).unwrap_or_default(),
        decimals: model.decimals,
        exist_trigger: model.exist_trigger,
        help: model.help,
        order: model.display_order,
        agrup: model.agrup,
        folder: model.folder,
        standard_query: model.standard_query,
        standard_query_detail: model.standard_query_detail,
    }
}

fn field_to_active_model(alias_id: i32, field: &FieldDescriptor) -> entity::dict_field::ActiveModel {
    entity::dict_field::ActiveModel {
        alias_id: ActiveValue::Set(alias_id),
        field: ActiveValue::Set(field.field.clone()),
        title: ActiveValue::Set(field.title.clone()),
        field_type: ActiveValue::Set(field.field_type.as_code().to_string()),
        size: ActiveValue::Set(field.size),
        required: ActiveValue::Set(field.required),
        editable: ActiveValue::Set(field.editable),
        enabled: ActiveValue::Set(field.enabled),
        is_virtual: ActiveValue::Set(field.is_virtual),
        options: ActiveValue::Set(
            serde_json::to_value(&field.options).unwrap_or(Value::Array(Vec::new())),
        ),
        decimals: ActiveValue::Set(field.decimals),
        exist_trigger: ActiveValue::Set(field.exist_trigger),
        help: ActiveValue::Set(field.help.clone()),
        display_order: ActiveValue::Set(field.order),
        agrup: ActiveValue::Set(field.agrup.clone()),
        folder: ActiveValue::Set(field.folder.clone()),
        standard_query: ActiveValue::Set(field.standard_query.clone()),
        standard_query_detail: ActiveValue::Set(field.standard_query_detail.clone()),
        ..Default::default()
    }
}
