//! The dictionary subsystem: schema registry, generic browse, record
//! positioning, initializers, and schema synchronization.
//!
//! Every request names an alias. The registry resolves its schema and with
//! it the store serving its rows: the persistent adapter when the
//! configuration tables hold the alias, the in-memory fallback otherwise.

pub mod query;
pub mod resolver;
pub mod seed;

use sea_orm::{DatabaseConnection, EntityTrait};
use serde_json::Value;

use crate::{
    data::{
        alias_row::AliasRowRepository, dict_schema::DictSchemaRepository, is_missing_table,
        mock::MockStore, store::AliasStore,
    },
    error::{dictionary::DictionaryError, Error},
    model::{
        api::{CustomerLookupDto, OrderChildrenDto, OrderLookupDto, SyncResultDto},
        dictionary::{value_string, AliasRow, AliasSchema, FieldType, SyncRequest},
    },
    service::dictionary::query::Page,
    util::time::today_ymd,
};

/// Which source served an alias's schema.
pub enum SchemaSource {
    /// Assembled from the persistent configuration tables.
    Persistent(AliasSchema),
    /// Configuration tables not provisioned; compiled-in seed definition.
    Seeded(AliasSchema),
    /// No schema available from either source.
    Unknown,
}

pub struct DictionaryService<'a> {
    db: &'a DatabaseConnection,
    mock: &'a MockStore,
}

impl<'a> DictionaryService<'a> {
    /// Creates a new instance of [`DictionaryService`]
    pub fn new(db: &'a DatabaseConnection, mock: &'a MockStore) -> Self {
        Self { db, mock }
    }

    /// Resolves the schema source for one alias.
    ///
    /// A reachable registry is authoritative: an alias it does not hold is
    /// `Unknown` even when a seed definition exists. The seed only serves
    /// reads when the configuration tables themselves are missing.
    pub async fn resolve(&self, alias: &str) -> Result<SchemaSource, Error> {
        let repository = DictSchemaRepository::new(self.db);

        match repository.find_by_alias(alias).await {
            Ok(Some(schema)) => Ok(SchemaSource::Persistent(schema)),
            Ok(None) => Ok(SchemaSource::Unknown),
            Err(err) if is_missing_table(&err) => Ok(match seed::schema(alias) {
                Some(schema) => SchemaSource::Seeded(schema),
                None => SchemaSource::Unknown,
            }),
            Err(err) => Err(err.into()),
        }
    }

    /// Full schema for one alias, or `AliasNotFound`.
    pub async fn schema(&self, alias: &str) -> Result<AliasSchema, Error> {
        match self.resolve(alias).await? {
            SchemaSource::Persistent(schema) | SchemaSource::Seeded(schema) => Ok(schema),
            SchemaSource::Unknown => Err(DictionaryError::AliasNotFound(alias.to_string()).into()),
        }
    }

    /// The row store serving this alias: the persistent adapter when the
    /// registry holds it, the mock fallback otherwise. Store selection never
    /// fails with not-found; unknown aliases simply read as empty.
    pub async fn store_for(&self, alias: &str) -> Result<Box<dyn AliasStore + 'a>, Error> {
        Ok(match self.resolve(alias).await? {
            SchemaSource::Persistent(_) => Box::new(AliasRowRepository::new(self.db)),
            SchemaSource::Seeded(_) | SchemaSource::Unknown => Box::new(self.mock.clone()),
        })
    }

    /// Filtered, ordered, paginated rows for one alias.
    pub async fn browse(
        &self,
        alias: &str,
        page: Option<&str>,
        page_size: Option<&str>,
        filter: &str,
        order: &str,
    ) -> Result<Page, Error> {
        let store = self.store_for(alias).await?;

        let rows = store.fetch_rows(alias).await?;
        let rows = query::apply_filter(rows, filter);
        let rows = query::apply_order(rows, order);

        Ok(query::paginate(
            rows,
            query::parse_page(page),
            query::parse_page_size(page_size),
        ))
    }

    /// Default blank record shaped by the alias's schema: first option value
    /// for select-constrained fields, 0 for numerics, today for dates, false
    /// for logicals, empty string for everything else.
    pub async fn initializer(&self, alias: &str) -> Result<AliasRow, Error> {
        let schema = self.schema(alias).await?;
        let mut initial = AliasRow::new();

        for field in &schema.fields {
            let value = if let Some(first) = field.options.first() {
                first.value.clone()
            } else {
                match field.field_type {
                    FieldType::Numeric => Value::from(0),
                    FieldType::Date => Value::String(today_ymd()),
                    FieldType::Logical => Value::Bool(false),
                    _ => Value::String(String::new()),
                }
            };

            initial.insert(field.field.clone(), value);
        }

        Ok(initial)
    }

    /// Positioned record lookup from a URL-embedded payload.
    pub async fn positioned_data(&self, alias: &str, raw_item: &str) -> Result<Value, Error> {
        let store = self.store_for(alias).await?;
        let rows = store.fetch_rows(alias).await?;
        let positioned = resolver::parse_positioned_payload(raw_item);

        Ok(resolver::find_positioned(alias, &positioned, &rows))
    }

    /// Synchronizes alias schemas into the configuration tables.
    ///
    /// Aliases are written one at a time; a storage failure aborts the rest
    /// of the batch without retracting aliases already written. Re-running
    /// the same payload converges to the same end state.
    pub async fn sync(&self, request: SyncRequest) -> Result<SyncResultDto, Error> {
        let schemas: Vec<(String, AliasSchema)> = if let Some(map) = request.alias_schemas {
            map.into_iter().collect()
        } else if let Some(entries) = request.schemas {
            entries
                .into_iter()
                .map(|entry| (entry.alias, entry.schema))
                .collect()
        } else if request.use_seed {
            seed::default_schemas()
        } else {
            return Err(DictionaryError::NoSchemasSupplied.into());
        };

        let repository = DictSchemaRepository::new(self.db);
        let mut results = Vec::new();

        for (alias, schema) in schemas {
            if schema.description.trim().is_empty() {
                continue;
            }

            let alias = alias.to_uppercase();
            results.push(repository.sync_alias(&alias, &schema).await?);
        }

        Ok(SyncResultDto {
            synced: results.len(),
            results,
        })
    }

    /// Customer lookup rows, optionally filtered by a substring match across
    /// every projected field.
    pub async fn customers(&self, filter: &str) -> Result<Vec<CustomerLookupDto>, Error> {
        let needle = filter.to_lowercase();
        let customers = self.fetch_customers().await?;

        if needle.is_empty() {
            return Ok(customers);
        }

        Ok(customers
            .into_iter()
            .filter(|customer| {
                [&customer.a1_cod, &customer.a1_loja, &customer.a1_nome]
                    .iter()
                    .any(|value| value.to_lowercase().contains(&needle))
            })
            .collect())
    }

    /// Customer lookup by exact code; at most one row.
    pub async fn customer_by_id(&self, id: &str) -> Result<Vec<CustomerLookupDto>, Error> {
        Ok(self
            .fetch_customers()
            .await?
            .into_iter()
            .filter(|customer| customer.a1_cod == id)
            .take(1)
            .collect())
    }

    async fn fetch_customers(&self) -> Result<Vec<CustomerLookupDto>, Error> {
        match entity::prelude::Customer::find().all(self.db).await {
            Ok(models) => Ok(models
                .into_iter()
                .map(|model| CustomerLookupDto {
                    a1_cod: model.a1_cod,
                    a1_loja: model.a1_loja,
                    a1_nome: model.a1_nome,
                })
                .collect()),
            Err(err) if is_missing_table(&err) => Ok(self.mock.customers()),
            Err(err) => Err(err.into()),
        }
    }

    /// Integrated-order lookup projection, filtered on the order code.
    pub async fn order_lookup(&self, filter: &str) -> Result<Vec<OrderLookupDto>, Error> {
        let store = self.store_for("Z02").await?;
        let rows = store.fetch_rows("Z02").await?;
        let needle = filter.to_lowercase();

        Ok(rows
            .iter()
            .filter(|row| {
                needle.is_empty()
                    || value_string(row.get("Z02_COD"))
                        .to_lowercase()
                        .contains(&needle)
            })
            .map(project_order_lookup)
            .collect())
    }

    /// Integrated-order lookup by exact code; at most one row.
    pub async fn order_lookup_by_id(&self, id: &str) -> Result<Vec<OrderLookupDto>, Error> {
        let store = self.store_for("Z02").await?;
        let rows = store.fetch_rows("Z02").await?;

        Ok(rows
            .iter()
            .filter(|row| value_string(row.get("Z02_COD")) == id)
            .take(1)
            .map(project_order_lookup)
            .collect())
    }

    /// Item/payment/invoice child rows of one integrated order.
    pub async fn order_children(
        &self,
        id_ped: &str,
        id_int: &str,
    ) -> Result<OrderChildrenDto, Error> {
        let store = self.store_for("Z02").await?;
        store.order_children(id_ped, id_int).await
    }

    /// Creates one record, generating its code from the current row count
    /// when the payload carries none.
    pub async fn create_record(
        &self,
        alias: &str,
        id_field: &str,
        payload: AliasRow,
        code: impl FnOnce(usize) -> String + Send,
        stamp_field: Option<&str>,
    ) -> Result<AliasRow, Error> {
        let store = self.store_for(alias).await?;
        let rows = store.fetch_rows(alias).await?;

        let id = {
            let supplied = value_string(payload.get(id_field));
            if supplied.is_empty() {
                code(rows.len())
            } else {
                supplied
            }
        };

        let mut row = payload;
        row.insert(id_field.to_string(), Value::String(id));
        if let Some(stamp) = stamp_field {
            row.insert(stamp.to_string(), Value::String(today_ymd()));
        }

        store.insert_row(alias, row).await
    }

    /// Merges the payload over the record addressed by its identity field,
    /// preserving that identity.
    pub async fn update_record(
        &self,
        alias: &str,
        id_field: &str,
        id: &str,
        mut patch: AliasRow,
        stamp_field: Option<&str>,
        resource: &'static str,
    ) -> Result<AliasRow, Error> {
        patch.insert(id_field.to_string(), Value::String(id.to_string()));
        if let Some(stamp) = stamp_field {
            patch.insert(stamp.to_string(), Value::String(today_ymd()));
        }

        let store = self.store_for(alias).await?;
        let updated = store.update_rows_by_field(alias, id_field, id, patch).await?;

        updated.into_iter().next().ok_or_else(|| {
            DictionaryError::RecordNotFound {
                resource,
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Removes the record(s) addressed by an identity value.
    pub async fn delete_record(
        &self,
        alias: &str,
        id_field: &str,
        id: &str,
        resource: &'static str,
    ) -> Result<(), Error> {
        let store = self.store_for(alias).await?;
        let removed = store.delete_rows_by_field(alias, id_field, id).await?;

        if removed == 0 {
            return Err(DictionaryError::RecordNotFound {
                resource,
                id: id.to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// Writes product x account bindings.
    ///
    /// With an `ITENS` list, all bindings of the payload's ERP product are
    /// replaced by the new set, codes re-sequenced from 1; without one, a
    /// single binding is appended with the next sequence code.
    pub async fn write_product_bindings(&self, payload: AliasRow) -> Result<(), Error> {
        let store = self.store_for("Z01").await?;

        let items: Vec<AliasRow> = payload
            .get("ITENS")
            .and_then(Value::as_array)
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|entry| entry.as_object().cloned())
                    .collect()
            })
            .unwrap_or_default();

        let mut base = payload;
        base.remove("ITENS");

        if items.is_empty() {
            let rows = store.fetch_rows("Z01").await?;
            let mut row = base;
            row.insert(
                "Z01_COD".to_string(),
                Value::String((rows.len() + 1).to_string()),
            );
            store.insert_row("Z01", row).await?;

            return Ok(());
        }

        let product = value_string(base.get("Z01_PRDERP"));
        if product.is_empty() {
            return Err(DictionaryError::MissingParentKey("Z01_PRDERP").into());
        }

        store
            .delete_rows_by_field("Z01", "Z01_PRDERP", &product)
            .await?;

        for (index, item) in items.into_iter().enumerate() {
            let mut row = base.clone();
            for (key, value) in item {
                row.insert(key, value);
            }
            row.insert("Z01_COD".to_string(), Value::String((index + 1).to_string()));

            store.insert_row("Z01", row).await?;
        }

        Ok(())
    }

    /// All bindings of one ERP product.
    pub async fn product_bindings(&self, id: &str) -> Result<Vec<AliasRow>, Error> {
        let store = self.store_for("Z01").await?;

        Ok(store
            .fetch_rows("Z01")
            .await?
            .into_iter()
            .filter(|row| value_string(row.get("Z01_PRDERP")) == id)
            .collect())
    }

    /// Removes all bindings of one ERP product.
    pub async fn delete_product_bindings(&self, id: &str) -> Result<(), Error> {
        self.delete_record("Z01", "Z01_PRDERP", id, "Product x account")
            .await
    }
}

fn project_order_lookup(row: &AliasRow) -> OrderLookupDto {
    OrderLookupDto {
        z02_cod: value_string(row.get("Z02_COD")),
        z02_idped: value_string(row.get("Z02_IDPED")),
    }
}
