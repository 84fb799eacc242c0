//! Row access for dynamically-named alias tables.
//!
//! Aliases map to physical tables by convention: the lower-cased alias code.
//! Statements are built at runtime with sea-query since no entity exists for
//! these tables. The casing contract is uppercase column names on the way
//! out and lowercase on the way in.

use async_trait::async_trait;
use sea_orm::{
    sea_query::{Alias, Asterisk, Expr, ExprTrait, Query, SimpleExpr},
    ConnectionTrait, DatabaseConnection, DbErr, FromQueryResult, JsonValue,
};
use serde_json::Value;

use crate::{
    data::{is_missing_table, store::AliasStore},
    error::Error,
    model::{
        api::OrderChildrenDto,
        dictionary::{value_string, AliasRow},
    },
};

pub struct AliasRowRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AliasRowRepository<'a> {
    /// Creates a new instance of [`AliasRowRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    fn table(alias: &str) -> Alias {
        Alias::new(alias.to_lowercase())
    }

    /// Binds a JSON value as a statement parameter.
    fn bind_value(value: &Value) -> SimpleExpr {
        match value {
            Value::Null => Expr::value(sea_orm::sea_query::Value::String(None)),
            Value::Bool(flag) => Expr::value(*flag),
            Value::Number(number) => {
                if let Some(int) = number.as_i64() {
                    Expr::value(int)
                } else {
                    Expr::value(number.as_f64().unwrap_or_default())
                }
            }
            Value::String(text) => Expr::value(text.clone()),
            // Arrays and nested objects are stored in their JSON text form.
            other => Expr::value(other.to_string()),
        }
    }

    fn uppercase_keys(row: &serde_json::Map<String, Value>) -> AliasRow {
        row.iter()
            .map(|(key, value)| (key.to_uppercase(), value.clone()))
            .collect()
    }

    /// Filters rows on the string form of one uppercase column.
    fn matching<'r, 'f>(
        rows: &'r [AliasRow],
        field: &'f str,
        value: &str,
    ) -> impl Iterator<Item = &'r AliasRow> + use<'r, 'f> {
        let value = value.to_string();
        rows.iter()
            .filter(move |row| value_string(row.get(field)) == value)
    }
}

#[async_trait]
impl AliasStore for AliasRowRepository<'_> {
    async fn fetch_rows(&self, alias: &str) -> Result<Vec<AliasRow>, Error> {
        let mut query = Query::select();
        query.column(Asterisk).from(Self::table(alias));

        let stmt = self.db.get_database_backend().build(&query);

        let rows = match JsonValue::find_by_statement(stmt).all(self.db).await {
            Ok(rows) => rows,
            Err(err) if is_missing_table(&err) => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        Ok(rows
            .iter()
            .filter_map(|value| value.as_object())
            .map(Self::uppercase_keys)
            .collect())
    }

    async fn insert_row(&self, alias: &str, row: AliasRow) -> Result<AliasRow, Error> {
        let mut columns = Vec::with_capacity(row.len());
        let mut values = Vec::with_capacity(row.len());

        for (key, value) in &row {
            columns.push(Alias::new(key.to_lowercase()));
            values.push(Self::bind_value(value));
        }

        let mut query = Query::insert();
        query.into_table(Self::table(alias)).columns(columns);
        query
            .values(values)
            .map_err(|err| DbErr::Custom(err.to_string()))?;

        self.db.execute(&query).await?;

        Ok(Self::uppercase_keys(&row))
    }

    async fn update_rows_by_field(
        &self,
        alias: &str,
        field: &str,
        value: &str,
        patch: AliasRow,
    ) -> Result<Vec<AliasRow>, Error> {
        let mut query = Query::update();
        query.table(Self::table(alias));

        for (key, val) in &patch {
            query.value(Alias::new(key.to_lowercase()), Self::bind_value(val));
        }

        query.and_where(Expr::col(Alias::new(field.to_lowercase())).eq(value));

        match self.db.execute(&query).await {
            Ok(_) => {}
            Err(err) if is_missing_table(&err) => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        }

        let rows = self.fetch_rows(alias).await?;
        Ok(Self::matching(&rows, field, value).cloned().collect())
    }

    async fn delete_rows_by_field(
        &self,
        alias: &str,
        field: &str,
        value: &str,
    ) -> Result<u64, Error> {
        let mut query = Query::delete();
        query
            .from_table(Self::table(alias))
            .and_where(Expr::col(Alias::new(field.to_lowercase())).eq(value));

        match self.db.execute(&query).await {
            Ok(result) => Ok(result.rows_affected()),
            Err(err) if is_missing_table(&err) => Ok(0),
            Err(err) => Err(err.into()),
        }
    }

    async fn order_children(
        &self,
        id_ped: &str,
        id_int: &str,
    ) -> Result<OrderChildrenDto, Error> {
        let scoped = |rows: Vec<AliasRow>, alias: &str| -> Vec<AliasRow> {
            let ped_field = format!("{alias}_IDPED");
            let int_field = format!("{alias}_IDINT");
            rows.into_iter()
                .filter(|row| {
                    value_string(row.get(&ped_field)) == id_ped
                        && value_string(row.get(&int_field)) == id_int
                })
                .collect()
        };

        Ok(OrderChildrenDto {
            items: scoped(self.fetch_rows("Z03").await?, "Z03"),
            payments: scoped(self.fetch_rows("Z05").await?, "Z05"),
            invoices: scoped(self.fetch_rows("Z06").await?, "Z06"),
        })
    }
}
