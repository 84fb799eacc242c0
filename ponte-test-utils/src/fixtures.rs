//! Fixtures for dynamically-named alias tables and their seed rows.
//!
//! Alias data tables have no entities, so tests provision them with plain
//! SQL the same way an operator would in a real deployment.

use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::error::TestError;

/// Creates a physical alias table with text columns.
pub async fn create_alias_table(
    db: &DatabaseConnection,
    alias: &str,
    columns: &[&str],
) -> Result<(), TestError> {
    let columns = columns
        .iter()
        .map(|column| format!("{} text", column.to_lowercase()))
        .collect::<Vec<_>>()
        .join(", ");

    db.execute_unprepared(&format!(
        "CREATE TABLE {} ({})",
        alias.to_lowercase(),
        columns
    ))
    .await?;

    Ok(())
}

/// Inserts one row into a physical alias table.
pub async fn insert_alias_row(
    db: &DatabaseConnection,
    alias: &str,
    values: &[(&str, &str)],
) -> Result<(), TestError> {
    let columns = values
        .iter()
        .map(|(column, _)| column.to_lowercase())
        .collect::<Vec<_>>()
        .join(", ");
    let literals = values
        .iter()
        .map(|(_, value)| format!("'{}'", value.replace('\'', "''")))
        .collect::<Vec<_>>()
        .join(", ");

    db.execute_unprepared(&format!(
        "INSERT INTO {} ({}) VALUES ({})",
        alias.to_lowercase(),
        columns,
        literals
    ))
    .await?;

    Ok(())
}

/// Creates the physical platforms table (`z10`) with its canonical two-row
/// seed.
pub async fn seed_platform_table(db: &DatabaseConnection) -> Result<(), TestError> {
    create_alias_table(db, "Z10", &["Z10_COD", "Z10_DESC", "Z10_ATIVO", "Z10_DTALT"]).await?;

    insert_alias_row(
        db,
        "Z10",
        &[
            ("Z10_COD", "PLAT001"),
            ("Z10_DESC", "Mercado Livre"),
            ("Z10_ATIVO", "S"),
            ("Z10_DTALT", "20250101"),
        ],
    )
    .await?;
    insert_alias_row(
        db,
        "Z10",
        &[
            ("Z10_COD", "PLAT002"),
            ("Z10_DESC", "Shopee"),
            ("Z10_ATIVO", "S"),
            ("Z10_DTALT", "20250101"),
        ],
    )
    .await?;

    Ok(())
}

/// Inserts one customer lookup row through its entity.
pub async fn insert_customer(
    db: &DatabaseConnection,
    cod: &str,
    loja: &str,
    nome: &str,
) -> Result<(), TestError> {
    use sea_orm::{ActiveValue, EntityTrait};

    let customer = entity::customer::ActiveModel {
        a1_cod: ActiveValue::Set(cod.to_string()),
        a1_loja: ActiveValue::Set(loja.to_string()),
        a1_nome: ActiveValue::Set(nome.to_string()),
        ..Default::default()
    };

    entity::prelude::Customer::insert(customer).exec(db).await?;

    Ok(())
}
