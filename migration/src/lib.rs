pub use sea_orm_migration::prelude::*;

mod m20260702_000001_create_dict_alias_table;
mod m20260702_000002_create_dict_field_table;
mod m20260702_000003_create_dict_folder_table;
mod m20260702_000004_create_dict_agrup_table;
mod m20260702_000005_create_customer_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260702_000001_create_dict_alias_table::Migration),
            Box::new(m20260702_000002_create_dict_field_table::Migration),
            Box::new(m20260702_000003_create_dict_folder_table::Migration),
            Box::new(m20260702_000004_create_dict_agrup_table::Migration),
            Box::new(m20260702_000005_create_customer_table::Migration),
        ]
    }
}
