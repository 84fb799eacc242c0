pub mod customer;
pub mod dict_agrup;
pub mod dict_alias;
pub mod dict_field;
pub mod dict_folder;

pub mod prelude {
    pub use super::customer::Entity as Customer;
    pub use super::dict_agrup::Entity as DictAgrup;
    pub use super::dict_alias::Entity as DictAlias;
    pub use super::dict_field::Entity as DictField;
    pub use super::dict_folder::Entity as DictFolder;
}
