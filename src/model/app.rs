use sea_orm::DatabaseConnection;

use crate::data::mock::MockStore;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// Fallback dataset served when the dictionary tables are not
    /// provisioned; owned here so tests can swap or inspect it.
    pub mock: MockStore,
}

impl From<(DatabaseConnection, MockStore)> for AppState {
    fn from((db, mock): (DatabaseConnection, MockStore)) -> Self {
        Self { db, mock }
    }
}
