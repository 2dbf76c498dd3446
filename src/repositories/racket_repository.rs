use crate::models::Racket;
use crate::storage::{SheetStore, RACKET_SHEET};
use crate::utils::errors::AppResult;

pub struct RacketRepository {
    store: SheetStore,
}

impl RacketRepository {
    pub fn new(store: SheetStore) -> Self {
        Self { store }
    }

    pub async fn find_all(&self) -> AppResult<Vec<Racket>> {
        self.store.read_all(RACKET_SHEET).await
    }

    /// Buscar por tipo, case-insensitive y recortado
    pub async fn find_by_type(&self, racket_type: &str) -> AppResult<Option<Racket>> {
        let rackets = self.find_all().await?;
        Ok(rackets.into_iter().find(|r| r.matches_type(racket_type)))
    }
}
