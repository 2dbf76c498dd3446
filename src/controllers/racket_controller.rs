use crate::dto::racket_dto::RacketResponse;
use crate::repositories::racket_repository::RacketRepository;
use crate::storage::SheetStore;
use crate::utils::errors::AppError;

pub struct RacketController {
    rackets: RacketRepository,
}

impl RacketController {
    pub fn new(store: SheetStore) -> Self {
        Self {
            rackets: RacketRepository::new(store),
        }
    }

    pub async fn list(&self) -> Result<Vec<RacketResponse>, AppError> {
        let rackets = self.rackets.find_all().await?;
        Ok(rackets.into_iter().map(RacketResponse::from).collect())
    }
}
