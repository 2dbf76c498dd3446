use serde::Serialize;

use crate::models::Racket;

/// Response de raqueta para la API
#[derive(Debug, Serialize)]
pub struct RacketResponse {
    pub id: String,
    #[serde(rename = "type")]
    pub racket_type: String,
}

impl From<Racket> for RacketResponse {
    fn from(racket: Racket) -> Self {
        Self {
            id: racket.id,
            racket_type: racket.racket_type,
        }
    }
}
