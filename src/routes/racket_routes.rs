use axum::{extract::State, routing::get, Json, Router};

use crate::controllers::racket_controller::RacketController;
use crate::dto::racket_dto::RacketResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_racket_router() -> Router<AppState> {
    Router::new().route("/", get(list_rackets))
}

async fn list_rackets(
    State(state): State<AppState>,
) -> Result<Json<Vec<RacketResponse>>, AppError> {
    let controller = RacketController::new(state.store.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}
