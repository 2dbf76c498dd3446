use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};

use crate::controllers::order_controller::OrderController;
use crate::dto::order_dto::{OrderResponse, SubmitOrderRequest, SubmitOrderResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_order_router() -> Router<AppState> {
    Router::new()
        .route("/", post(submit_order))
        .route("/:id", get(get_order))
}

async fn submit_order(
    State(state): State<AppState>,
    Json(request): Json<SubmitOrderRequest>,
) -> Result<Json<SubmitOrderResponse>, AppError> {
    let controller = OrderController::new(state.store.clone());
    let response = controller.submit(request).await?;
    Ok(Json(response))
}

async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<OrderResponse>, AppError> {
    let controller = OrderController::new(state.store.clone());
    let response = controller.get_by_id(&id).await?;
    Ok(Json(response))
}
