use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};

use crate::controllers::booking_controller::BookingController;
use crate::dto::booking_dto::{
    AvailabilityResponse, BookingResponse, RecordBookingRequest, TimeSlotQuery, TimeSlotResponse,
};
use crate::dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_booking_router() -> Router<AppState> {
    Router::new()
        .route("/", post(record_booking))
        .route("/availability/:order_id", get(check_availability))
        .route("/timeslots", get(time_slots))
}

async fn check_availability(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<Json<AvailabilityResponse>, AppError> {
    let controller = BookingController::new(state);
    let response = controller.availability(&order_id).await?;
    Ok(Json(response))
}

async fn record_booking(
    State(state): State<AppState>,
    Json(request): Json<RecordBookingRequest>,
) -> Result<Json<ApiResponse<BookingResponse>>, AppError> {
    let controller = BookingController::new(state);
    let response = controller.book(request).await?;
    Ok(Json(response))
}

async fn time_slots(
    State(state): State<AppState>,
    Query(query): Query<TimeSlotQuery>,
) -> Result<Json<Vec<TimeSlotResponse>>, AppError> {
    let controller = BookingController::new(state);
    let response = controller.time_slots(query).await?;
    Ok(Json(response))
}
