use chrono::Local;
use tracing::{info, warn};
use validator::Validate;

use crate::dto::booking_dto::{
    AvailabilityResponse, BookingResponse, NeighborBooking, RecordBookingRequest, TimeSlotQuery,
    TimeSlotResponse,
};
use crate::dto::ApiResponse;
use crate::models::{sheet_datetime, Booking, Order};
use crate::repositories::booking_repository::BookingRepository;
use crate::repositories::order_repository::OrderRepository;
use crate::repositories::racket_repository::RacketRepository;
use crate::services::availability::{check_racket_availability, find_neighbors};
use crate::services::time_slot::day_slots;
use crate::state::AppState;
use crate::utils::errors::{not_found_error, unknown_racket_error, AppError};
use crate::utils::validation::validate_date;

pub struct BookingController {
    state: AppState,
    orders: OrderRepository,
    rackets: RacketRepository,
    bookings: BookingRepository,
}

impl BookingController {
    pub fn new(state: AppState) -> Self {
        let store = state.store.clone();
        Self {
            state,
            orders: OrderRepository::new(store.clone()),
            rackets: RacketRepository::new(store.clone()),
            bookings: BookingRepository::new(store),
        }
    }

    /// Veredicto de disponibilidad para la ventana de una orden, con
    /// las reservas vecinas para mostrar alrededor del slot pedido.
    pub async fn availability(&self, order_id: &str) -> Result<AvailabilityResponse, AppError> {
        let order = self.find_order(order_id).await?;
        let rackets = self.rackets.find_all().await?;
        let bookings = self.bookings.find_all().await?;

        let (available, racket_id) = check_racket_availability(&order, &rackets, &bookings);
        let racket_id = racket_id.ok_or_else(|| unknown_racket_error(&order.racket_type))?;

        let (start, end) = requested_window(&order)?;
        let (previous, next) = find_neighbors(&racket_id, &bookings, start, end);

        Ok(AvailabilityResponse {
            order_id: order.id,
            racket_type: order.racket_type,
            racket_id,
            available,
            start_datetime: start.format(sheet_datetime::FORMAT).to_string(),
            end_datetime: end.format(sheet_datetime::FORMAT).to_string(),
            previous_booking: previous.map(NeighborBooking::previous),
            next_booking: next.map(NeighborBooking::next),
        })
    }

    /// Registrar la reserva de una orden. El chequeo de disponibilidad
    /// y el append corren bajo el mismo lock para que dos reservas del
    /// mismo proceso no se pisen. La orden no se re-valida acá.
    pub async fn book(
        &self,
        request: RecordBookingRequest,
    ) -> Result<ApiResponse<BookingResponse>, AppError> {
        request.validate()?;
        let order_id = request.order_id.trim();

        // Duplicado en sesión: aviso, no error
        if self.state.is_booked(order_id).await {
            warn!("⚠️ La orden {} ya fue reservada en esta sesión", order_id);
            return Ok(ApiResponse::warning("Already booked this order".to_string()));
        }

        let order = self.find_order(order_id).await?;

        let _guard = self.state.booking_lock.lock().await;

        let rackets = self.rackets.find_all().await?;
        let bookings = self.bookings.find_all().await?;

        let (available, racket_id) = check_racket_availability(&order, &rackets, &bookings);
        let racket_id = racket_id.ok_or_else(|| unknown_racket_error(&order.racket_type))?;

        if !available {
            return Err(AppError::SlotUnavailable(format!(
                "Racket '{}' is not available for the requested window",
                order.racket_type.trim()
            )));
        }

        let (start, end) = requested_window(&order)?;
        let booking = Booking {
            id: order.id.clone(),
            created_at: Local::now().naive_local(),
            order_id: order.id.clone(),
            racket_id,
            start_datetime: start,
            end_datetime: end,
            dropoff_venue: order.dropoff_venue.clone(),
            pickup_venue: order.pickup_venue.clone(),
        };
        self.bookings.append(&booking).await?;
        drop(_guard);

        self.state.mark_booked(order.id.clone()).await;
        info!(
            "✅ Reserva {} registrada para la raqueta {}",
            booking.id, booking.racket_id
        );

        Ok(ApiResponse::success_with_message(
            booking.into(),
            "Your slot has been booked".to_string(),
        ))
    }

    /// Grilla de 24 slots de una hora para un día y tipo de raqueta
    pub async fn time_slots(&self, query: TimeSlotQuery) -> Result<Vec<TimeSlotResponse>, AppError> {
        let date = validate_date(&query.date)
            .map_err(|_| AppError::BadRequest("Invalid date format".to_string()))?;
        let racket = self
            .rackets
            .find_by_type(&query.racket_type)
            .await?
            .ok_or_else(|| unknown_racket_error(&query.racket_type))?;
        let bookings = self.bookings.find_all().await?;

        let slots = day_slots(&racket.id, &bookings, date)
            .into_iter()
            .enumerate()
            .map(|(hour, slot)| TimeSlotResponse {
                start: format!("{:02}:00", hour),
                end: format!("{:02}:00", hour + 1),
                available: slot.available,
            })
            .collect();
        Ok(slots)
    }

    async fn find_order(&self, order_id: &str) -> Result<Order, AppError> {
        self.orders
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| not_found_error("Order", order_id))
    }
}

/// Ventana pedida `[dropoff, pickup)` de una orden ya validada
fn requested_window(order: &Order) -> Result<(chrono::NaiveDateTime, chrono::NaiveDateTime), AppError> {
    match (order.dropoff_datetime(), order.pickup_datetime()) {
        (Some(start), Some(end)) => Ok((start, end)),
        _ => Err(AppError::BadRequest(
            "Order has an invalid date or time".to_string(),
        )),
    }
}
