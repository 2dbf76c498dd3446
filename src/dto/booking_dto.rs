use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{sheet_datetime, Booking};

/// Request para registrar la reserva de una orden ya validada
#[derive(Debug, Deserialize, Validate)]
pub struct RecordBookingRequest {
    #[validate(length(min = 1, message = "order_id is required"))]
    pub order_id: String,
}

/// Response de reserva para la API
#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub id: String,
    pub created_at: String,
    pub order_id: String,
    pub racket_id: String,
    pub start_datetime: String,
    pub end_datetime: String,
    pub dropoff_venue: String,
    pub pickup_venue: String,
}

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        Self {
            id: booking.id,
            created_at: booking
                .created_at
                .format(sheet_datetime::FORMAT)
                .to_string(),
            order_id: booking.order_id,
            racket_id: booking.racket_id,
            start_datetime: booking
                .start_datetime
                .format(sheet_datetime::FORMAT)
                .to_string(),
            end_datetime: booking
                .end_datetime
                .format(sheet_datetime::FORMAT)
                .to_string(),
            dropoff_venue: booking.dropoff_venue,
            pickup_venue: booking.pickup_venue,
        }
    }
}

/// Reserva vecina a la ventana pedida, ya formateada para mostrar
#[derive(Debug, Serialize)]
pub struct NeighborBooking {
    pub venue: String,
    pub start_datetime: String,
    pub end_datetime: String,
}

impl NeighborBooking {
    /// Vecina anterior: se muestra el venue de pick-up (dónde termina)
    pub fn previous(booking: &Booking) -> Self {
        Self {
            venue: booking.pickup_venue.clone(),
            start_datetime: booking
                .start_datetime
                .format(sheet_datetime::FORMAT)
                .to_string(),
            end_datetime: booking
                .end_datetime
                .format(sheet_datetime::FORMAT)
                .to_string(),
        }
    }

    /// Vecina siguiente: se muestra el venue de drop-off (dónde empieza)
    pub fn next(booking: &Booking) -> Self {
        Self {
            venue: booking.dropoff_venue.clone(),
            start_datetime: booking
                .start_datetime
                .format(sheet_datetime::FORMAT)
                .to_string(),
            end_datetime: booking
                .end_datetime
                .format(sheet_datetime::FORMAT)
                .to_string(),
        }
    }
}

/// Veredicto de disponibilidad para la ventana de una orden
#[derive(Debug, Serialize)]
pub struct AvailabilityResponse {
    pub order_id: String,
    pub racket_type: String,
    pub racket_id: String,
    pub available: bool,
    pub start_datetime: String,
    pub end_datetime: String,
    pub previous_booking: Option<NeighborBooking>,
    pub next_booking: Option<NeighborBooking>,
}

/// Query para los time slots de un día
#[derive(Debug, Deserialize)]
pub struct TimeSlotQuery {
    pub date: String,
    pub racket_type: String,
}

/// Un slot de una hora, etiquetado `HH:00` - `HH:00`
#[derive(Debug, Serialize)]
pub struct TimeSlotResponse {
    pub start: String,
    pub end: String,
    pub available: bool,
}
