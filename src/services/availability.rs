//! Chequeo de disponibilidad
//!
//! Dada una orden validada, el catálogo de raquetas y las reservas
//! existentes: resuelve el tipo de raqueta, escanea solapamientos
//! sobre el intervalo semiabierto pedido y busca las reservas vecinas
//! (anterior y siguiente) para mostrar en el booking.

use chrono::NaiveDateTime;

use crate::models::{Booking, Order, Racket};

/// Resolver el tipo de raqueta contra el catálogo
/// (case-insensitive, recortado)
pub fn resolve_racket<'a>(rackets: &'a [Racket], racket_type: &str) -> Option<&'a Racket> {
    rackets.iter().find(|r| r.matches_type(racket_type))
}

/// Chequear si la raqueta pedida está libre en la ventana de la orden.
///
/// Devuelve `(disponible, racket_id)`. Tipo fuera del catálogo:
/// `(false, None)` — distinto de "raqueta ocupada", donde el id se
/// devuelve igual porque el caller lo necesita para buscar vecinos.
pub fn check_racket_availability(
    order: &Order,
    rackets: &[Racket],
    bookings: &[Booking],
) -> (bool, Option<String>) {
    let racket = match resolve_racket(rackets, &order.racket_type) {
        Some(racket) => racket,
        None => return (false, None),
    };

    let (start, end) = match (order.dropoff_datetime(), order.pickup_datetime()) {
        (Some(start), Some(end)) => (start, end),
        _ => return (false, Some(racket.id.clone())),
    };

    let busy = bookings
        .iter()
        .filter(|b| b.racket_id == racket.id)
        .any(|b| b.overlaps(start, end));

    (!busy, Some(racket.id.clone()))
}

/// Reservas vecinas a la ventana pedida para una raqueta:
/// la anterior (o solapada) más cercana y la siguiente más cercana.
/// `None` cuando no existe tal reserva.
pub fn find_neighbors<'a>(
    racket_id: &str,
    bookings: &'a [Booking],
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> (Option<&'a Booking>, Option<&'a Booking>) {
    let racket_bookings: Vec<&Booking> =
        bookings.iter().filter(|b| b.racket_id == racket_id).collect();

    let previous = racket_bookings
        .iter()
        .filter(|b| b.end_datetime <= start || b.start_datetime <= start)
        .max_by_key(|b| b.end_datetime)
        .copied();

    let next = racket_bookings
        .iter()
        .filter(|b| b.start_datetime >= end || b.end_datetime >= end)
        .min_by_key(|b| b.start_datetime)
        .copied();

    (previous, next)
}
