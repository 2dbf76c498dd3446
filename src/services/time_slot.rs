//! Time slots por día
//!
//! Construye los 24 slots de una hora de un día dado para una raqueta
//! y marca cada uno como libre u ocupado con el mismo predicado de
//! solapamiento semiabierto del chequeo de disponibilidad.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::models::Booking;

#[derive(Debug, Clone, PartialEq)]
pub struct TimeSlot {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub available: bool,
}

/// Slots horarios de un día para una raqueta
pub fn day_slots(racket_id: &str, bookings: &[Booking], date: NaiveDate) -> Vec<TimeSlot> {
    let day_start = date.and_time(NaiveTime::MIN);
    let day_end = day_start + Duration::days(1);

    // solo las reservas de esa raqueta que tocan el día
    let racket_bookings: Vec<&Booking> = bookings
        .iter()
        .filter(|b| b.racket_id == racket_id)
        .filter(|b| b.start_datetime < day_end && b.end_datetime > day_start)
        .collect();

    (0..24)
        .map(|hour| {
            let start = day_start + Duration::hours(hour);
            let end = start + Duration::hours(1);
            let busy = racket_bookings.iter().any(|b| b.overlaps(start, end));
            TimeSlot {
                start,
                end,
                available: !busy,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2030, 5, 1)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn booking(racket_id: &str, start_hour: u32, end_hour: u32) -> Booking {
        Booking {
            id: "2A3B4C".to_string(),
            created_at: dt(0),
            order_id: "2A3B4C".to_string(),
            racket_id: racket_id.to_string(),
            start_datetime: dt(start_hour),
            end_datetime: dt(end_hour),
            dropoff_venue: "GOR Senayan".to_string(),
            pickup_venue: "GOR Cilandak".to_string(),
        }
    }

    #[test]
    fn test_day_has_24_slots() {
        let slots = day_slots("1", &[], NaiveDate::from_ymd_opt(2030, 5, 1).unwrap());
        assert_eq!(slots.len(), 24);
        assert!(slots.iter().all(|s| s.available));
    }

    #[test]
    fn test_booked_hours_are_busy() {
        let bookings = vec![booking("1", 10, 12)];
        let slots = day_slots("1", &bookings, NaiveDate::from_ymd_opt(2030, 5, 1).unwrap());

        assert!(!slots[10].available);
        assert!(!slots[11].available);
        // bordes semiabiertos: 09:00-10:00 y 12:00-13:00 quedan libres
        assert!(slots[9].available);
        assert!(slots[12].available);
    }

    #[test]
    fn test_other_racket_does_not_block() {
        let bookings = vec![booking("2", 10, 12)];
        let slots = day_slots("1", &bookings, NaiveDate::from_ymd_opt(2030, 5, 1).unwrap());
        assert!(slots.iter().all(|s| s.available));
    }

    #[test]
    fn test_booking_spanning_midnight() {
        // reserva del 30/04 22:00 al 01/05 02:00 bloquea las primeras horas
        let start = NaiveDate::from_ymd_opt(2030, 4, 30)
            .unwrap()
            .and_hms_opt(22, 0, 0)
            .unwrap();
        let booking = Booking {
            start_datetime: start,
            end_datetime: dt(2),
            ..booking("1", 0, 1)
        };

        let slots = day_slots("1", &[booking], NaiveDate::from_ymd_opt(2030, 5, 1).unwrap());
        assert!(!slots[0].available);
        assert!(!slots[1].available);
        assert!(slots[2].available);
    }
}
