//! Modelo de Booking
//!
//! Una reserva confirmada de una raqueta para un intervalo de tiempo.
//! Append-only: no hay camino de actualización ni borrado.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::sheet_datetime;

/// Reserva confirmada - mapea exactamente a la hoja `booking`.
/// Invariante: `start_datetime < end_datetime`, y reservas de la misma
/// raqueta nunca se solapan bajo el predicado semiabierto `[start, end)`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Booking {
    pub id: String,
    #[serde(with = "sheet_datetime")]
    pub created_at: NaiveDateTime,
    pub order_id: String,
    pub racket_id: String,
    #[serde(with = "sheet_datetime")]
    pub start_datetime: NaiveDateTime,
    #[serde(with = "sheet_datetime")]
    pub end_datetime: NaiveDateTime,
    pub dropoff_venue: String,
    pub pickup_venue: String,
}

impl Booking {
    /// Solapamiento de intervalos semiabiertos:
    /// `[start, end)` choca con esta reserva si
    /// `start < self.end AND end > self.start`.
    pub fn overlaps(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        start < self.end_datetime && end > self.start_datetime
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2030, 5, 1)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn booking(start_hour: u32, end_hour: u32) -> Booking {
        Booking {
            id: "2A3B4C".to_string(),
            created_at: dt(0),
            order_id: "2A3B4C".to_string(),
            racket_id: "1".to_string(),
            start_datetime: dt(start_hour),
            end_datetime: dt(end_hour),
            dropoff_venue: "GOR Senayan".to_string(),
            pickup_venue: "GOR Cilandak".to_string(),
        }
    }

    #[test]
    fn test_overlap_partial() {
        // reserva [10:00, 12:00) vs propuesta [11:00, 13:00)
        assert!(booking(10, 12).overlaps(dt(11), dt(13)));
    }

    #[test]
    fn test_touching_boundary_does_not_overlap() {
        // intervalos semiabiertos: [10:00, 12:00) y [12:00, 14:00) no chocan
        assert!(!booking(10, 12).overlaps(dt(12), dt(14)));
        assert!(!booking(12, 14).overlaps(dt(10), dt(12)));
    }

    #[test]
    fn test_contained_interval_overlaps() {
        assert!(booking(10, 14).overlaps(dt(11), dt(12)));
        assert!(booking(11, 12).overlaps(dt(10), dt(14)));
    }
}
