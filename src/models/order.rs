//! Modelo de Order
//!
//! Una orden es el resultado de parsear el formulario de texto libre.
//! Los campos extraídos se conservan como strings tal cual llegaron;
//! la validación semántica ocurre después (utils::validation).

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::sheet_datetime;

/// Orden de alquiler - mapea exactamente a la hoja `order`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: String,
    #[serde(with = "sheet_datetime")]
    pub created_at: NaiveDateTime,
    pub created_by: String,
    pub name: String,
    pub phone_number: String,
    pub racket_type: String,
    pub dropoff_venue: String,
    pub dropoff_date: String,
    pub dropoff_time: String,
    pub pickup_venue: String,
    pub pickup_date: String,
    pub pickup_time: String,
}

impl Order {
    /// Inicio de la ventana solicitada (`dropoff_date` + `dropoff_time`).
    /// `None` si los campos no componen una fecha-hora `YYYY-MM-DD HH:MM`.
    pub fn dropoff_datetime(&self) -> Option<NaiveDateTime> {
        combine_date_time(&self.dropoff_date, &self.dropoff_time)
    }

    /// Fin de la ventana solicitada (`pickup_date` + `pickup_time`).
    pub fn pickup_datetime(&self) -> Option<NaiveDateTime> {
        combine_date_time(&self.pickup_date, &self.pickup_time)
    }
}

fn combine_date_time(date: &str, time: &str) -> Option<NaiveDateTime> {
    let combined = format!("{} {}", date.trim(), time.trim());
    NaiveDateTime::parse_from_str(&combined, "%Y-%m-%d %H:%M").ok()
}
