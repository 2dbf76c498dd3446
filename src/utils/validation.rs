//! Validación de órdenes
//!
//! Este módulo contiene los helpers de validación de campos y el
//! validador de órdenes completo. Las seis comprobaciones corren en
//! orden fijo y cortan en el primer fallo, devolviendo exactamente una
//! razón legible.

use chrono::{Local, NaiveDate, NaiveDateTime};
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use validator::ValidationError;

use crate::models::Order;

lazy_static! {
    // `+` opcional seguido solo de dígitos
    static ref PHONE_REGEX: Regex = Regex::new(r"^\+?\d+$").unwrap();
    // HH:MM con hora 00-23 y minuto 00-59
    static ref TIME_REGEX: Regex = Regex::new(r"^(?:[01]\d|2[0-3]):[0-5]\d$").unwrap();
}

/// Validar que un string no esté vacío tras recortar espacios
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar formato de teléfono: `+` opcional seguido de dígitos
pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
    if !PHONE_REGEX.is_match(value.trim()) {
        let mut error = ValidationError::new("phone");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar y convertir string a fecha `YYYY-MM-DD`
pub fn validate_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        let mut error = ValidationError::new("date");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"YYYY-MM-DD".to_string());
        error
    })
}

/// Validar formato de hora `HH:MM`
pub fn validate_time(value: &str) -> Result<(), ValidationError> {
    if !TIME_REGEX.is_match(value.trim()) {
        let mut error = ValidationError::new("time");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"HH:MM".to_string());
        return Err(error);
    }
    Ok(())
}

/// Veredicto del validador de órdenes: `(is_valid, reason)`
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OrderVerdict {
    pub is_valid: bool,
    pub reason: String,
}

impl OrderVerdict {
    fn valid() -> Self {
        Self {
            is_valid: true,
            reason: "Valid".to_string(),
        }
    }

    fn invalid(reason: &str) -> Self {
        Self {
            is_valid: false,
            reason: reason.to_string(),
        }
    }
}

/// Validar una orden contra el reloj actual
pub fn validate_order(order: &Order) -> OrderVerdict {
    validate_order_at(order, Local::now().naive_local())
}

/// Validar una orden contra un instante dado.
/// Las comprobaciones corren en orden y la primera que falla gana.
pub fn validate_order_at(order: &Order, now: NaiveDateTime) -> OrderVerdict {
    let fields = [
        &order.created_by,
        &order.name,
        &order.phone_number,
        &order.racket_type,
        &order.dropoff_venue,
        &order.dropoff_date,
        &order.dropoff_time,
        &order.pickup_venue,
        &order.pickup_date,
        &order.pickup_time,
    ];
    if fields.iter().any(|f| validate_not_empty(f).is_err()) {
        return OrderVerdict::invalid("Incomplete data");
    }

    if validate_phone(&order.phone_number).is_err() {
        return OrderVerdict::invalid("Invalid phone number");
    }

    if validate_date(&order.dropoff_date).is_err() || validate_date(&order.pickup_date).is_err() {
        return OrderVerdict::invalid("Invalid date format");
    }

    if validate_time(&order.dropoff_time).is_err() || validate_time(&order.pickup_time).is_err() {
        return OrderVerdict::invalid("Invalid time format");
    }

    // Con fecha y hora ya validadas la composición no puede fallar
    let (dropoff, pickup) = match (order.dropoff_datetime(), order.pickup_datetime()) {
        (Some(dropoff), Some(pickup)) => (dropoff, pickup),
        _ => return OrderVerdict::invalid("Invalid date format"),
    };

    if dropoff >= pickup {
        return OrderVerdict::invalid("Drop-off datetime must be before pick-up datetime");
    }

    if dropoff <= now || pickup <= now {
        return OrderVerdict::invalid("Drop-off and pick-up datetime must be in the future");
    }

    OrderVerdict::valid()
}
