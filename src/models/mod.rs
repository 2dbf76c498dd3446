//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos que mapean exactamente
//! a las hojas del workbook (order, racket, booking).

pub mod booking;
pub mod order;
pub mod racket;

pub use booking::*;
pub use order::*;
pub use racket::*;

/// Formato de fecha-hora usado en las hojas: `YYYY-MM-DD HH:MM:SS`.
pub mod sheet_datetime {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S>(datetime: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&datetime.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(value.trim(), FORMAT).map_err(serde::de::Error::custom)
    }
}
