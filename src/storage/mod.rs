//! Almacenamiento tabular
//!
//! Este módulo contiene el adaptador de persistencia: un workbook de
//! archivos CSV, una hoja por tabla, con las operaciones
//! read_all / append / overwrite.

pub mod sheet;

pub use sheet::SheetStore;

/// Nombres de las hojas del workbook
pub const ORDER_SHEET: &str = "order";
pub const RACKET_SHEET: &str = "racket";
pub const BOOKING_SHEET: &str = "booking";
