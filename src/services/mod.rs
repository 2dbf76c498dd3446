//! Services module
//!
//! Este módulo contiene la lógica de negocio central: el parser del
//! formulario de orden, el chequeo de disponibilidad y los time slots.

pub mod availability;
pub mod order_parser;
pub mod time_slot;

pub use availability::*;
pub use order_parser::*;
pub use time_slot::*;
