//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores, validación
//! de órdenes y generación de IDs.

pub mod errors;
pub mod id;
pub mod validation;
