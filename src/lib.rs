//! Racket rental booking backend
//!
//! Parsea formularios de orden en texto libre, los valida, chequea la
//! disponibilidad de la raqueta pedida contra las reservas existentes
//! y registra la reserva en un workbook CSV (hojas order / racket /
//! booking).

pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod storage;
pub mod utils;
