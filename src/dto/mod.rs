//! DTOs de la API
//!
//! Requests y responses que cruzan la frontera HTTP. Los modelos de
//! dominio no se exponen directos: todo sale como strings ya
//! formateados.

pub mod booking_dto;
pub mod order_dto;
pub mod racket_dto;

use serde::Serialize;

// Response genérica
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }

    /// Aviso no fatal: success=false pero sin código de error HTTP
    pub fn warning(message: String) -> Self {
        Self {
            success: false,
            message: Some(message),
            data: None,
        }
    }
}
