use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{sheet_datetime, Order};

/// Request para enviar un formulario de orden en texto libre
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitOrderRequest {
    #[validate(length(min = 1, message = "order form text is required"))]
    pub text: String,
}

/// Response de orden para la API
#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub id: String,
    pub created_at: String,
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

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            created_at: order.created_at.format(sheet_datetime::FORMAT).to_string(),
            created_by: order.created_by,
            name: order.name,
            phone_number: order.phone_number,
            racket_type: order.racket_type,
            dropoff_venue: order.dropoff_venue,
            dropoff_date: order.dropoff_date,
            dropoff_time: order.dropoff_time,
            pickup_venue: order.pickup_venue,
            pickup_date: order.pickup_date,
            pickup_time: order.pickup_time,
        }
    }
}

/// Resultado de enviar un formulario: veredicto + campos parseados.
/// La orden parseada se devuelve también cuando el veredicto es
/// inválido, para que el caller vea qué se extrajo.
#[derive(Debug, Serialize)]
pub struct SubmitOrderResponse {
    pub valid: bool,
    pub reason: String,
    pub order: OrderResponse,
}
