use tracing::info;
use validator::Validate;

use crate::dto::order_dto::{OrderResponse, SubmitOrderRequest, SubmitOrderResponse};
use crate::repositories::order_repository::OrderRepository;
use crate::repositories::racket_repository::RacketRepository;
use crate::services::order_parser::OrderFormParser;
use crate::storage::SheetStore;
use crate::utils::errors::{not_found_error, AppError};
use crate::utils::validation::validate_order;

pub struct OrderController {
    parser: OrderFormParser,
    orders: OrderRepository,
    rackets: RacketRepository,
}

impl OrderController {
    pub fn new(store: SheetStore) -> Self {
        Self {
            parser: OrderFormParser::new(),
            orders: OrderRepository::new(store.clone()),
            rackets: RacketRepository::new(store),
        }
    }

    /// Parsear y validar un formulario de orden. Solo las órdenes
    /// válidas con raqueta conocida se persisten en la hoja `order`;
    /// las inválidas vuelven con el veredicto y los campos extraídos.
    pub async fn submit(
        &self,
        request: SubmitOrderRequest,
    ) -> Result<SubmitOrderResponse, AppError> {
        request.validate()?;

        let order = self.parser.parse(&request.text);
        let verdict = validate_order(&order);

        if !verdict.is_valid {
            info!("❌ Orden rechazada: {}", verdict.reason);
            return Ok(SubmitOrderResponse {
                valid: false,
                reason: verdict.reason,
                order: order.into(),
            });
        }

        // El tipo de raqueta tiene que estar en el catálogo
        if self.rackets.find_by_type(&order.racket_type).await?.is_none() {
            let reason = format!(
                "Racket type '{}' is not in the racket list",
                order.racket_type.trim()
            );
            info!("❌ Orden rechazada: {}", reason);
            return Ok(SubmitOrderResponse {
                valid: false,
                reason,
                order: order.into(),
            });
        }

        self.orders.append(&order).await?;
        info!("📝 Orden {} registrada", order.id);

        Ok(SubmitOrderResponse {
            valid: true,
            reason: verdict.reason,
            order: order.into(),
        })
    }

    pub async fn get_by_id(&self, id: &str) -> Result<OrderResponse, AppError> {
        let order = self
            .orders
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Order", id))?;
        Ok(order.into())
    }
}
