//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use crate::config::environment::EnvironmentConfig;
use crate::storage::SheetStore;

#[derive(Clone)]
pub struct AppState {
    pub store: SheetStore,
    pub config: EnvironmentConfig,
    /// Órdenes ya reservadas en esta sesión del proceso. No se
    /// persiste: un proceso nuevo arranca con el set vacío.
    pub booked_order_ids: Arc<RwLock<HashSet<String>>>,
    /// Serializa el flujo chequear-disponibilidad-y-agregar-reserva
    /// dentro del proceso.
    pub booking_lock: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(store: SheetStore, config: EnvironmentConfig) -> Self {
        Self {
            store,
            config,
            booked_order_ids: Arc::new(RwLock::new(HashSet::new())),
            booking_lock: Arc::new(Mutex::new(())),
        }
    }

    /// ¿La orden ya fue reservada en esta sesión?
    pub async fn is_booked(&self, order_id: &str) -> bool {
        let booked = self.booked_order_ids.read().await;
        booked.contains(order_id)
    }

    /// Marcar una orden como reservada en esta sesión
    pub async fn mark_booked(&self, order_id: String) {
        let mut booked = self.booked_order_ids.write().await;
        booked.insert(order_id);
    }
}
