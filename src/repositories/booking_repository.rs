use crate::models::Booking;
use crate::storage::{SheetStore, BOOKING_SHEET};
use crate::utils::errors::AppResult;

pub struct BookingRepository {
    store: SheetStore,
}

impl BookingRepository {
    pub fn new(store: SheetStore) -> Self {
        Self { store }
    }

    pub async fn find_all(&self) -> AppResult<Vec<Booking>> {
        self.store.read_all(BOOKING_SHEET).await
    }

    /// Agregar una reserva al final de la hoja; nunca pisa filas
    pub async fn append(&self, booking: &Booking) -> AppResult<()> {
        self.store
            .append(BOOKING_SHEET, std::slice::from_ref(booking))
            .await
    }
}
