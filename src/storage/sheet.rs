//! SheetStore: workbook CSV
//!
//! Un directorio de archivos CSV, uno por hoja, detrás del contrato
//! `read_all` / `append` / `overwrite`. `append` nunca pisa filas
//! existentes. Las filas que no se pueden deserializar al leer se
//! omiten con un warning en vez de frenar la lectura.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::warn;

use crate::utils::errors::{AppError, AppResult};

#[derive(Clone)]
pub struct SheetStore {
    data_dir: PathBuf,
    // Serializa el acceso a los archivos dentro del proceso
    lock: Arc<RwLock<()>>,
}

impl SheetStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> AppResult<Self> {
        let data_dir = data_dir.into();
        std::fs::create_dir_all(&data_dir).map_err(|e| {
            AppError::Storage(format!(
                "Error creating data directory '{}': {}",
                data_dir.display(),
                e
            ))
        })?;
        Ok(Self {
            data_dir,
            lock: Arc::new(RwLock::new(())),
        })
    }

    fn sheet_path(&self, sheet: &str) -> PathBuf {
        self.data_dir.join(format!("{}.csv", sheet))
    }

    /// Leer todas las filas de una hoja. Hoja inexistente = hoja vacía.
    pub async fn read_all<T: DeserializeOwned>(&self, sheet: &str) -> AppResult<Vec<T>> {
        let _guard = self.lock.read().await;

        let path = self.sheet_path(sheet);
        if !path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = csv::Reader::from_path(&path)
            .map_err(|e| AppError::Storage(format!("Error reading sheet '{}': {}", sheet, e)))?;

        let mut rows = Vec::new();
        for result in reader.deserialize() {
            match result {
                Ok(row) => rows.push(row),
                Err(e) => warn!("⚠️ Fila ilegible en la hoja '{}', se omite: {}", sheet, e),
            }
        }
        Ok(rows)
    }

    /// Agregar filas al final de una hoja. Crea el archivo con cabecera
    /// si todavía no existe; nunca reescribe filas existentes.
    pub async fn append<T: Serialize>(&self, sheet: &str, rows: &[T]) -> AppResult<()> {
        let _guard = self.lock.write().await;

        let path = self.sheet_path(sheet);
        let needs_headers = !path.exists();

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| AppError::Storage(format!("Error opening sheet '{}': {}", sheet, e)))?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(needs_headers)
            .from_writer(file);

        for row in rows {
            writer
                .serialize(row)
                .map_err(|e| AppError::Storage(format!("Error appending to '{}': {}", sheet, e)))?;
        }
        writer
            .flush()
            .map_err(|e| AppError::Storage(format!("Error flushing sheet '{}': {}", sheet, e)))?;
        Ok(())
    }

    /// Reescribir una hoja completa con las filas dadas
    pub async fn overwrite<T: Serialize>(&self, sheet: &str, rows: &[T]) -> AppResult<()> {
        let _guard = self.lock.write().await;

        let path = self.sheet_path(sheet);
        let mut writer = csv::Writer::from_path(&path)
            .map_err(|e| AppError::Storage(format!("Error rewriting sheet '{}': {}", sheet, e)))?;

        for row in rows {
            writer
                .serialize(row)
                .map_err(|e| AppError::Storage(format!("Error writing to '{}': {}", sheet, e)))?;
        }
        writer
            .flush()
            .map_err(|e| AppError::Storage(format!("Error flushing sheet '{}': {}", sheet, e)))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Racket;
    use crate::utils::id::generate_order_id;

    fn temp_store() -> SheetStore {
        let dir = std::env::temp_dir().join(format!("racket_rental_test_{}", generate_order_id()));
        SheetStore::new(dir).unwrap()
    }

    fn racket(id: &str, racket_type: &str) -> Racket {
        Racket {
            id: id.to_string(),
            racket_type: racket_type.to_string(),
        }
    }

    #[tokio::test]
    async fn test_missing_sheet_reads_empty() {
        let store = temp_store();
        let rows: Vec<Racket> = store.read_all("racket").await.unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_append_creates_and_extends() {
        let store = temp_store();
        store
            .append("racket", &[racket("1", "Nox AT10")])
            .await
            .unwrap();
        store
            .append("racket", &[racket("2", "Bullpadel Vertex")])
            .await
            .unwrap();

        let rows: Vec<Racket> = store.read_all("racket").await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, "1");
        assert_eq!(rows[1].racket_type, "Bullpadel Vertex");
    }

    #[tokio::test]
    async fn test_overwrite_replaces_rows() {
        let store = temp_store();
        store
            .append("racket", &[racket("1", "Nox AT10"), racket("2", "Vertex")])
            .await
            .unwrap();
        store
            .overwrite("racket", &[racket("9", "Siux Diablo")])
            .await
            .unwrap();

        let rows: Vec<Racket> = store.read_all("racket").await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "9");
    }

    #[tokio::test]
    async fn test_bad_rows_are_skipped() {
        use crate::models::Booking;

        let store = temp_store();
        let path = store.sheet_path("booking");
        std::fs::write(
            &path,
            "id,created_at,order_id,racket_id,start_datetime,end_datetime,dropoff_venue,pickup_venue\n\
             2A3B4C,2030-05-01 08:00:00,2A3B4C,1,2030-05-01 10:00:00,2030-05-01 12:00:00,GOR A,GOR B\n\
             9Z8Y7X,not-a-date,9Z8Y7X,1,nope,nope,GOR A,GOR B\n",
        )
        .unwrap();

        let rows: Vec<Booking> = store.read_all("booking").await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "2A3B4C");
    }
}
