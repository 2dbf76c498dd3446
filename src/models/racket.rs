//! Modelo de Racket
//!
//! Catálogo de raquetas disponibles para alquiler. Solo lectura desde
//! el punto de vista del core; la hoja `racket` es la fuente.

use serde::{Deserialize, Serialize};

/// Raqueta del catálogo - mapea exactamente a la hoja `racket`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Racket {
    pub id: String,
    #[serde(rename = "type")]
    pub racket_type: String,
}

impl Racket {
    /// Comparación de tipo usada en todo el sistema:
    /// case-insensitive y con espacios recortados.
    pub fn matches_type(&self, requested: &str) -> bool {
        self.racket_type.trim().to_lowercase() == requested.trim().to_lowercase()
    }
}
