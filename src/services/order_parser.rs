//! Parser del formulario de orden
//!
//! Extrae los campos estructurados de una orden pegada como texto
//! libre. Cada campo se busca por su etiqueta (case-insensitive) y se
//! captura el resto de la línea tras los dos puntos; `venue`, `tanggal`
//! y `jam` aparecen dos veces en la plantilla, primero drop-off y
//! después pick-up, así que se indexa la ocurrencia. Un campo que no
//! matchea queda como string vacío: la ausencia la reporta el
//! validador, nunca el parser.

use chrono::Local;
use regex::Regex;

use crate::models::Order;
use crate::utils::id::generate_order_id;

pub struct OrderFormParser {
    created_by_regex: Regex,
    name_regex: Regex,
    phone_regex: Regex,
    racket_regex: Regex,
    venue_regex: Regex,
    date_regex: Regex,
    time_regex: Regex,
}

impl Default for OrderFormParser {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderFormParser {
    pub fn new() -> Self {
        // Etiquetas del template del formulario (en indonesio)
        let created_by_regex = Regex::new(r"(?i)pic[ \t]+([^\r\n]+)").unwrap();
        let name_regex = Regex::new(r"(?i)nama[ \t]*:[ \t]*([^\r\n]+)").unwrap();
        let phone_regex = Regex::new(r"(?i)no wa[ \t]*:[ \t]*([^\r\n]+)").unwrap();
        let racket_regex = Regex::new(r"(?i)jenis raket[ \t]*:[ \t]*([^\r\n]+)").unwrap();
        let venue_regex = Regex::new(r"(?i)venue[ \t]*:[ \t]*([^\r\n]+)").unwrap();
        let date_regex = Regex::new(r"(?i)tanggal[ \t]*:[ \t]*([^\r\n]+)").unwrap();
        let time_regex = Regex::new(r"(?i)jam[ \t]*:[ \t]*([^\r\n]+)").unwrap();

        Self {
            created_by_regex,
            name_regex,
            phone_regex,
            racket_regex,
            venue_regex,
            date_regex,
            time_regex,
        }
    }

    /// Parsear el texto crudo a una Order. El `id` y `created_at` se
    /// generan acá, no salen del texto.
    pub fn parse(&self, raw_text: &str) -> Order {
        Order {
            id: generate_order_id(),
            created_at: Local::now().naive_local(),
            created_by: extract(&self.created_by_regex, raw_text, 0),
            name: extract(&self.name_regex, raw_text, 0),
            phone_number: extract(&self.phone_regex, raw_text, 0),
            racket_type: extract(&self.racket_regex, raw_text, 0),
            dropoff_venue: extract(&self.venue_regex, raw_text, 0),
            dropoff_date: extract(&self.date_regex, raw_text, 0),
            dropoff_time: extract(&self.time_regex, raw_text, 0),
            // segunda ocurrencia de cada etiqueta
            pickup_venue: extract(&self.venue_regex, raw_text, 1),
            pickup_date: extract(&self.date_regex, raw_text, 1),
            pickup_time: extract(&self.time_regex, raw_text, 1),
        }
    }
}

/// N-ésimo match del patrón en el texto, recortado; "" si no hay
fn extract(pattern: &Regex, text: &str, occurrence: usize) -> String {
    pattern
        .captures_iter(text)
        .nth(occurrence)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}
