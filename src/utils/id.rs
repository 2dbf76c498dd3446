//! Generación de IDs de orden
//!
//! IDs de 6 caracteres: 3 dígitos y 3 letras mayúsculas tomados de
//! alfabetos "seguros" (sin 0/1 ni O/I, que se confunden a la vista),
//! mezclados al azar. La unicidad se confía a la probabilidad; no hay
//! chequeo de colisión contra la hoja.

use rand::seq::SliceRandom;
use rand::Rng;

const SAFE_DIGITS: &[u8] = b"23456789";
const SAFE_LETTERS: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ";

/// Generar un ID de orden: 3 dígitos seguros + 3 letras seguras, en orden aleatorio
pub fn generate_order_id() -> String {
    let mut rng = rand::thread_rng();

    let mut chars: Vec<u8> = Vec::with_capacity(6);
    for _ in 0..3 {
        chars.push(SAFE_DIGITS[rng.gen_range(0..SAFE_DIGITS.len())]);
    }
    for _ in 0..3 {
        chars.push(SAFE_LETTERS[rng.gen_range(0..SAFE_LETTERS.len())]);
    }
    chars.shuffle(&mut rng);

    chars.into_iter().map(char::from).collect()
}
