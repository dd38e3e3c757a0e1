// src/noyau/lecture.rs

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, ToPrimitive};

/* ------------------------ Décimal (scaled -> texte) ------------------------ */

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Convertit un entier “scalé” (×10^digits) en texte décimal tronqué.
pub fn scaled_to_decimal(mut scaled: BigInt, digits: usize) -> String {
    let neg = scaled.is_negative();
    if neg {
        scaled = -scaled;
    }

    let scale = pow10(digits);
    let int_part = &scaled / &scale;
    let frac_part = &scaled % &scale;

    let signe = if neg { "-" } else { "" };

    if digits == 0 {
        return format!("{signe}{int_part}");
    }

    let mut frac = frac_part.to_str_radix(10);
    while frac.len() < digits {
        frac.insert(0, '0');
    }

    format!("{signe}{int_part}.{frac}")
}

/// r -> entier “scalé” = r * 10^digits, tronqué vers zéro
fn rational_scaled(r: &BigRational, digits: usize) -> BigInt {
    let scale = pow10(digits);
    (r.numer() * scale) / r.denom()
}

/// Lecture décimale tronquée (pas d’arrondi) : 2/3 sur 3 chiffres -> "0.666".
pub fn lecture_decimale(r: &BigRational, digits: usize) -> String {
    scaled_to_decimal(rational_scaled(r, digits), digits)
}

/// Valeur flottante la plus proche, pour les appelants qui veulent un `f64`.
pub fn en_f64(r: &BigRational) -> Option<f64> {
    r.to_f64()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rat(p: i64, q: i64) -> BigRational {
        BigRational::new(BigInt::from(p), BigInt::from(q))
    }

    #[test]
    fn troncature() {
        assert_eq!(lecture_decimale(&rat(7, 2), 3), "3.500");
        assert_eq!(lecture_decimale(&rat(2, 3), 3), "0.666");
        assert_eq!(lecture_decimale(&rat(-1, 3), 2), "-0.33");
        assert_eq!(lecture_decimale(&rat(5, 1), 0), "5");
        assert_eq!(lecture_decimale(&rat(-9, 2), 0), "-4");
    }

    #[test]
    fn zeros_de_tete() {
        assert_eq!(lecture_decimale(&rat(1, 200), 4), "0.0050");
    }

    #[test]
    fn flottant() {
        assert_eq!(en_f64(&rat(7, 2)), Some(3.5));
        assert_eq!(en_f64(&rat(-5, 1)), Some(-5.0));
    }
}
