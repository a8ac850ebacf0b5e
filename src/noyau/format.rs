// src/noyau/format.rs

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

/// Nombre maximal de décimales affichées (absorbe le bruit binaire: 0.1+0.2).
pub const DECIMALES_MAX: usize = 10;

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Entier “scalé” (×10^decimales) -> texte décimal, sans zéros finaux ni point final.
fn scaled_to_decimal(scaled: &BigInt, decimales: usize) -> String {
    let neg = scaled.is_negative();
    let abs = scaled.abs();

    let scale = pow10(decimales);
    let int_part = &abs / &scale;
    let frac_part = &abs % &scale;

    let mut txt = int_part.to_str_radix(10);

    if !frac_part.is_zero() {
        let mut frac = frac_part.to_str_radix(10);
        while frac.len() < decimales {
            frac.insert(0, '0');
        }
        txt.push('.');
        txt.push_str(frac.trim_end_matches('0'));
    }

    // -0 n’existe pas à l’écran
    if neg && !abs.is_zero() {
        txt.insert(0, '-');
    }
    txt
}

/// Formate un résultat fini : arrondi à `DECIMALES_MAX` décimales (demi loin de zéro),
/// puis écriture décimale canonique.
///
/// Pas de notation exponentielle : le texte doit pouvoir redevenir une expression
/// (calcul enchaîné "6=" puis "+4=").
pub fn format_nombre(v: f64) -> String {
    // NaN / infini : l’évaluateur les refuse avant, on reste total quand même
    let Some(exact) = BigRational::from_float(v) else {
        return v.to_string();
    };

    let scaled = (exact * BigRational::from_integer(pow10(DECIMALES_MAX)))
        .round()
        .to_integer();

    scaled_to_decimal(&scaled, DECIMALES_MAX)
}
