// src/noyau/format.rs

use num_rational::BigRational;
use num_traits::One;

use super::jetons::Tok;

/// Affichage EXACT d’un rationnel : "p" si entier, sinon "p/q" (signe porté par p).
pub fn format_rat(r: &BigRational) -> String {
    let n = r.numer();
    let d = r.denom();
    if d.is_one() {
        format!("{n}")
    } else {
        format!("{n}/{d}")
    }
}

/// Symbole d’un opérateur (démarche). Un littéral est rendu tel quel.
pub fn format_op(t: &Tok) -> String {
    match t {
        Tok::Plus => "+".to_string(),
        Tok::Minus => "-".to_string(),
        Tok::Star => "*".to_string(),
        Tok::Slash => "/".to_string(),
        Tok::Num(r) => format_rat(r),
    }
}

/// Une ligne de démarche : "a op b = r".
pub fn format_etape(op: &Tok, a: &BigRational, b: &BigRational, r: &BigRational) -> String {
    format!(
        "{} {} {} = {}",
        format_rat(a),
        format_op(op),
        format_rat(b),
        format_rat(r)
    )
}
