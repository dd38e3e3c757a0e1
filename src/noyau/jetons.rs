// src/noyau/jetons.rs

use num_bigint::BigInt;
use num_rational::BigRational;

use super::config::PolitiqueJetons;
use super::erreur::EvaluationError;
use super::format::format_op;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tok {
    // Littéral entier positif ou nul (dénominateur 1)
    Num(BigRational),

    Plus,
    Minus,
    Star,
    Slash,
}

fn operateur(c: char) -> Option<Tok> {
    match c {
        '+' => Some(Tok::Plus),
        '-' => Some(Tok::Minus),
        '*' => Some(Tok::Star),
        '/' => Some(Tok::Slash),
        _ => None,
    }
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - entiers (suites maximales de chiffres ASCII, taille libre)
/// - opérateurs + - * /
///
/// Tout autre caractère dépend de la politique :
/// - Souple : ignoré (il sépare quand même deux suites de chiffres : "1 1" -> 1, 1)
/// - Strict : espace ignoré, le reste -> InvalidToken (position en caractères)
pub fn tokenize(s: &str, politique: PolitiqueJetons) -> Result<Vec<Tok>, EvaluationError> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if let Some(op) = operateur(c) {
            out.push(op);
            i += 1;
            continue;
        }

        if c.is_ascii_digit() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            let digits: String = chars[start..i].iter().collect();
            // Suite non vide de chiffres ASCII : le parse ne peut pas échouer,
            // mais on reste dans Result plutôt que de paniquer.
            let n = BigInt::parse_bytes(digits.as_bytes(), 10).ok_or(
                EvaluationError::InvalidToken {
                    caractere: c,
                    position: start,
                },
            )?;
            out.push(Tok::Num(BigRational::from_integer(n)));
            continue;
        }

        match politique {
            PolitiqueJetons::Souple => {}
            PolitiqueJetons::Strict if c.is_whitespace() => {}
            PolitiqueJetons::Strict => {
                return Err(EvaluationError::InvalidToken {
                    caractere: c,
                    position: i,
                });
            }
        }
        i += 1;
    }

    Ok(out)
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens.iter().map(format_op).collect::<Vec<_>>().join(" ")
}
