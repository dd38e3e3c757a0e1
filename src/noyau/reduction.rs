// src/noyau/reduction.rs
//
// Shunting-yard à deux piles -> valeur exacte
//
// Règles:
// - Num : empilé sur la pile des opérandes
// - opérateur : on applique le sommet tant que sa précédence est >= à celle
//   de l’arrivant (associativité à gauche : "10-2-3" => (10-2)-3), puis on empile
// - fin des jetons : on vide la pile des opérateurs
// - extraction : exactement un opérande, zéro opérateur
//
// Les deux piles vivent le temps d’un appel. Pas de récursion.

use num_rational::BigRational;
use num_traits::Zero;
use tracing::trace;

use super::erreur::{EvaluationError, Malformation};
use super::format::{format_etape, format_op};
use super::jetons::Tok;

/// Table des précédences : {+:1, -:1, *:2, /:2}. `None` pour un non-opérateur.
pub fn precedence(t: &Tok) -> Option<u8> {
    match t {
        Tok::Plus | Tok::Minus => Some(1),
        Tok::Star | Tok::Slash => Some(2),
        Tok::Num(_) => None,
    }
}

/// Applique un opérateur binaire. `a` est l’opérande gauche, `b` le droit.
pub fn calculer(op: &Tok, a: BigRational, b: BigRational) -> Result<BigRational, EvaluationError> {
    match op {
        Tok::Plus => Ok(a + b),
        Tok::Minus => Ok(a - b),
        Tok::Star => Ok(a * b),
        Tok::Slash => {
            if b.is_zero() {
                return Err(EvaluationError::DivisionByZero);
            }
            Ok(a / b)
        }
        Tok::Num(_) => Err(EvaluationError::InvalidOperator(format_op(op))),
    }
}

/// Résultat d’une réduction complète : la valeur + les étapes appliquées (démarche).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reduction {
    pub valeur: BigRational,
    pub etapes: Vec<String>,
}

#[derive(Debug, Default)]
struct Reducteur {
    operandes: Vec<BigRational>,
    operateurs: Vec<Tok>,
    etapes: Vec<String>,
}

impl Reducteur {
    fn with_capacity(n: usize) -> Self {
        Self {
            operandes: Vec::with_capacity(n / 2 + 1),
            operateurs: Vec::with_capacity(n / 2),
            etapes: Vec::new(),
        }
    }

    fn pousser(&mut self, tok: Tok) -> Result<(), EvaluationError> {
        let p_tok = match (&tok, precedence(&tok)) {
            (Tok::Num(r), _) => {
                self.operandes.push(r.clone());
                return Ok(());
            }
            (_, Some(p)) => p,
            (_, None) => return Err(EvaluationError::InvalidOperator(format_op(&tok))),
        };

        // dépile tant que le sommet lie au moins aussi fort que l’arrivant
        // (un sommet sans précédence est appliqué pour être rejeté)
        while let Some(top) = self.operateurs.pop() {
            if precedence(&top).is_some_and(|p_top| p_top < p_tok) {
                self.operateurs.push(top);
                break;
            }
            self.appliquer(top)?;
        }

        self.operateurs.push(tok);
        Ok(())
    }

    /// Dépile droite puis gauche (l’ordre compte pour - et /), calcule, empile.
    fn appliquer(&mut self, op: Tok) -> Result<(), EvaluationError> {
        let droite = self.operandes.pop();
        let gauche = self.operandes.pop();
        let (Some(a), Some(b)) = (gauche, droite) else {
            return Err(Malformation::OperandeManquant.into());
        };

        let r = calculer(&op, a.clone(), b.clone())?;
        let etape = format_etape(&op, &a, &b, &r);
        trace!(etape = %etape, "réduction");
        self.etapes.push(etape);
        self.operandes.push(r);
        Ok(())
    }

    fn terminer(mut self) -> Result<Reduction, EvaluationError> {
        while let Some(op) = self.operateurs.pop() {
            self.appliquer(op)?;
        }

        if self.operandes.len() != 1 || !self.operateurs.is_empty() {
            return Err(Malformation::EtatFinal {
                operandes: self.operandes.len(),
                operateurs: self.operateurs.len(),
            }
            .into());
        }

        match self.operandes.pop() {
            Some(valeur) => Ok(Reduction {
                valeur,
                etapes: self.etapes,
            }),
            None => Err(Malformation::EtatFinal {
                operandes: 0,
                operateurs: 0,
            }
            .into()),
        }
    }
}

/// Réduit une suite de jetons (infixe) en une valeur exacte.
pub fn reduire(tokens: Vec<Tok>) -> Result<Reduction, EvaluationError> {
    if tokens.is_empty() {
        return Err(Malformation::AucunJeton.into());
    }

    let mut r = Reducteur::with_capacity(tokens.len());
    for tok in tokens {
        r.pousser(tok)?;
    }
    r.terminer()
}
