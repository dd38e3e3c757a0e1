//! Noyau — paramètres d’évaluation.
//!
//! La politique de jetons est un choix explicite, jamais implicite :
//! - `Souple` : comportement historique, les caractères inconnus sont ignorés ;
//! - `Strict` : tout caractère doit devenir chiffre, opérateur ou espace.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Précision par défaut de la lecture décimale (tronquée).
pub const DIGITS_DEFAUT: usize = 20;

/// Garde-fou : on borne la précision (anti-abus / anti-gel).
pub const DIGITS_MAX: usize = 200;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PolitiqueJetons {
    #[default]
    Souple,
    Strict,
}

impl fmt::Display for PolitiqueJetons {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolitiqueJetons::Souple => f.write_str("souple"),
            PolitiqueJetons::Strict => f.write_str("strict"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("politique de jetons inconnue: {0:?} (attendu: souple | strict)")]
pub struct PolitiqueInconnue(pub String);

impl FromStr for PolitiqueJetons {
    type Err = PolitiqueInconnue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "souple" | "lenient" => Ok(PolitiqueJetons::Souple),
            "strict" => Ok(PolitiqueJetons::Strict),
            _ => Err(PolitiqueInconnue(s.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConfigEval {
    pub politique: PolitiqueJetons,
    digits: usize,
}

impl Default for ConfigEval {
    fn default() -> Self {
        Self {
            politique: PolitiqueJetons::default(),
            digits: DIGITS_DEFAUT,
        }
    }
}

impl ConfigEval {
    pub fn new(politique: PolitiqueJetons, digits: usize) -> Self {
        Self {
            politique,
            digits: digits.min(DIGITS_MAX),
        }
    }

    pub fn strict() -> Self {
        Self::new(PolitiqueJetons::Strict, DIGITS_DEFAUT)
    }

    pub fn digits(&self) -> usize {
        self.digits
    }

    pub fn set_digits(&mut self, digits: usize) {
        self.digits = digits.min(DIGITS_MAX);
    }

    /// Applique les surcharges lues dans l’environnement (binaire natif).
    ///
    /// Valeurs invalides : journalisées puis ignorées.
    pub fn avec_surcharges(
        mut self,
        politique: Option<&str>,
        digits: Option<&str>,
    ) -> Self {
        if let Some(p) = politique {
            match p.parse::<PolitiqueJetons>() {
                Ok(p) => self.politique = p,
                Err(e) => tracing::warn!(erreur = %e, "surcharge ignorée"),
            }
        }
        if let Some(d) = digits {
            match d.trim().parse::<usize>() {
                Ok(d) => self.set_digits(d),
                Err(e) => tracing::warn!(valeur = d, erreur = %e, "digits ignorés"),
            }
        }
        self
    }
}
