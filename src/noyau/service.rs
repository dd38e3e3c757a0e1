//! Service de calcul : façade pour les appelants externes (UI, transport).
//!
//! Les genres d’échec du noyau sont fusionnés en un seul refus générique
//! « expression invalide » ; le genre précis n’est visible que dans les journaux.

use num_rational::BigRational;
use thiserror::Error;
use tracing::debug;

use super::config::ConfigEval;
use super::erreur::EvaluationError;
use super::eval::evaluate_with;

pub const CODE_REFUS: u16 = 400;
pub const MESSAGE_REFUS: &str = "Invalid expression provided";
pub const ERREUR_REFUS: &str = "Bad Request";

/// Refus client unique, quel que soit le genre d’échec interne.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{code} {erreur}: {message}")]
pub struct Refus {
    pub code: u16,
    pub message: &'static str,
    pub erreur: &'static str,
}

impl Default for Refus {
    fn default() -> Self {
        Self {
            code: CODE_REFUS,
            message: MESSAGE_REFUS,
            erreur: ERREUR_REFUS,
        }
    }
}

impl From<EvaluationError> for Refus {
    fn from(e: EvaluationError) -> Self {
        debug!(genre = e.genre(), erreur = %e, "refus client");
        Refus::default()
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ServiceCalcul {
    config: ConfigEval,
}

impl ServiceCalcul {
    pub fn new(config: ConfigEval) -> Self {
        Self { config }
    }

    /// Calcule `expression` ; tout échec devient un `Refus`.
    pub fn calculer_expression(&self, expression: &str) -> Result<BigRational, Refus> {
        Ok(evaluate_with(expression, &self.config)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;

    #[test]
    fn succes_transmis() {
        let s = ServiceCalcul::default();
        assert_eq!(
            s.calculer_expression("6/4"),
            Ok(BigRational::new(BigInt::from(3), BigInt::from(2)))
        );
    }

    #[test]
    fn tous_les_echecs_se_ressemblent() {
        let s = ServiceCalcul::new(ConfigEval::strict());
        for e in ["", "5/0", "3^2", "1+", "1 1"] {
            assert_eq!(s.calculer_expression(e), Err(Refus::default()), "expr={e:?}");
        }
    }

    #[test]
    fn corps_du_refus() {
        let r = Refus::default();
        assert_eq!(r.code, 400);
        assert_eq!(r.to_string(), "400 Bad Request: Invalid expression provided");
    }
}
