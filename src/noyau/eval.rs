//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> réduction shunting-yard (deux piles) -> extraction -> EXACT -> lecture décimale
//!
//! Fonction pure : aucun état entre deux appels, appels concurrents sans coordination.

use num_rational::BigRational;
use tracing::debug;

use super::config::ConfigEval;
use super::erreur::EvaluationError;
use super::format::format_rat;
use super::jetons::{format_tokens, tokenize};
use super::lecture::lecture_decimale;
use super::reduction::reduire;

#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct DemarcheNoyau {
    pub jetons: String,
    pub etapes: Vec<String>,
    pub note: String,
}

/// Évalue une expression infixe avec la configuration par défaut (jetons souples).
pub fn evaluate(expression: &str) -> Result<BigRational, EvaluationError> {
    evaluate_with(expression, &ConfigEval::default())
}

/// Évalue une expression infixe selon `config`.
pub fn evaluate_with(expression: &str, config: &ConfigEval) -> Result<BigRational, EvaluationError> {
    eval_expression(expression, config).map(|(valeur, _)| valeur)
}

/// API complète : valeur exacte + démarche (jetons, réductions, note).
pub fn eval_expression(
    expression: &str,
    config: &ConfigEval,
) -> Result<(BigRational, DemarcheNoyau), EvaluationError> {
    debug!(expression, politique = %config.politique, "évaluation");

    let resultat = tokenize(expression, config.politique).and_then(|jetons| {
        let jetons_txt = format_tokens(&jetons);
        reduire(jetons).map(|r| (r, jetons_txt))
    });

    match resultat {
        Ok((reduction, jetons)) => {
            debug!(resultat = %format_rat(&reduction.valeur), "évaluation réussie");
            let d = DemarcheNoyau {
                jetons,
                etapes: reduction.etapes,
                note: format!(
                    "Pipeline: jetons ({}) → shunting-yard à deux piles → extraction.",
                    config.politique
                ),
            };
            Ok((reduction.valeur, d))
        }
        Err(e) => {
            debug!(genre = e.genre(), erreur = %e, "évaluation refusée");
            Err(e)
        }
    }
}

/// Résultat prêt à afficher : EXACT ("p" ou "p/q") + lecture décimale tronquée.
pub fn eval_affichage(
    expression: &str,
    config: &ConfigEval,
) -> Result<(String, String, DemarcheNoyau), EvaluationError> {
    let (valeur, d) = eval_expression(expression, config)?;
    Ok((format_rat(&valeur), lecture_decimale(&valeur, config.digits()), d))
}
