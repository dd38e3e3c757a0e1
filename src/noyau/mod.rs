//! Noyau — évaluateur infixe exact (+ - * /)
//!
//! Organisation interne :
//! - erreur.rs    : genres d’échec (InvalidToken, InvalidOperator, DivisionByZero, InvalidExpression)
//! - config.rs    : politique de jetons (souple / strict) + précision de lecture
//! - jetons.rs    : tokenisation
//! - reduction.rs : shunting-yard à deux piles -> valeur exacte
//! - format.rs    : affichage EXACT (p ou p/q) + lignes de démarche
//! - lecture.rs   : lecture décimale tronquée
//! - eval.rs      : pipeline complet
//! - service.rs   : façade appelant externe (refus générique)
//!
//! Extension (non implémentée) : décimaux, négatifs, parenthèses passeraient par
//! `Tok` et `reduction::precedence`.

pub mod config;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod lecture;
pub mod reduction;
pub mod service;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use config::{ConfigEval, PolitiqueJetons};
pub use erreur::{EvaluationError, Malformation};
pub use eval::{eval_affichage, eval_expression, evaluate, evaluate_with, DemarcheNoyau};
pub use service::{Refus, ServiceCalcul};
