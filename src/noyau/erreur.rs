//! Noyau — taxonomie des échecs d’évaluation.
//!
//! Chaque échec est détecté au point de violation et termine l’évaluation.
//! L’appelant peut filtrer par genre (`match`) sans inspecter de texte.

use thiserror::Error;

/// Forme précise d’une expression structurellement malformée.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Malformation {
    /// Aucun jeton après le balayage (entrée vide ou entièrement ignorée).
    #[error("aucun jeton")]
    AucunJeton,

    /// Pile d’opérandes vide au moment d’appliquer un opérateur.
    #[error("opérande manquant")]
    OperandeManquant,

    /// État final différent de « un opérande, zéro opérateur ».
    #[error("état final incohérent ({operandes} opérande(s), {operateurs} opérateur(s))")]
    EtatFinal { operandes: usize, operateurs: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvaluationError {
    /// Unité balayée qui n’est ni un littéral ni un opérateur.
    /// `position` compte en caractères (pas en octets).
    #[error("jeton invalide '{caractere}' en position {position}")]
    InvalidToken { caractere: char, position: usize },

    /// Opérateur dépilé inconnu de la table des précédences.
    #[error("opérateur invalide: {0}")]
    InvalidOperator(String),

    #[error("division par zéro")]
    DivisionByZero,

    #[error("expression invalide: {0}")]
    InvalidExpression(Malformation),
}

impl From<Malformation> for EvaluationError {
    fn from(m: Malformation) -> Self {
        EvaluationError::InvalidExpression(m)
    }
}

impl EvaluationError {
    /// Nom court du genre d’échec (affiché dans la démarche, journalisé).
    pub fn genre(&self) -> &'static str {
        match self {
            EvaluationError::InvalidToken { .. } => "InvalidToken",
            EvaluationError::InvalidOperator(_) => "InvalidOperator",
            EvaluationError::DivisionByZero => "DivisionByZero",
            EvaluationError::InvalidExpression(_) => "InvalidExpression",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_lisibles() {
        let e = EvaluationError::InvalidToken {
            caractere: '^',
            position: 1,
        };
        assert_eq!(e.to_string(), "jeton invalide '^' en position 1");

        let e: EvaluationError = Malformation::EtatFinal {
            operandes: 2,
            operateurs: 0,
        }
        .into();
        assert_eq!(
            e.to_string(),
            "expression invalide: état final incohérent (2 opérande(s), 0 opérateur(s))"
        );
        assert_eq!(e.genre(), "InvalidExpression");
    }
}
