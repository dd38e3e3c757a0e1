//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, résultats, refus, démarche)
//! et offrir des opérations simples (C/CLR/AC) sans logique d’affichage.

use calculatrice_infixe::noyau::{eval_affichage, ConfigEval, PolitiqueJetons, Refus};

#[derive(Clone, Default, Debug)]
pub struct Demarche {
    pub jetons: String,
    pub etapes: String,
    pub note: String,
    pub genre_echec: String,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub exact: String,   // p ou p/q
    pub lecture: String, // décimal tronqué
    pub refus: String,   // message générique si l’évaluation échoue

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- paramètres ---
    pub config: ConfigEval,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::avec_config(ConfigEval::default())
    }
}

impl AppCalc {
    pub fn avec_config(config: ConfigEval) -> Self {
        Self {
            entree: String::new(),
            exact: String::new(),
            lecture: String::new(),
            refus: String::new(),
            demarche: Demarche::default(),
            config,
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }

    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats, paramètres conservés).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
    }

    /// C : effacer seulement l’entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultats + refus + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.exact.clear();
        self.lecture.clear();
        self.refus.clear();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    pub fn set_strict(&mut self, strict: bool) {
        self.config.politique = if strict {
            PolitiqueJetons::Strict
        } else {
            PolitiqueJetons::Souple
        };
    }

    pub fn est_strict(&self) -> bool {
        self.config.politique == PolitiqueJetons::Strict
    }

    /// Évalue l’entrée.
    ///
    /// Le refus affiché est le refus générique du service ; le genre précis
    /// n’apparaît que dans la démarche.
    pub fn evaluer(&mut self) {
        match eval_affichage(&self.entree, &self.config) {
            Ok((exact, lecture, d)) => {
                self.refus.clear();
                self.exact = exact;
                self.lecture = lecture;
                self.demarche = Demarche {
                    jetons: d.jetons,
                    etapes: d.etapes.join("\n"),
                    note: d.note,
                    genre_echec: String::new(),
                };
            }
            Err(e) => {
                // On CONSERVE `exact` (dernier résultat) pour ne pas “effacer l’écran” sur une faute.
                self.demarche = Demarche {
                    genre_echec: format!("{}: {e}", e.genre()),
                    ..Demarche::default()
                };
                self.refus = Refus::from(e).message.to_string();
                self.lecture.clear();
            }
        }

        self.focus_entree = true;
    }
}
