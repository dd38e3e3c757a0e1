//! Calculatrice infixe — noyau réutilisable (sans UI).
//!
//! L’UI (src/app) et le point d’entrée (src/main.rs) ne font qu’appeler `noyau`.

pub mod noyau;
