//! Noyau de la calculatrice à touches
//!
//! Organisation interne :
//! - jetons.rs     : opérateurs + tokenisation (moins unaire replié dans le nombre)
//! - rpn.rs        : shunting-yard + évaluation sur pile
//! - format.rs     : arrondi à 10 décimales + écriture canonique
//! - erreur.rs     : échec d’évaluation (typé)
//! - eval.rs       : pipeline complet + démarche
//! - expression.rs : expression en segments (valeur immuable)
//! - automate.rs   : automate de saisie (état, touche) -> état

pub mod automate;
pub mod erreur;
pub mod eval;
pub mod expression;
pub mod format;
pub mod jetons;
pub mod rpn;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use automate::{EtatCalc, Touche};
pub use eval::{demarche, Demarche};
