// src/noyau/erreur.rs

use thiserror::Error;

/// Échec d’évaluation : une seule catégorie côté utilisateur (affichage "Erreur"),
/// mais on garde la cause pour les journaux et les tests.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErreurEval {
    #[error("opérateur sans assez d’opérandes")]
    OperandesManquantes,

    #[error("pile finale invalide ({0} valeurs au lieu de 1)")]
    PileInvalide(usize),

    #[error("résultat non fini (NaN ou infini)")]
    NonFini,

    #[error("nombre invalide: {0:?}")]
    NombreInvalide(String),
}
