//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> RPN (shunting-yard) -> pile f64
//!
//! Aucun interpréteur générique : la grammaire se limite à des nombres signés
//! séparés par + - * /.

use tracing::{debug, warn};

use super::erreur::ErreurEval;
use super::jetons::{format_tokens, tokenize};
use super::rpn::{eval_rpn, to_rpn};

/// Démarche (panneau d’explication) : jetons + RPN en texte.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
}

/// API publique : évalue une expression et retourne la valeur finie.
pub fn eval_expression(expr_str: &str) -> Result<f64, ErreurEval> {
    let jetons = tokenize(expr_str);
    let rpn = to_rpn(&jetons);

    match eval_rpn(&rpn) {
        Ok(v) => {
            debug!(expression = expr_str, valeur = v, "évaluation réussie");
            Ok(v)
        }
        Err(e) => {
            warn!(expression = expr_str, erreur = %e, "évaluation en échec");
            Err(e)
        }
    }
}

/// Démarche d’une expression (sans l’évaluer).
pub fn demarche(expr_str: &str) -> Demarche {
    let jetons = tokenize(expr_str);
    let rpn = to_rpn(&jetons);
    Demarche {
        jetons: format_tokens(&jetons),
        rpn: format_tokens(&rpn),
    }
}
