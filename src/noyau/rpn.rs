// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> évaluation sur pile (f64)
//
// Règles:
// - Pas de parenthèses dans cette grammaire : aucune erreur possible à la conversion.
// - Associativité à gauche partout : on dépile sur `>=` (8-3-2 => (8-3)-2).
// - Le moins unaire est déjà replié dans le nombre par le tokenizer ("5*-3" => 5 -3 *).

use tracing::trace;

use super::erreur::ErreurEval;
use super::jetons::{Operateur, Tok};

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [3, +, 4, *, 2]
///   rpn:    [3, 4, 2, *, +]
pub fn to_rpn(tokens: &[Tok]) -> Vec<Tok> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Operateur> = Vec::new();

    for tok in tokens {
        match tok {
            Tok::Nombre(_) => out.push(tok.clone()),

            Tok::Op(op) => {
                while let Some(&top) = ops.last() {
                    if top.precedence() < op.precedence() {
                        break;
                    }
                    out.push(Tok::Op(top));
                    ops.pop();
                }
                ops.push(*op);
            }
        }
    }

    // vide la pile ops (LIFO)
    out.extend(ops.into_iter().rev().map(Tok::Op));
    out
}

/// Évalue une RPN.
///
/// Échec si : opérande manquant, pile finale ≠ 1 valeur, résultat NaN/infini,
/// ou texte de nombre non lisible.
pub fn eval_rpn(rpn: &[Tok]) -> Result<f64, ErreurEval> {
    let mut pile: Vec<f64> = Vec::new();

    for tok in rpn {
        match tok {
            Tok::Nombre(txt) => {
                let v = txt
                    .parse::<f64>()
                    .map_err(|_| ErreurEval::NombreInvalide(txt.clone()))?;
                pile.push(v);
            }

            Tok::Op(op) => {
                // droite d’abord, puis gauche
                let b = pile.pop().ok_or(ErreurEval::OperandesManquantes)?;
                let a = pile.pop().ok_or(ErreurEval::OperandesManquantes)?;
                let r = op.appliquer(a, b);
                trace!(%a, %b, op = %op, r = %r, "rpn: opération");
                pile.push(r);
            }
        }
    }

    match pile.as_slice() {
        [v] if v.is_finite() => Ok(*v),
        [_] => Err(ErreurEval::NonFini),
        autre => Err(ErreurEval::PileInvalide(autre.len())),
    }
}
