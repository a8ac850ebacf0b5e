//! Automate de saisie : (état, touche) -> état.
//!
//! Contrats :
//! - une touche = une transition complète, sans état intermédiaire observable ;
//! - la saisie mal formée est ignorée ou normalisée en silence (jamais d’erreur) ;
//! - `expression` reste toujours un préfixe de quelque chose d’évaluable ;
//! - après "=", `vient_d_evaluer` est vrai et `affichage` contient le résultat
//!   ou `MARQUEUR_ERREUR`.

use std::fmt;

use tracing::{trace, warn};

use super::eval::eval_expression;
use super::expression::{Expression, Segment};
use super::format::format_nombre;
use super::jetons::Operateur;

/// Texte affiché après un échec d’évaluation.
pub const MARQUEUR_ERREUR: &str = "Erreur";

/// Alphabet logique d’entrée (ce que clavier et boutons doivent produire).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    /// Chiffre 0 à 9 ; passer par `Touche::chiffre` pour valider.
    Chiffre(u8),
    Point,
    Operateur(Operateur),
    Egal,
    Effacer,
}

impl Touche {
    /// `None` hors de 0..=9.
    pub fn chiffre(d: u8) -> Option<Self> {
        (d <= 9).then_some(Touche::Chiffre(d))
    }

    /// Clavier texte -> touche. `None` = caractère ignoré.
    pub fn depuis_caractere(c: char) -> Option<Self> {
        match c {
            '0'..='9' => c.to_digit(10).and_then(|d| Touche::chiffre(d as u8)),
            '.' | ',' => Some(Touche::Point),
            '=' => Some(Touche::Egal),
            'c' | 'C' => Some(Touche::Effacer),
            _ => Operateur::depuis_caractere(c).map(Touche::Operateur),
        }
    }
}

impl fmt::Display for Touche {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Touche::Chiffre(d) => write!(f, "{d}"),
            Touche::Point => f.write_str("."),
            Touche::Operateur(op) => write!(f, "{op}"),
            Touche::Egal => f.write_str("="),
            Touche::Effacer => f.write_str("C"),
        }
    }
}

/// États effectifs, déduits de (expression, vient_d_evaluer).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Vide,
    NombreEnCours,
    ApresOperateur,
    VientDEvaluer,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EtatCalc {
    pub affichage: String,
    pub expression: Expression,
    pub derniere_touche: Option<Touche>,
    pub vient_d_evaluer: bool,
}

impl Default for EtatCalc {
    fn default() -> Self {
        Self {
            affichage: "0".to_string(),
            expression: Expression::vide(),
            derniere_touche: None,
            vient_d_evaluer: false,
        }
    }
}

impl EtatCalc {
    pub fn phase(&self) -> Phase {
        if self.vient_d_evaluer {
            Phase::VientDEvaluer
        } else if self.expression.est_vide() {
            Phase::Vide
        } else if self.expression.finit_par_operateur() {
            Phase::ApresOperateur
        } else {
            Phase::NombreEnCours
        }
    }

    /// Dernière touche en texte ("" au départ et après C).
    pub fn derniere_touche_txt(&self) -> String {
        self.derniere_touche
            .map(|t| t.to_string())
            .unwrap_or_default()
    }

    /// Transition unique : produit le nouvel état, `self` n’est jamais modifié.
    pub fn appliquer(&self, touche: Touche) -> EtatCalc {
        let mut suivant = match touche {
            Touche::Chiffre(d) => self.chiffre(d),
            Touche::Point => self.point(),
            Touche::Operateur(op) => self.operateur(op),
            Touche::Egal => self.egal(),
            Touche::Effacer => return EtatCalc::default(),
        };
        suivant.derniere_touche = Some(touche);

        trace!(
            touche = %touche,
            avant = %self.expression,
            apres = %suivant.expression,
            affichage = %suivant.affichage,
            "transition"
        );
        suivant
    }

    fn saisie(&self, expression: Expression, affichage: impl Into<String>) -> EtatCalc {
        EtatCalc {
            affichage: affichage.into(),
            expression,
            derniere_touche: self.derniere_touche,
            vient_d_evaluer: false,
        }
    }

    /* ------------------------ Chiffres ------------------------ */

    fn chiffre(&self, d: u8) -> EtatCalc {
        let Some(c) = char::from_digit(u32::from(d), 10) else {
            warn!(chiffre = d, "chiffre hors 0..=9 ignoré");
            return self.clone();
        };

        match self.phase() {
            // zéros de tête supprimés : on reste sur "0"
            Phase::Vide | Phase::VientDEvaluer if d == 0 => self.saisie(Expression::vide(), "0"),
            Phase::Vide | Phase::VientDEvaluer => {
                self.saisie(Expression::nombre(c.to_string()), c.to_string())
            }

            Phase::ApresOperateur => {
                // '-' unaire en attente : signe dans l’expression, chiffre seul à l’écran
                let nouveau = match self.expression.nombre_ouvert() {
                    Some(signe) => format!("{signe}{c}"),
                    None => c.to_string(),
                };
                self.saisie(self.expression.avec_nombre_ouvert(nouveau), c.to_string())
            }

            Phase::NombreEnCours => {
                let courant = self.expression.nombre_ouvert().unwrap_or_default();
                let (signe, corps) = match courant.strip_prefix('-') {
                    Some(corps) => ("-", corps),
                    None => ("", courant),
                };

                // pas de "00" : un zéro seul est remplacé, à l’écran aussi
                if corps == "0" {
                    let expr = self.expression.avec_nombre_ouvert(format!("{signe}{c}"));
                    return self.saisie(expr, c.to_string());
                }
                let expr = self.expression.avec_nombre_ouvert(format!("{courant}{c}"));
                self.saisie(expr, format!("{}{c}", self.affichage))
            }
        }
    }

    /* ------------------------ Point décimal ------------------------ */

    fn point(&self) -> EtatCalc {
        if self.phase() == Phase::VientDEvaluer {
            return self.saisie(Expression::nombre("0."), "0.");
        }

        let courant = self.expression.nombre_ouvert();

        // un seul '.' par nombre : sinon, sans effet
        if courant.is_some_and(|n| n.contains('.')) {
            return self.clone();
        }

        match courant {
            // nombre en cours : '.' ajouté à l’expression et à l’écran
            Some(n) if n != "-" => self.saisie(
                self.expression.avec_nombre_ouvert(format!("{n}.")),
                format!("{}.", self.affichage),
            ),
            // début de nombre (signe en attente gardé dans l’expression)
            Some(signe) => {
                let expr = self.expression.avec_nombre_ouvert(format!("{signe}0."));
                self.saisie(expr, "0.")
            }
            None => self.saisie(self.expression.avec_nombre_ouvert("0."), "0."),
        }
    }

    /* ------------------------ Opérateurs ------------------------ */

    fn operateur(&self, op: Operateur) -> EtatCalc {
        match self.phase() {
            // après une erreur, l’expression est vide : on repart comme au début
            Phase::VientDEvaluer if self.expression.est_vide() => self.operateur_en_tete(op),
            Phase::VientDEvaluer => {
                let expr = Expression::nombre(self.affichage.clone()).avec(Segment::Op(op));
                self.saisie(expr, op.symbole().to_string())
            }

            Phase::Vide => self.operateur_en_tete(op),

            Phase::ApresOperateur => {
                let fin = self.expression.operateur_final();

                // "5*" puis '-' => "5*-" (négatif en attente)
                if op == Operateur::Moins && fin != Some(Operateur::Moins) {
                    return self.saisie(self.expression.avec(Segment::Nombre("-".into())), "-");
                }

                // sinon le dernier opérateur gagne
                let base = self.expression.sans_operateurs_finaux();
                if base.est_vide() {
                    return self.operateur_en_tete(op);
                }
                self.saisie(base.avec(Segment::Op(op)), op.symbole().to_string())
            }

            Phase::NombreEnCours => self.saisie(
                self.expression.avec(Segment::Op(op)),
                op.symbole().to_string(),
            ),
        }
    }

    /// Opérateur sans nombre avant : seul le '-' unaire est accepté.
    fn operateur_en_tete(&self, op: Operateur) -> EtatCalc {
        if op == Operateur::Moins {
            self.saisie(Expression::nombre("-"), "-")
        } else {
            self.saisie(Expression::vide(), "0")
        }
    }

    /* ------------------------ Égal ------------------------ */

    fn egal(&self) -> EtatCalc {
        let base = self.expression.sans_operateurs_finaux();
        if base.est_vide() {
            return self.clone();
        }

        let (affichage, expression) = match eval_expression(&base.to_string()) {
            Ok(v) => {
                let txt = format_nombre(v);
                (txt.clone(), Expression::nombre(txt))
            }
            Err(_) => (MARQUEUR_ERREUR.to_string(), Expression::vide()),
        };

        EtatCalc {
            affichage,
            expression,
            derniere_touche: self.derniere_touche,
            vient_d_evaluer: true,
        }
    }
}
