//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder l’unique `EtatCalc` et la file des touches.
//!
//! Contrats :
//! - Les producteurs (boutons, clavier) ne font que `pousser` ; ils ne touchent jamais l’état.
//! - `traiter_file` applique les touches une par une, dans l’ordre d’arrivée.
//! - Aucune arithmétique ici : tout passe par `noyau`.

use std::collections::VecDeque;

use tracing::debug;

use crate::noyau::{demarche, Demarche, EtatCalc, Touche};

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    // --- état de la calculatrice (remplacé à chaque touche) ---
    pub etat: EtatCalc,

    // --- démarche de la dernière évaluation (panneau d’explication) ---
    pub demarche: Demarche,

    // --- touches en attente ---
    file: VecDeque<Touche>,
}

impl AppCalc {
    /// Producteur : met une touche en file.
    pub fn pousser(&mut self, touche: Touche) {
        self.file.push_back(touche);
    }

    /// Consommateur : applique toutes les touches en attente.
    pub fn traiter_file(&mut self) {
        while let Some(touche) = self.file.pop_front() {
            self.traiter(touche);
        }
    }

    fn traiter(&mut self, touche: Touche) {
        match touche {
            // "=" répété : on garde la démarche du vrai calcul, pas celle du résultat seul
            Touche::Egal if self.etat.vient_d_evaluer => {}
            Touche::Egal => {
                // démarche calculée sur l’expression telle qu’évaluée (opérateurs finaux retirés)
                let base = self.etat.expression.sans_operateurs_finaux();
                if !base.est_vide() {
                    self.demarche = demarche(&base.to_string());
                }
            }
            Touche::Effacer => self.demarche = Demarche::default(),
            _ => {}
        }

        self.etat = self.etat.appliquer(touche);
        debug!(touche = %touche, affichage = %self.etat.affichage, "touche traitée");
    }
}
