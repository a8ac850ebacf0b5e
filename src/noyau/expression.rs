//! Expression en cours de saisie, sous forme de segments (valeur immuable).
//!
//! Contrats :
//! - jamais deux opérateurs côte à côte, sauf un '-' unaire en attente ("5*-"),
//!   représenté comme un nombre ouvert qui n’a encore que son signe ;
//! - au plus un '.' par nombre ;
//! - le dernier segment, s’il est un nombre, est le “nombre ouvert” (pas de rescan).

use std::fmt;

use super::jetons::Operateur;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    Nombre(String),
    Op(Operateur),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Expression {
    segments: Vec<Segment>,
}

impl Expression {
    pub fn vide() -> Self {
        Self::default()
    }

    /// Expression réduite à un seul nombre (ex: résultat formaté "-15").
    pub fn nombre(texte: impl Into<String>) -> Self {
        Self {
            segments: vec![Segment::Nombre(texte.into())],
        }
    }

    pub fn est_vide(&self) -> bool {
        self.segments.is_empty()
    }

    /// Nombre ouvert (dernier segment), signe compris.
    pub fn nombre_ouvert(&self) -> Option<&str> {
        match self.segments.last() {
            Some(Segment::Nombre(txt)) => Some(txt.as_str()),
            _ => None,
        }
    }

    /// Vrai si le texte finit par un caractère opérateur (y compris un '-' unaire seul).
    pub fn finit_par_operateur(&self) -> bool {
        self.operateur_final().is_some()
    }

    /// Caractère opérateur final, s’il y en a un.
    pub fn operateur_final(&self) -> Option<Operateur> {
        match self.segments.last()? {
            Segment::Op(op) => Some(*op),
            Segment::Nombre(txt) if txt == "-" => Some(Operateur::Moins),
            Segment::Nombre(_) => None,
        }
    }

    /// Nouvelle expression avec un segment de plus.
    pub fn avec(&self, segment: Segment) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment);
        Self { segments }
    }

    /// Nouvelle expression dont le nombre ouvert est remplacé (ou créé).
    pub fn avec_nombre_ouvert(&self, texte: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        if matches!(segments.last(), Some(Segment::Nombre(_))) {
            segments.pop();
        }
        segments.push(Segment::Nombre(texte.into()));
        Self { segments }
    }

    /// Retire tous les opérateurs finaux (y compris un '-' unaire en attente).
    pub fn sans_operateurs_finaux(&self) -> Self {
        let mut out = self.clone();
        while out.finit_par_operateur() {
            out.segments.pop();
        }
        out
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for s in &self.segments {
            match s {
                Segment::Nombre(txt) => f.write_str(txt)?,
                Segment::Op(op) => write!(f, "{op}")?,
            }
        }
        Ok(())
    }
}
