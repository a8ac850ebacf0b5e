// src/noyau/jetons.rs

use std::fmt;

/// Les quatre opérateurs binaires de la calculatrice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Div,
}

impl Operateur {
    /// Caractère ASCII utilisé dans l’expression ("5*-3").
    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '*',
            Operateur::Div => '/',
        }
    }

    /// Glyphe “joli” pour les boutons.
    pub fn glyphe(self) -> &'static str {
        match self {
            Operateur::Plus => "+",
            Operateur::Moins => "−",
            Operateur::Fois => "×",
            Operateur::Div => "÷",
        }
    }

    /// Accepte l’ASCII et les glyphes (× ÷ −).
    pub fn depuis_caractere(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operateur::Plus),
            '-' | '−' => Some(Operateur::Moins),
            '*' | '×' => Some(Operateur::Fois),
            '/' | '÷' => Some(Operateur::Div),
            _ => None,
        }
    }

    pub fn precedence(self) -> u8 {
        match self {
            Operateur::Plus | Operateur::Moins => 1,
            Operateur::Fois | Operateur::Div => 2,
        }
    }

    pub fn appliquer(self, a: f64, b: f64) -> f64 {
        match self {
            Operateur::Plus => a + b,
            Operateur::Moins => a - b,
            Operateur::Fois => a * b,
            // IEEE-754 : x/0 => ±inf, 0/0 => NaN (filtré par l’évaluateur)
            Operateur::Div => a / b,
        }
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbole())
    }
}

/// Jeton : nombre (gardé en texte jusqu’à l’évaluation) ou opérateur.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tok {
    Nombre(String),
    Op(Operateur),
}

/// Tokenize une expression de calculatrice.
///
/// - chiffres et '.' s’accumulent dans un tampon de nombre
/// - un opérateur vide le tampon (s’il n’est pas vide) puis est examiné
/// - '-' en tête, ou juste après un opérateur, devient le signe du nombre suivant
/// - ne renvoie jamais d’erreur : un tampon non terminé est vidé en fin d’entrée
///
/// Les caractères inconnus restent dans le tampon : c’est l’évaluateur qui refusera
/// le nombre (`NombreInvalide`).
pub fn tokenize(s: &str) -> Vec<Tok> {
    let mut out: Vec<Tok> = Vec::new();
    let mut tampon = String::new();

    for c in s.chars() {
        if c.is_whitespace() {
            continue;
        }

        let Some(op) = Operateur::depuis_caractere(c) else {
            tampon.push(c);
            continue;
        };

        if !tampon.is_empty() {
            out.push(Tok::Nombre(std::mem::take(&mut tampon)));
        }

        // moins unaire : rien avant, ou un opérateur juste avant
        let attend_valeur = matches!(out.last(), None | Some(Tok::Op(_)));
        if op == Operateur::Moins && attend_valeur {
            tampon.push('-');
            continue;
        }

        out.push(Tok::Op(op));
    }

    if !tampon.is_empty() {
        out.push(Tok::Nombre(tampon));
    }

    out
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens
        .iter()
        .map(|t| match t {
            Tok::Nombre(txt) => txt.clone(),
            Tok::Op(op) => op.glyphe().to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
