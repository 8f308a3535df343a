// src/noyau/jetons.rs

use super::erreur::ErreurEvaluation;
use super::fonctions::Fonction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
    Puissance,
}

impl Operateur {
    pub fn depuis_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operateur::Plus),
            '-' => Some(Operateur::Moins),
            '*' => Some(Operateur::Fois),
            '/' => Some(Operateur::Divise),
            '^' => Some(Operateur::Puissance),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '*',
            Operateur::Divise => '/',
            Operateur::Puissance => '^',
        }
    }

    /// Plus grand = lie plus fort. Tous associatifs à gauche (y compris ^).
    pub fn precedence(self) -> u8 {
        match self {
            Operateur::Plus | Operateur::Moins => 1,
            Operateur::Fois | Operateur::Divise => 2,
            Operateur::Puissance => 3,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tok {
    /// Littéral, éventuellement signé (moins unaire fusionné).
    Num(f64),
    Op(Operateur),
    Fonction(Fonction),
    LPar,
    RPar,
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres décimaux (ex: 12, 3.5, .5)
/// - opérateurs + - * / ^
/// - parenthèses ( )
/// - noms de fonctions (sin, cos, tan, log, ln, exp, sqrt, asin, acos, atan, hyp)
///
/// Moins unaire : en tête, après '(' ou après un opérateur, le '-' est collé au
/// nombre qui suit ("-3" -> Num(-3)). S’il ne précède pas un nombre ("-(2)",
/// "-sin(30)"), on émet "-1 *".
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurEvaluation> {
    let mut out: Vec<Tok> = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Moins unaire
        if c == '-' && attend_valeur(&out) {
            i += 1;
            while i < chars.len() && chars[i].is_whitespace() {
                i += 1;
            }
            let debut = i;
            while i < chars.len() && est_chiffre(chars[i]) {
                i += 1;
            }
            if debut == i {
                out.push(Tok::Num(-1.0));
                out.push(Tok::Op(Operateur::Fois));
            } else {
                let v = lire_nombre(&chars[debut..i])?;
                out.push(Tok::Num(-v));
            }
            continue;
        }

        if est_chiffre(c) {
            let debut = i;
            while i < chars.len() && est_chiffre(chars[i]) {
                i += 1;
            }
            out.push(Tok::Num(lire_nombre(&chars[debut..i])?));
            continue;
        }

        if c.is_alphabetic() {
            let debut = i;
            while i < chars.len() && chars[i].is_alphabetic() {
                i += 1;
            }
            let mot: String = chars[debut..i].iter().collect();
            let f = Fonction::depuis_nom(&mot)
                .ok_or_else(|| ErreurEvaluation::FonctionInconnue(mot.to_lowercase()))?;
            out.push(Tok::Fonction(f));
            continue;
        }

        let tok = match c {
            '(' => Tok::LPar,
            ')' => Tok::RPar,
            _ => Tok::Op(Operateur::depuis_char(c).ok_or(ErreurEvaluation::OperateurInconnu(c))?),
        };
        out.push(tok);
        i += 1;
    }

    Ok(out)
}

/// Vrai si le prochain jeton doit être une valeur (début, après '(' ou un opérateur).
fn attend_valeur(deja: &[Tok]) -> bool {
    matches!(deja.last(), None | Some(Tok::LPar) | Some(Tok::Op(_)))
}

fn est_chiffre(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

fn lire_nombre(chars: &[char]) -> Result<f64, ErreurEvaluation> {
    let txt: String = chars.iter().collect();
    txt.parse::<f64>()
        .map_err(|_| ErreurEvaluation::mal_formee(format!("nombre invalide '{txt}'")))
}

/// Format utilitaire (journal) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::with_capacity(tokens.len());
    for t in tokens {
        let s = match t {
            Tok::Num(v) => format!("{v}"),
            Tok::Op(op) => op.symbole().to_string(),
            Tok::Fonction(f) => f.nom().to_string(),
            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
