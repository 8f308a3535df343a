//! src/app/touches.rs
//!
//! Touches de la calculatrice (événements consommés par la session).
//!
//! Les codes numériques sont un contrat interne avec l’interface :
//! ASCII pour chiffres / opérateurs / '.' / '(' / ')' / '=', codes réservés
//! pour les commandes. Stables dans un même build, ce n’est pas un format
//! d’échange.

use num_traits::ToPrimitive;

use crate::noyau::{Fonction, Operateur};

pub const CODE_MODE_SOMBRE: i32 = 100;
pub const CODE_EFFACER: i32 = 101;
pub const CODE_RETOUR: i32 = 102;
pub const CODE_SIGNE: i32 = 103;
pub const CODE_MODE_ANGLE: i32 = 104;
/// sin=110, cos=111, ... atan=120 (ordre de `Fonction::TOUTES`).
pub const CODE_PREMIERE_FONCTION: i32 = 110;
pub const CODE_ANS: i32 = 205;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Controle {
    ModeSombre,
    Effacer,
    Retour,
    Signe,
    ModeAngle,
    Ans,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    /// 0..=9
    Chiffre(u8),
    Point,
    Operateur(Operateur),
    ParentheseOuvrante,
    ParentheseFermante,
    Fonction(Fonction),
    Controle(Controle),
    Egal,
}

impl Touche {
    pub fn depuis_code(code: i32) -> Option<Self> {
        let touche = match code {
            CODE_MODE_SOMBRE => Touche::Controle(Controle::ModeSombre),
            CODE_EFFACER => Touche::Controle(Controle::Effacer),
            CODE_RETOUR => Touche::Controle(Controle::Retour),
            CODE_SIGNE => Touche::Controle(Controle::Signe),
            CODE_MODE_ANGLE => Touche::Controle(Controle::ModeAngle),
            CODE_ANS => Touche::Controle(Controle::Ans),
            c if (CODE_PREMIERE_FONCTION..CODE_PREMIERE_FONCTION + 11).contains(&c) => {
                let i = (c - CODE_PREMIERE_FONCTION).to_usize()?;
                Touche::Fonction(*Fonction::TOUTES.get(i)?)
            }
            c => {
                let ch = char::from(c.to_u8()?);
                return Self::depuis_caractere(ch);
            }
        };
        Some(touche)
    }

    pub fn code(self) -> i32 {
        match self {
            Touche::Chiffre(d) => i32::from(b'0') + i32::from(d),
            Touche::Point => i32::from(b'.'),
            Touche::Operateur(op) => op.symbole() as i32,
            Touche::ParentheseOuvrante => i32::from(b'('),
            Touche::ParentheseFermante => i32::from(b')'),
            Touche::Egal => i32::from(b'='),
            Touche::Fonction(f) => {
                let rang = Fonction::TOUTES.iter().position(|x| *x == f).unwrap_or(0);
                CODE_PREMIERE_FONCTION + rang as i32
            }
            Touche::Controle(c) => match c {
                Controle::ModeSombre => CODE_MODE_SOMBRE,
                Controle::Effacer => CODE_EFFACER,
                Controle::Retour => CODE_RETOUR,
                Controle::Signe => CODE_SIGNE,
                Controle::ModeAngle => CODE_MODE_ANGLE,
                Controle::Ans => CODE_ANS,
            },
        }
    }

    /// Caractères du clavier : chiffres, '.', opérateurs, parenthèses, '='.
    pub fn depuis_caractere(c: char) -> Option<Self> {
        if let Some(d) = c.to_digit(10) {
            return d.to_u8().map(Touche::Chiffre);
        }
        match c {
            '.' => Some(Touche::Point),
            '(' => Some(Touche::ParentheseOuvrante),
            ')' => Some(Touche::ParentheseFermante),
            '=' => Some(Touche::Egal),
            _ => Operateur::depuis_char(c).map(Touche::Operateur),
        }
    }
}
