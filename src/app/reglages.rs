//! src/app/reglages.rs
//!
//! Réglages de la session (valeurs par défaut + garde-fous).
//!
//! Contrats :
//! - Aucune lecture de fichier ni d’environnement ici (le binaire s’en charge).
//! - Bornes sur chaque réglage (anti-abus).

use crate::noyau::{ModeAngle, PRECISION_DEFAUT};

/// Capacité par défaut de l’historique (les plus anciennes lignes sortent d’abord).
pub const CAPACITE_HISTORIQUE_DEFAUT: usize = 5;

/// Largeur par défaut de la ligne principale (en caractères).
pub const LARGEUR_AFFICHAGE_DEFAUT: usize = 16;

const CAPACITE_HISTORIQUE_MAX: usize = 100;

/// Au-delà, f64 n’a plus de chiffres significatifs à montrer.
const PRECISION_MAX: usize = 17;

#[derive(Clone, Debug, PartialEq)]
pub struct Reglages {
    pub capacite_historique: usize,
    pub precision: usize,
    pub mode_angle: ModeAngle,
    pub largeur_affichage: usize,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            capacite_historique: CAPACITE_HISTORIQUE_DEFAUT,
            precision: PRECISION_DEFAUT,
            mode_angle: ModeAngle::Degres,
            largeur_affichage: LARGEUR_AFFICHAGE_DEFAUT,
        }
    }
}

impl Reglages {
    pub fn set_capacite_historique(&mut self, n: usize) {
        self.capacite_historique = n.clamp(1, CAPACITE_HISTORIQUE_MAX);
    }

    pub fn set_precision(&mut self, digits: usize) {
        self.precision = digits.min(PRECISION_MAX);
    }

    pub fn set_largeur_affichage(&mut self, largeur: usize) {
        self.largeur_affichage = largeur.max(1);
    }
}
