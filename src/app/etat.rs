//! src/app/etat.rs
//!
//! État de la calculatrice (sans interface, sans logique de touches).
//!
//! Rôle : contenir l’état de la session (affichage, expression, historique,
//! erreur, modes) et offrir des opérations simples sur cet état.
//!
//! Invariants :
//! - `affichage` n’est jamais vide ("0" quand il n’y a rien à montrer).
//! - l’historique ne dépasse jamais sa capacité (FIFO).
//! - `en_erreur` => affichage == "Error" et expression vide.
//! - `vient_d_evaluer` => expression == résultat formaté de `dernier_resultat`.

use std::collections::VecDeque;

use crate::noyau::{format_nombre, ModeAngle};

use super::reglages::Reglages;

/// Texte affiché quand l’évaluation échoue.
pub const AFFICHAGE_ERREUR: &str = "Error";

const AFFICHAGE_VIDE: &str = "0";

/* ------------------------ Historique borné ------------------------ */

/// Journal des évaluations, plus ancienne ligne en tête.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Historique {
    lignes: VecDeque<String>,
    capacite: usize,
}

impl Historique {
    pub fn new(capacite: usize) -> Self {
        Self {
            lignes: VecDeque::with_capacity(capacite),
            capacite,
        }
    }

    /// Ajoute en fin ; évince les plus anciennes au-delà de la capacité.
    pub fn ajouter(&mut self, ligne: String) {
        self.lignes.push_back(ligne);
        while self.lignes.len() > self.capacite {
            self.lignes.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.lignes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lignes.is_empty()
    }

    pub fn capacite(&self) -> usize {
        self.capacite
    }

    pub fn derniere(&self) -> Option<&str> {
        self.lignes.back().map(String::as_str)
    }

    /// Plus ancienne d’abord.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lignes.iter().map(String::as_str)
    }
}

/* ------------------------ Session ------------------------ */

#[derive(Clone, Debug)]
pub struct Session {
    // --- lignes lues par l’interface ---
    pub affichage: String,
    pub expression: String,
    pub historique: Historique,

    // --- mémoire ---
    pub dernier_resultat: f64,
    pub vient_d_evaluer: bool,

    // --- erreur (collante jusqu’à la prochaine touche) ---
    pub en_erreur: bool,
    pub message_erreur: String,

    // --- modes ---
    pub mode_angle: ModeAngle,
    pub mode_sombre: bool,

    pub reglages: Reglages,
}

impl Default for Session {
    fn default() -> Self {
        Self::avec_reglages(Reglages::default())
    }
}

impl Session {
    pub fn avec_reglages(reglages: Reglages) -> Self {
        Self {
            affichage: AFFICHAGE_VIDE.to_string(),
            expression: String::new(),
            historique: Historique::new(reglages.capacite_historique),
            dernier_resultat: 0.0,
            vient_d_evaluer: false,
            en_erreur: false,
            message_erreur: String::new(),
            mode_angle: reglages.mode_angle,
            mode_sombre: false,
            reglages,
        }
    }

    /* ------------------------ Actions simples (état seulement) ------------------------ */

    /// C : expression vide, affichage "0", erreur effacée.
    pub fn effacer(&mut self) {
        self.expression.clear();
        self.affichage = AFFICHAGE_VIDE.to_string();
        self.en_erreur = false;
        self.message_erreur.clear();
        self.vient_d_evaluer = false;
    }

    /// Sortie d’erreur : toute touche repart d’un état vierge.
    pub(crate) fn sortir_erreur(&mut self) {
        if self.en_erreur {
            self.effacer();
        }
    }

    /// Dépose un échec d’évaluation (l’historique en garde la trace).
    pub(crate) fn set_erreur(&mut self, msg: impl Into<String>) {
        let msg = msg.into();
        self.historique.ajouter(format!("Error: {msg}"));

        self.affichage = AFFICHAGE_ERREUR.to_string();
        self.expression.clear();
        self.en_erreur = true;
        self.message_erreur = msg;
        self.vient_d_evaluer = false;
    }

    /// Dépose un résultat : historique "<expr> = <résultat>", puis le résultat
    /// devient à la fois l’affichage et le début de la prochaine expression.
    pub(crate) fn set_resultat(&mut self, valeur: f64) {
        let txt = self.formater(valeur);
        self.historique
            .ajouter(format!("{} = {}", self.expression, txt));

        self.affichage = txt.clone();
        self.expression = txt;
        self.dernier_resultat = valeur;
        self.vient_d_evaluer = true;
    }

    /// Formate selon la précision des réglages.
    pub fn formater(&self, valeur: f64) -> String {
        format_nombre(valeur, self.reglages.precision)
    }

    /* ------------------------ Lecture (interface) ------------------------ */

    /// Ligne principale : l’expression en cours, sinon l’affichage.
    pub fn ligne_principale(&self) -> &str {
        if self.expression.is_empty() {
            &self.affichage
        } else {
            &self.expression
        }
    }

    /// Ligne principale tronquée à la largeur des réglages.
    pub fn ligne_principale_tronquee(&self) -> String {
        tronquer_a_gauche(self.ligne_principale(), self.reglages.largeur_affichage)
    }

    pub fn ligne_erreur(&self) -> Option<String> {
        if self.en_erreur && !self.message_erreur.is_empty() {
            Some(format!("Error: {}", self.message_erreur))
        } else {
            None
        }
    }

    /// Vérifie les invariants de l’état (utilisé par les tests).
    pub fn verifier_invariants(&self) -> Result<(), String> {
        if self.affichage.is_empty() {
            return Err("affichage vide".into());
        }
        if self.historique.len() > self.historique.capacite() {
            return Err(format!(
                "historique trop long: {} > {}",
                self.historique.len(),
                self.historique.capacite()
            ));
        }
        if self.en_erreur && (self.affichage != AFFICHAGE_ERREUR || !self.expression.is_empty()) {
            return Err(format!(
                "erreur incohérente: affichage={:?} expression={:?}",
                self.affichage, self.expression
            ));
        }
        if self.vient_d_evaluer && self.expression != self.formater(self.dernier_resultat) {
            return Err(format!(
                "résultat incohérent: expression={:?} dernier_resultat={}",
                self.expression, self.dernier_resultat
            ));
        }
        Ok(())
    }
}

/// Garde les caractères les plus à droite ; si on a coupé, le premier devient '.'.
pub fn tronquer_a_gauche(texte: &str, largeur_max: usize) -> String {
    let n = texte.chars().count();
    if n <= largeur_max {
        return texte.to_string();
    }

    let garde = largeur_max.max(1);
    let reste: String = texte.chars().skip(n - garde).collect();
    if garde > 1 {
        let mut out = String::with_capacity(reste.len());
        out.push('.');
        out.extend(reste.chars().skip(1));
        out
    } else {
        reste
    }
}
