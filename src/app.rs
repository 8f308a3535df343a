// src/app.rs
//
// Calculatrice — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (état, touches, commandes, réglages)
// - Ré-exporter Session (pour l’interface: use calculatrice::app::Session;)
//
// L’interface (fenêtre, boutons, thème) vit hors de ce crate : elle envoie des
// touches à la session et relit ses champs pour dessiner la frame suivante.

pub mod commandes;
pub mod etat;
pub mod reglages;
pub mod touches;

#[cfg(test)]
mod tests_session;

// Ré-exports pratiques
pub use commandes::equilibrer_parentheses;
pub use etat::{tronquer_a_gauche, Historique, Session, AFFICHAGE_ERREUR};
pub use reglages::Reglages;
pub use touches::{Controle, Touche};
