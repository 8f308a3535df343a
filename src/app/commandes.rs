//! src/app/commandes.rs
//!
//! Traitement des touches : une touche = une transition complète de la session.
//!
//! - Toute touche sort d’abord de l’état d’erreur (retour à "0", expression vide).
//! - Seule la touche '=' appelle le noyau.
//! - Aucune touche ne panique ni ne renvoie d’erreur : un échec devient état.

use log::{debug, info, warn};

use crate::noyau::{eval_expression, format_nombre, Fonction, Operateur};

use super::etat::Session;
use super::touches::{Controle, Touche};

/// Ouvertures de fonctions, les plus longues d’abord ("asin(" avant "sin(").
const OUVERTURES_PAR_LONGUEUR: [&str; 11] = [
    "sqrt(", "asin(", "acos(", "atan(", "sin(", "cos(", "tan(", "log(", "exp(", "hyp(", "ln(",
];

/// Caractères qui terminent un opérande quand on remonte l’expression.
const BORNES_OPERANDE: &str = "()+-*/^";

/// Mots reconnus par `saisir` en plus des noms de fonctions.
const MOTS_CONTROLE: [(&str, Controle); 6] = [
    ("ans", Controle::Ans),
    ("c", Controle::Effacer),
    ("del", Controle::Retour),
    ("neg", Controle::Signe),
    ("angle", Controle::ModeAngle),
    ("theme", Controle::ModeSombre),
];

impl Session {
    /// Point d’entrée unique : applique une touche.
    pub fn appuyer(&mut self, touche: Touche) {
        debug!(
            "touche {touche:?} (expression={:?}, affichage={:?})",
            self.expression, self.affichage
        );

        self.sortir_erreur();

        match touche {
            Touche::Chiffre(d) => self.chiffre(d),
            Touche::Point => self.point(),
            Touche::Operateur(op) => self.operateur(op),
            Touche::ParentheseOuvrante => self.ajouter_brut("("),
            Touche::ParentheseFermante => self.ajouter_brut(")"),
            Touche::Fonction(f) => self.fonction(f),
            Touche::Controle(c) => match c {
                Controle::ModeSombre => self.mode_sombre = !self.mode_sombre,
                Controle::ModeAngle => self.mode_angle = self.mode_angle.bascule(),
                Controle::Effacer => self.effacer(),
                Controle::Retour => self.retour(),
                Controle::Signe => self.changer_signe(),
                Controle::Ans => self.ans(),
            },
            Touche::Egal => self.evaluer(),
        }
    }

    /// Code numérique de l’interface. Faux (et ignoré) si le code est inconnu.
    pub fn appuyer_code(&mut self, code: i32) -> bool {
        match Touche::depuis_code(code) {
            Some(t) => {
                self.appuyer(t);
                true
            }
            None => {
                warn!("code de touche inconnu: {code}");
                false
            }
        }
    }

    pub fn appuyer_caractere(&mut self, c: char) -> bool {
        match Touche::depuis_caractere(c) {
            Some(t) => {
                self.appuyer(t);
                true
            }
            None => false,
        }
    }

    /// Saisie texte (console, tests) : caractères de touches, noms de fonctions
    /// ("sin" ou "sin(") et mots de commande (ans, c, del, neg, angle, theme).
    /// Renvoie le nombre d’éléments ignorés.
    pub fn saisir(&mut self, texte: &str) -> usize {
        let chars: Vec<char> = texte.chars().collect();
        let mut ignores = 0;
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];

            if c.is_whitespace() {
                i += 1;
                continue;
            }

            if c.is_alphabetic() {
                let debut = i;
                while i < chars.len() && chars[i].is_alphabetic() {
                    i += 1;
                }
                let mot: String = chars[debut..i].iter().collect::<String>().to_lowercase();

                if let Some(f) = Fonction::depuis_nom(&mot) {
                    // "sin(" : la touche insère déjà la parenthèse
                    if chars.get(i) == Some(&'(') {
                        i += 1;
                    }
                    self.appuyer(Touche::Fonction(f));
                } else if let Some((_, ctl)) = MOTS_CONTROLE.iter().find(|(m, _)| *m == mot) {
                    self.appuyer(Touche::Controle(*ctl));
                } else {
                    warn!("mot ignoré: {mot:?}");
                    ignores += 1;
                }
                continue;
            }

            if !self.appuyer_caractere(c) {
                warn!("caractère ignoré: {c:?}");
                ignores += 1;
            }
            i += 1;
        }

        ignores
    }

    /* ------------------------ Transitions ------------------------ */

    fn chiffre(&mut self, d: u8) {
        let Some(c) = char::from_digit(u32::from(d), 10) else {
            warn!("chiffre hors plage: {d}");
            return;
        };

        if self.vient_d_evaluer {
            self.expression.clear();
            self.affichage = "0".to_string();
            self.vient_d_evaluer = false;
        }

        if self.affichage == "0" {
            self.affichage = c.to_string();
        } else {
            self.affichage.push(c);
        }
        self.expression.push(c);
    }

    /// Après '=', le point prolonge le résultat ("5" -> "5.").
    fn point(&mut self) {
        if !self.affichage.contains('.') {
            self.affichage.push('.');
            self.expression.push('.');
            self.vient_d_evaluer = false;
        }
    }

    fn operateur(&mut self, op: Operateur) {
        if self.vient_d_evaluer {
            self.expression = self.formater(self.dernier_resultat);
            self.vient_d_evaluer = false;
        }
        self.expression.push(op.symbole());
        self.affichage = "0".to_string();
    }

    fn ajouter_brut(&mut self, s: &str) {
        self.expression.push_str(s);
        self.vient_d_evaluer = false;
    }

    fn fonction(&mut self, f: Fonction) {
        if self.vient_d_evaluer {
            self.expression.clear();
            self.vient_d_evaluer = false;
        }
        self.expression.push_str(f.ouverture());
    }

    fn ans(&mut self) {
        let v = self.formater(self.dernier_resultat);
        if self.vient_d_evaluer {
            self.expression.clear();
            self.vient_d_evaluer = false;
        }
        self.expression.push_str(&v);
        self.affichage = v;
    }

    /// Retour arrière : une ouverture de fonction entière, sinon un caractère.
    fn retour(&mut self) {
        if self.vient_d_evaluer {
            self.effacer();
            return;
        }

        if let Some(ouv) = OUVERTURES_PAR_LONGUEUR
            .iter()
            .find(|o| self.expression.ends_with(**o))
        {
            let n = self.expression.len() - ouv.len();
            self.expression.truncate(n);
        } else {
            self.expression.pop();
        }

        if self.affichage != "0" {
            self.affichage.pop();
            if self.affichage.is_empty() || self.affichage == "-" {
                self.affichage = "0".to_string();
            }
        }
    }

    fn changer_signe(&mut self) {
        if self.vient_d_evaluer {
            self.dernier_resultat = -self.dernier_resultat;
            let txt = self.formater(self.dernier_resultat);
            self.affichage = txt.clone();
            self.expression = txt;
            self.vient_d_evaluer = false;
            return;
        }

        if self.expression.is_empty() {
            // valeur seulement affichée : on la reprend comme expression
            let Ok(v) = self.affichage.parse::<f64>() else {
                return;
            };
            if v == 0.0 {
                return;
            }
            let txt = self.formater(-v);
            self.affichage = txt.clone();
            self.expression = txt;
            return;
        }

        if let Some((expr, aff)) = basculer_dernier_operande(&self.expression, self.reglages.precision)
        {
            self.expression = expr;
            self.affichage = aff;
        }
    }

    /// '=' : complète les parenthèses, évalue, dépose résultat ou erreur.
    fn evaluer(&mut self) {
        if self.expression.is_empty() {
            self.affichage = "0".to_string();
            return;
        }

        let complete = equilibrer_parentheses(&self.expression);
        match eval_expression(&complete, self.mode_angle) {
            Ok(v) => {
                info!("{} = {v}", complete);
                self.set_resultat(v);
            }
            Err(e) => {
                warn!("échec de l’évaluation de {complete:?}: {e}");
                self.set_erreur(e.to_string());
            }
        }
    }
}

/// Ajoute une ')' par '(' restée ouverte.
pub fn equilibrer_parentheses(expr: &str) -> String {
    let ouvertes = expr.matches('(').count();
    let fermees = expr.matches(')').count();

    let mut out = expr.to_string();
    for _ in fermees..ouvertes {
        out.push(')');
    }
    out
}

/// Bascule le signe du dernier opérande de `expr`.
///
/// - "(-x)" en fin d’expression redevient "x", sauf si la parenthèse est
///   celle d’une fonction : "sin(-30)" -> "sin(30)"
/// - sinon l’opérande est nié ; un négatif qui suit un opérateur est entouré
///   de parenthèses ("5+3" -> "5+(-3)")
///
/// Renvoie (nouvelle expression, texte à afficher), ou None si rien à basculer.
fn basculer_dernier_operande(expr: &str, precision: usize) -> Option<(String, String)> {
    // Cas 1 : "(-x)" -> "x"
    if let Some(sans_fin) = expr.strip_suffix(')') {
        let p = sans_fin.rfind('(')?;
        let positif = sans_fin[p + 1..].strip_prefix('-')?;
        if positif.is_empty() || !positif.chars().all(|c| c.is_ascii_digit() || c == '.') {
            return None;
        }
        positif.parse::<f64>().ok()?;

        let avant = &expr[..p];
        let remplace = if avant.chars().last().map_or(true, |c| "(+-*/^".contains(c)) {
            positif.to_string()
        } else {
            format!("({positif})")
        };
        return Some((format!("{avant}{remplace}"), positif.to_string()));
    }

    // Cas 2 : dernier opérande nu
    let mut debut = expr
        .rfind(|c| BORNES_OPERANDE.contains(c))
        .map_or(0, |b| b + 1);

    // un '-' unaire (en tête, après '(' ou un opérateur) fait partie de l’opérande
    if debut > 0 && expr[..debut].ends_with('-') {
        let avant = &expr[..debut - 1];
        let unaire = avant
            .chars()
            .last()
            .map_or(true, |c| "(+-*/^".contains(c));
        if unaire {
            debut -= 1;
        }
    }

    let operande = &expr[debut..];
    if operande.is_empty() {
        return None;
    }
    let v = operande.parse::<f64>().ok()?;
    let nie = -v;
    let txt = format_nombre(nie, precision);

    let entoure = nie < 0.0 && debut > 0 && !expr[..debut].ends_with('(');
    let remplace = if entoure { format!("({txt})") } else { txt.clone() };

    Some((format!("{}{}", &expr[..debut], remplace), txt))
}
