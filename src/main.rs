// src/main.rs
//
// Calculatrice — pilote console
// -----------------------------
// But:
// - Lire des lignes sur stdin, chaque caractère (ou mot) = une touche
// - Afficher la ligne principale (tronquée), l’erreur éventuelle, l’historique
//
// Mots reconnus en plus des touches : sin cos tan log ln exp sqrt hyp asin
// acos atan, ans, c (effacer), del (retour), neg (signe), angle, theme.
// "q" seul sur une ligne pour quitter.
//
// Options:
//   --rad                 démarrer en radians
//   --precision=N         décimales affichées (défaut 10)
//   --largeur=N           largeur de la ligne principale (défaut 16)
//   --log-level=LEVEL     off/error/warn/info/debug/trace (sinon RUST_LOG)

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use log::LevelFilter;

use calculatrice::app::{Reglages, Session};
use calculatrice::noyau::ModeAngle;

/// Titre affiché au lancement.
const TITRE_APP: &str = "Calculatrice scientifique";

/* ------------------------ Options ------------------------ */

#[derive(Debug, Default)]
struct Options {
    reglages: Reglages,
    niveau_log: Option<LevelFilter>,
    aide: bool,
}

impl Options {
    fn depuis_args(args: impl Iterator<Item = String>) -> Self {
        let mut o = Options::default();

        for arg in args {
            if arg == "--rad" {
                o.reglages.mode_angle = ModeAngle::Radians;
            } else if arg == "--help" || arg == "-h" {
                o.aide = true;
            } else if let Some(v) = arg.strip_prefix("--precision=") {
                match v.parse::<usize>() {
                    Ok(n) => o.reglages.set_precision(n),
                    Err(_) => eprintln!("précision invalide: {v:?} (ignorée)"),
                }
            } else if let Some(v) = arg.strip_prefix("--largeur=") {
                match v.parse::<usize>() {
                    Ok(n) => o.reglages.set_largeur_affichage(n),
                    Err(_) => eprintln!("largeur invalide: {v:?} (ignorée)"),
                }
            } else if let Some(v) = arg.strip_prefix("--log-level=") {
                match LevelFilter::from_str(v) {
                    Ok(n) => o.niveau_log = Some(n),
                    Err(_) => eprintln!("niveau de log invalide: {v:?} (ignoré)"),
                }
            } else {
                eprintln!("option inconnue: {arg:?} (ignorée)");
            }
        }

        o
    }
}

/// Journal : RUST_LOG par défaut ("warn" s’il est absent), --log-level prioritaire.
fn init_logger(niveau: Option<LevelFilter>) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(n) = niveau {
        builder.filter_level(n);
    }
    builder.format_timestamp(None).try_init().ok();
}

/* ------------------------ Affichage ------------------------ */

fn afficher(session: &Session, out: &mut impl Write) -> io::Result<()> {
    for ligne in session.historique.iter() {
        writeln!(out, "  {ligne}")?;
    }
    if let Some(err) = session.ligne_erreur() {
        writeln!(out, "  {err}")?;
    }
    let theme = if session.mode_sombre { "sombre" } else { "clair" };
    writeln!(
        out,
        "[{}|{}] {}",
        session.mode_angle.libelle(),
        theme,
        session.ligne_principale_tronquee()
    )?;
    out.flush()
}

/* ------------------------ Entrée ------------------------ */

fn main() -> io::Result<()> {
    let options = Options::depuis_args(std::env::args().skip(1));
    init_logger(options.niveau_log);

    if options.aide {
        println!("{TITRE_APP}");
        println!("usage: calculatrice [--rad] [--precision=N] [--largeur=N] [--log-level=LEVEL]");
        return Ok(());
    }

    let mut session = Session::avec_reglages(options.reglages);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    writeln!(stdout, "{TITRE_APP} (q pour quitter)")?;
    afficher(&session, &mut stdout)?;

    for ligne in stdin.lock().lines() {
        let ligne = ligne?;
        if ligne.trim() == "q" {
            break;
        }
        let ignores = session.saisir(&ligne);
        if ignores > 0 {
            writeln!(stdout, "  ({ignores} élément(s) ignoré(s))")?;
        }
        afficher(&session, &mut stdout)?;
    }

    Ok(())
}
