// src/console.rs
//
// Dialogue terminal :
//   1) choix du mode (premier mot de la ligne, "programmer" ou repli "engineering")
//   2) une expression par ligne jusqu'à EOF ou ligne vide (infixe, ou postfixe avec --postfixe)
//   3) résultat sur la sortie, erreur sur le flux d'erreurs (jamais de panique)
//
// Générique sur BufRead/Write pour être testable sans terminal.

use std::io::{self, BufRead, Write};

use log::info;

use crate::noyau::format::{ligne_erreur, ligne_resultat};
use crate::noyau::{Calculatrice, Mode};

const INVITE_MODE: &str = "Choisissez le mode (programmer/engineering) : ";
const INVITE_EXPR: &str = "Entrez une expression : ";

/// Lit une ligne ; `None` à la fin du flux.
fn lire_ligne<R: BufRead>(entree: &mut R) -> io::Result<Option<String>> {
    let mut ligne = String::new();
    if entree.read_line(&mut ligne)? == 0 {
        return Ok(None);
    }
    Ok(Some(ligne))
}

pub fn executer<R, W, E>(
    mut entree: R,
    sortie: &mut W,
    erreurs: &mut E,
    mode_impose: Option<Mode>,
    postfixe: bool,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut calc = Calculatrice::new();

    match mode_impose {
        Some(m) => calc.set_mode(m),
        None => {
            write!(sortie, "{INVITE_MODE}")?;
            sortie.flush()?;
            let Some(ligne) = lire_ligne(&mut entree)? else {
                return Ok(());
            };
            // premier mot seulement, comme une lecture `>>`
            calc.choisir_mode(ligne.split_whitespace().next().unwrap_or(""));
        }
    }
    info!(
        "console : mode {} ({})",
        calc.mode(),
        if postfixe { "postfixe" } else { "infixe" }
    );

    loop {
        write!(sortie, "{INVITE_EXPR}")?;
        sortie.flush()?;

        let Some(ligne) = lire_ligne(&mut entree)? else {
            break;
        };
        let expr = ligne.trim();
        if expr.is_empty() {
            break;
        }

        let resultat = if postfixe {
            calc.evaluer_postfixe(expr)
        } else {
            calc.evaluer(expr)
        };

        match resultat {
            Ok(v) => writeln!(sortie, "{}", ligne_resultat(v))?,
            Err(e) => writeln!(erreurs, "{}", ligne_erreur(&e))?,
        }
    }

    writeln!(sortie)?;
    Ok(())
}
