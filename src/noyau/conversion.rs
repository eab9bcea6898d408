// src/noyau/conversion.rs
//
// Shunting-yard : infixe (texte brut) -> postfixe (jetons séparés par un espace)
//
// Règles:
// - espaces ignorés partout ; ils NE coupent PAS un nombre ("1 2" => 12)
// - chiffre : prolonge le nombre courant (pas de séparateur décimal)
// - tout autre caractère termine le nombre courant
// - binaire : sort tout opérateur en attente de priorité >= (associativité gauche),
//   sans traverser '('
// - unaire préfixe (~, sin, cos, tan) : empilé sans rien sortir
// - ')' : sort jusqu'à '(' puis sort les unaires collés à la parenthèse
// - symbole ou mot absent du registre du mode => JetonInconnu
// - '(' jamais fermée ou ')' orpheline => ParenthesesDesequilibrees

use log::trace;

use super::erreur::{ErreurCalc, Resultat};
use super::operateurs::{Arite, Operateur, Registre};
use super::pile::Pile;

/// Entrée de la pile d'opérateurs.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Symbole {
    Operateur(Operateur),
    Ouvrante,
}

/// Convertit une expression infixe en postfixe.
///
/// Exemple:
///   "3+4*2"      => "3 4 2 * +"
///   "sin(0)*2"   => "0 sin 2 *"
pub fn infixe_vers_postfixe(registre: &Registre, expression: &str) -> Resultat<String> {
    let mut sortie: Vec<String> = Vec::new();
    let mut ops: Pile<Symbole> = Pile::new();
    let mut nombre = String::new();

    let mut chars = expression.chars().peekable();

    while let Some(c) = chars.next() {
        if c.is_whitespace() {
            continue;
        }

        if c.is_ascii_digit() {
            nombre.push(c);
            continue;
        }

        // fin du nombre courant (s'il y en a un)
        if !nombre.is_empty() {
            sortie.push(std::mem::take(&mut nombre));
        }

        match c {
            '(' => ops.empiler(Symbole::Ouvrante),

            ')' => fermer_parenthese(&mut ops, &mut sortie)?,

            _ if c.is_ascii_alphabetic() => {
                let mut mot = String::from(c);
                while let Some(&n) = chars.peek() {
                    if !n.is_ascii_alphabetic() {
                        break;
                    }
                    mot.push(n);
                    chars.next();
                }

                // seules les fonctions unaires du mode actif sont des mots valides
                match registre.operateur(&mot) {
                    Some(op @ Operateur::Unaire(_)) => ops.empiler(Symbole::Operateur(op)),
                    _ => return Err(ErreurCalc::JetonInconnu(mot)),
                }
            }

            _ if registre.est_operateur(c) => {
                let (Some(op), Some(priorite)) =
                    (registre.operateur_symbole(c), registre.priorite_de(c))
                else {
                    return Err(ErreurCalc::JetonInconnu(c.to_string()));
                };

                if op.arite() == Arite::Binaire {
                    while let Ok(&Symbole::Operateur(haut)) = ops.sommet() {
                        if haut.priorite() < priorite {
                            break;
                        }
                        sortie.push(haut.symbole().to_string());
                        ops.depiler()?;
                    }
                }
                ops.empiler(Symbole::Operateur(op));
            }

            _ => return Err(ErreurCalc::JetonInconnu(c.to_string())),
        }
    }

    if !nombre.is_empty() {
        sortie.push(nombre);
    }

    // vide la pile ops
    while !ops.est_vide() {
        match ops.depiler()? {
            Symbole::Operateur(op) => sortie.push(op.symbole().to_string()),
            Symbole::Ouvrante => return Err(ErreurCalc::ParenthesesDesequilibrees),
        }
    }

    let postfixe = sortie.join(" ");
    trace!("infixe {expression:?} -> postfixe {postfixe:?}");
    Ok(postfixe)
}

/// ')' : dépile jusqu'à '(' (jetée, jamais sortie), puis sort les unaires qui la précédaient.
fn fermer_parenthese(ops: &mut Pile<Symbole>, sortie: &mut Vec<String>) -> Resultat<()> {
    loop {
        match ops.depiler() {
            Ok(Symbole::Ouvrante) => break,
            Ok(Symbole::Operateur(op)) => sortie.push(op.symbole().to_string()),
            Err(_) => return Err(ErreurCalc::ParenthesesDesequilibrees),
        }
    }

    // fonction (ou ~) collée à son argument : elle sort avec lui
    while let Ok(&Symbole::Operateur(op @ Operateur::Unaire(_))) = ops.sommet() {
        sortie.push(op.symbole().to_string());
        ops.depiler()?;
    }

    Ok(())
}
