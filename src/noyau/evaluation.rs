// src/noyau/evaluation.rs
//
// Machine à pile sur l'écriture postfixe.
// - nombre : empilé
// - unaire : x = pop ; push f(x)
// - binaire : droite = pop ; gauche = pop ; push f(gauche, droite)
// - fin : exactement une valeur, sinon expression malformée

use log::trace;

use super::erreur::{ErreurCalc, Resultat};
use super::operateurs::{Arite, Element, Operateur, Registre};
use super::pile::Pile;

/// Évalue une suite postfixe (jetons séparés par des blancs).
pub fn evaluer_postfixe(registre: &Registre, postfixe: &str) -> Resultat<f64> {
    let mut pile: Pile<f64> = Pile::new();

    for jeton in postfixe.split_whitespace() {
        match registre.chercher(jeton)? {
            Element::Nombre(v) => pile.empiler(v),
            Element::Operateur(op) => reduire(op, &mut pile)?,
        }
    }

    if pile.taille() != 1 {
        return Err(ErreurCalc::ExpressionMalformee {
            restants: pile.taille(),
        });
    }
    pile.depiler()
}

fn reduire(op: Operateur, pile: &mut Pile<f64>) -> Resultat<()> {
    let r = match op.arite() {
        Arite::Unaire => {
            let x = pile.depiler()?;
            let r = op.appliquer(&[x])?;
            trace!("{} {x} = {r}", op.symbole());
            r
        }
        Arite::Binaire => {
            let droite = pile.depiler()?;
            let gauche = pile.depiler()?;
            let r = op.appliquer(&[gauche, droite])?;
            trace!("{gauche} {} {droite} = {r}", op.symbole());
            r
        }
    };
    pile.empiler(r);
    Ok(())
}
