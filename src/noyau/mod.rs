//! Noyau de calcul à deux modes
//!
//! Organisation interne :
//! - erreur.rs       : erreurs typées (division par zéro, pile vide, jeton inconnu, ...)
//! - pile.rs         : pile LIFO générique
//! - mode.rs         : "programmer" / "engineering"
//! - operateurs.rs   : opérateurs (arité + priorité) et registre par mode
//! - conversion.rs   : shunting-yard infixe -> postfixe
//! - evaluation.rs   : machine à pile sur le postfixe
//! - calculatrice.rs : façade (mode + pipeline complet)
//! - format.rs       : rendu à deux décimales

pub mod calculatrice;
pub mod conversion;
pub mod erreur;
pub mod evaluation;
pub mod format;
pub mod mode;
pub mod operateurs;
pub mod pile;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use calculatrice::{Calculatrice, Evaluation};
pub use erreur::{ErreurCalc, Resultat};
pub use mode::Mode;
