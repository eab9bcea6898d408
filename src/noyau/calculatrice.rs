// src/noyau/calculatrice.rs
//
// Façade : un mode + son registre (reconstruit en bloc à chaque changement de mode).
// Pipeline : texte infixe -> conversion -> postfixe -> évaluation -> nombre

use log::debug;

use super::conversion::infixe_vers_postfixe;
use super::erreur::{ErreurCalc, Resultat};
use super::evaluation;
use super::mode::Mode;
use super::operateurs::Registre;

/// Résultat détaillé (pour la démarche affichée par l'UI).
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    pub postfixe: String,
    pub valeur: f64,
}

#[derive(Clone, Debug)]
pub struct Calculatrice {
    registre: Registre,
}

impl Default for Calculatrice {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculatrice {
    /// Mode "engineering" par défaut.
    pub fn new() -> Self {
        Self::avec_mode(Mode::default())
    }

    pub fn avec_mode(mode: Mode) -> Self {
        Self {
            registre: Registre::pour_mode(mode),
        }
    }

    /// Sélection par texte : "programmer", sinon "engineering".
    pub fn choisir_mode(&mut self, texte: &str) -> Mode {
        let mode = Mode::depuis_texte(texte);
        self.set_mode(mode);
        mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        if mode != self.mode() {
            debug!("mode {} -> {}", self.mode(), mode);
        }
        self.registre = Registre::pour_mode(mode);
    }

    pub fn mode(&self) -> Mode {
        self.registre.mode()
    }

    pub fn registre(&self) -> &Registre {
        &self.registre
    }

    pub fn infixe_vers_postfixe(&self, expression: &str) -> Resultat<String> {
        infixe_vers_postfixe(&self.registre, expression)
    }

    pub fn evaluer_postfixe(&self, postfixe: &str) -> Resultat<f64> {
        if postfixe.trim().is_empty() {
            return Err(ErreurCalc::EntreeVide);
        }
        evaluation::evaluer_postfixe(&self.registre, postfixe)
    }

    pub fn evaluer(&self, expression: &str) -> Resultat<f64> {
        self.evaluer_detaille(expression).map(|e| e.valeur)
    }

    pub fn evaluer_detaille(&self, expression: &str) -> Resultat<Evaluation> {
        if expression.trim().is_empty() {
            return Err(ErreurCalc::EntreeVide);
        }

        let postfixe = self.infixe_vers_postfixe(expression)?;
        let resultat = evaluation::evaluer_postfixe(&self.registre, &postfixe);

        match &resultat {
            Ok(v) => debug!("[{}] {expression:?} => {postfixe:?} => {v}", self.mode()),
            Err(e) => debug!("[{}] {expression:?} => {postfixe:?} : {e}", self.mode()),
        }

        Ok(Evaluation {
            postfixe,
            valeur: resultat?,
        })
    }
}
