// src/noyau/pile.rs
//
// Pile LIFO générique (Vec en dessous : croissance amortie gérée par Vec).
// - Conversion : Pile<Symbole> (opérateurs en attente + marqueurs '(')
// - Évaluation : Pile<f64> (opérandes)
//
// Contrat : jamais de valeur par défaut silencieuse, une pile vide => ErreurCalc::PileVide.

use super::erreur::{ErreurCalc, Resultat};

#[derive(Clone, Debug)]
pub struct Pile<T> {
    elements: Vec<T>,
}

impl<T> Default for Pile<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Pile<T> {
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    pub fn empiler(&mut self, valeur: T) {
        self.elements.push(valeur);
    }

    pub fn depiler(&mut self) -> Resultat<T> {
        self.elements.pop().ok_or(ErreurCalc::PileVide)
    }

    /// Sommet sans retrait.
    pub fn sommet(&self) -> Resultat<&T> {
        self.elements.last().ok_or(ErreurCalc::PileVide)
    }

    pub fn est_vide(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn taille(&self) -> usize {
        self.elements.len()
    }
}
