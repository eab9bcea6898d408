// src/noyau/erreur.rs
//
// Erreurs du noyau : une évaluation réussit avec UN nombre, ou échoue avec UNE erreur.

use thiserror::Error;

/// Toutes les façons dont une évaluation peut échouer.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ErreurCalc {
    /// Opérande droite exactement nulle pour `/`.
    #[error("division par zéro")]
    DivisionParZero,

    /// Dépilement (ou lecture du sommet) sur une pile vide : opérande manquante.
    #[error("pile vide : opérande manquante")]
    PileVide,

    /// Jeton ni opérateur enregistré dans le mode actif, ni nombre.
    #[error("jeton inconnu: '{0}'")]
    JetonInconnu(String),

    /// `(` jamais fermée ou `)` sans ouverture.
    #[error("parenthèses déséquilibrées")]
    ParenthesesDesequilibrees,

    /// En fin d'évaluation, la pile ne contient pas exactement une valeur.
    #[error("expression malformée ({restants} valeur(s) restante(s) au lieu d'une)")]
    ExpressionMalformee { restants: usize },

    /// Nombre bien écrit mais non représentable en f64 (trop de chiffres, exposant énorme).
    #[error("nombre hors limites: '{0}'")]
    NombreHorsLimites(String),

    #[error("Entrée vide")]
    EntreeVide,

    /// Opérande d'un opérateur bit à bit non représentable en entier (NaN, ±∞, trop grand).
    #[error("opérande hors domaine entier: {0}")]
    HorsDomaineEntier(f64),
}

pub type Resultat<T> = Result<T, ErreurCalc>;
