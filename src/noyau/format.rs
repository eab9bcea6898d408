// src/noyau/format.rs
//
// Rendu texte : deux décimales fixes, comme l'affichage historique de la calculatrice.

use super::erreur::ErreurCalc;

/// 11 => "11.00", 2/3 => "0.67".
pub fn format_resultat(v: f64) -> String {
    // évite "-0.00" pour les petits négatifs arrondis à zéro
    let s = format!("{v:.2}");
    if s == "-0.00" {
        "0.00".to_string()
    } else {
        s
    }
}

pub fn ligne_resultat(v: f64) -> String {
    format!("Résultat : {}", format_resultat(v))
}

pub fn ligne_erreur(e: &ErreurCalc) -> String {
    format!("Erreur : {e}")
}
