//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état de la calculatrice (mode, entrée, résultat, erreur, démarche)
//! et offrir des opérations simples (C/CLR/AC, changement de mode) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (la vue appelle le noyau).
//! - Actions déterministes, sans effet de bord caché.

use crate::noyau::{Calculatrice, Mode};

#[derive(Clone, Default, Debug)]
pub struct Demarche {
    pub mode: String,
    pub postfixe: String,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- noyau (mode + registre) ---
    pub calc: Calculatrice,

    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String, // deux décimales
    pub erreur: String,

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::avec_mode(Mode::default())
    }
}

impl AppCalc {
    pub fn avec_mode(mode: Mode) -> Self {
        Self {
            calc: Calculatrice::avec_mode(mode),
            entree: String::new(),
            resultat: String::new(),
            erreur: String::new(),
            demarche: Demarche::default(),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }

    pub fn mode(&self) -> Mode {
        self.calc.mode()
    }

    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats ; le mode est conservé).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
    }

    /// C : effacer seulement l’entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultat + erreur + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.erreur.clear();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Changement de mode : registre reconstruit, résultats effacés (ils dépendaient de l’ancien jeu).
    pub fn choisir_mode(&mut self, mode: Mode) {
        if mode == self.mode() {
            return;
        }
        self.calc.set_mode(mode);
        self.clear_resultats();
    }

    /// Utilitaire : placer une erreur.
    ///
    /// On CONSERVE `resultat` (dernier résultat) pour ne pas “effacer l’écran” sur une faute.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    pub fn set_resultats(&mut self, resultat: impl Into<String>, demarche: Demarche) {
        self.erreur.clear();
        self.resultat = resultat.into();
        self.demarche = demarche;
        self.focus_entree = true;
    }
}
