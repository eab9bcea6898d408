// src/noyau/mode.rs

use std::fmt;

/// Jeu d'opérateurs actif.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Arithmétique + bit à bit (& | ^ ~).
    Programmeur,
    /// Arithmétique + trigonométrie (sin cos tan).
    #[default]
    Ingenieur,
}

impl Mode {
    pub const TOUS: [Mode; 2] = [Mode::Programmeur, Mode::Ingenieur];

    /// Sensible à la casse : seul "programmer" sélectionne le mode programmeur,
    /// tout autre texte retombe sur "engineering" (pas de rejet).
    pub fn depuis_texte(texte: &str) -> Self {
        match texte {
            "programmer" => Mode::Programmeur,
            _ => Mode::Ingenieur,
        }
    }

    pub fn nom(self) -> &'static str {
        match self {
            Mode::Programmeur => "programmer",
            Mode::Ingenieur => "engineering",
        }
    }
}

impl From<&str> for Mode {
    fn from(texte: &str) -> Self {
        Mode::depuis_texte(texte)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.nom())
    }
}
