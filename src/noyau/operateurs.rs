// src/noyau/operateurs.rs
//
// Registre d'opérateurs par mode.
//
// Règles:
// - base (toujours) : + - (priorité 1), * / (priorité 2), binaires
// - "programmer"    : & | ^ (priorité 0, les plus lâches) + ~ (unaire préfixe)
// - "engineering"   : sin cos tan (fonctions unaires, jetons-mots)
//
// L'arité est portée par le type lui-même (Unaire / Binaire) : l'évaluateur
// branche dessus, jamais sur le nom du jeton.

use std::collections::HashMap;

use num_traits::ToPrimitive;

use super::erreur::{ErreurCalc, Resultat};
use super::mode::Mode;

/// Priorité des opérateurs unaires préfixes (fonctions, ~) : plus forte que * et /.
pub const PRIORITE_PREFIXE: i32 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Arite {
    Unaire,
    Binaire,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Unaire {
    Non,
    Sin,
    Cos,
    Tan,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Binaire {
    Plus,
    Moins,
    Fois,
    Divise,
    Et,
    Ou,
    OuExclusif,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operateur {
    Unaire(Unaire),
    Binaire(Binaire),
}

/// Troncature vers zéro (comme un cast entier) ; NaN / ±∞ / hors i64 => erreur.
fn entier(x: f64) -> Resultat<i64> {
    x.to_i64().ok_or(ErreurCalc::HorsDomaineEntier(x))
}

impl Unaire {
    pub fn symbole(self) -> &'static str {
        match self {
            Unaire::Non => "~",
            Unaire::Sin => "sin",
            Unaire::Cos => "cos",
            Unaire::Tan => "tan",
        }
    }

    pub fn appliquer(self, x: f64) -> Resultat<f64> {
        Ok(match self {
            Unaire::Non => !entier(x)? as f64,
            Unaire::Sin => x.sin(),
            Unaire::Cos => x.cos(),
            Unaire::Tan => x.tan(),
        })
    }
}

impl Binaire {
    pub fn symbole(self) -> &'static str {
        match self {
            Binaire::Plus => "+",
            Binaire::Moins => "-",
            Binaire::Fois => "*",
            Binaire::Divise => "/",
            Binaire::Et => "&",
            Binaire::Ou => "|",
            Binaire::OuExclusif => "^",
        }
    }

    pub fn priorite(self) -> i32 {
        match self {
            Binaire::Et | Binaire::Ou | Binaire::OuExclusif => 0,
            Binaire::Plus | Binaire::Moins => 1,
            Binaire::Fois | Binaire::Divise => 2,
        }
    }

    /// `gauche` = avant-dernière valeur empilée, `droite` = sommet.
    pub fn appliquer(self, gauche: f64, droite: f64) -> Resultat<f64> {
        Ok(match self {
            Binaire::Plus => gauche + droite,
            Binaire::Moins => gauche - droite,
            Binaire::Fois => gauche * droite,
            Binaire::Divise => {
                if droite == 0.0 {
                    return Err(ErreurCalc::DivisionParZero);
                }
                gauche / droite
            }
            Binaire::Et => (entier(gauche)? & entier(droite)?) as f64,
            Binaire::Ou => (entier(gauche)? | entier(droite)?) as f64,
            Binaire::OuExclusif => (entier(gauche)? ^ entier(droite)?) as f64,
        })
    }
}

impl Operateur {
    const BASE: [Operateur; 4] = [
        Operateur::Binaire(Binaire::Plus),
        Operateur::Binaire(Binaire::Moins),
        Operateur::Binaire(Binaire::Fois),
        Operateur::Binaire(Binaire::Divise),
    ];

    const PROGRAMMEUR: [Operateur; 4] = [
        Operateur::Binaire(Binaire::Et),
        Operateur::Binaire(Binaire::Ou),
        Operateur::Binaire(Binaire::OuExclusif),
        Operateur::Unaire(Unaire::Non),
    ];

    const INGENIEUR: [Operateur; 3] = [
        Operateur::Unaire(Unaire::Sin),
        Operateur::Unaire(Unaire::Cos),
        Operateur::Unaire(Unaire::Tan),
    ];

    pub fn symbole(self) -> &'static str {
        match self {
            Operateur::Unaire(u) => u.symbole(),
            Operateur::Binaire(b) => b.symbole(),
        }
    }

    pub fn arite(self) -> Arite {
        match self {
            Operateur::Unaire(_) => Arite::Unaire,
            Operateur::Binaire(_) => Arite::Binaire,
        }
    }

    pub fn priorite(self) -> i32 {
        match self {
            Operateur::Unaire(_) => PRIORITE_PREFIXE,
            Operateur::Binaire(b) => b.priorite(),
        }
    }

    /// `operandes` dans l'ordre d'empilement : `[x]` pour un unaire, `[gauche, droite]` pour un binaire.
    /// Un nombre d'opérandes différent de l'arité signale une opérande manquante.
    pub fn appliquer(self, operandes: &[f64]) -> Resultat<f64> {
        match (self, operandes) {
            (Operateur::Unaire(u), &[x]) => u.appliquer(x),
            (Operateur::Binaire(b), &[gauche, droite]) => b.appliquer(gauche, droite),
            _ => Err(ErreurCalc::PileVide),
        }
    }

    /// Fonction nommée (jeton-mot : sin, cos, tan) par opposition à un symbole d'un caractère.
    pub fn est_fonction(self) -> bool {
        self.symbole().chars().all(|c| c.is_ascii_alphabetic())
    }
}

/// Jeton postfixe classé par le registre.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Element {
    Operateur(Operateur),
    Nombre(f64),
}

/// Table symbole -> opérateur du mode actif. Reconstruite en bloc à chaque changement de mode.
#[derive(Clone, Debug)]
pub struct Registre {
    mode: Mode,
    table: HashMap<&'static str, Operateur>,
}

impl Registre {
    pub fn pour_mode(mode: Mode) -> Self {
        let extension: &[Operateur] = match mode {
            Mode::Programmeur => &Operateur::PROGRAMMEUR,
            Mode::Ingenieur => &Operateur::INGENIEUR,
        };

        let table = Operateur::BASE
            .iter()
            .chain(extension)
            .map(|op| (op.symbole(), *op))
            .collect();

        Self { mode, table }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn operateur(&self, jeton: &str) -> Option<Operateur> {
        self.table.get(jeton).copied()
    }

    /// Caractère isolé reconnu comme opérateur du mode actif (pas les fonctions-mots).
    pub fn est_operateur(&self, c: char) -> bool {
        self.operateur_symbole(c).is_some()
    }

    /// Priorité d'un symbole d'un caractère ; `None` pour tout le reste (chiffres, parenthèses, ...).
    pub fn priorite_de(&self, c: char) -> Option<i32> {
        self.operateur_symbole(c).map(Operateur::priorite)
    }

    pub fn est_fonction(&self, mot: &str) -> bool {
        self.operateur(mot).is_some_and(Operateur::est_fonction)
    }

    /// Opérateur enregistré, sinon nombre fini, sinon `NombreHorsLimites` (numéral qui
    /// déborde f64), sinon `JetonInconnu` ("inf", "NaN" et autres mots compris).
    pub fn chercher(&self, jeton: &str) -> Resultat<Element> {
        if let Some(op) = self.operateur(jeton) {
            return Ok(Element::Operateur(op));
        }
        match jeton.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(Element::Nombre(v)),
            Ok(_) if est_numeral(jeton) => Err(ErreurCalc::NombreHorsLimites(jeton.to_string())),
            _ => Err(ErreurCalc::JetonInconnu(jeton.to_string())),
        }
    }

    /// Symboles du mode, dans un ordre stable (base puis extension) : utile pour l'UI.
    pub fn symboles(&self) -> Vec<&'static str> {
        let mut v: Vec<Operateur> = self.table.values().copied().collect();
        v.sort_by_key(|op| ordre_affichage(*op));
        v.into_iter().map(Operateur::symbole).collect()
    }

    /// Opérateur d'un caractère (symbole), jamais une fonction-mot.
    pub fn operateur_symbole(&self, c: char) -> Option<Operateur> {
        let mut buf = [0u8; 4];
        self.operateur(c.encode_utf8(&mut buf))
            .filter(|op| !op.est_fonction())
    }
}

/// Écriture chiffrée (pas "inf" ni "NaN") : seul l'exposant `e` / `E` est admis comme lettre.
fn est_numeral(jeton: &str) -> bool {
    jeton
        .chars()
        .all(|c| !c.is_ascii_alphabetic() || c.eq_ignore_ascii_case(&'e'))
}

fn ordre_affichage(op: Operateur) -> usize {
    Operateur::BASE
        .iter()
        .chain(Operateur::PROGRAMMEUR.iter())
        .chain(Operateur::INGENIEUR.iter())
        .position(|o| *o == op)
        .unwrap_or(usize::MAX)
}
