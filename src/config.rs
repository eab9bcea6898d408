// src/config.rs
//
// Configuration du binaire natif : arguments de ligne de commande seulement.
// Le niveau de journalisation peut aussi venir de RUST_LOG (prioritaire).

use crate::noyau::Mode;

pub const AIDE: &str = "\
calculatrice_modes — calculatrice infixe à deux modes

USAGE:
    calculatrice_modes                   Interface graphique
    calculatrice_modes --console         Dialogue en terminal
    calculatrice_modes --mode <m>        Mode imposé : programmer | engineering
    calculatrice_modes --postfixe        Console : lignes déjà en postfixe (ex. 3 4 2 * +)
    calculatrice_modes -v, --verbose     Journaux détaillés (debug)
    calculatrice_modes -h, --help        Cette aide

MODES:
    programmer     + - * /  & | ^ ~
    engineering    + - * /  sin cos tan   (tout autre mot retombe ici)";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Interface {
    #[default]
    Graphique,
    Console,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub interface: Interface,
    /// `None` : la console demande le mode ; l'UI part en "engineering".
    pub mode: Option<Mode>,
    /// Console seulement : chaque ligne est évaluée telle quelle comme postfixe.
    pub postfixe: bool,
    pub verbeux: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Lancement {
    Executer(Config),
    Aide,
}

impl Config {
    pub fn depuis_args<I>(args: I) -> Result<Lancement, String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Config::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => return Ok(Lancement::Aide),
                "-v" | "--verbose" => config.verbeux = true,
                "--console" => config.interface = Interface::Console,
                "--postfixe" => config.postfixe = true,
                "--mode" => {
                    let m = args
                        .next()
                        .ok_or_else(|| "--mode attend une valeur".to_string())?;
                    config.mode = Some(Mode::depuis_texte(&m));
                }
                _ => {
                    if let Some(m) = arg.strip_prefix("--mode=") {
                        config.mode = Some(Mode::depuis_texte(m));
                    } else {
                        return Err(format!("argument inconnu: {arg}"));
                    }
                }
            }
        }

        Ok(Lancement::Executer(config))
    }

    pub fn mode_ou_defaut(&self) -> Mode {
        self.mode.unwrap_or_default()
    }
}
