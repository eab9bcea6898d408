// src/main.rs
//
// Calculatrice à modes — point d’entrée NATIF + WEB (WASM)
// --------------------------------------------------------
// - NATIF : arguments (config.rs), journaux, puis eframe::run_native ou dialogue console
// - WEB   : eframe::WebRunner + <canvas id="the_canvas_id">

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

mod app;
#[cfg(not(target_arch = "wasm32"))]
mod config;
#[cfg(not(target_arch = "wasm32"))]
mod console;
mod noyau;

use app::AppCalc;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculatrice à modes";

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
fn installer_journal(verbeux: bool) {
    use tracing_subscriber::EnvFilter;

    // RUST_LOG prioritaire ; sinon info (ou debug avec -v)
    let filtre = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbeux { "debug" } else { "info" }));

    // try_init : capte aussi les enregistrements `log` du noyau
    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filtre)
        .with_writer(std::io::stderr)
        .try_init()
    {
        log::warn!("journalisation déjà installée, la nouvelle est ignorée : {e}");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn lancer_graphique(mode: noyau::Mode) -> eframe::Result<()> {
    use eframe::egui;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([520.0, 640.0])
            .with_min_inner_size([420.0, 520.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(move |_cc| Ok(Box::new(AppCalc::avec_mode(mode)))),
    )
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    use std::process::ExitCode;

    use config::{Config, Interface, Lancement, AIDE};

    let config = match Config::depuis_args(std::env::args().skip(1)) {
        Ok(Lancement::Executer(c)) => c,
        Ok(Lancement::Aide) => {
            println!("{AIDE}");
            return ExitCode::SUCCESS;
        }
        Err(msg) => {
            eprintln!("{msg}\n\n{AIDE}");
            return ExitCode::from(2);
        }
    };

    installer_journal(config.verbeux);
    log::debug!("configuration : {config:?}");

    let res = match config.interface {
        Interface::Console => {
            let stdin = std::io::stdin();
            console::executer(
                stdin.lock(),
                &mut std::io::stdout(),
                &mut std::io::stderr(),
                config.mode,
                config.postfixe,
            )
            .map_err(|e| e.to_string())
        }
        Interface::Graphique => {
            lancer_graphique(config.mode_ou_defaut()).map_err(|e| e.to_string())
        }
    };

    match res {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            log::error!("{msg}");
            ExitCode::FAILURE
        }
    }
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppCalc, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(TITRE_APP);

        let el = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

        let canvas: HtmlCanvasElement = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|_cc| Ok(Box::<AppCalc>::default())),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
