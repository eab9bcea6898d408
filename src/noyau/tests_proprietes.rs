//! Tests de propriétés : le pipeline (shunting-yard + pile) contre un évaluateur
//! de référence en descente récursive, sur des expressions générées.
//!
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - mêmes erreurs attendues des deux côtés (division par zéro)

use std::time::{Duration, Instant};

use super::{Calculatrice, ErreurCalc, Mode};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Évaluateur de référence ------------------------ */

// bits   := somme (('&' | '|' | '^') somme)*
// somme  := terme (('+' | '-') terme)*
// terme  := unaire (('*' | '/') unaire)*
// unaire := ('~' | sin | cos | tan) unaire | primaire
// primaire := chiffres | '(' bits ')'
struct Reference {
    chars: Vec<char>,
    pos: usize,
    mode: Mode,
}

/// Même domaine entier que le pipeline : troncature, refus hors i64.
fn entier_ref(x: f64) -> Result<i64, ErreurCalc> {
    const BORNE: f64 = 9.223_372_036_854_775_808e18;
    if x > -BORNE && x < BORNE {
        Ok(x as i64)
    } else {
        Err(ErreurCalc::HorsDomaineEntier(x))
    }
}

impl Reference {
    fn evaluer(texte: &str, mode: Mode) -> Result<f64, ErreurCalc> {
        let mut r = Reference {
            chars: texte.chars().filter(|c| !c.is_whitespace()).collect(),
            pos: 0,
            mode,
        };
        let v = r.bits()?;
        assert_eq!(r.pos, r.chars.len(), "référence: reste non lu dans {texte:?}");
        Ok(v)
    }

    fn courant(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn bits(&mut self) -> Result<f64, ErreurCalc> {
        let mut a = self.somme()?;
        while let Some(c @ ('&' | '|' | '^')) = self.courant() {
            assert_eq!(self.mode, Mode::Programmeur);
            self.pos += 1;
            let b = self.somme()?;
            let (x, y) = (entier_ref(a)?, entier_ref(b)?);
            a = match c {
                '&' => (x & y) as f64,
                '|' => (x | y) as f64,
                _ => (x ^ y) as f64,
            };
        }
        Ok(a)
    }

    fn somme(&mut self) -> Result<f64, ErreurCalc> {
        let mut a = self.terme()?;
        while let Some(c @ ('+' | '-')) = self.courant() {
            self.pos += 1;
            let b = self.terme()?;
            a = if c == '+' { a + b } else { a - b };
        }
        Ok(a)
    }

    fn terme(&mut self) -> Result<f64, ErreurCalc> {
        let mut a = self.unaire()?;
        while let Some(c @ ('*' | '/')) = self.courant() {
            self.pos += 1;
            let b = self.unaire()?;
            a = if c == '*' {
                a * b
            } else if b == 0.0 {
                return Err(ErreurCalc::DivisionParZero);
            } else {
                a / b
            };
        }
        Ok(a)
    }

    fn unaire(&mut self) -> Result<f64, ErreurCalc> {
        if self.courant() == Some('~') {
            self.pos += 1;
            let x = self.unaire()?;
            return Ok(!entier_ref(x)? as f64);
        }
        for nom in ["sin", "cos", "tan"] {
            let fin = self.pos + nom.len();
            if fin <= self.chars.len() && self.chars[self.pos..fin].iter().copied().eq(nom.chars()) {
                self.pos = fin;
                let x = self.unaire()?;
                return Ok(match nom {
                    "sin" => x.sin(),
                    "cos" => x.cos(),
                    _ => x.tan(),
                });
            }
        }
        self.primaire()
    }

    fn primaire(&mut self) -> Result<f64, ErreurCalc> {
        if self.courant() == Some('(') {
            self.pos += 1;
            let v = self.bits()?;
            assert_eq!(self.courant(), Some(')'), "référence: ')' attendue");
            self.pos += 1;
            return Ok(v);
        }
        let debut = self.pos;
        while self.courant().is_some_and(|c| c.is_ascii_digit()) {
            self.pos += 1;
        }
        let txt: String = self.chars[debut..self.pos].iter().collect();
        txt.parse::<f64>()
            .map_err(|_| ErreurCalc::JetonInconnu(txt.clone()))
    }
}

/* ------------------------ Génération d'expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    match rng.pick(6) {
        0 => "0".to_string(),
        1 => format!("{}", 10 + rng.pick(990)),
        _ => format!("{}", 1 + rng.pick(9)),
    }
}

fn gen_espaces(rng: &mut Rng) -> &'static str {
    if rng.pick(4) == 0 {
        " "
    } else {
        ""
    }
}

fn gen_expr(rng: &mut Rng, mode: Mode, prof: u32) -> String {
    if prof == 0 || rng.pick(4) == 0 {
        return gen_nombre(rng);
    }

    match rng.pick(5) {
        0 | 1 => {
            let ops: &[&str] = match mode {
                Mode::Programmeur => &["+", "-", "*", "/", "&", "|", "^"],
                Mode::Ingenieur => &["+", "-", "*", "/"],
            };
            let op = ops[rng.pick(ops.len() as u32) as usize];
            let a = gen_expr(rng, mode, prof - 1);
            let b = gen_expr(rng, mode, prof - 1);
            let sp = gen_espaces(rng);
            format!("{a}{sp}{op}{sp}{b}")
        }
        2 => format!("({})", gen_expr(rng, mode, prof - 1)),
        _ => match mode {
            Mode::Programmeur => format!("~{}", gen_expr(rng, mode, prof - 1)),
            Mode::Ingenieur => {
                let f = ["sin", "cos", "tan"][rng.pick(3) as usize];
                if rng.coin() {
                    format!("{f}({})", gen_expr(rng, mode, prof - 1))
                } else {
                    format!("{f} {}", gen_nombre(rng))
                }
            }
        },
    }
}

fn proches(a: f64, b: f64) -> bool {
    a == b || (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

/* ------------------------ Propriétés ------------------------ */

#[test]
fn prop_aller_retour_contre_reference() {
    let t0 = Instant::now();
    let max = Duration::from_secs(5);

    for mode in Mode::TOUS {
        let mut rng = Rng::new(0xC0FFEE ^ mode as u64);
        let calc = Calculatrice::avec_mode(mode);

        for _ in 0..2000 {
            budget(t0, max);

            let expr = gen_expr(&mut rng, mode, 4);
            let attendu = Reference::evaluer(&expr, mode);
            let obtenu = calc.evaluer(&expr);

            match (&attendu, &obtenu) {
                (Ok(a), Ok(b)) => assert!(
                    proches(*a, *b),
                    "mode={mode} expr={expr:?} référence={a} pipeline={b}"
                ),
                (Err(a), Err(b)) => assert_eq!(a, b, "mode={mode} expr={expr:?}"),
                _ => panic!("mode={mode} expr={expr:?} référence={attendu:?} pipeline={obtenu:?}"),
            }
        }
    }
}

#[test]
fn prop_associativite_gauche() {
    let calc = Calculatrice::new();
    // (8-3)-2, pas 8-(3-2)
    assert_eq!(calc.evaluer("8-3-2"), Ok(3.0));
    assert_eq!(calc.evaluer("8-(3-2)"), Ok(7.0));
    assert_eq!(calc.evaluer("64/4/2"), Ok(8.0));
    assert_eq!(calc.evaluer("2-3+4"), Ok(3.0));

    let prog = Calculatrice::avec_mode(Mode::Programmeur);
    // (12 ^ 10) & 6 = 6 & 6
    assert_eq!(prog.evaluer("12^10&6"), Ok(6.0));
}

#[test]
fn prop_parentheses_prioritaires() {
    let calc = Calculatrice::new();
    assert_eq!(calc.evaluer("(2+3)*4"), Ok(20.0));
    assert_eq!(calc.evaluer("2+3*4"), Ok(14.0));
    assert_eq!(calc.evaluer("8-(3-2)"), Ok(7.0));
}

#[test]
fn prop_nombres_multichiffres_intacts() {
    let calc = Calculatrice::new();
    let e = calc.evaluer_detaille("12+3").unwrap();
    assert_eq!(e.postfixe, "12 3 +");
    assert_eq!(e.valeur, 15.0);

    let e = calc.evaluer_detaille("100*(20+305)").unwrap();
    assert_eq!(e.postfixe, "100 20 305 + *");
    assert_eq!(e.valeur, 32500.0);
}

#[test]
fn prop_filtrage_par_mode() {
    let inge = Calculatrice::avec_mode(Mode::Ingenieur);
    let prog = Calculatrice::avec_mode(Mode::Programmeur);

    for s in ["5&3", "5|3", "5^3", "~5"] {
        assert!(
            matches!(inge.evaluer(s), Err(ErreurCalc::JetonInconnu(_))),
            "engineering doit refuser {s:?}"
        );
        assert!(prog.evaluer(s).is_ok(), "programmer doit accepter {s:?}");
    }
    for s in ["sin(0)", "cos(0)", "tan(0)"] {
        assert!(matches!(prog.evaluer(s), Err(ErreurCalc::JetonInconnu(_))));
        assert!(inge.evaluer(s).is_ok());
    }
}

#[test]
fn fuzz_caracteres_sans_panique() {
    // soupe de caractères : le pipeline doit toujours répondre Ok ou Err, jamais paniquer
    const ALPHABET: &[char] = &[
        '0', '1', '7', '9', '+', '-', '*', '/', '(', ')', '&', '|', '^', '~', ' ', 's', 'i', 'n',
        'c', 'o', 't', 'a', '.', 'x',
    ];

    let t0 = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(42);

    for mode in Mode::TOUS {
        let calc = Calculatrice::avec_mode(mode);
        for _ in 0..3000 {
            budget(t0, max);
            let n = 1 + rng.pick(16) as usize;
            let s: String = (0..n)
                .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
                .collect();
            let _ = calc.evaluer(&s);
        }
    }
}
