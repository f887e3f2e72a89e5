//! Tests de propriétés (campagne) : contrat de bout en bout + fuzz safe.
//!
//! But : vérifier le comportement observable (suites de touches -> affichage)
//! sans passer par la vue, puis marteler la transition d’état.
//! - RNG déterministe (seed fixe)
//! - budget temps global
//! - invariants clés :
//!     * l’affichage n’est jamais vide
//!     * sans opérateur choisi, `second` reste vide
//!     * AC ramène toujours l’affichage à "0"

use std::time::{Duration, Instant};

use super::etat::{Effacement, Etat, Operateur};
use super::format::texte_affichage;
use super::touches::Touche;

/* ------------------------ Helpers touches ------------------------ */

fn touche(etiquette: &str) -> Touche {
    Touche::depuis_etiquette(etiquette)
        .unwrap_or_else(|| panic!("étiquette inconnue: {etiquette:?}"))
}

fn tape(etat: &mut Etat, etiquettes: &[&str]) {
    for e in etiquettes {
        etat.appuyer(touche(e));
    }
}

fn affichage_apres(etiquettes: &[&str]) -> String {
    let mut etat = Etat::default();
    tape(&mut etat, etiquettes);
    texte_affichage(&etat).to_string()
}

/* ------------------------ Contrat de bout en bout ------------------------ */

#[test]
fn prop_ac_ramene_l_affichage_a_zero() {
    for seq in [
        &["AC"][..],
        &["5", "AC"][..],
        &["5", "+", "3", "AC"][..],
        &["1", "/", "0", "=", "AC"][..],
    ] {
        assert_eq!(affichage_apres(seq), "0", "seq={seq:?}");
    }
}

#[test]
fn prop_saisie_sans_operateur_concatenee() {
    assert_eq!(affichage_apres(&["1", "2", "3"]), "123");
    assert_eq!(affichage_apres(&["0", ",", "5"]), "0,5");
    // les virgules répétées ne sont pas filtrées à la saisie
    assert_eq!(affichage_apres(&["1", ",", "2", ",", "3"]), "1,2,3");
}

#[test]
fn prop_virgules_repetees_evaluees_par_prefixe() {
    // "1,2,3" se lit 1.2 ; 1.2 + 1 = 2.2
    assert_eq!(
        affichage_apres(&["1", ",", "2", ",", "3", "+", "1", "="]),
        "2,2"
    );
}

#[test]
fn prop_quatre_operations() {
    assert_eq!(affichage_apres(&["4", "+", "6", "="]), "10");
    assert_eq!(affichage_apres(&["9", "-", "2", "="]), "7");
    assert_eq!(affichage_apres(&["7", "x", "8", "="]), "56");
    assert_eq!(affichage_apres(&["1", "/", "3", "="]), "0,333333");
}

#[test]
fn prop_pourcent() {
    assert_eq!(affichage_apres(&["5", "0", "%"]), "0,5");
}

#[test]
fn prop_enchainement_d_operateurs() {
    // 5 + 3 + 2 = 10, l’opération en attente est évaluée à chaque opérateur
    assert_eq!(affichage_apres(&["5", "+", "3", "+", "2", "="]), "10");
    // 2 x 3 x 4 = 24
    assert_eq!(affichage_apres(&["2", "x", "3", "x", "4", "="]), "24");
}

#[test]
fn prop_etiquette_effacement_suit_la_saisie() {
    let mut etat = Etat::default();
    assert_eq!(etat.effacement.etiquette(), "AC");

    tape(&mut etat, &["7"]);
    assert_eq!(etat.effacement.etiquette(), "C");

    tape(&mut etat, &["C"]);
    assert_eq!(etat.effacement.etiquette(), "AC");
    assert_eq!(texte_affichage(&etat), "0");
}

#[test]
fn prop_resultat_reutilisable_en_premier_operande() {
    // le résultat déposé (avec virgule) se relit tel quel
    assert_eq!(
        affichage_apres(&["1", "/", "4", "=", "+", "0", ",", "7", "5", "="]),
        "1"
    );
}

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
        // LCG simple (déterministe)
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
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Fuzz safe ------------------------ */

/// Touches telles qu’exposées par le pavé : la touche d’effacement porte
/// l’étiquette courante de l’état (AC ou C), jamais les deux à la fois.
fn touche_au_hasard(rng: &mut Rng, etat: &Etat) -> Touche {
    const ETIQUETTES: [&str; 18] = [
        "+/-", "%", "/", "x", "-", "+", "=", ",", "0", "1", "2", "3", "4", "5", "6", "7", "8",
        "9",
    ];

    match rng.pick(ETIQUETTES.len() as u32 + 3) {
        0 => touche(etat.effacement.etiquette()),
        n => touche(ETIQUETTES[(n as usize - 1) % ETIQUETTES.len()]),
    }
}

fn check_invariants(etat: &Etat, historique: &[Touche]) {
    assert!(
        !texte_affichage(etat).is_empty(),
        "affichage vide après {historique:?}"
    );

    if etat.operateur.is_none() {
        assert!(
            etat.second.is_empty(),
            "second non vide sans opérateur après {historique:?} (second={:?})",
            etat.second
        );
    }
}

#[test]
fn fuzz_safe_invariants_sous_touches_arbitraires() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xC0FFEE_u64);
    let mut etat = Etat::default();
    let mut historique: Vec<Touche> = Vec::new();

    for _ in 0..2_000 {
        budget(t0, max);

        let t = touche_au_hasard(&mut rng, &etat);
        historique.push(t);
        if historique.len() > 24 {
            historique.remove(0);
        }

        etat.appuyer(t);
        check_invariants(&etat, &historique);
    }
}

#[test]
fn fuzz_safe_determinisme() {
    // Même seed => même suite de touches => même état final.
    let passe = |seed: u64| {
        let mut rng = Rng::new(seed);
        let mut etat = Etat::default();
        for _ in 0..500 {
            let t = touche_au_hasard(&mut rng, &etat);
            etat.appuyer(t);
        }
        etat
    };

    assert_eq!(passe(0xBADC0DE), passe(0xBADC0DE));
}

#[test]
fn fuzz_safe_ac_apres_n_importe_quelle_suite() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xFACADE_u64);

    for _ in 0..200 {
        budget(t0, max);

        let mut etat = Etat::default();
        let longueur = rng.pick(30) as usize;
        for _ in 0..longueur {
            let t = touche_au_hasard(&mut rng, &etat);
            etat.appuyer(t);
        }

        etat.appuyer(Touche::EffacerTout);
        assert_eq!(etat, Etat::default());
        assert_eq!(texte_affichage(&etat), "0");
        assert_eq!(etat.effacement, Effacement::Tout);
        assert_eq!(etat.operateur, None::<Operateur>);
    }
}
