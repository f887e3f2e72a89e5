//! src/noyau/etat.rs
//!
//! État de la calculatrice (sans vue, sans arithmétique).
//!
//! Rôle : contenir les deux opérandes (texte décimal à virgule), l’opérateur
//! en attente et l’étiquette de la touche d’effacement, et offrir les
//! mutations simples (AC / C / saisie d’un symbole).
//!
//! Contrats :
//! - Aucune évaluation ici (pas de parsing, pas de flottants).
//! - Un seul opérande reçoit la saisie à la fois : `second` dès qu’un
//!   opérateur est choisi, `premier` sinon.
//! - `operateur == None` implique `second` vide (la saisie ne peut
//!   atteindre `second` qu’à travers un opérateur choisi).

/// Opérateur arithmétique, tel qu’il apparaît sur le pavé.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Division,
    Pourcent, // unaire : n’est jamais mémorisé comme opérateur en attente
}

impl Operateur {
    /// Symbole affiché sur la touche correspondante.
    pub fn symbole(self) -> &'static str {
        match self {
            Operateur::Plus => "+",
            Operateur::Moins => "-",
            Operateur::Fois => "x",
            Operateur::Division => "/",
            Operateur::Pourcent => "%",
        }
    }

    pub fn depuis_symbole(s: &str) -> Option<Operateur> {
        match s {
            "+" => Some(Operateur::Plus),
            "-" => Some(Operateur::Moins),
            "x" => Some(Operateur::Fois),
            "/" => Some(Operateur::Division),
            "%" => Some(Operateur::Pourcent),
            _ => None,
        }
    }
}

/// Portée de la touche d’effacement : tout (AC) ou la saisie en cours (C).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Effacement {
    #[default]
    Tout,
    Entree,
}

impl Effacement {
    /// Étiquette montrée sur la touche.
    pub fn etiquette(self) -> &'static str {
        match self {
            Effacement::Tout => "AC",
            Effacement::Entree => "C",
        }
    }
}

/// Les quatre morceaux d’état de la calculatrice.
///
/// Les opérandes sont du texte décimal à virgule (`"0,5"`) ; la chaîne vide
/// signifie « rien saisi ».
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Etat {
    pub premier: String,
    pub second: String,
    pub operateur: Option<Operateur>,
    pub effacement: Effacement,
}

impl Etat {
    /* ------------------------ Mutations simples ------------------------ */

    /// AC : remise à zéro totale (opérandes, opérateur, étiquette).
    pub fn reinitialiser(&mut self) {
        self.premier.clear();
        self.second.clear();
        self.operateur = None;
        self.effacement = Effacement::Tout;
    }

    /// C : efface la saisie la plus récente (`second` si non vide, sinon
    /// `premier`) et rebascule la touche sur AC. L’opérateur en attente
    /// reste en place.
    pub fn effacer_entree(&mut self) {
        if !self.second.is_empty() {
            self.second.clear();
        } else {
            self.premier.clear();
        }
        self.effacement = Effacement::Tout;
    }

    /// Saisie d’un chiffre ou de la virgule : ajoutée à `second` dès qu’un
    /// opérateur est choisi, à `premier` sinon.
    pub fn saisir(&mut self, symbole: char) {
        self.effacement = Effacement::Entree;
        if self.operateur.is_none() {
            self.premier.push(symbole);
        } else {
            self.second.push(symbole);
        }
    }
}
