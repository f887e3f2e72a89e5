// src/noyau/touches.rs
//
// Routage des touches du pavé.
// - Touche : une variante par famille de touche, construite depuis
//   l’étiquette du bouton (étiquette inconnue => None).
// - Etat::appuyer : la transition d’état complète, une touche à la fois,
//   traitée de façon synchrone.

use super::etat::{Etat, Operateur};
use super::format::vers_texte;
use super::lecture::vers_nombre;

/// Une touche du pavé, identifiée par famille.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    EffacerTout,   // AC
    EffacerEntree, // C
    Signe,         // +/-
    Pourcent,      // %
    Operateur(Operateur),
    Egal,
    Chiffre(char),
    Virgule,
}

impl Touche {
    /// Étiquette de bouton -> touche. `%` passe par `Operateur::Pourcent`
    /// côté évaluation mais garde sa propre variante ici : il déclenche
    /// immédiatement, sans être mémorisé.
    pub fn depuis_etiquette(etiquette: &str) -> Option<Touche> {
        match etiquette {
            "AC" => return Some(Touche::EffacerTout),
            "C" => return Some(Touche::EffacerEntree),
            "+/-" => return Some(Touche::Signe),
            "%" => return Some(Touche::Pourcent),
            "=" => return Some(Touche::Egal),
            "," => return Some(Touche::Virgule),
            "+" | "-" | "x" | "/" => {
                return Operateur::depuis_symbole(etiquette).map(Touche::Operateur);
            }
            _ => {}
        }

        let mut chars = etiquette.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_digit() => Some(Touche::Chiffre(c)),
            _ => None,
        }
    }
}

impl Etat {
    /// Applique une touche à l’état. Chaque appui est traité jusqu’au bout
    /// avant le suivant ; il n’y a ni file, ni annulation.
    pub fn appuyer(&mut self, touche: Touche) {
        match touche {
            Touche::EffacerTout => self.reinitialiser(),

            Touche::EffacerEntree => self.effacer_entree(),

            Touche::Signe => self.basculer_signe(),

            // % évalue tout de suite, en unaire sur `premier`.
            Touche::Pourcent => self.evaluer(Some(Operateur::Pourcent)),

            Touche::Operateur(op) => {
                if self.second.is_empty() {
                    self.operateur = Some(op);
                } else {
                    // Enchaînement : on évalue l’opération en attente,
                    // puis on mémorise le nouvel opérateur.
                    let en_attente = self.operateur;
                    self.evaluer(en_attente);
                    self.operateur = Some(op);
                }
            }

            Touche::Egal => {
                let en_attente = self.operateur;
                self.evaluer(en_attente);
            }

            Touche::Chiffre(c) => self.saisir(c),
            Touche::Virgule => self.saisir(','),
        }
    }

    /// +/- : change le signe de l’opérande actif (`second` s’il est non
    /// vide, sinon `premier`). Sans saisie, ne fait rien.
    ///
    /// La négation passe par la lecture numérique (virgule comprise) et
    /// re-formate sans la politique d’arrondi.
    fn basculer_signe(&mut self) {
        if self.premier.is_empty() && self.second.is_empty() {
            return;
        }

        if !self.premier.is_empty() && self.second.is_empty() {
            self.premier = vers_texte(-vers_nombre(&self.premier));
        } else {
            self.second = vers_texte(-vers_nombre(&self.second));
        }
    }
}
