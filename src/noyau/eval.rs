//! Noyau — évaluation
//!
//! lecture (virgule -> f64) -> opération -> formatage (f64 -> virgule)
//!
//! Pas de chemin d’erreur : une lecture impossible vaut NaN, une division
//! par zéro vaut ±inf, et ces valeurs traversent le formatage comme
//! n’importe quel résultat.

use super::etat::{Etat, Operateur};
use super::format::formate_resultat;
use super::lecture::vers_nombre;

/// Évalue `a <op> b` et rend le résultat en texte à virgule.
///
/// - `Pourcent` est unaire : `a / 100`, `b` ignoré.
/// - Sans opérateur, le résultat retombe à zéro.
pub fn evaluer(a: &str, operateur: Option<Operateur>, b: &str) -> String {
    let x = vers_nombre(a);
    let y = vers_nombre(b);

    let resultat = match operateur {
        Some(Operateur::Pourcent) => x / 100.0,
        Some(Operateur::Division) => x / y,
        Some(Operateur::Fois) => x * y,
        Some(Operateur::Moins) => x - y,
        Some(Operateur::Plus) => x + y,
        None => 0.0,
    };

    formate_resultat(resultat)
}

impl Etat {
    /// Évalue avec l’opérateur donné, puis dépose le résultat :
    /// `premier` reçoit le texte formaté, l’opérateur et `second` sont
    /// remis à zéro.
    pub fn evaluer(&mut self, operateur: Option<Operateur>) {
        let resultat = evaluer(&self.premier, operateur, &self.second);

        tracing::debug!(
            premier = %self.premier,
            operateur = operateur.map(Operateur::symbole).unwrap_or(""),
            second = %self.second,
            resultat = %resultat,
            "évaluation"
        );

        self.premier = resultat;
        self.operateur = None;
        self.second.clear();
    }
}
