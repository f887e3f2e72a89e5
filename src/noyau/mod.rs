//! Noyau calculatrice (quatre opérations, virgule décimale)
//!
//! Organisation interne :
//! - etat.rs    : opérandes + opérateur en attente + étiquette d’effacement
//! - touches.rs : routage d’une touche vers la transition d’état
//! - lecture.rs : texte à virgule -> f64 (préfixe numérique le plus long)
//! - eval.rs    : arithmétique + dépôt du résultat dans l’état
//! - format.rs  : f64 -> texte à virgule (arrondi à 6 décimales) + affichage
//!
//! Aucune dépendance UI ici : tout est piloté par `Etat::appuyer`.

pub mod etat;
pub mod eval;
pub mod format;
pub mod lecture;
pub mod touches;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use etat::{Effacement, Etat, Operateur};
pub use format::texte_affichage;
pub use touches::Touche;
