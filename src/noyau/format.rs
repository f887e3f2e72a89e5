// src/noyau/format.rs
//
// Sortie texte du noyau :
// - vers_texte        : f64 -> texte à virgule, sans politique d’arrondi
// - formate_resultat  : idem + arrondi à 6 décimales au-delà de 6
// - texte_affichage   : lecture pure de l’état -> texte montré à l’écran
//
// Les valeurs non finies gardent leur forme texte ("inf", "-inf", "NaN")
// et traversent l’affichage comme n’importe quel résultat.

use super::etat::Etat;

/// Nombre maximal de décimales affichées pour un résultat.
const DECIMALES_MAX: usize = 6;

/// f64 -> texte à virgule (rendu le plus court, `.` remplacé par `,`).
pub fn vers_texte(nombre: f64) -> String {
    nombre.to_string().replace('.', ",")
}

/// f64 -> texte à virgule, arrondi à `DECIMALES_MAX` décimales quand le
/// rendu en comporte davantage. L’arrondi garde ses zéros de queue
/// (largeur fixe), comme `0,300000`.
pub fn formate_resultat(nombre: f64) -> String {
    let texte = nombre.to_string();

    let arrondi = match texte.split_once('.') {
        Some((_, decimales)) if decimales.len() > DECIMALES_MAX => {
            format!("{nombre:.prec$}", prec = DECIMALES_MAX)
        }
        _ => texte,
    };

    arrondi.replace('.', ",")
}

/// Affichage : `second` s’il est non vide, sinon `premier`, sinon "0".
pub fn texte_affichage(etat: &Etat) -> &str {
    if !etat.second.is_empty() {
        &etat.second
    } else if etat.premier.is_empty() {
        "0"
    } else {
        &etat.premier
    }
}
