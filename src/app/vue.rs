// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Écran : dernière saisie (ou résultat) en gros, aligné à droite
// - Pavé : 5 rangées de 4 colonnes, touche 0 sur double largeur
// - La touche d’effacement porte l’étiquette courante (AC ou C)
//
// Tout clic part dans AppCalc::appuyer_etiquette ; la vue ne connaît ni
// les opérandes ni l’opérateur.

use eframe::egui;

use super::etat::AppCalc;

/* ------------------------ Palette du pavé ------------------------ */

const COULEUR_FONCTION: egui::Color32 = egui::Color32::from_rgb(0xA5, 0xA5, 0xA5);
const COULEUR_OPERATEUR: egui::Color32 = egui::Color32::from_rgb(0xFF, 0x9F, 0x0A);
const COULEUR_CHIFFRE: egui::Color32 = egui::Color32::from_rgb(0x33, 0x33, 0x33);

const TAILLE_TEXTE_ECRAN: f32 = 64.0;
const TAILLE_TEXTE_TOUCHE: f32 = 26.0;

/// Famille visuelle d’une touche (fond + couleur du texte).
#[derive(Clone, Copy, Debug)]
enum Famille {
    Fonction,  // AC/C, +/-, %
    Operateur, // / x - + =
    Chiffre,   // 0-9 et ,
}

impl Famille {
    fn fond(self) -> egui::Color32 {
        match self {
            Famille::Fonction => COULEUR_FONCTION,
            Famille::Operateur => COULEUR_OPERATEUR,
            Famille::Chiffre => COULEUR_CHIFFRE,
        }
    }

    fn texte(self) -> egui::Color32 {
        match self {
            Famille::Fonction => egui::Color32::BLACK,
            Famille::Operateur | Famille::Chiffre => egui::Color32::WHITE,
        }
    }
}

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        // côté d’une touche = le quart de la largeur disponible
        let esp = ui.spacing().item_spacing.x;
        let cote = (ui.available_width() - 3.0 * esp) / 4.0;

        self.ui_ecran(ui);

        ui.add_space(8.0);

        self.ui_pave(ui, cote, esp);
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.add_space(12.0);
            ui.label(
                egui::RichText::new(self.affichage())
                    .size(TAILLE_TEXTE_ECRAN)
                    .color(egui::Color32::WHITE),
            );
        });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui, cote: f32, esp: f32) {
        let effacement = self.etiquette_effacement();

        ui.horizontal(|ui| {
            self.touche(ui, effacement, [cote, cote], Famille::Fonction);
            self.touche(ui, "+/-", [cote, cote], Famille::Fonction);
            self.touche(ui, "%", [cote, cote], Famille::Fonction);
            self.touche(ui, "/", [cote, cote], Famille::Operateur);
        });

        ui.horizontal(|ui| {
            self.touche(ui, "7", [cote, cote], Famille::Chiffre);
            self.touche(ui, "8", [cote, cote], Famille::Chiffre);
            self.touche(ui, "9", [cote, cote], Famille::Chiffre);
            self.touche(ui, "x", [cote, cote], Famille::Operateur);
        });

        ui.horizontal(|ui| {
            self.touche(ui, "4", [cote, cote], Famille::Chiffre);
            self.touche(ui, "5", [cote, cote], Famille::Chiffre);
            self.touche(ui, "6", [cote, cote], Famille::Chiffre);
            self.touche(ui, "-", [cote, cote], Famille::Operateur);
        });

        ui.horizontal(|ui| {
            self.touche(ui, "1", [cote, cote], Famille::Chiffre);
            self.touche(ui, "2", [cote, cote], Famille::Chiffre);
            self.touche(ui, "3", [cote, cote], Famille::Chiffre);
            self.touche(ui, "+", [cote, cote], Famille::Operateur);
        });

        ui.horizontal(|ui| {
            // 0 sur deux colonnes
            self.touche(ui, "0", [cote * 2.0 + esp, cote], Famille::Chiffre);
            self.touche(ui, ",", [cote, cote], Famille::Chiffre);
            self.touche(ui, "=", [cote, cote], Famille::Operateur);
        });
    }

    fn touche(&mut self, ui: &mut egui::Ui, etiquette: &str, taille: [f32; 2], famille: Famille) {
        let bouton = egui::Button::new(
            egui::RichText::new(etiquette)
                .size(TAILLE_TEXTE_TOUCHE)
                .color(famille.texte()),
        )
        .fill(famille.fond());

        if ui.add_sized(taille, bouton).clicked() {
            self.appuyer_etiquette(etiquette);
        }
    }
}
