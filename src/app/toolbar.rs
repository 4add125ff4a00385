//! Toolbar rendering for `PortfolioApp`.
//!
//! Draws the page name, the three tab buttons, the language menu with its
//! quick-cycle button, and the theme toggle.

use eframe::egui;
use folio::i18n;
use folio::prefs::Language;

use super::PortfolioApp;

impl PortfolioApp {
    /// Render the top toolbar strip.
    pub fn draw_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(4.0);
            ui.label(egui::RichText::new(self.page.page_title()).size(20.0).strong());
            ui.separator();

            for button in self.page.tab_buttons() {
                let caption = if button.icon.is_empty() {
                    button.title.clone()
                } else {
                    format!("{} {}", button.icon, button.title)
                };
                if ui
                    .add(egui::SelectableLabel::new(
                        button.active,
                        egui::RichText::new(caption).size(15.0),
                    ))
                    .clicked()
                {
                    self.page.select_tab(button.tab);
                }
            }

            if self.page.is_loading() {
                ui.spinner();
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.add_space(4.0);

                let language = self.page.language();
                let theme_label = i18n::theme_button(language, self.page.theme());
                if ui.button(theme_label).clicked() {
                    let theme = self.page.toggle_theme();
                    log::info!("Theme switched to {}", theme.code());
                }

                // Quick cycle, tr → en → zh → tr
                if ui
                    .button(language.code().to_uppercase())
                    .on_hover_text(i18n::native_name(language.next()))
                    .clicked()
                {
                    let next = self.page.cycle_language();
                    log::info!("Language cycled to {}", next);
                }

                ui.menu_button(i18n::language_button(language), |ui| {
                    for option in Language::ALL {
                        if ui
                            .selectable_label(option == language, i18n::native_name(option))
                            .clicked()
                        {
                            self.page.set_language(option);
                            ui.close_menu();
                        }
                    }
                });
            });
        });
    }
}
