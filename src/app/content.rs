//! Content-area rendering for `PortfolioApp`.
//!
//! - `draw_content`: banner, loading placeholder, active tab
//! - `draw_footer`: footer links

use eframe::egui;

use crate::ui::{render_view_node, Interaction};
use super::PortfolioApp;

impl PortfolioApp {
    pub fn draw_content(&mut self, ui: &mut egui::Ui) {
        self.draw_banner(ui);

        if self.page.content().is_none() {
            if self.page.is_loading() {
                ui.vertical_centered(|ui| {
                    ui.add_space(40.0);
                    ui.spinner();
                    ui.label(self.page.labels().loading);
                });
            }
            return;
        }

        // Unknown tab or no data for it: nothing to draw.
        let Some(view) = self.page.active_view() else {
            return;
        };

        let mut interaction = Interaction::default();
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.add_space(8.0);
                render_view_node(ui, &view, &self.image_textures, &mut interaction);
                ui.add_space(16.0);
            });
        self.handle_interaction(ui.ctx(), interaction);
    }

    pub fn draw_footer(&mut self, ui: &mut egui::Ui) {
        if let Some(footer) = self.page.footer_view() {
            let mut interaction = Interaction::default();
            ui.vertical_centered(|ui| {
                render_view_node(ui, &footer, &self.image_textures, &mut interaction);
            });
            self.handle_interaction(ui.ctx(), interaction);
        }
    }

    fn draw_banner(&mut self, ui: &mut egui::Ui) {
        let Some(message) = self.page.banner().map(str::to_string) else {
            return;
        };

        let mut dismiss = false;
        let mut retry = false;
        egui::Frame::none()
            .fill(egui::Color32::from_rgb(180, 40, 40))
            .inner_margin(8.0)
            .rounding(4.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.colored_label(egui::Color32::WHITE, &message);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        dismiss = ui.small_button("\u{2715}").clicked();
                        retry = ui.small_button("\u{21BB}").clicked();
                    });
                });
            });
        ui.add_space(8.0);

        if retry {
            self.page.reload();
        }
        if dismiss {
            self.page.dismiss_banner();
        }
    }

    fn handle_interaction(&mut self, ctx: &egui::Context, interaction: Interaction) {
        if let Some(index) = interaction.toggled_section {
            self.page.toggle_section(index);
        }
        for reference in interaction.wanted_images {
            self.image_loader.request(self.page.source(), &reference);
        }
        if let Some(video) = interaction.opened_video {
            if let Some(href) = self.page.link_target(&video) {
                log::debug!("Opening video {}", href);
                ctx.open_url(egui::OpenUrl::new_tab(href));
            }
        }
    }
}
