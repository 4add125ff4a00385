//! `PortfolioApp`: the top-level egui application state.
//!
//! This module declares the `PortfolioApp` struct and the frame loop.
//! Drawing is split across the sibling sub-modules:
//!
//! - `toolbar`: name, tab buttons, language and theme controls
//! - `content`: error banner, active tab, footer

pub mod toolbar;
pub mod content;

use std::collections::HashMap;

use eframe::egui;

use folio::net::image::ImageLoader;
use folio::prefs::Theme;
use folio::store::KeyValueStore;
use folio::PageController;

pub type Page = PageController<Box<dyn KeyValueStore>>;

// ─── Application state ───────────────────────────────────────────────────────

pub struct PortfolioApp {
    pub page: Page,
    // Image loading
    pub image_loader: ImageLoader,
    pub image_textures: HashMap<String, egui::TextureHandle>,
    pub applied_theme: Option<Theme>,
    pub window_title: String,
}

impl PortfolioApp {
    pub fn new(page: Page) -> Self {
        Self {
            page,
            image_loader: ImageLoader::new(),
            image_textures: HashMap::new(),
            applied_theme: None,
            window_title: String::new(),
        }
    }

    /// Switch egui visuals when the stored theme changed.
    fn apply_theme(&mut self, ctx: &egui::Context) {
        let theme = self.page.theme();
        if self.applied_theme != Some(theme) {
            log::debug!("Applying {} theme", theme.code());
            ctx.set_visuals(if theme.is_dark() {
                egui::Visuals::dark()
            } else {
                egui::Visuals::light()
            });
            self.applied_theme = Some(theme);
        }
    }

    fn sync_title(&mut self, ctx: &egui::Context) {
        let title = self.page.page_title();
        if self.window_title != title {
            self.window_title = title.to_string();
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(self.window_title.clone()));
        }
    }

    /// Upload freshly decoded images as textures.
    fn poll_images(&mut self, ctx: &egui::Context) {
        for reference in self.image_loader.poll() {
            if let Some(data) = self.image_loader.take(&reference) {
                let image = egui::ColorImage::from_rgba_unmultiplied(
                    [data.width as usize, data.height as usize],
                    &data.rgba,
                );
                let texture = ctx.load_texture(&reference, image, egui::TextureOptions::LINEAR);
                self.image_textures.insert(reference, texture);
            }
        }
        if self.image_loader.pending_count() > 0 {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.page.poll();
        self.poll_images(ctx);
        self.apply_theme(ctx);
        self.sync_title(ctx);

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.add_space(6.0);
            self.draw_toolbar(ui);
            ui.add_space(6.0);
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.add_space(4.0);
            self.draw_footer(ui);
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_content(ui);
        });
    }
}
