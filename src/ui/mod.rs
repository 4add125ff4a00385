//! Generic egui painter for view trees.
//!
//! Stateless: widgets are laid out straight from a `ViewNode`, and anything
//! the user did (accordion clicks, images that need loading) is reported back
//! through [`Interaction`] so the app can act on it after the frame is drawn.

use std::collections::HashMap;

use eframe::egui;
use folio::view::{ViewKind, ViewNode};

const CARD_WIDTH: f32 = 260.0;
const GALLERY_IMAGE_WIDTH: f32 = 240.0;
const PROFILE_IMAGE_WIDTH: f32 = 120.0;

/// What happened while painting a tree
#[derive(Default)]
pub struct Interaction {
    pub toggled_section: Option<usize>,
    pub wanted_images: Vec<String>,
    /// Media the user asked to play, as written in the document.
    pub opened_video: Option<String>,
}

// ─── Tree rendering ───────────────────────────────────────────────────────────

/// Recursively render a `ViewNode` tree using egui widgets.
pub fn render_view_node(
    ui: &mut egui::Ui,
    node: &ViewNode,
    textures: &HashMap<String, egui::TextureHandle>,
    out: &mut Interaction,
) {
    match &node.kind {
        ViewKind::Container => render_container(ui, node, textures, out),
        ViewKind::Heading(level) => {
            let size = match level {
                1 => 28.0,
                2 => 22.0,
                3 => 18.0,
                _ => 16.0,
            };
            ui.heading(egui::RichText::new(&node.text).size(size).strong());
            ui.add_space(if *level <= 2 { 8.0 } else { 4.0 });
        }
        ViewKind::Paragraph => {
            ui.label(&node.text);
            ui.add_space(6.0);
        }
        ViewKind::Text => {
            if node.class == "gallery-type" {
                ui.label(egui::RichText::new(&node.text).small().weak());
            } else {
                ui.label(egui::RichText::new(&node.text).strong());
            }
        }
        ViewKind::Link { href } => {
            let glyph = node
                .children
                .iter()
                .find(|c| c.kind == ViewKind::Icon)
                .map(|c| icon_glyph(&c.text))
                .unwrap_or("");
            ui.hyperlink_to(format!("{}{}", glyph, node.text), href)
                .on_hover_text(href);
        }
        ViewKind::Icon => {
            ui.label(icon_glyph(&node.text));
        }
        ViewKind::Image { src } => {
            let width = if node.class == "profile-photo" {
                PROFILE_IMAGE_WIDTH
            } else {
                GALLERY_IMAGE_WIDTH
            };
            match textures.get(src) {
                Some(tex) => {
                    ui.add(
                        egui::Image::from_texture(egui::load::SizedTexture::from_handle(tex))
                            .max_width(width)
                            .rounding(6.0),
                    )
                    .on_hover_text(&node.text);
                }
                None => {
                    out.wanted_images.push(src.clone());
                    let caption = if node.text.is_empty() { "image" } else { node.text.as_str() };
                    ui.colored_label(
                        egui::Color32::GRAY,
                        format!("[{}]", truncate_str(caption, 32)),
                    );
                }
            }
        }
        ViewKind::Video { src } => {
            // No in-window player; the app hands it to the system browser.
            let button = egui::Button::new(format!("\u{25B6} {}", node.text));
            if ui.add(button).on_hover_text(src).clicked() {
                out.opened_video = Some(src.clone());
            }
            ui.add_space(6.0);
        }
        ViewKind::AccordionItem { index, open } => {
            let arrow = if *open { "\u{25BC}" } else { "\u{25B6}" };
            let header = egui::Button::new(
                egui::RichText::new(format!("{}  {}", arrow, node.text)).size(17.0).strong(),
            )
            .frame(false);
            if ui.add(header).clicked() {
                out.toggled_section = Some(*index);
            }
            if *open {
                ui.indent(("accordion", *index), |ui| {
                    for child in &node.children {
                        render_view_node(ui, child, textures, out);
                    }
                });
            }
            ui.separator();
        }
    }
}

fn render_container(
    ui: &mut egui::Ui,
    node: &ViewNode,
    textures: &HashMap<String, egui::TextureHandle>,
    out: &mut Interaction,
) {
    match node.class {
        "projects-grid" | "gallery" => {
            ui.horizontal_wrapped(|ui| {
                for child in &node.children {
                    ui.allocate_ui(egui::vec2(CARD_WIDTH, 0.0), |ui| {
                        render_view_node(ui, child, textures, out);
                    });
                }
            });
            ui.add_space(12.0);
        }
        "project-card" | "gallery-item" | "career-section" | "github-section"
        | "video-container" | "portfolio-video" => {
            egui::Frame::group(ui.style())
                .rounding(8.0)
                .inner_margin(10.0)
                .show(ui, |ui| {
                    ui.set_width(ui.available_width().min(CARD_WIDTH * 2.0));
                    render_children(ui, node, textures, out);
                });
            ui.add_space(8.0);
        }
        "profile-card" => {
            ui.horizontal(|ui| render_children(ui, node, textures, out));
            ui.add_space(12.0);
        }
        "project-actions" | "footer-content" => {
            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing.x = 16.0;
                render_children(ui, node, textures, out);
            });
        }
        _ => {
            ui.vertical(|ui| render_children(ui, node, textures, out));
        }
    }
}

fn render_children(
    ui: &mut egui::Ui,
    node: &ViewNode,
    textures: &HashMap<String, egui::TextureHandle>,
    out: &mut Interaction,
) {
    for child in &node.children {
        render_view_node(ui, child, textures, out);
    }
}

// ─── Text utilities ───────────────────────────────────────────────────────────

/// Emoji stand-in for an icon-font class such as "fab fa-github".
pub fn icon_glyph(class: &str) -> &'static str {
    let class = class.to_lowercase();
    if class.contains("github") {
        "\u{1F419} "
    } else if class.contains("envelope") || class.contains("mail") {
        "\u{2709} "
    } else if class.contains("linkedin") {
        "\u{1F4BC} "
    } else if class.contains("instagram") || class.contains("camera") {
        "\u{1F4F7} "
    } else if class.contains("youtube") || class.contains("play") {
        "\u{25B6} "
    } else if class.contains("behance") || class.contains("palette") {
        "\u{1F3A8} "
    } else if class.is_empty() {
        ""
    } else {
        "\u{1F517} "
    }
}

/// Truncate `s` to at most `max_chars` Unicode scalar values, appending `"..."` if truncated.
pub fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let t: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_on_char_boundaries() {
        assert_eq!(truncate_str("short", 10), "short");
        assert_eq!(truncate_str("Grafik Tasarım Portföyü", 10), "Grafik ...");
        assert_eq!(truncate_str("平面设计作品集合", 6), "平面设...");
    }

    #[test]
    fn maps_common_icon_classes() {
        assert_eq!(icon_glyph("fab fa-github"), "\u{1F419} ");
        assert_eq!(icon_glyph("fas fa-envelope"), "\u{2709} ");
        assert_eq!(icon_glyph("fas fa-globe"), "\u{1F517} ");
        assert_eq!(icon_glyph(""), "");
    }
}
