//! Content model → view tree.
//!
//! Every function here is pure: same content, labels and accordion state in,
//! same tree out. Absent optional fields and empty strings produce no node.

use super::text::plain_text;
use super::ViewNode;
use crate::accordion::Accordion;
use crate::i18n::Labels;
use crate::model::{
    DesignTab, Footer, GalleryItem, LanguageData, PersonalTab, Project, SystemsTab,
};
use crate::tabs::Tab;

const PROFILE_PLACEHOLDER: &str = "./assets/img/profile-placeholder.png";

/// Render one tab. `None` when the document has no content for it.
pub fn render_tab(
    data: &LanguageData,
    tab: Tab,
    labels: &Labels,
    accordion: &Accordion,
) -> Option<ViewNode> {
    match tab {
        Tab::Personal => data
            .tabs
            .personal
            .as_ref()
            .map(|p| render_personal(p, &data.name, labels, accordion)),
        Tab::Design => data.tabs.design.as_ref().map(|d| render_design(d, labels)),
        Tab::Systems => data.tabs.systems.as_ref().map(|s| render_systems(s, labels)),
    }
}

/// Icon and caption for a tab button.
pub fn tab_caption(data: Option<&LanguageData>, tab: Tab, labels: &Labels) -> (String, String) {
    let (icon, title) = match (data, tab) {
        (Some(d), Tab::Personal) => d
            .tabs
            .personal
            .as_ref()
            .map(|t| (t.icon.as_str(), t.title.as_str()))
            .unwrap_or_default(),
        (Some(d), Tab::Design) => d
            .tabs
            .design
            .as_ref()
            .map(|t| (t.icon.as_str(), t.title.as_str()))
            .unwrap_or_default(),
        (Some(d), Tab::Systems) => d
            .tabs
            .systems
            .as_ref()
            .map(|t| (t.icon.as_str(), t.title.as_str()))
            .unwrap_or_default(),
        (None, _) => ("", ""),
    };
    let title = if title.is_empty() { tab.default_title(labels) } else { title };
    (icon.to_string(), title.to_string())
}

pub fn render_personal(
    personal: &PersonalTab,
    name: &str,
    labels: &Labels,
    accordion: &Accordion,
) -> ViewNode {
    let mut children = Vec::new();

    if let Some(profile) = &personal.profile {
        let photo = if profile.photo.is_empty() {
            PROFILE_PLACEHOLDER
        } else {
            profile.photo.as_str()
        };
        let mut info = Vec::new();
        info.extend(heading(3, name));
        info.extend(paragraph("profile-career-title", &profile.title));
        info.extend(paragraph("profile-career-desc", &profile.career));
        children.push(ViewNode::container(
            "profile-card",
            vec![
                ViewNode::image("profile-photo", photo, name),
                ViewNode::container("profile-info", info),
            ],
        ));
    }

    if !personal.sections.is_empty() {
        let items = personal
            .sections
            .iter()
            .enumerate()
            .map(|(i, section)| {
                let body = ViewNode::container(
                    "accordion-content",
                    paragraph("", &section.content).into_iter().collect(),
                );
                ViewNode::accordion_item(i, accordion.is_open(i), plain_text(&section.title), body)
            })
            .collect();
        children.push(ViewNode::container("sections", items));
    }

    children.extend(project_section(&personal.projects, labels, labels.visit));

    ViewNode::container("personal-tab", children)
}

pub fn render_design(design: &DesignTab, labels: &Labels) -> ViewNode {
    let mut intro = Vec::new();
    intro.extend(heading(2, &design.title));
    if let Some(subtitle) = design.intro_subtitle() {
        intro.extend(paragraph("section-subtitle", subtitle));
    }
    intro.extend(paragraph("section-desc", &design.description));

    let mut children = vec![ViewNode::container("design-intro", intro)];

    if let Some(video) = &design.video {
        if let Some(src) = video.source() {
            let title = if video.title.is_empty() { labels.video } else { video.title.as_str() };
            let title = plain_text(title);
            let mut block = vec![
                ViewNode::heading(3, title.clone()),
                ViewNode::video(src, title),
            ];
            if let Some(desc) = &video.description {
                block.extend(paragraph("video-description", desc));
            }
            children.push(ViewNode::container("video-container", block));
        }
    }

    if let Some(reel) = design.portfolio_reel.as_deref().filter(|r| !r.is_empty()) {
        children.push(ViewNode::container(
            "portfolio-video",
            vec![ViewNode::video(reel, labels.video)],
        ));
    }

    if let Some(career) = &design.career {
        if let Some(body) = paragraph("", career) {
            children.push(ViewNode::container(
                "career-section",
                vec![ViewNode::heading(3, labels.career), body],
            ));
        }
    }

    if !design.gallery.is_empty() {
        let items = design.gallery.iter().map(gallery_item).collect();
        children.push(ViewNode::container("gallery", items));
    }

    ViewNode::container("design-tab", children)
}

fn gallery_item(item: &GalleryItem) -> ViewNode {
    let title = plain_text(&item.title);
    let mut children = vec![ViewNode::image("gallery-image", &item.image, &title)];
    if !title.is_empty() {
        children.push(ViewNode::text("gallery-title", title));
    }
    if let Some(desc) = &item.description {
        children.extend(paragraph("gallery-desc", desc));
    }
    if let Some(kind) = item.kind.as_deref().filter(|k| !k.is_empty()) {
        children.push(ViewNode::text("gallery-type", kind));
    }
    ViewNode::container("gallery-item", children)
}

pub fn render_systems(systems: &SystemsTab, labels: &Labels) -> ViewNode {
    let mut intro = Vec::new();
    intro.extend(heading(2, &systems.title));
    if let Some(subtitle) = systems.intro_subtitle() {
        intro.extend(paragraph("section-subtitle", subtitle));
    }
    intro.extend(paragraph("section-desc", &systems.description));

    let mut children = vec![ViewNode::container("systems-intro", intro)];

    if let Some(github) = &systems.github {
        if !github.link.is_empty() {
            let caption = if github.username.is_empty() {
                "GitHub"
            } else {
                github.username.as_str()
            };
            let note = github.note.as_deref().unwrap_or(labels.github_note);
            let mut block = vec![
                ViewNode::heading(3, labels.github),
                ViewNode::link("github-button", &github.link, caption)
                    .with_children(vec![ViewNode::icon("fab fa-github")]),
            ];
            block.extend(paragraph("github-desc", note));
            children.push(ViewNode::container("github-section", block));
        }
    }

    if let Some(bio) = &systems.bio {
        children.extend(paragraph("section-bio", bio));
    }

    children.extend(project_section(&systems.projects, labels, labels.repo));

    ViewNode::container("systems-tab", children)
}

pub fn render_footer(footer: &Footer) -> ViewNode {
    let links = footer
        .iter()
        .filter(|(_, link)| !link.url.is_empty())
        .map(|(key, link)| {
            let label = if link.label.is_empty() { key.as_str() } else { link.label.as_str() };
            let icon = if link.icon.is_empty() {
                Vec::new()
            } else {
                vec![ViewNode::icon(&link.icon)]
            };
            ViewNode::link("footer-link", &link.url, label).with_children(icon)
        })
        .collect();
    ViewNode::container("footer-content", links)
}

fn project_section(projects: &[Project], labels: &Labels, link_caption: &str) -> Option<ViewNode> {
    if projects.is_empty() {
        return None;
    }
    let cards = projects
        .iter()
        .map(|p| project_card(p, labels, link_caption))
        .collect();
    Some(ViewNode::container(
        "projects-section",
        vec![
            ViewNode::heading(2, labels.projects),
            ViewNode::container("projects-grid", cards),
        ],
    ))
}

fn project_card(project: &Project, labels: &Labels, link_caption: &str) -> ViewNode {
    let mut children = Vec::new();
    children.extend(heading(4, &project.name));
    children.extend(paragraph("project-description", &project.description));

    let mut actions = Vec::new();
    if !project.link.is_empty() {
        actions.push(ViewNode::link("project-link", &project.link, link_caption));
    }
    if let Some(url) = project.url.as_deref().filter(|u| !u.is_empty()) {
        actions.push(ViewNode::link("project-link", url, labels.link));
    }
    if !actions.is_empty() {
        children.push(ViewNode::container("project-actions", actions));
    }

    if let Some(video) = project.youtube.as_deref().filter(|v| !v.is_empty()) {
        children.push(ViewNode::video(video, plain_text(&project.name)));
    }

    ViewNode::container("project-card", children)
}

fn heading(level: u8, raw: &str) -> Option<ViewNode> {
    let text = plain_text(raw);
    (!text.is_empty()).then(|| ViewNode::heading(level, text))
}

fn paragraph(class: &'static str, raw: &str) -> Option<ViewNode> {
    let text = plain_text(raw);
    (!text.is_empty()).then(|| ViewNode::paragraph(class, text))
}
