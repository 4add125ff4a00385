//! Fixed UI strings that are not part of the content documents.
//!
//! Headings such as "Projects" and button captions are baked into the page
//! rather than the per-language JSON, so they live here as static tables.

use crate::prefs::{Language, Theme};

/// Static labels for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub projects: &'static str,
    pub visit: &'static str,
    pub repo: &'static str,
    pub link: &'static str,
    pub career: &'static str,
    pub github: &'static str,
    pub github_note: &'static str,
    pub video: &'static str,
    pub light_mode: &'static str,
    pub dark_mode: &'static str,
    pub loading: &'static str,
    pub load_failed: &'static str,
    pub personal_tab: &'static str,
    pub design_tab: &'static str,
    pub systems_tab: &'static str,
}

const TR: Labels = Labels {
    projects: "Projelerim",
    visit: "→ Ziyaret Et",
    repo: "Repo",
    link: "Link",
    career: "Kariyer Hakkında",
    github: "GitHub Profilim",
    github_note: "Projelerimi inceleyin",
    video: "Video",
    light_mode: "Açık Mod",
    dark_mode: "Koyu Mod",
    loading: "Yükleniyor…",
    load_failed: "İçerik yüklenemedi",
    personal_tab: "Kişisel Hayat",
    design_tab: "Grafik Tasarım",
    systems_tab: "Sistem ve Ağ",
};

const EN: Labels = Labels {
    projects: "My Projects",
    visit: "→ Visit",
    repo: "Repo",
    link: "Link",
    career: "About My Career",
    github: "My GitHub Profile",
    github_note: "Browse my projects",
    video: "Video",
    light_mode: "Light Mode",
    dark_mode: "Dark Mode",
    loading: "Loading…",
    load_failed: "Could not load content",
    personal_tab: "Personal Life",
    design_tab: "Graphic Design",
    systems_tab: "Systems & Networks",
};

const ZH: Labels = Labels {
    projects: "我的项目",
    visit: "→ 访问",
    repo: "仓库",
    link: "链接",
    career: "职业经历",
    github: "我的 GitHub",
    github_note: "浏览我的项目",
    video: "视频",
    light_mode: "浅色模式",
    dark_mode: "深色模式",
    loading: "加载中…",
    load_failed: "无法加载内容",
    personal_tab: "个人生活",
    design_tab: "平面设计",
    systems_tab: "系统与网络",
};

pub fn labels(language: Language) -> &'static Labels {
    match language {
        Language::Tr => &TR,
        Language::En => &EN,
        Language::Zh => &ZH,
    }
}

/// Native display name for the language selector.
pub fn native_name(language: Language) -> &'static str {
    match language {
        Language::Tr => "Türkçe",
        Language::En => "English",
        Language::Zh => "中文",
    }
}

/// Caption for the theme button: offers the mode the click switches to.
pub fn theme_button(language: Language, theme: Theme) -> String {
    let labels = labels(language);
    match theme {
        Theme::Dark => format!("\u{2600} {}", labels.light_mode),
        Theme::Light => format!("\u{263E} {}", labels.dark_mode),
    }
}

/// Caption for the language button, e.g. "🌐 English".
pub fn language_button(language: Language) -> String {
    format!("\u{1F310} {}", native_name(language))
}
