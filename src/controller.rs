//! The page controller: preferences, loaded content, tab and accordion
//! state in one explicit struct. The front end feeds it input and asks it
//! for view trees; it never touches widgets itself.

use std::time::Duration;

use crate::accordion::Accordion;
use crate::config::Source;
use crate::error::LoadError;
use crate::i18n::{self, Labels};
use crate::model::LanguageData;
use crate::net::loader::{ContentLoader, LoadOutcome};
use crate::prefs::{Language, Preferences, Theme};
use crate::store::KeyValueStore;
use crate::tabs::{Tab, TabController};
use crate::view::render::{render_footer, render_tab, tab_caption};
use crate::view::ViewNode;

/// One tab button as the toolbar shows it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabButton {
    pub tab: Tab,
    pub icon: String,
    pub title: String,
    pub active: bool,
}

pub struct PageController<S> {
    prefs: Preferences<S>,
    tabs: TabController,
    accordion: Accordion,
    content: Option<LanguageData>,
    content_language: Option<Language>,
    banner: Option<String>,
    loader: ContentLoader,
}

impl<S: KeyValueStore> PageController<S> {
    /// Restore preferences from `store` and start loading the stored
    /// language.
    pub fn new(loader: ContentLoader, store: S) -> Self {
        let prefs = Preferences::load(store);
        let mut controller = Self {
            prefs,
            tabs: TabController::new(),
            accordion: Accordion::new(0),
            content: None,
            content_language: None,
            banner: None,
            loader,
        };
        controller.reload();
        controller
    }

    pub fn language(&self) -> Language {
        self.prefs.language()
    }

    pub fn theme(&self) -> Theme {
        self.prefs.theme()
    }

    pub fn labels(&self) -> &'static Labels {
        i18n::labels(self.language())
    }

    pub fn source(&self) -> &Source {
        self.loader.source()
    }

    pub fn content(&self) -> Option<&LanguageData> {
        self.content.as_ref()
    }

    /// Language of the content currently installed, which lags
    /// [`language`](Self::language) while a load is in flight.
    pub fn content_language(&self) -> Option<Language> {
        self.content_language
    }

    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    pub fn dismiss_banner(&mut self) {
        self.banner = None;
    }

    pub fn is_loading(&self) -> bool {
        self.loader.is_loading()
    }

    pub fn active_tab(&self) -> Option<Tab> {
        self.tabs.active()
    }

    pub fn accordion(&self) -> &Accordion {
        &self.accordion
    }

    pub fn preferences(&self) -> &Preferences<S> {
        &self.prefs
    }

    // ── input ──────────────────────────────────────────────────────────────

    pub fn set_language(&mut self, language: Language) {
        self.prefs.set_language(language);
        self.reload();
    }

    pub fn cycle_language(&mut self) -> Language {
        let next = self.prefs.cycle_language();
        self.reload();
        next
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.prefs.toggle_theme()
    }

    pub fn switch_tab(&mut self, name: &str) {
        self.tabs.switch_tab(name);
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.tabs.switch(tab);
    }

    pub fn toggle_section(&mut self, index: usize) {
        self.accordion.toggle(index);
    }

    /// Fetch the current language again. Used after a failed load.
    pub fn reload(&mut self) {
        let language = self.language();
        let seq = self.loader.request(language);
        log::debug!("Requested {} content (load #{})", language, seq);
    }

    /// Browser target for a media reference found in the content, resolved
    /// against the source the way images are.
    pub fn link_target(&self, reference: &str) -> Option<String> {
        match self.source().resolve(reference).and_then(|loc| loc.href()) {
            Ok(href) => Some(href),
            Err(e) => {
                log::warn!("Cannot open {}: {}", reference, e);
                None
            }
        }
    }

    // ── loading ────────────────────────────────────────────────────────────

    /// Install a finished load, if any. Returns true when state changed.
    pub fn poll(&mut self) -> bool {
        match self.loader.poll() {
            Some(outcome) => {
                // failures surface through the banner
                let _ = self.apply(outcome);
                true
            }
            None => false,
        }
    }

    /// Block until the pending load is installed (headless mode).
    pub fn wait_for_content(&mut self, timeout: Duration) -> Result<(), LoadError> {
        let outcome = self.loader.wait(timeout).ok_or(LoadError::Timeout)?;
        self.apply(outcome)
    }

    fn apply(&mut self, outcome: LoadOutcome) -> Result<(), LoadError> {
        match outcome.result {
            Ok(data) => {
                let sections = data.tabs.personal.as_ref().map_or(0, |p| p.sections.len());
                self.accordion.reset(sections);
                log::info!("Installed {} content for '{}'", outcome.language, data.name);
                self.content = Some(data);
                self.content_language = Some(outcome.language);
                self.banner = None;
                Ok(())
            }
            Err(e) => {
                log::error!("Error loading {} content: {}", outcome.language, e);
                self.banner = Some(format!("{}: {}", self.labels().load_failed, e));
                Err(e)
            }
        }
    }

    // ── views ──────────────────────────────────────────────────────────────

    /// View tree for `tab`, or `None` when there is nothing to draw.
    pub fn view(&self, tab: Tab) -> Option<ViewNode> {
        let data = self.content.as_ref()?;
        render_tab(data, tab, self.labels(), &self.accordion)
    }

    pub fn active_view(&self) -> Option<ViewNode> {
        self.view(self.active_tab()?)
    }

    pub fn footer_view(&self) -> Option<ViewNode> {
        let data = self.content.as_ref()?;
        if data.footer.is_empty() {
            return None;
        }
        Some(render_footer(&data.footer))
    }

    pub fn tab_buttons(&self) -> Vec<TabButton> {
        Tab::ALL
            .into_iter()
            .map(|tab| {
                let (icon, title) = tab_caption(self.content.as_ref(), tab, self.labels());
                TabButton {
                    tab,
                    icon,
                    title,
                    active: self.tabs.is_active(tab),
                }
            })
            .collect()
    }

    /// Window/logo title: the person's name once content is in.
    pub fn page_title(&self) -> &str {
        self.content
            .as_ref()
            .map(|d| d.name.as_str())
            .filter(|n| !n.is_empty())
            .unwrap_or("folio")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::{LANGUAGE_KEY, THEME_KEY};
    use crate::store::MemoryStore;
    use std::fs;

    const WAIT: Duration = Duration::from_secs(5);

    fn document(name: &str) -> String {
        format!(
            r#"{{
            "name": "{name}",
            "tabs": {{
                "personal": {{"sections": [
                    {{"title": "About", "content": "{name} about"}},
                    {{"title": "Work", "content": "{name} work"}}
                ], "projects": [{{"name": "p", "description": "d", "link": "https://p"}}]}},
                "design": {{"title": "Design {name}", "description": "d",
                    "gallery": [{{"image": "g.png", "title": "G"}}]}},
                "systems": {{"title": "Systems {name}", "description": "d",
                    "github": {{"link": "https://github.com/x", "username": "x"}}}}
            }},
            "footer": {{"mail": {{"url": "mailto:x@y.z", "label": "Mail",
                "icon": "fas fa-envelope"}}}}
        }}"#
        )
    }

    fn site() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("assets").join("data");
        fs::create_dir_all(&data).unwrap();
        for lang in Language::ALL {
            fs::write(data.join(format!("{}.json", lang.code())), document(lang.code())).unwrap();
        }
        dir
    }

    fn controller(dir: &tempfile::TempDir, store: MemoryStore) -> PageController<MemoryStore> {
        let loader = ContentLoader::new(Source::Dir(dir.path().to_path_buf()));
        PageController::new(loader, store)
    }

    #[test]
    fn every_language_populates_all_tabs() {
        let dir = site();
        let mut page = controller(&dir, MemoryStore::new());
        for lang in Language::ALL {
            page.set_language(lang);
            page.wait_for_content(WAIT).unwrap();
            assert_eq!(page.content_language(), Some(lang));
            for tab in Tab::ALL {
                let view = page.view(tab).expect("tab rendered");
                assert!(view.collect_text().contains(lang.code()), "{:?} {:?}", lang, tab);
            }
            assert!(page.footer_view().is_some());
        }
    }

    #[test]
    fn starts_with_stored_language() {
        let dir = site();
        let mut page = controller(&dir, MemoryStore::new().with_entry(LANGUAGE_KEY, "zh"));
        page.wait_for_content(WAIT).unwrap();
        assert_eq!(page.page_title(), "zh");
        assert_eq!(page.active_tab(), Some(Tab::Personal));
    }

    #[test]
    fn failed_load_keeps_previous_content_and_sets_banner() {
        let dir = site();
        let mut page = controller(&dir, MemoryStore::new());
        page.wait_for_content(WAIT).unwrap();

        fs::write(dir.path().join("assets/data/en.json"), "{ broken").unwrap();
        page.set_language(Language::En);
        assert!(page.wait_for_content(WAIT).is_err());

        assert_eq!(page.content_language(), Some(Language::Tr));
        assert_eq!(page.page_title(), "tr");
        let banner = page.banner().expect("banner shown");
        assert!(banner.starts_with("Could not load content"));

        fs::write(dir.path().join("assets/data/en.json"), document("en")).unwrap();
        page.reload();
        page.wait_for_content(WAIT).unwrap();
        assert!(page.banner().is_none());
        assert_eq!(page.page_title(), "en");
    }

    #[test]
    fn missing_site_leaves_page_empty() {
        let dir = tempfile::tempdir().unwrap();
        let mut page = controller(&dir, MemoryStore::new());
        assert!(page.wait_for_content(WAIT).is_err());
        assert!(page.content().is_none());
        assert!(page.active_view().is_none());
        assert!(page.footer_view().is_none());
        assert_eq!(page.page_title(), "folio");
        // buttons still have captions
        assert!(page.tab_buttons().iter().all(|b| !b.title.is_empty()));
    }

    #[test]
    fn new_content_resets_accordion() {
        let dir = site();
        let mut page = controller(&dir, MemoryStore::new());
        page.wait_for_content(WAIT).unwrap();
        page.toggle_section(1);
        assert_eq!(page.accordion().open_index(), Some(1));

        page.cycle_language();
        page.wait_for_content(WAIT).unwrap();
        assert_eq!(page.accordion().open_index(), Some(0));
        assert_eq!(page.accordion().len(), 2);
    }

    #[test]
    fn tab_buttons_follow_active_tab() {
        let dir = site();
        let mut page = controller(&dir, MemoryStore::new());
        page.wait_for_content(WAIT).unwrap();
        page.switch_tab("systems");
        let active: Vec<Tab> = page
            .tab_buttons()
            .into_iter()
            .filter(|b| b.active)
            .map(|b| b.tab)
            .collect();
        assert_eq!(active, vec![Tab::Systems]);
        assert!(page.active_view().unwrap().collect_text().contains("Systems tr"));

        page.switch_tab("bogus");
        assert!(page.tab_buttons().iter().all(|b| !b.active));
        assert!(page.active_view().is_none());
    }

    #[test]
    fn relative_video_opens_inside_the_site() {
        let dir = site();
        fs::write(
            dir.path().join("assets/data/tr.json"),
            r#"{"name": "tr", "tabs": {"design": {"title": "D",
                "video": {"title": "Reel", "url": "assets/video/reel.mp4"}}}}"#,
        )
        .unwrap();
        let mut page = controller(&dir, MemoryStore::new());
        page.wait_for_content(WAIT).unwrap();

        let view = page.view(Tab::Design).unwrap();
        let src = match &view.find_class("video").unwrap().kind {
            crate::view::ViewKind::Video { src } => src.clone(),
            other => panic!("expected video, got {:?}", other),
        };
        assert_eq!(src, "assets/video/reel.mp4");

        let href = page.link_target(&src).unwrap();
        let expected = dir.path().join("assets").join("video").join("reel.mp4");
        assert_eq!(href, url::Url::from_file_path(expected).unwrap().to_string());
        assert_eq!(
            page.link_target("https://youtu.be/x").as_deref(),
            Some("https://youtu.be/x")
        );
    }

    #[test]
    fn theme_and_language_are_persisted() {
        let dir = site();
        let mut page = controller(&dir, MemoryStore::new());
        page.toggle_theme();
        page.cycle_language();
        let store = page.preferences().store();
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
        assert_eq!(store.get(LANGUAGE_KEY).as_deref(), Some("en"));
    }

    #[test]
    fn rapid_switches_install_only_the_last_language() {
        let dir = site();
        let mut page = controller(&dir, MemoryStore::new());
        page.set_language(Language::En);
        page.set_language(Language::Zh);
        page.set_language(Language::En);
        page.wait_for_content(WAIT).unwrap();
        assert_eq!(page.content_language(), Some(Language::En));
        std::thread::sleep(Duration::from_millis(50));
        assert!(!page.poll());
        assert_eq!(page.content_language(), Some(Language::En));
    }
}
