//! Which content panel is showing.

use crate::i18n::Labels;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Personal,
    Design,
    Systems,
}

impl Tab {
    /// Button order.
    pub const ALL: [Tab; 3] = [Tab::Personal, Tab::Design, Tab::Systems];

    pub fn key(&self) -> &'static str {
        match self {
            Tab::Personal => "personal",
            Tab::Design => "design",
            Tab::Systems => "systems",
        }
    }

    pub fn from_key(key: &str) -> Option<Tab> {
        match key {
            "personal" => Some(Tab::Personal),
            "design" => Some(Tab::Design),
            "systems" => Some(Tab::Systems),
            _ => None,
        }
    }

    /// Built-in caption, used when the document gives the tab no title.
    pub fn default_title(&self, labels: &Labels) -> &'static str {
        match self {
            Tab::Personal => labels.personal_tab,
            Tab::Design => labels.design_tab,
            Tab::Systems => labels.systems_tab,
        }
    }
}

/// At most one active tab. Starts on [`Tab::Personal`].
///
/// Switching by name first deactivates everything, so an unknown name leaves
/// no tab active. That mirrors the page's behavior and is not reported as an
/// error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabController {
    active: Option<Tab>,
}

impl Default for TabController {
    fn default() -> Self {
        Self {
            active: Some(Tab::Personal),
        }
    }
}

impl TabController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<Tab> {
        self.active
    }

    pub fn is_active(&self, tab: Tab) -> bool {
        self.active == Some(tab)
    }

    pub fn switch(&mut self, tab: Tab) {
        self.active = Some(tab);
    }

    pub fn switch_tab(&mut self, name: &str) {
        self.active = Tab::from_key(name);
        if self.active.is_none() {
            log::debug!("switch_tab: no tab named '{}'", name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_personal() {
        assert_eq!(TabController::new().active(), Some(Tab::Personal));
    }

    #[test]
    fn exactly_one_active_after_valid_switches() {
        let mut tabs = TabController::new();
        for name in ["design", "systems", "personal", "systems", "systems"] {
            tabs.switch_tab(name);
            let active: Vec<Tab> = Tab::ALL.into_iter().filter(|t| tabs.is_active(*t)).collect();
            assert_eq!(active.len(), 1);
            assert_eq!(active[0].key(), name);
        }
    }

    #[test]
    fn switching_to_active_tab_is_idempotent() {
        let mut tabs = TabController::new();
        tabs.switch_tab("design");
        let before = tabs.clone();
        tabs.switch_tab("design");
        assert_eq!(tabs, before);
    }

    #[test]
    fn unknown_name_leaves_nothing_active() {
        let mut tabs = TabController::new();
        tabs.switch_tab("design");
        tabs.switch_tab("contact");
        assert_eq!(tabs.active(), None);
        assert!(Tab::ALL.iter().all(|t| !tabs.is_active(*t)));

        tabs.switch(Tab::Systems);
        assert_eq!(tabs.active(), Some(Tab::Systems));
    }
}
