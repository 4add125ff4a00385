//! Per-language content documents.
//!
//! Every field defaults when absent so that a sparse document renders as a
//! sparse page instead of failing to load. Only invalid JSON, or a value of
//! the wrong JSON type, is a decode error.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// Root document, one per language (`assets/data/{lang}.json`).
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct LanguageData {
    pub name: String,
    pub tabs: Tabs,
    pub footer: Footer,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Tabs {
    pub personal: Option<PersonalTab>,
    pub design: Option<DesignTab>,
    pub systems: Option<SystemsTab>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct PersonalTab {
    pub title: String,
    pub icon: String,
    pub profile: Option<Profile>,
    pub sections: Vec<Section>,
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Profile {
    pub photo: String,
    pub title: String,
    pub career: String,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Section {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub link: String,
    /// Secondary link (live site, store page) shown next to `link`.
    pub url: Option<String>,
    /// Embeddable video URL.
    pub youtube: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct DesignTab {
    pub title: String,
    pub icon: String,
    pub subtitle: Option<String>,
    /// Stands in for a missing `subtitle`.
    pub bio: Option<String>,
    pub description: String,
    pub video: Option<Video>,
    /// Embed URL of the portfolio reel shown under the intro.
    #[serde(rename = "portfolio2026")]
    pub portfolio_reel: Option<String>,
    pub career: Option<String>,
    pub gallery: Vec<GalleryItem>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Video {
    pub title: String,
    pub description: Option<String>,
    /// Direct media file.
    pub url: Option<String>,
    /// Embed player URL; wins over `url` when both are set.
    pub embed: Option<String>,
}

/// First non-empty of `subtitle` and `bio`.
fn subtitle_or_bio<'a>(
    subtitle: &'a Option<String>,
    bio: &'a Option<String>,
) -> Option<&'a str> {
    let non_empty = |s: &&str| !s.is_empty();
    subtitle
        .as_deref()
        .filter(non_empty)
        .or_else(|| bio.as_deref().filter(non_empty))
}

impl DesignTab {
    pub fn intro_subtitle(&self) -> Option<&str> {
        subtitle_or_bio(&self.subtitle, &self.bio)
    }
}

impl SystemsTab {
    pub fn intro_subtitle(&self) -> Option<&str> {
        subtitle_or_bio(&self.subtitle, &self.bio)
    }
}

impl Video {
    pub fn source(&self) -> Option<&str> {
        let non_empty = |s: &&str| !s.is_empty();
        self.embed
            .as_deref()
            .filter(non_empty)
            .or_else(|| self.url.as_deref().filter(non_empty))
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct GalleryItem {
    pub image: String,
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct SystemsTab {
    pub title: String,
    pub icon: String,
    pub subtitle: Option<String>,
    /// Shown in its own block, and as the subtitle when there is none.
    pub bio: Option<String>,
    pub description: String,
    pub github: Option<Github>,
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Github {
    pub link: String,
    pub username: String,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct FooterLink {
    pub url: String,
    pub label: String,
    pub icon: String,
}

/// Footer links in document order.
///
/// The document stores them as an object keyed by link id; the visitor keeps
/// the order the keys appear in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Footer(pub Vec<(String, FooterLink)>);

impl Footer {
    pub fn iter(&self) -> impl Iterator<Item = &(String, FooterLink)> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<'de> Deserialize<'de> for Footer {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FooterVisitor;

        impl<'de> Visitor<'de> for FooterVisitor {
            type Value = Footer;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of footer links")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Footer, A::Error> {
                let mut links = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, link)) = map.next_entry::<String, FooterLink>()? {
                    links.push((key, link));
                }
                Ok(Footer(links))
            }
        }

        deserializer.deserialize_map(FooterVisitor)
    }
}

impl LanguageData {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
