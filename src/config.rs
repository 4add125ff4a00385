//! Content source and resource locations.

use std::path::PathBuf;

use url::Url;

use crate::error::LoadError;
use crate::prefs::Language;

/// Directory holding the per-language documents, relative to the source.
pub const DATA_DIR: &str = "assets/data";

/// Where the site's files live: a local directory or an http(s) base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Dir(PathBuf),
    Url(Url),
}

/// A single resolved resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Path(PathBuf),
    Url(Url),
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Location::Path(p) => write!(f, "{}", p.display()),
            Location::Url(u) => write!(f, "{}", u),
        }
    }
}

impl Location {
    /// Absolute link for handing the resource to the system browser.
    /// Relative paths are anchored at the working directory.
    pub fn href(&self) -> Result<String, LoadError> {
        match self {
            Location::Url(u) => Ok(u.to_string()),
            Location::Path(p) => {
                let absolute = if p.is_absolute() {
                    p.clone()
                } else {
                    std::env::current_dir()
                        .map_err(|e| LoadError::Io {
                            path: p.display().to_string(),
                            source: e,
                        })?
                        .join(p)
                };
                Url::from_file_path(&absolute)
                    .map(|u| u.to_string())
                    .map_err(|()| LoadError::InvalidSource(absolute.display().to_string()))
            }
        }
    }
}

impl Source {
    pub fn parse(input: &str) -> Result<Source, LoadError> {
        if input.starts_with("http://") || input.starts_with("https://") {
            let mut url = Url::parse(input)
                .map_err(|e| LoadError::InvalidSource(format!("{}: {}", input, e)))?;
            // Url::join replaces the last segment unless the base ends in '/'
            if !url.path().ends_with('/') {
                let path = format!("{}/", url.path());
                url.set_path(&path);
            }
            Ok(Source::Url(url))
        } else if input.is_empty() {
            Err(LoadError::InvalidSource("empty source".into()))
        } else {
            Ok(Source::Dir(PathBuf::from(input)))
        }
    }

    /// Location of the JSON document for `language`.
    pub fn document(&self, language: Language) -> Result<Location, LoadError> {
        self.resolve(&format!("{}/{}.json", DATA_DIR, language.code()))
    }

    /// Resolve a path found inside a content document (image, video).
    /// Absolute http(s) URLs pass through untouched.
    pub fn resolve(&self, reference: &str) -> Result<Location, LoadError> {
        if reference.starts_with("http://") || reference.starts_with("https://") {
            return Url::parse(reference)
                .map(Location::Url)
                .map_err(|e| LoadError::InvalidSource(format!("{}: {}", reference, e)));
        }
        let relative = reference.trim_start_matches("./");
        match self {
            Source::Dir(root) => Ok(Location::Path(root.join(relative))),
            Source::Url(base) => base
                .join(relative)
                .map(Location::Url)
                .map_err(|e| LoadError::InvalidSource(format!("{}: {}", reference, e))),
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Dir(p) => write!(f, "{}", p.display()),
            Source::Url(u) => write!(f, "{}", u),
        }
    }
}
