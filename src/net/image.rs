//! Background image loader for gallery and profile pictures.
//!
//! Decode jobs run on the rayon pool and report over a channel; the UI calls
//! [`ImageLoader::poll`] every frame and uploads finished images as textures.

use std::collections::{HashMap, HashSet};
use std::sync::mpsc;

use crate::config::{Location, Source};
use super::fetch::fetch_location;

/// Longest edge kept after decoding. Gallery cards never draw larger.
const MAX_EDGE: u32 = 800;

/// Decoded image data (RGBA).
pub struct ImageData {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Manages background image fetching and decoding, keyed by the reference
/// string as written in the content document.
pub struct ImageLoader {
    pending: HashMap<String, mpsc::Receiver<Option<ImageData>>>,
    loaded: HashMap<String, ImageData>,
    failed: HashSet<String>,
}

impl Default for ImageLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageLoader {
    pub fn new() -> Self {
        Self {
            pending: HashMap::new(),
            loaded: HashMap::new(),
            failed: HashSet::new(),
        }
    }

    /// Request an image to be fetched in the background.
    pub fn request(&mut self, source: &Source, reference: &str) {
        if reference.is_empty()
            || self.loaded.contains_key(reference)
            || self.pending.contains_key(reference)
            || self.failed.contains(reference)
        {
            return;
        }

        let location = match source.resolve(reference) {
            Ok(loc) => loc,
            Err(e) => {
                log::warn!("Skipping image {}: {}", reference, e);
                self.failed.insert(reference.to_string());
                return;
            }
        };

        let (tx, rx) = mpsc::channel();
        rayon::spawn(move || {
            let _ = tx.send(fetch_and_decode(&location));
        });

        self.pending.insert(reference.to_string(), rx);
    }

    /// Poll for completed downloads. Returns the references that finished
    /// successfully this call.
    pub fn poll(&mut self) -> Vec<String> {
        let mut completed = Vec::new();
        let mut finished = Vec::new();
        for (reference, rx) in &self.pending {
            match rx.try_recv() {
                Ok(Some(data)) => {
                    self.loaded.insert(reference.clone(), data);
                    finished.push(reference.clone());
                    completed.push(reference.clone());
                }
                Ok(None) | Err(mpsc::TryRecvError::Disconnected) => {
                    self.failed.insert(reference.clone());
                    completed.push(reference.clone());
                }
                Err(mpsc::TryRecvError::Empty) => {}
            }
        }
        for reference in completed {
            self.pending.remove(&reference);
        }
        finished
    }

    pub fn get(&self, reference: &str) -> Option<&ImageData> {
        self.loaded.get(reference)
    }

    /// Hand over decoded pixels, e.g. once they live in a GPU texture.
    pub fn take(&mut self, reference: &str) -> Option<ImageData> {
        self.loaded.remove(reference)
    }

    pub fn has_failed(&self, reference: &str) -> bool {
        self.failed.contains(reference)
    }

    /// Number of images still being fetched.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

fn fetch_and_decode(location: &Location) -> Option<ImageData> {
    let fetched = match fetch_location(location) {
        Ok(f) => f,
        Err(e) => {
            log::warn!("Image fetch failed: {}", e);
            return None;
        }
    };
    decode(&fetched.body)
}

fn decode(bytes: &[u8]) -> Option<ImageData> {
    let img = image::load_from_memory(bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = rgba.dimensions();

    let (w, h, pixels) = if w > MAX_EDGE {
        let ratio = MAX_EDGE as f32 / w as f32;
        let new_h = ((h as f32 * ratio) as u32).max(1);
        let resized = image::imageops::resize(
            &rgba,
            MAX_EDGE,
            new_h,
            image::imageops::FilterType::Triangle,
        );
        let (rw, rh) = resized.dimensions();
        (rw, rh, resized.into_raw())
    } else {
        (w, h, rgba.into_raw())
    };

    Some(ImageData {
        width: w,
        height: h,
        rgba: pixels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    fn png(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(width, height, image::Rgba([10, 20, 30, 255]));
        let mut out = std::io::Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn loader_deduplicates() {
        let source = Source::Dir("site".into());
        let mut loader = ImageLoader::new();
        loader.request(&source, "assets/img/a.png");
        loader.request(&source, "assets/img/a.png");
        assert_eq!(loader.pending_count(), 1);
    }

    #[test]
    fn empty_reference_is_ignored() {
        let mut loader = ImageLoader::new();
        loader.request(&Source::Dir("site".into()), "");
        assert_eq!(loader.pending_count(), 0);
    }

    #[test]
    fn wide_images_are_downscaled() {
        let data = decode(&png(1600, 400)).unwrap();
        assert_eq!(data.width, MAX_EDGE);
        assert_eq!(data.height, 200);
        assert_eq!(data.rgba.len(), (data.width * data.height * 4) as usize);
    }

    #[test]
    fn loads_from_directory_source() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("p.png"), png(4, 4)).unwrap();
        let source = Source::Dir(dir.path().to_path_buf());

        let mut loader = ImageLoader::new();
        loader.request(&source, "./p.png");
        loader.request(&source, "missing.png");

        let deadline = Instant::now() + Duration::from_secs(5);
        while loader.pending_count() > 0 && Instant::now() < deadline {
            loader.poll();
            std::thread::sleep(Duration::from_millis(5));
        }
        assert!(loader.get("./p.png").is_some());
        assert!(loader.has_failed("missing.png"));
    }
}
