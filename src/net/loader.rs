//! Background content loading.
//!
//! Each request runs [`fetch_language`] on its own thread and reports back
//! over an `mpsc` channel that the UI polls once per frame. Requests are
//! numbered; only the outcome of the most recent request is ever handed out,
//! so a slow response for a language the user already switched away from
//! cannot overwrite newer content.

use std::sync::mpsc;
use std::sync::Arc;
use std::time::{Duration, Instant};

use super::fetch::fetch_language;
use crate::config::Source;
use crate::error::LoadError;
use crate::model::LanguageData;
use crate::prefs::Language;

/// Completed load
pub struct LoadOutcome {
    pub seq: u64,
    pub language: Language,
    pub result: Result<LanguageData, LoadError>,
}

type Waker = Arc<dyn Fn() + Send + Sync>;

pub struct ContentLoader {
    source: Source,
    next_seq: u64,
    in_flight: Option<u64>,
    tx: mpsc::Sender<LoadOutcome>,
    rx: mpsc::Receiver<LoadOutcome>,
    waker: Option<Waker>,
}

impl ContentLoader {
    pub fn new(source: Source) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            source,
            next_seq: 0,
            in_flight: None,
            tx,
            rx,
            waker: None,
        }
    }

    /// Callback invoked from the worker thread after it sends its outcome,
    /// e.g. to request a repaint.
    pub fn with_waker(mut self, waker: impl Fn() + Send + Sync + 'static) -> Self {
        self.waker = Some(Arc::new(waker));
        self
    }

    pub fn source(&self) -> &Source {
        &self.source
    }

    /// Start loading `language`. Supersedes any request still in flight.
    pub fn request(&mut self, language: Language) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        if let Some(prev) = self.in_flight.replace(seq) {
            log::debug!("Load #{} superseded by #{} ({})", prev, seq, language);
        }

        let tx = self.tx.clone();
        let source = self.source.clone();
        let waker = self.waker.clone();

        std::thread::spawn(move || {
            let result = fetch_language(&source, language);
            let _ = tx.send(LoadOutcome { seq, language, result });
            if let Some(wake) = waker {
                wake();
            }
        });

        seq
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Non-blocking: the latest request's outcome if it has arrived.
    pub fn poll(&mut self) -> Option<LoadOutcome> {
        while let Ok(outcome) = self.rx.try_recv() {
            if let Some(outcome) = self.accept(outcome) {
                return Some(outcome);
            }
        }
        None
    }

    /// Block until the latest request completes or `timeout` elapses.
    /// Returns `None` immediately when nothing is in flight.
    pub fn wait(&mut self, timeout: Duration) -> Option<LoadOutcome> {
        let deadline = Instant::now() + timeout;
        while self.in_flight.is_some() {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.rx.recv_timeout(remaining) {
                Ok(outcome) => {
                    if let Some(outcome) = self.accept(outcome) {
                        return Some(outcome);
                    }
                }
                Err(_) => return None,
            }
        }
        None
    }

    fn accept(&mut self, outcome: LoadOutcome) -> Option<LoadOutcome> {
        if self.in_flight == Some(outcome.seq) {
            self.in_flight = None;
            Some(outcome)
        } else {
            log::debug!("Discarding stale load #{} ({})", outcome.seq, outcome.language);
            None
        }
    }
}
