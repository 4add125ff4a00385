use std::time::Duration;

use url::Url;

use crate::config::{Location, Source};
use crate::error::LoadError;
use crate::model::LanguageData;
use crate::prefs::Language;

const USER_AGENT: &str = concat!("folio/", env!("CARGO_PKG_VERSION"));
const TIMEOUT: Duration = Duration::from_secs(15);

/// Raw bytes of a fetched resource
#[derive(Clone)]
pub struct FetchResult {
    pub body: Vec<u8>,
    pub location: String,
    pub status: u16,
}

/// Fetch and decode the document for `language` (blocking, single attempt).
pub fn fetch_language(source: &Source, language: Language) -> Result<LanguageData, LoadError> {
    let location = source.document(language)?;
    let fetched = fetch_location(&location)?;
    let data: LanguageData =
        serde_json::from_slice(&fetched.body).map_err(|e| LoadError::Decode {
            location: fetched.location.clone(),
            source: e,
        })?;
    log::info!(
        "Loaded {} ({} bytes, {} footer links)",
        fetched.location,
        fetched.body.len(),
        data.footer.len()
    );
    Ok(data)
}

/// Read a resolved location from disk or over HTTP.
pub fn fetch_location(location: &Location) -> Result<FetchResult, LoadError> {
    match location {
        Location::Path(path) => {
            let body = std::fs::read(path).map_err(|e| LoadError::Io {
                path: path.display().to_string(),
                source: e,
            })?;
            Ok(FetchResult {
                body,
                location: path.display().to_string(),
                status: 200,
            })
        }
        Location::Url(url) => fetch_url(url),
    }
}

/// GET a URL (blocking). Non-success statuses are errors.
pub fn fetch_url(url: &Url) -> Result<FetchResult, LoadError> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(TIMEOUT)
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()?;

    let response = client
        .get(url.as_str())
        .header("Accept", "application/json,image/*;q=0.9,*/*;q=0.8")
        .send()?;

    let status = response.status().as_u16();
    let final_url = response.url().to_string();
    if !response.status().is_success() {
        return Err(LoadError::Status {
            status,
            url: final_url,
        });
    }

    let body = response.bytes()?.to_vec();
    Ok(FetchResult {
        body,
        location: final_url,
        status,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Answer exactly one HTTP request with `status_line` and `body`.
    fn serve_once(
        status_line: &'static str,
        body: &'static str,
    ) -> (Source, thread::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let handle = thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream);
            let mut request_line = String::new();
            reader.read_line(&mut request_line).unwrap();
            let mut line = String::new();
            while reader.read_line(&mut line).unwrap() > 0 && line != "\r\n" {
                line.clear();
            }
            let mut stream = reader.into_inner();
            write!(
                stream,
                concat!(
                    "HTTP/1.1 {}\r\n",
                    "Content-Type: application/json\r\n",
                    "Content-Length: {}\r\n",
                    "Connection: close\r\n\r\n{}"
                ),
                status_line,
                body.len(),
                body
            )
            .unwrap();
            stream.flush().unwrap();
            request_line
        });
        let source = Source::parse(&format!("http://127.0.0.1:{}/site", port)).unwrap();
        (source, handle)
    }

    fn site_with(lang: &str, body: &str) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("assets").join("data");
        fs::create_dir_all(&data).unwrap();
        fs::write(data.join(format!("{}.json", lang)), body).unwrap();
        dir
    }

    #[test]
    fn loads_document_from_directory() {
        let dir = site_with("en", r#"{"name": "Ada Lovelace"}"#);
        let source = Source::Dir(dir.path().to_path_buf());
        let data = fetch_language(&source, Language::En).unwrap();
        assert_eq!(data.name, "Ada Lovelace");
    }

    #[test]
    fn missing_document_is_io_error() {
        let dir = site_with("en", "{}");
        let source = Source::Dir(dir.path().to_path_buf());
        assert!(matches!(
            fetch_language(&source, Language::Zh),
            Err(LoadError::Io { .. })
        ));
    }

    #[test]
    fn malformed_document_is_decode_error() {
        let dir = site_with("tr", "{\"name\": ");
        let source = Source::Dir(dir.path().to_path_buf());
        let err = fetch_language(&source, Language::Tr).unwrap_err();
        assert!(matches!(err, LoadError::Decode { .. }));
        assert!(err.to_string().contains("tr.json"));
    }

    #[test]
    fn http_document_decodes() {
        let (source, server) = serve_once("200 OK", r#"{"name": "Ada"}"#);
        let data = fetch_language(&source, Language::En).unwrap();
        assert_eq!(data.name, "Ada");
        let request = server.join().unwrap();
        assert!(request.starts_with("GET /site/assets/data/en.json "), "{}", request);
    }

    #[test]
    fn http_error_status_is_reported() {
        let (source, server) = serve_once("404 Not Found", "missing");
        let err = fetch_language(&source, Language::Tr).unwrap_err();
        match &err {
            LoadError::Status { status, url } => {
                assert_eq!(*status, 404);
                assert!(url.ends_with("/site/assets/data/tr.json"), "{}", url);
            }
            other => panic!("expected status error, got {:?}", other),
        }
        server.join().unwrap();
    }
}
