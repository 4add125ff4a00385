mod app;
mod ui;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use eframe::egui;

use folio::config::Source;
use folio::net::loader::ContentLoader;
use folio::prefs::{Language, LANGUAGE_KEY};
use folio::store::{FileStore, KeyValueStore, MemoryStore};
use folio::view::outline;
use folio::PageController;

use app::PortfolioApp;

/// Fonts with CJK coverage; the first one found is appended as fallback.
const CJK_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
    "/System/Library/Fonts/PingFang.ttc",
    "/System/Library/Fonts/Hiragino Sans GB.ttc",
    "C:\\Windows\\Fonts\\msyh.ttc",
];

const DUMP_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Tabbed portfolio viewer for per-language JSON content")]
struct Cli {
    /// Site root (directory or http(s) URL) that contains assets/data/
    #[arg(short, long, default_value = ".")]
    source: String,

    /// Preferences file [default: platform config dir]
    #[arg(long, value_name = "FILE")]
    prefs: Option<PathBuf>,

    /// Start in this language (tr, en, zh); remembered for next time
    #[arg(short, long, value_parser = parse_language)]
    lang: Option<Language>,

    /// Print every tab as a text outline and exit
    #[arg(long)]
    dump: bool,
}

fn parse_language(code: &str) -> Result<Language, String> {
    Language::from_code(code)
        .ok_or_else(|| format!("unsupported language '{}' (use tr, en or zh)", code))
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let source = Source::parse(&cli.source).context("Invalid --source")?;
    let mut store = open_store(cli.prefs.as_ref());
    if let Some(lang) = cli.lang {
        if let Err(e) = store.set(LANGUAGE_KEY, lang.code()) {
            log::warn!("Could not remember --lang {}: {}", lang, e);
        }
    }

    if cli.dump {
        return dump(source, store);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_title("folio"),
        ..Default::default()
    };

    eframe::run_native(
        "folio",
        options,
        Box::new(move |cc| {
            install_cjk_font(&cc.egui_ctx);

            let ctx = cc.egui_ctx.clone();
            let loader = ContentLoader::new(source).with_waker(move || ctx.request_repaint());
            let page = PageController::new(loader, store);
            Ok(Box::new(PortfolioApp::new(page)))
        }),
    )
    .map_err(|e| anyhow!("Failed to start folio: {}", e))
}

/// Preferences file, falling back to a throwaway store when it can't be used.
fn open_store(path: Option<&PathBuf>) -> Box<dyn KeyValueStore> {
    let path = match path.cloned().or_else(FileStore::default_path) {
        Some(p) => p,
        None => {
            log::warn!("No config directory; preferences will not persist");
            return Box::new(MemoryStore::new());
        }
    };
    match FileStore::open(&path) {
        Ok(store) => Box::new(store),
        Err(e) => {
            log::warn!("Ignoring preferences at {}: {}", path.display(), e);
            Box::new(MemoryStore::new())
        }
    }
}

fn dump(source: Source, store: Box<dyn KeyValueStore>) -> Result<()> {
    let loader = ContentLoader::new(source.clone());
    let mut page = PageController::new(loader, store);
    page.wait_for_content(DUMP_TIMEOUT)
        .with_context(|| format!("Loading {} content from {}", page.language(), source))?;

    println!("{} [{}]", page.page_title(), page.language());
    for button in page.tab_buttons() {
        println!();
        println!("== {} ==", button.title);
        match page.view(button.tab) {
            Some(view) => print!("{}", outline(&view)),
            None => println!("(empty)"),
        }
    }
    if let Some(footer) = page.footer_view() {
        println!();
        print!("{}", outline(&footer));
    }

    Ok(())
}

fn install_cjk_font(ctx: &egui::Context) {
    let mut fonts = egui::FontDefinitions::default();
    for path in CJK_FONT_PATHS {
        if let Ok(data) = std::fs::read(path) {
            fonts
                .font_data
                .insert("cjk".to_owned(), egui::FontData::from_owned(data));
            for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
                if let Some(list) = fonts.families.get_mut(&family) {
                    list.push("cjk".to_owned());
                }
            }
            log::debug!("Using CJK fallback font {}", path);
            break;
        }
    }
    ctx.set_fonts(fonts);
}
