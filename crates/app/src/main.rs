use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use guide_core::model::PageIndex;
use guide_core::{Catalog, Locale};
use services::{DownloaderRef, ExportService, FileDownloader};
use tracing_subscriber::EnvFilter;
use ui::platform::{HTML_TO_IMAGE_SRC, ScriptAlerter, ScriptDownloader, ScriptRasterizer};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidValue {
        flag: &'static str,
        source: guide_core::Error,
    },
    InvalidSaveDir { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidValue { flag, source } => write!(f, "invalid {flag} value: {source}"),
            ArgsError::InvalidSaveDir { raw } => write!(f, "invalid --save-dir value: {raw:?}"),
        }
    }
}

impl std::error::Error for ArgsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ArgsError::InvalidValue { source, .. } => Some(source),
            _ => None,
        }
    }
}

fn invalid(flag: &'static str) -> impl FnOnce(guide_core::Error) -> ArgsError {
    move |source| ArgsError::InvalidValue { flag, source }
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    locale: Locale,
    start_page: PageIndex,
    learner_name: String,
    rasterizer_src: String,
    export_service: Arc<ExportService>,
}

impl UiApp for DesktopApp {
    fn locale(&self) -> Locale {
        self.locale
    }

    fn start_page(&self) -> PageIndex {
        self.start_page
    }

    fn learner_name(&self) -> String {
        self.learner_name.clone()
    }

    fn rasterizer_src(&self) -> Option<String> {
        Some(self.rasterizer_src.clone())
    }

    fn export_service(&self) -> Arc<ExportService> {
        Arc::clone(&self.export_service)
    }
}

struct Args {
    locale: Locale,
    learner_name: String,
    start_page: PageIndex,
    save_dir: Option<PathBuf>,
    rasterizer_src: String,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [ui]  [--locale <ko|en>] [--learner <name>] [--page <0-4>]");
    eprintln!("                            [--save-dir <dir>] [--rasterizer-src <url>]");
    eprintln!("  cargo run -p app -- check [--locale <ko|en>]");
    eprintln!();
    eprintln!("Defaults for ui:");
    eprintln!("  --locale ko");
    eprintln!("  --page 0");
    eprintln!("  --rasterizer-src {HTML_TO_IMAGE_SRC}");
    eprintln!("  without --save-dir, reports are downloaded through the webview");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  GUIDE_LOCALE, GUIDE_LEARNER, GUIDE_SAVE_DIR, GUIDE_RASTERIZER_SRC, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Check,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "check" => Some(Self::Check),
            _ => None,
        }
    }
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut locale = match std::env::var("GUIDE_LOCALE") {
            Ok(raw) => parse_locale(raw)?,
            Err(_) => Locale::default(),
        };
        let mut learner_name = std::env::var("GUIDE_LEARNER").unwrap_or_default();
        let mut start_page = PageIndex::FIRST;
        let mut save_dir = std::env::var("GUIDE_SAVE_DIR")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);
        let mut rasterizer_src = std::env::var("GUIDE_RASTERIZER_SRC")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| HTML_TO_IMAGE_SRC.to_string());

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--locale" => {
                    locale = parse_locale(require_value(args, "--locale")?)?;
                }
                "--learner" => {
                    learner_name = require_value(args, "--learner")?;
                }
                "--page" => {
                    let value = require_value(args, "--page")?;
                    start_page = value
                        .parse::<PageIndex>()
                        .map_err(|err| invalid("--page")(err.into()))?;
                }
                "--save-dir" => {
                    let value = require_value(args, "--save-dir")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidSaveDir { raw: value });
                    }
                    save_dir = Some(PathBuf::from(value));
                }
                "--rasterizer-src" => {
                    rasterizer_src = require_value(args, "--rasterizer-src")?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            locale,
            learner_name,
            start_page,
            save_dir,
            rasterizer_src,
        })
    }
}

fn parse_locale(raw: String) -> Result<Locale, ArgsError> {
    raw.parse::<Locale>()
        .map_err(|err| invalid("--locale")(err.into()))
}

fn build_export_service(args: &Args) -> ExportService {
    let downloader: DownloaderRef = match &args.save_dir {
        Some(dir) => Arc::new(FileDownloader::new(dir.clone())),
        None => Arc::new(ScriptDownloader),
    };
    ExportService::new(
        Some(Arc::new(ScriptRasterizer)),
        downloader,
        Arc::new(ScriptAlerter),
        Catalog::for_locale(args.locale).export,
    )
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: launching UI when no subcommand is provided.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = Args::parse(&mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let catalog = Catalog::for_locale(parsed.locale);
    catalog.validate().map_err(guide_core::Error::from)?;

    match cmd {
        Command::Check => {
            println!("catalog {} ok: {} activities", parsed.locale, catalog.activities.len());
            Ok(())
        }
        Command::Ui => {
            tracing::info!(
                locale = %parsed.locale,
                page = %parsed.start_page,
                save_dir = ?parsed.save_dir,
                "launching guide"
            );
            let export_service = Arc::new(build_export_service(&parsed));
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                locale: parsed.locale,
                start_page: parsed.start_page,
                learner_name: parsed.learner_name,
                rasterizer_src: parsed.rasterizer_src,
                export_service,
            });

            let context = build_app_context(&app);

            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title(catalog.chrome.title)
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
    }
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
