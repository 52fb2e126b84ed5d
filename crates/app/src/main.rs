use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::defaults::{default_topic_drafts, parse_topic_drafts};
use services::{AppServices, Clock, TopicService, TutorialContentProvider};
use storage::repository::Storage;
use topics_core::model::TopicDraft;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use ui::{App, UiApp, build_app_context};

const DEFAULT_DB_URL: &str = "sqlite:topics.sqlite3";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
    InvalidPath { flag: &'static str, raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::InvalidPath { flag, raw } => write!(f, "invalid {flag} value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn require_path(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<PathBuf, ArgsError> {
    let value = require_value(args, flag)?;
    if value.trim().is_empty() {
        return Err(ArgsError::InvalidPath { flag, raw: value });
    }
    Ok(PathBuf::from(value))
}

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn topic_service(&self) -> Arc<TopicService> {
        self.services.topic_service()
    }

    fn tutorials(&self) -> Arc<dyn TutorialContentProvider> {
        self.services.tutorials()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct UiArgs {
    db_url: String,
    tutorials: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct SeedArgs {
    db_url: String,
    topics: Option<PathBuf>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui   [--db <sqlite_url>] [--tutorials <json>]");
    eprintln!("  cargo run -p app -- seed [--db <sqlite_url>] [--topics <json>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db {DEFAULT_DB_URL}");
    eprintln!("  --tutorials  built-in tutorial table");
    eprintln!("  --topics     bundled starter topics");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  TOPICS_DB_URL, TOPICS_TUTORIALS_FILE, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Seed,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "seed" => Some(Self::Seed),
            _ => None,
        }
    }
}

fn env_db_url() -> String {
    let raw = std::env::var("TOPICS_DB_URL")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_DB_URL.to_string());
    normalize_sqlite_url(raw)
}

fn parse_db(args: &mut impl Iterator<Item = String>) -> Result<String, ArgsError> {
    let value = require_value(args, "--db")?;
    if value.trim().is_empty() {
        return Err(ArgsError::InvalidDbUrl { raw: value });
    }
    Ok(normalize_sqlite_url(value))
}

impl UiArgs {
    fn parse(
        args: &mut impl Iterator<Item = String>,
        db_url: String,
        tutorials: Option<PathBuf>,
    ) -> Result<Self, ArgsError> {
        let mut parsed = Self { db_url, tutorials };
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => parsed.db_url = parse_db(args)?,
                "--tutorials" => parsed.tutorials = Some(require_path(args, "--tutorials")?),
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }
        Ok(parsed)
    }
}

impl SeedArgs {
    fn parse(args: &mut impl Iterator<Item = String>, db_url: String) -> Result<Self, ArgsError> {
        let mut parsed = Self {
            db_url,
            topics: None,
        };
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => parsed.db_url = parse_db(args)?,
                "--topics" => parsed.topics = Some(require_path(args, "--topics")?),
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }
        Ok(parsed)
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

fn load_topic_drafts(path: Option<&PathBuf>) -> Result<Vec<TopicDraft>, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)?;
            Ok(parse_topic_drafts(&raw)?)
        }
        None => Ok(default_topic_drafts()?),
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

async fn run_ui(args: UiArgs) -> Result<(), Box<dyn std::error::Error>> {
    prepare_sqlite_file(&args.db_url)?;
    let tutorials = AppServices::load_tutorials(args.tutorials.as_deref())?;
    let services = AppServices::new_sqlite(&args.db_url, Clock::system(), tutorials).await?;
    tracing::info!(db = %args.db_url, "launching desktop ui");

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
    let context = build_app_context(&app);

    // Some dev setups default tao windows to always-on-top.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Topic Tracker")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

async fn run_seed(args: SeedArgs) -> Result<(), Box<dyn std::error::Error>> {
    prepare_sqlite_file(&args.db_url)?;
    let drafts = load_topic_drafts(args.topics.as_ref())?;
    let storage = Storage::sqlite(&args.db_url).await?;
    let service = TopicService::new(Clock::system(), Arc::clone(&storage.topics));
    let imported = service.import_topics(drafts).await?;
    tracing::info!(db = %args.db_url, imported, "seed complete");
    Ok(())
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // No subcommand means ui.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            print_usage();
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("unknown subcommand: {first}"),
            )
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    // The error itself is reported once, by `main`.
    let report = |e: ArgsError| {
        print_usage();
        e
    };

    match cmd {
        Command::Ui => {
            let tutorials = std::env::var("TOPICS_TUTORIALS_FILE")
                .ok()
                .filter(|value| !value.trim().is_empty())
                .map(PathBuf::from);
            let args = UiArgs::parse(&mut iter, env_db_url(), tutorials).map_err(report)?;
            run_ui(args).await
        }
        Command::Seed => {
            let args = SeedArgs::parse(&mut iter, env_db_url()).map_err(report)?;
            run_seed(args).await
        }
    }
}

#[tokio::main]
async fn main() {
    init_tracing();
    if let Err(err) = run().await {
        report_failure(err.as_ref());
        std::process::exit(2);
    }
}

fn report_failure(err: &dyn std::error::Error) {
    tracing::error!(error = %err, "app failed");
}
