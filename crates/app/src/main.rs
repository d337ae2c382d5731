use std::fmt;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, Clock, MEMORY_DB_URL, QuizWorkflow, RestartOutcome, StorageBackend};
use tracing_subscriber::{EnvFilter, fmt as log_fmt};
use ui::{App, UiApp, build_app_context};
use ui::vm::status_label;
use yixiang_core::model::Category;
use yixiang_core::narrative::NarrativeTable;

const DEFAULT_DB_URL: &str = "sqlite://yixiang.sqlite3";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
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

struct DesktopApp {
    workflow: Arc<QuizWorkflow>,
}

impl UiApp for DesktopApp {
    fn workflow(&self) -> Arc<QuizWorkflow> {
        Arc::clone(&self.workflow)
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui     [--db <sqlite_url>] [--narratives <path.json>]");
    eprintln!("  cargo run -p app -- status [--db <sqlite_url>]");
    eprintln!("  cargo run -p app -- reset  [--db <sqlite_url>] [--yes]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db {DEFAULT_DB_URL}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  YIXIANG_DB_URL, YIXIANG_NARRATIVES, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Status,
    Reset,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "status" => Some(Self::Status),
            "reset" => Some(Self::Reset),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    db_url: String,
    narratives: Option<PathBuf>,
    assume_yes: bool,
}

impl Args {
    fn parse(cmd: Command, args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut db_url = std::env::var("YIXIANG_DB_URL")
            .ok()
            .map_or_else(|| DEFAULT_DB_URL.into(), normalize_sqlite_url);
        let mut narratives = std::env::var_os("YIXIANG_NARRATIVES").map(PathBuf::from);
        let mut assume_yes = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--narratives" => {
                    narratives = Some(PathBuf::from(require_value(args, "--narratives")?));
                }
                "--yes" | "-y" if cmd == Command::Reset => assume_yes = true,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            db_url,
            narratives,
            assume_yes,
        })
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == MEMORY_DB_URL || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = Path::new(&path_str);
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

    let path = Path::new(path);
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

/// Narratives are optional content; any problem leaves the table empty and cards fall back
/// to the basic layout.
fn load_narratives(path: Option<&Path>) -> NarrativeTable {
    let Some(path) = path else {
        return NarrativeTable::empty();
    };
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "cannot read narratives");
            return NarrativeTable::empty();
        }
    };
    match NarrativeTable::from_json(&raw) {
        Ok(table) => {
            tracing::info!(path = %path.display(), entries = table.len(), "loaded narratives");
            table
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "ignoring malformed narratives");
            NarrativeTable::empty()
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    log_fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

async fn print_status(workflow: &QuizWorkflow) -> Result<(), Box<dyn std::error::Error>> {
    let mut ctx = workflow.load().await;
    let snapshot = workflow.snapshot(&ctx);

    let mut out = io::stdout().lock();
    for category in Category::ALL {
        writeln!(out, "{}", category.label())?;
        for card in snapshot.cards(category) {
            writeln!(
                out,
                "  {} {}  {}",
                card.symbol,
                card.name,
                status_label(card.status)
            )?;
        }
    }
    writeln!(
        out,
        "已完成 {} / 共 {} 组",
        snapshot.overall.completed, snapshot.overall.total
    )?;

    let results = workflow.view_results(&mut ctx)?;
    writeln!(out, "达标的先天人性: {}", results.summary.natures_text())?;
    writeln!(out, "达标的后天人格: {}", results.summary.personalities_text())?;
    writeln!(out, "性格组合: 共 {} 种", results.summary.match_count)?;
    for combination in results.browser.items() {
        writeln!(out, "  {}", combination.full_name)?;
    }
    Ok(())
}

fn confirm_on_stdin(prompt: &str) -> io::Result<bool> {
    let mut stderr = io::stderr();
    write!(stderr, "{prompt} [y/N] ")?;
    stderr.flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}

async fn reset_progress(
    workflow: &QuizWorkflow,
    assume_yes: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut ctx = workflow.load().await;
    workflow.request_restart(&mut ctx);
    let confirmed = assume_yes || confirm_on_stdin("确定要重新开始吗?所有测试进度将被清除。")?;

    match workflow.resolve_restart(&mut ctx, confirmed).await {
        RestartOutcome::Reset { persisted: true } => println!("已清除所有测试进度。"),
        RestartOutcome::Reset { persisted: false } => {
            return Err(io::Error::other("failed to remove saved progress").into());
        }
        RestartOutcome::Cancelled | RestartOutcome::NotRequested => println!("已取消。"),
    }
    Ok(())
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: launching UI when no subcommand is provided.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with('-') => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            io::Error::new(io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with('-') {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = Args::parse(cmd, &mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    init_tracing();

    // Open + migrate SQLite at startup. Keep this in the binary glue so core/services stay pure.
    let backend = StorageBackend::from_db_url(&parsed.db_url);
    if let StorageBackend::Sqlite(db_url) = &backend {
        prepare_sqlite_file(db_url)?;
    }
    let narratives = load_narratives(parsed.narratives.as_deref());
    let services = AppServices::open(&backend, Clock::system(), narratives).await?;
    let workflow = services.workflow();

    match cmd {
        Command::Ui => {
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp { workflow });
            let context = build_app_context(app);

            // Dioxus/tao can default to an always-on-top window in some dev setups.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("易象心学测评")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Status => print_status(&workflow).await,
        Command::Reset => reset_progress(&workflow, parsed.assume_yes).await,
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(cmd: Command, args: &[&str]) -> Result<Args, ArgsError> {
        let mut iter = args.iter().map(|s| (*s).to_string());
        Args::parse(cmd, &mut iter)
    }

    #[test]
    fn memory_and_absolute_urls_pass_through() {
        assert_eq!(
            normalize_sqlite_url("sqlite::memory:".into()),
            "sqlite::memory:"
        );
        assert_eq!(
            normalize_sqlite_url("sqlite:///tmp/quiz.db".into()),
            "sqlite:///tmp/quiz.db"
        );
        assert_eq!(
            normalize_sqlite_url("sqlite:/tmp/quiz.db".into()),
            "sqlite:///tmp/quiz.db"
        );
    }

    #[test]
    fn memory_db_flag_routes_to_in_memory_store() {
        let args = parse(Command::Status, &["--db", "sqlite::memory:"]).unwrap();
        assert_eq!(StorageBackend::from_db_url(&args.db_url), StorageBackend::InMemory);

        let args = parse(Command::Status, &["--db", "sqlite:///tmp/quiz.db"]).unwrap();
        assert_eq!(
            StorageBackend::from_db_url(&args.db_url),
            StorageBackend::Sqlite("sqlite:///tmp/quiz.db".to_owned())
        );
    }

    #[test]
    fn yes_flag_only_applies_to_reset() {
        let args = parse(Command::Reset, &["--yes", "--db", "sqlite::memory:"]).unwrap();
        assert!(args.assume_yes);
        assert_eq!(args.db_url, "sqlite::memory:");

        assert!(matches!(
            parse(Command::Status, &["--yes"]),
            Err(ArgsError::UnknownArg(arg)) if arg == "--yes"
        ));
    }

    #[test]
    fn missing_values_are_reported() {
        assert!(matches!(
            parse(Command::Ui, &["--db"]),
            Err(ArgsError::MissingValue { flag: "--db" })
        ));
        assert!(matches!(
            parse(Command::Ui, &["--db", "  "]),
            Err(ArgsError::InvalidDbUrl { .. })
        ));
        let args = parse(Command::Ui, &["--narratives", "data/results.json"]).unwrap();
        assert_eq!(args.narratives, Some(PathBuf::from("data/results.json")));
    }

    #[test]
    fn unreadable_narratives_fall_back_to_empty() {
        let table = load_narratives(Some(Path::new("/nonexistent/yixiang/narratives.json")));
        assert!(table.is_empty());
        assert!(load_narratives(None).is_empty());
    }
}
