use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use course_core::model::CourseId;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, CatalogSource, Clock, CourseListing, ProgressService};
use ui::{App, UiApp, build_app_context};

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidCourseId { raw: String },
    MissingCourseId,
    InvalidDbUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidCourseId { raw } => write!(f, "invalid --course-id value: {raw}"),
            ArgsError::MissingCourseId => write!(f, "--course-id is required"),
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
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn progress(&self) -> Arc<ProgressService> {
        self.services.progress()
    }

    fn listing(&self) -> CourseListing {
        self.services.listing()
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui       [--db <sqlite_url>] [--catalog <path.json>]");
    eprintln!("  cargo run -p app -- progress --course-id <id> [--db <sqlite_url>] [--catalog <path.json>]");
    eprintln!("  cargo run -p app -- reset    --course-id <id> [--db <sqlite_url>] [--catalog <path.json>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db sqlite:courses.sqlite3");
    eprintln!("  --catalog <built-in courses>");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  COURSES_DB_URL, COURSES_CATALOG, COURSES_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Progress,
    Reset,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "progress" => Some(Self::Progress),
            "reset" => Some(Self::Reset),
            _ => None,
        }
    }

    fn needs_course_id(self) -> bool {
        matches!(self, Self::Progress | Self::Reset)
    }
}

/// Values taken from the environment before flags override them.
#[derive(Debug, Default)]
struct EnvDefaults {
    db_url: Option<String>,
    catalog: Option<String>,
}

impl EnvDefaults {
    fn from_env() -> Self {
        Self {
            db_url: std::env::var("COURSES_DB_URL").ok(),
            catalog: std::env::var("COURSES_CATALOG").ok(),
        }
    }
}

#[derive(Debug)]
struct Args {
    db_url: String,
    catalog: CatalogSource,
    course_id: Option<CourseId>,
}

impl Args {
    fn parse(
        cmd: Command,
        args: &mut impl Iterator<Item = String>,
        env: EnvDefaults,
    ) -> Result<Self, ArgsError> {
        let mut db_url = env
            .db_url
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| normalize_sqlite_url("courses.sqlite3".into()), normalize_sqlite_url);
        let mut catalog = env
            .catalog
            .filter(|value| !value.trim().is_empty())
            .map_or(CatalogSource::Builtin, |path| {
                CatalogSource::File(PathBuf::from(path))
            });
        let mut course_id = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--catalog" => {
                    let value = require_value(args, "--catalog")?;
                    catalog = CatalogSource::File(PathBuf::from(value));
                }
                "--course-id" => {
                    let value = require_value(args, "--course-id")?;
                    let parsed: CourseId = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidCourseId { raw: value.clone() })?;
                    course_id = Some(parsed);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        if cmd.needs_course_id() && course_id.is_none() {
            return Err(ArgsError::MissingCourseId);
        }

        Ok(Self {
            db_url,
            catalog,
            course_id,
        })
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

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_env("COURSES_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // No subcommand launches the UI.
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
    let parsed = Args::parse(cmd, &mut iter, EnvDefaults::from_env()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    prepare_sqlite_file(&parsed.db_url)?;
    let services =
        AppServices::new_sqlite(&parsed.db_url, Clock::default_clock(), &parsed.catalog).await?;
    tracing::info!(
        db = %parsed.db_url,
        courses = services.catalog().len(),
        ?cmd,
        "services ready"
    );

    match (cmd, parsed.course_id) {
        (Command::Progress, Some(course_id)) => {
            let progress = services.progress().open(course_id).await?;
            println!(
                "{}/{} ({}%)",
                progress.completed_count(),
                progress.module_count(),
                progress.progress_percent()
            );
            Ok(())
        }
        (Command::Reset, Some(course_id)) => {
            services.progress().clear_stored(course_id).await?;
            println!("progress cleared for course {course_id}");
            Ok(())
        }
        (Command::Progress | Command::Reset, None) => Err(ArgsError::MissingCourseId.into()),
        (Command::Ui, _) => {
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
            let context = build_app_context(&app);

            // Some dev setups default to an always-on-top window; turn it off explicitly.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Psychology courses")
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

#[tokio::main]
async fn main() {
    init_tracing();
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
