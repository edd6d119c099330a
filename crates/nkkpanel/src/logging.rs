use clap::ValueEnum;
use tracing_subscriber::EnvFilter;

/// Used when neither `--log-level` nor `RUST_LOG` says otherwise.
const DEFAULT_DIRECTIVES: &str = "info";

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Pick the filter directives: an explicit level wins, then `RUST_LOG`.
fn filter_directives(level: Option<LogLevel>, rust_log: Option<&str>) -> String {
    match (level, rust_log.map(str::trim)) {
        (Some(level), _) => level.as_directive().to_string(),
        (None, Some(env)) if !env.is_empty() => env.to_string(),
        _ => DEFAULT_DIRECTIVES.to_string(),
    }
}

/// Install the stderr subscriber. Stdout stays reserved for command output.
///
/// Without `--log-level`, per-target directives can be given through
/// `RUST_LOG` (e.g. `nkkpanel_session=trace`).
pub fn init_logging(format: LogFormat, level: Option<LogLevel>) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directives = filter_directives(level, rust_log.as_deref());
    let filter =
        EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

    let builder = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(level.is_none() && rust_log.is_some());

    match format {
        LogFormat::Text => {
            let _ = builder.try_init();
        }
        LogFormat::Json => {
            let _ = builder.json().try_init();
        }
    }
}
