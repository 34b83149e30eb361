use colored::Colorize;
use patent_fcrepo::FcrepoError;
use std::fmt;
use std::process;

/// Exit code for batch-level failures; clap exits with 2 on usage errors.
pub const EXIT_ERROR: i32 = 1;

/// Unified error type for batch-level failures.
///
/// Per-item problems never become a `CliError`; they are reported as
/// item outcomes and the batch moves on.
pub enum CliError {
    /// Configuration file missing, unreadable, or incomplete.
    Config(String),
    /// Metadata file or asset directory unusable.
    Input(String),
    /// Repository unreachable at startup.
    Remote(String),
    /// Load log could not be written.
    Log(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(msg) => write!(f, "{} {msg}", "error:".red().bold()),
            CliError::Input(msg) => write!(f, "{} {msg}", "error:".red().bold()),
            CliError::Remote(msg) => write!(
                f,
                "{} {msg}\n  {} check REST_ENDPOINT, FEDORA_USER and FEDORA_PASSWORD, \
                 or pass --skip-connection-check",
                "error:".red().bold(),
                "help:".cyan().bold(),
            ),
            CliError::Log(msg) => write!(f, "{} load log: {msg}", "error:".red().bold()),
        }
    }
}

impl fmt::Debug for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl From<serde_yaml::Error> for CliError {
    fn from(e: serde_yaml::Error) -> Self {
        CliError::Config(format!("YAML parse error: {e}"))
    }
}

impl From<toml::de::Error> for CliError {
    fn from(e: toml::de::Error) -> Self {
        CliError::Config(format!("TOML parse error: {e}"))
    }
}

impl From<FcrepoError> for CliError {
    fn from(e: FcrepoError) -> Self {
        match e {
            FcrepoError::Http(msg) => CliError::Config(format!("HTTP client: {msg}")),
            other => CliError::Remote(other.to_string()),
        }
    }
}

/// Print error and exit with the appropriate code.
pub fn exit_with_error(err: CliError) -> ! {
    eprintln!("{err}");
    process::exit(EXIT_ERROR)
}

pub type CliResult<T> = std::result::Result<T, CliError>;
