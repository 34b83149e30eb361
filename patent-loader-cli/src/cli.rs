use clap::Parser;
use std::num::NonZeroUsize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "pp-load",
    about = "Plant patents batch loader for Fedora 4",
    version
)]
pub struct Cli {
    /// Path to the YAML (or TOML) config file
    #[arg(long, short = 'c')]
    pub config: PathBuf,

    /// Directory holding metadata.csv and the binaries; load.log is written
    /// there too. Overrides ASSET_DIR, METADATA_FILE and LOG_FILE.
    pub directory: Option<PathBuf>,

    /// Compute checksums and print payloads without contacting the repository
    #[arg(long)]
    pub dry_run: bool,

    /// Load at most this many rows (at least 1)
    #[arg(long, value_name = "N")]
    pub limit: Option<NonZeroUsize>,

    /// Do not check the REST endpoint before loading
    #[arg(long)]
    pub skip_connection_check: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output (also respects NO_COLOR env var)
    #[arg(long)]
    pub no_color: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_full_invocation() {
        let cli = Cli::try_parse_from([
            "pp-load",
            "-c",
            "batch.yml",
            "/data/patents",
            "--dry-run",
            "--limit",
            "3",
        ])
        .unwrap();
        assert_eq!(cli.config, PathBuf::from("batch.yml"));
        assert_eq!(cli.directory, Some(PathBuf::from("/data/patents")));
        assert!(cli.dry_run);
        assert_eq!(cli.limit, NonZeroUsize::new(3));
        assert!(!cli.skip_connection_check);
    }

    #[test]
    fn test_config_is_required() {
        assert!(Cli::try_parse_from(["pp-load"]).is_err());
    }

    #[test]
    fn test_zero_limit_is_rejected_at_parse_time() {
        let err = Cli::try_parse_from(["pp-load", "-c", "batch.yml", "--limit", "0"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        assert!(err.to_string().contains("--limit"));

        assert!(Cli::try_parse_from(["pp-load", "-c", "batch.yml", "--limit", "-2"]).is_err());
    }
}
