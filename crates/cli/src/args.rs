//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Translate global flags into `LoadOptions`.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not load configuration (see `dispatch` module).

use clap::{Parser, Subcommand};
use envloader::LoadOptions;
use envloader::constants::DEFAULT_ENV_FILE;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "envloader-cli")]
#[command(about = "Load database settings from the environment and derive the libSQL URL", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  envloader-cli url\n  envloader-cli --env-file config/prod.env check\n  envloader-cli --no-env-file show\n"
)]
pub struct Cli {
    /// Dotenv file merged into the environment before loading
    #[arg(long, global = true, env = "ENVLOADER_ENV_FILE", default_value = DEFAULT_ENV_FILE)]
    pub env_file: PathBuf,

    /// Do not read any dotenv file (overrides --env-file)
    #[arg(long, global = true)]
    pub no_env_file: bool,

    /// Treat settings without explicit guidance as optional
    #[arg(long, global = true)]
    pub optional_by_default: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the libSQL connection URL derived from DB_NAME, DB_TURSO_USER and DB_TOKEN
    Url {
        /// Print the auth token instead of masking it
        #[arg(long)]
        show_token: bool,
    },
    /// Check that DB_URL equals the derived connection URL
    Check,
    /// List each setting with its environment key
    Show,
}

impl Cli {
    /// Loader options selected by the global flags.
    pub fn load_options(&self) -> LoadOptions {
        let options = LoadOptions::new().with_required_by_default(!self.optional_by_default);
        if self.no_env_file {
            options.without_env_file()
        } else {
            options.with_env_file(&self.env_file)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_default_options() {
        let cli = Cli::try_parse_from(["envloader-cli", "url"]).unwrap();
        let options = cli.load_options();
        assert!(options.required_by_default);
        assert_eq!(options.env_file(), Some(Path::new(".env")));
    }

    #[test]
    fn test_no_env_file_flag() {
        let cli = Cli::try_parse_from(["envloader-cli", "--no-env-file", "check"]).unwrap();
        assert_eq!(cli.load_options().env_file(), None);
    }

    #[test]
    fn test_optional_by_default_flag() {
        let cli = Cli::try_parse_from(["envloader-cli", "show", "--optional-by-default"]).unwrap();
        assert!(!cli.load_options().required_by_default);
    }

    #[test]
    fn test_custom_env_file() {
        let cli = Cli::try_parse_from(["envloader-cli", "--env-file", "prod.env", "url"]).unwrap();
        assert_eq!(cli.load_options().env_file(), Some(Path::new("prod.env")));
    }
}
