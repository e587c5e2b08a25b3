//! `souschef`: browse recipes, manage runs and check the Sous Chef Kitchen
//! from the command line.

mod catalog;
mod commands;
mod credentials;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use souschef_client::config::{
    DEFAULT_API_BASE_URL, DEFAULT_API_USER_AGENT, DEFAULT_TIMEOUT_MS, ENV_AUTH_EMAIL,
    ENV_AUTH_KEY, ENV_BASE_URL, ENV_TIMEOUT_MS, ENV_USER_AGENT,
};
use souschef_client::{ClientConfig, ClientResult};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "souschef",
    version,
    about = "Interact with the Sous Chef Buffet via the command line",
    styles = output::clap_styles()
)]
struct Cli {
    /// Media Cloud API auth email
    #[arg(long, global = true, env = ENV_AUTH_EMAIL, hide_env_values = true)]
    auth_email: Option<String>,

    /// Media Cloud API auth key
    #[arg(long, global = true, env = ENV_AUTH_KEY, hide_env_values = true)]
    auth_key: Option<String>,

    /// Kitchen API base URL (keep the trailing slash)
    #[arg(long, global = true, env = ENV_BASE_URL, default_value = DEFAULT_API_BASE_URL)]
    base_url: String,

    #[arg(long, global = true, env = ENV_USER_AGENT, default_value = DEFAULT_API_USER_AGENT)]
    user_agent: String,

    /// Request timeout in milliseconds
    #[arg(long, global = true, env = ENV_TIMEOUT_MS, default_value_t = DEFAULT_TIMEOUT_MS)]
    timeout_ms: u64,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn client_config(&self) -> ClientConfig {
        ClientConfig {
            auth_email: non_empty(self.auth_email.as_deref()),
            auth_key: non_empty(self.auth_key.as_deref()),
            base_url: self.base_url.clone(),
            user_agent: self.user_agent.clone(),
            timeout_ms: self.timeout_ms,
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Commands for viewing and starting recipes
    #[command(subcommand)]
    Recipes(RecipeCommands),

    /// Commands for managing runs of recipes
    #[command(subcommand)]
    Runs(RunCommands),

    /// Cache Media Cloud API credentials
    Auth {
        /// Skip checking the credentials against the Kitchen before caching
        #[arg(long)]
        no_validate: bool,

        /// .env file to write (default: nearest .env, else prompt)
        #[arg(long)]
        env_file: Option<PathBuf>,
    },

    /// Check whether the Sous Chef Kitchen API is available and ready
    Status {
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
}

#[derive(Debug, Subcommand)]
pub(crate) enum RecipeCommands {
    /// List available recipes
    List {
        /// Directory holding one folder per recipe
        #[arg(long, env = catalog::ENV_RECIPES_DIR, default_value = catalog::DEFAULT_RECIPES_DIR)]
        dir: PathBuf,
    },

    /// Start a Sous Chef recipe
    Start {
        /// Recipe name
        name: String,
    },
}

#[derive(Debug, Subcommand)]
pub(crate) enum RunCommands {
    /// List currently executing or queued runs
    List {
        /// Include all runs, not just current ones
        #[arg(long)]
        all: bool,

        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },

    /// Inspect the details of one run
    Inspect {
        /// Run ID
        id: String,

        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },

    /// Cancel a run
    Cancel { recipe: String, id: String },

    /// Pause a run
    Pause { recipe: String, id: String },

    /// Resume a paused run
    Resume { recipe: String, id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Table,
    Json,
}

fn init_tracing(verbose: bool) {
    let default_directives = if verbose {
        "souschef=debug,souschef_client=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> ClientResult<()> {
    let config = cli.client_config();

    match cli.command {
        Commands::Recipes(cmd) => commands::handle_recipe_command(cmd, &config).await,
        Commands::Runs(cmd) => commands::handle_run_command(cmd, &config).await,
        Commands::Auth {
            no_validate,
            env_file,
        } => commands::handle_auth_command(&config, !no_validate, env_file).await,
        Commands::Status { format } => commands::handle_status_command(&config, format).await,
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Cached credentials live in .env; load them before clap reads the environment.
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match dotenv {
        Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env"),
        Err(e) if e.not_found() => tracing::debug!("No .env file found"),
        Err(e) => tracing::warn!(error = %e, "Failed to load .env"),
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(format!("Error: {e}"));
            ExitCode::FAILURE
        }
    }
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
    fn test_parse_runs_list_all() {
        let cli = Cli::try_parse_from(["souschef", "runs", "list", "--all"]).unwrap();
        match cli.command {
            Commands::Runs(RunCommands::List { all, format }) => {
                assert!(all);
                assert_eq!(format, OutputFormat::Json);
            }
            other => panic!("Unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_recipe_start_requires_name() {
        assert!(Cli::try_parse_from(["souschef", "recipes", "start"]).is_err());
        let cli = Cli::try_parse_from(["souschef", "recipes", "start", "pasta"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Recipes(RecipeCommands::Start { ref name }) if name == "pasta"
        ));
    }

    #[test]
    fn test_client_config_from_flags() {
        let cli = Cli::try_parse_from([
            "souschef",
            "--auth-email",
            "chef@example.org",
            "--auth-key",
            " ",
            "--base-url",
            "http://localhost:8000/api/",
            "status",
        ])
        .unwrap();
        let config = cli.client_config();
        assert_eq!(config.auth_email.as_deref(), Some("chef@example.org"));
        assert!(config.auth_key.is_none());
        assert_eq!(config.base_url, "http://localhost:8000/api/");
    }
}
