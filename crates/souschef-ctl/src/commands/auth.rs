//! Credential caching command handler for the Sous Chef CLI

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use souschef_client::config::{ENV_AUTH_EMAIL, ENV_AUTH_KEY};
use souschef_client::{ClientConfig, ClientError, ClientResult, KitchenClient};

use crate::credentials;
use crate::output;

const DEFAULT_ENV_PATH: &str = ".env";

pub(crate) async fn handle_auth_command(
    config: &ClientConfig,
    validate: bool,
    env_file: Option<PathBuf>,
) -> ClientResult<()> {
    let (email, new_email) = match config.email() {
        Some(email) => (email.to_string(), false),
        None => (prompt(&mut io::stdin().lock(), "Media Cloud API Auth Email", None)?, true),
    };
    let (key, new_key) = match config.key() {
        Some(key) => (key.to_string(), false),
        None => (prompt(&mut io::stdin().lock(), "Media Cloud API Auth Key", None)?, true),
    };

    if validate {
        let client = KitchenClient::new(config.clone().with_credentials(&email, &key))?;
        let status = client.validate_auth().await?;
        if !status.authorized {
            if let Some(message) = &status.message {
                output::dim(message);
            }
            return Err(ClientError::AuthError(
                "Unable to validate API credentials. Not caching.".to_string(),
            ));
        }
        output::success("Successfully validated API credentials.");
    }

    if new_email || new_key {
        let path = match env_file.or_else(current_dotenv) {
            Some(path) => path,
            None => PathBuf::from(prompt(
                &mut io::stdin().lock(),
                "Path to .env file",
                Some(DEFAULT_ENV_PATH),
            )?),
        };
        cache_credentials(&path, &email, &key)?;
        output::success("API credentials cached locally for future use.");
        output::label("  File", path.display());
    } else {
        output::hint("Credentials came from the environment; nothing to cache.");
    }

    Ok(())
}

fn current_dotenv() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    credentials::find_dotenv(&cwd)
}

fn cache_credentials(path: &Path, email: &str, key: &str) -> ClientResult<()> {
    credentials::set_key(path, ENV_AUTH_EMAIL, email)?;
    credentials::set_key(path, ENV_AUTH_KEY, key)?;
    Ok(())
}

/// Ask for a value until a non-empty one is given, or return `default` on an
/// empty answer when one is set.
fn prompt<R: BufRead>(input: &mut R, label: &str, default: Option<&str>) -> ClientResult<String> {
    loop {
        {
            let mut out = anstream::stderr().lock();
            match default {
                Some(default) => write!(out, "{label} [{default}]: ")?,
                None => write!(out, "{label}: ")?,
            }
            out.flush()?;
        }

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(ClientError::InvalidInput(format!(
                "No value given for {label}"
            )));
        }

        let answer = line.trim();
        if !answer.is_empty() {
            return Ok(answer.to_string());
        }
        if let Some(default) = default {
            return Ok(default.to_string());
        }
    }
}
