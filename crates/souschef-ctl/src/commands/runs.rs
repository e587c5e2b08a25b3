//! Run command handlers for the Sous Chef CLI

use serde_json::Value;
use souschef_client::{ApiOutcome, ClientConfig, ClientError, ClientResult, KitchenClient, RunAction};

use crate::output;
use crate::{OutputFormat, RunCommands};

pub(crate) async fn handle_run_command(cmd: RunCommands, config: &ClientConfig) -> ClientResult<()> {
    let client = KitchenClient::new(config.clone())?;

    match cmd {
        RunCommands::List { all, format } => {
            let outcome = if all {
                client.fetch_all_runs().await?
            } else {
                client.fetch_active_runs().await?
            };
            show(outcome, format);
        }
        RunCommands::Inspect { id, format } => {
            let outcome = client.fetch_run_by_id(&id).await?;
            show(outcome, format);
        }
        RunCommands::Cancel { recipe, id } => {
            control(&client, RunAction::Cancel, &recipe, &id).await?;
        }
        RunCommands::Pause { recipe, id } => {
            control(&client, RunAction::Pause, &recipe, &id).await?;
        }
        RunCommands::Resume { recipe, id } => {
            control(&client, RunAction::Resume, &recipe, &id).await?;
        }
    }
    Ok(())
}

async fn control(
    client: &KitchenClient,
    action: RunAction,
    recipe: &str,
    run_id: &str,
) -> ClientResult<()> {
    output::dim(format!("Requesting {action} of run {run_id} ({recipe})..."));

    match client.control_run(action, recipe, run_id).await? {
        ApiOutcome::Ok(body) => {
            output::success(format!("Run {run_id}: {action} accepted"));
            output::json(&body);
            Ok(())
        }
        ApiOutcome::Forbidden(body) | ApiOutcome::Unavailable(body) => {
            output::json(&body);
            Err(ClientError::AuthError(format!(
                "Unable to {action} run {run_id}"
            )))
        }
    }
}

fn show(outcome: ApiOutcome<Value>, format: OutputFormat) {
    if outcome.is_forbidden() {
        output::warning("Access denied by the Kitchen API:");
    }
    let body = outcome.into_inner();

    match format {
        OutputFormat::Json => output::json(&body),
        OutputFormat::Table => match runs_table(&body) {
            Some((headers, rows)) => {
                let headers: Vec<&str> = headers.iter().map(String::as_str).collect();
                output::table(&headers, &rows);
            }
            None => output::json(&body),
        },
    }
}

/// Flatten a run listing into table columns.
///
/// Columns are the scalar keys of the first run, in order. Returns `None`
/// when the body is not a non-empty list of objects (or a single object).
fn runs_table(body: &Value) -> Option<(Vec<String>, Vec<Vec<String>>)> {
    let runs: Vec<&serde_json::Map<String, Value>> = match body {
        Value::Array(items) => items.iter().map(Value::as_object).collect::<Option<_>>()?,
        Value::Object(map) => vec![map],
        _ => return None,
    };

    let headers: Vec<String> = runs
        .first()?
        .iter()
        .filter(|(_, v)| !v.is_array() && !v.is_object())
        .map(|(k, _)| k.clone())
        .collect();
    if headers.is_empty() {
        return None;
    }

    let rows = runs
        .iter()
        .map(|run| {
            headers
                .iter()
                .map(|key| run.get(key).map(cell).unwrap_or_default())
                .collect()
        })
        .collect();

    Some((headers, rows))
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
