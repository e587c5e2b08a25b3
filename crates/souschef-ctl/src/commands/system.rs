//! Readiness command handler for the Sous Chef CLI

use souschef_client::{ClientConfig, ClientResult, KitchenClient, SystemStatus};

use crate::output;
use crate::OutputFormat;

pub(crate) async fn handle_status_command(
    config: &ClientConfig,
    format: OutputFormat,
) -> ClientResult<()> {
    let client = KitchenClient::new(config.clone())?;
    let status = client.fetch_system_status().await?;

    match format {
        OutputFormat::Json => output::json(&status),
        OutputFormat::Table => {
            output::table(&["System Name", "Status"], &status_rows(&status));
            if !status.all_ready() {
                output::blank();
                output::hint("Some Kitchen systems are not ready; new runs may be delayed.");
            }
        }
    }
    Ok(())
}

fn ready_label(ready: bool) -> &'static str {
    if ready {
        "Ready"
    } else {
        "Not Ready"
    }
}

fn status_rows(status: &SystemStatus) -> Vec<Vec<String>> {
    status
        .rows()
        .map(|(title, ready)| vec![title.to_string(), ready_label(ready).to_string()])
        .collect()
}
