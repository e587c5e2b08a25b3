//! Recipe command handlers for the Sous Chef CLI

use souschef_client::{ApiOutcome, ClientConfig, ClientError, ClientResult, KitchenClient};

use crate::catalog;
use crate::output;
use crate::RecipeCommands;

pub(crate) async fn handle_recipe_command(
    cmd: RecipeCommands,
    config: &ClientConfig,
) -> ClientResult<()> {
    match cmd {
        RecipeCommands::List { dir } => {
            let recipes = catalog::list_recipes(&dir)?;
            if recipes.is_empty() {
                output::warning(format!("No recipes found in {}", dir.display()));
                return Ok(());
            }

            let rows: Vec<Vec<String>> = recipes
                .into_iter()
                .map(|recipe| {
                    tracing::debug!(path = %recipe.path.display(), "Found recipe {}", recipe.name);
                    vec![recipe.name, recipe.description]
                })
                .collect();
            output::table(&["Recipe Name", "Description"], &rows);
        }
        RecipeCommands::Start { name } => {
            let client = KitchenClient::new(config.clone())?;

            match client.start_recipe(&name).await? {
                ApiOutcome::Ok(body) => {
                    output::success(format!("Recipe {name} started successfully."));
                    output::json(&body);
                }
                ApiOutcome::Forbidden(body) | ApiOutcome::Unavailable(body) => {
                    output::json(&body);
                    return Err(ClientError::AuthError(format!(
                        "Unable to start recipe {name}."
                    )));
                }
            }
        }
    }
    Ok(())
}
