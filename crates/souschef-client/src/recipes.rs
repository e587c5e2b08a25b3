//! Recipe operations.

use serde::Serialize;
use serde_json::Value;

use crate::client::KitchenClient;
use crate::error::{ClientError, ClientResult};
use crate::response::{ApiOutcome, OK_OR_FORBIDDEN};

#[derive(Debug, Serialize)]
struct StartRecipeParams<'a> {
    recipe_name: &'a str,
}

impl KitchenClient {
    /// Ask the Kitchen to start a new run of `recipe_name`.
    ///
    /// A 403 comes back as [`ApiOutcome::Forbidden`] with the service's
    /// explanation as the body.
    ///
    /// Blank names are rejected locally and the Kitchen is never contacted
    /// for them.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidInput`] for a blank recipe name.
    pub async fn start_recipe(&self, recipe_name: &str) -> ClientResult<ApiOutcome<Value>> {
        if recipe_name.trim().is_empty() {
            return Err(ClientError::InvalidInput(
                "Recipe name must not be empty".to_string(),
            ));
        }

        let params = StartRecipeParams { recipe_name };
        self.post("recipe/start", &params, OK_OR_FORBIDDEN, "json")
            .await
    }
}
