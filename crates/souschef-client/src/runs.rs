//! Run listing, inspection and lifecycle control.

use std::fmt::Display;

use serde::Serialize;
use serde_json::Value;

use crate::client::KitchenClient;
use crate::error::ClientResult;
use crate::response::{ApiOutcome, OK_OR_FORBIDDEN};

/// Query parameters for the run lifecycle endpoints.
#[derive(Debug, Serialize)]
struct RunControlParams<'a> {
    recipe_name: &'a str,
    run_id: String,
}

/// Lifecycle actions the Kitchen accepts for an existing run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunAction {
    Cancel,
    Pause,
    Resume,
}

impl RunAction {
    pub fn path(self) -> &'static str {
        match self {
            Self::Cancel => "runs/cancel",
            Self::Pause => "runs/pause",
            Self::Resume => "runs/resume",
        }
    }
}

impl std::fmt::Display for RunAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cancel => write!(f, "cancel"),
            Self::Pause => write!(f, "pause"),
            Self::Resume => write!(f, "resume"),
        }
    }
}

impl KitchenClient {
    /// Fetch every run the Kitchen knows about.
    pub async fn fetch_all_runs(&self) -> ClientResult<ApiOutcome<Value>> {
        self.get("runs/all", OK_OR_FORBIDDEN, "json").await
    }

    /// Fetch runs that are executing or queued.
    pub async fn fetch_active_runs(&self) -> ClientResult<ApiOutcome<Value>> {
        self.get("runs/active", OK_OR_FORBIDDEN, "json").await
    }

    /// Fetch one run. `run_id` may be a string or a `uuid::Uuid`.
    pub async fn fetch_run_by_id(&self, run_id: impl Display) -> ClientResult<ApiOutcome<Value>> {
        self.get(&format!("run/{run_id}"), OK_OR_FORBIDDEN, "json")
            .await
    }

    pub async fn cancel_recipe(
        &self,
        recipe_name: &str,
        run_id: impl Display,
    ) -> ClientResult<ApiOutcome<Value>> {
        self.control_run(RunAction::Cancel, recipe_name, run_id)
            .await
    }

    pub async fn pause_recipe(
        &self,
        recipe_name: &str,
        run_id: impl Display,
    ) -> ClientResult<ApiOutcome<Value>> {
        self.control_run(RunAction::Pause, recipe_name, run_id)
            .await
    }

    pub async fn resume_recipe(
        &self,
        recipe_name: &str,
        run_id: impl Display,
    ) -> ClientResult<ApiOutcome<Value>> {
        self.control_run(RunAction::Resume, recipe_name, run_id)
            .await
    }

    /// Send a lifecycle action for `run_id` of `recipe_name`.
    pub async fn control_run(
        &self,
        action: RunAction,
        recipe_name: &str,
        run_id: impl Display,
    ) -> ClientResult<ApiOutcome<Value>> {
        let params = RunControlParams {
            recipe_name,
            run_id: run_id.to_string(),
        };
        self.post(action.path(), &params, OK_OR_FORBIDDEN, "json")
            .await
    }
}
