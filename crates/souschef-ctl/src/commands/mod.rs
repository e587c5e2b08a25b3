//! Command handlers for the Sous Chef CLI
//!
//! Each module handles a specific command group, delegating to `souschef-client` for API operations.

pub(crate) mod auth;
pub(crate) mod recipes;
pub(crate) mod runs;
pub(crate) mod system;

pub(crate) use auth::handle_auth_command;
pub(crate) use recipes::handle_recipe_command;
pub(crate) use runs::handle_run_command;
pub(crate) use system::handle_status_command;
