//! # Sous Chef Kitchen API client
//!
//! Async client for the Sous Chef Kitchen orchestration service. It turns a
//! small set of domain actions (list runs, start a recipe, control a run,
//! check credentials, check readiness) into authenticated HTTP requests and
//! maps the answers onto typed results.
//!
//! ```no_run
//! use souschef_client::{ApiOutcome, ClientConfig, KitchenClient};
//!
//! # async fn example() -> Result<(), souschef_client::ClientError> {
//! let client = KitchenClient::new(ClientConfig::from_env())?;
//! match client.start_recipe("pasta").await? {
//!     ApiOutcome::Ok(body) => println!("started: {body}"),
//!     ApiOutcome::Forbidden(body) => println!("denied: {body}"),
//!     ApiOutcome::Unavailable(body) => println!("kitchen not ready: {body}"),
//! }
//! # Ok(())
//! # }
//! ```

mod client;
pub mod config;
pub mod error;
pub mod models;
mod recipes;
mod response;
mod runs;
pub mod session;
mod system;

pub use client::KitchenClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use models::{AuthStatus, SystemStatus};
pub use response::ApiOutcome;
pub use runs::RunAction;
pub use session::Session;
