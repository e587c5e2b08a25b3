//! Typed response bodies for the structured Kitchen endpoints.

use serde::{Deserialize, Serialize};

/// Accessor for one readiness flag of [`SystemStatus`].
pub type StatusAccessor = fn(&SystemStatus) -> bool;

/// Readiness of the Kitchen backend and the services it depends on.
///
/// The default value (everything `false`) doubles as the "could not reach the
/// service" answer of [`crate::KitchenClient::fetch_system_status`]. It is
/// indistinguishable from a real report in which every subsystem is down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemStatus {
    pub kitchen_api_ready: bool,
    pub prefect_cloud_ready: bool,
    pub prefect_work_pool_ready: bool,
    pub prefect_workers_ready: bool,
}

impl SystemStatus {
    /// Readiness flags in display order: (field name, title, accessor).
    pub const FIELDS: [(&'static str, &'static str, StatusAccessor); 4] = [
        ("kitchen_api_ready", "Sous Chef Kitchen API", |s| s.kitchen_api_ready),
        ("prefect_cloud_ready", "Prefect Cloud", |s| s.prefect_cloud_ready),
        ("prefect_work_pool_ready", "Prefect Work Pool", |s| s.prefect_work_pool_ready),
        ("prefect_workers_ready", "Prefect Workers", |s| s.prefect_workers_ready),
    ];

    /// Iterate `(title, ready)` pairs in display order.
    pub fn rows(&self) -> impl Iterator<Item = (&'static str, bool)> + '_ {
        Self::FIELDS
            .into_iter()
            .map(move |(_, title, accessor)| (title, accessor(self)))
    }

    /// Title for a field name, if the field exists.
    pub fn title_of(field: &str) -> Option<&'static str> {
        Self::FIELDS
            .into_iter()
            .find(|(name, _, _)| *name == field)
            .map(|(_, title, _)| title)
    }

    #[must_use]
    pub fn all_ready(&self) -> bool {
        self.rows().all(|(_, ready)| ready)
    }
}

/// Result of checking the configured credentials against Media Cloud and
/// Sous Chef.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthStatus {
    pub authorized: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_cloud_authorized: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sous_chef_authorized: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
