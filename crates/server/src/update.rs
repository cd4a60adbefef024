//! Update-check resolution for client software.
//!
//! Given an add-on, the client's application and its version, resolve
//! the newest compatible add-on version and where to fetch it. Anything
//! unresolvable — unknown add-on, disabled add-on, no compatible version
//! — yields `None`, which the feed renders as an empty reply; the
//! update check never errors at a client.

use catalog::{
    current_version_for_client, AddonId, AddonStatus, Application, CatalogIndex,
};
use std::sync::Arc;
use tracing::debug;

/// A resolved update: what to install and from where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateHit {
    pub addon_id: AddonId,
    pub version: String,
    pub min_app_version: String,
    pub max_app_version: String,
    pub url: String,
}

pub struct UpdateService {
    index: Arc<CatalogIndex>,
}

impl UpdateService {
    pub fn new(index: Arc<CatalogIndex>) -> Self {
        Self { index }
    }

    /// Resolve the newest version of `addon_id` compatible with
    /// `app`/`app_version`.
    pub fn check(
        &self,
        addon_id: AddonId,
        app: Application,
        app_version: &str,
    ) -> Option<UpdateHit> {
        let addon = self.index.get_addon(addon_id)?;
        if addon.status == AddonStatus::Disabled {
            debug!(addon_id, "update check against disabled add-on");
            return None;
        }

        let versions = self.index.get_versions(addon_id);
        let hit = current_version_for_client(versions, app, app_version)?;
        Some(UpdateHit {
            addon_id,
            version: hit.version.clone(),
            min_app_version: hit.min_app_version.clone(),
            max_app_version: hit.max_app_version.clone(),
            url: hit.url.clone(),
        })
    }
}
