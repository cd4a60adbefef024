//! Core domain types for the add-on catalog.
//!
//! This module defines the records the rest of the workspace works with:
//! add-ons, their versions, and the in-memory `CatalogIndex` that holds
//! and indexes them.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for an add-on
pub type AddonId = u32;

// =============================================================================
// Enumerations
// =============================================================================

/// Client applications the marketplace serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Application {
    Firefox,
    Thunderbird,
    Seamonkey,
    Sunbird,
    Mobile,
}

/// Kinds of add-ons in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddonType {
    Extension,
    Theme,
    Dictionary,
    SearchTool,
    LanguagePack,
    Plugin,
}

/// Review status of an add-on.
///
/// Only `Public` add-ons are ever shown on listing pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddonStatus {
    Incomplete,
    Unreviewed,
    Pending,
    Nominated,
    Public,
    Disabled,
}

// =============================================================================
// Records
// =============================================================================

/// A single add-on in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Addon {
    pub id: AddonId,
    /// URL-safe identifier, unique alongside `id`
    pub slug: String,
    pub name: String,
    pub addon_type: AddonType,
    pub status: AddonStatus,
    /// Whether the author opted into public listing pages
    pub listed: bool,
    /// Applications this add-on declares support for
    pub apps: Vec<Application>,
    pub weekly_downloads: u64,
    /// Bayesian-smoothed review average in [0, 5]
    pub bayesian_rating: f32,
    /// Unix timestamp of first upload
    pub created: i64,
    /// Unix timestamp of the newest file change
    pub last_updated: i64,
}

/// A released version of an add-on, with per-application compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Version {
    pub addon_id: AddonId,
    /// Dotted version string, e.g. "2.0.3"
    pub version: String,
    pub app: Application,
    /// Lowest compatible application version (inclusive)
    pub min_app_version: String,
    /// Highest compatible application version (inclusive, "1.5.*" style
    /// wildcards allowed)
    pub max_app_version: String,
    /// Mirror URL of the packaged file
    pub url: String,
}

/// A curated featured entry: the IDs to rotate for one (app, locale) pair.
///
/// An empty `locale` marks an entry that applies to every locale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeaturedEntry {
    pub app: Application,
    pub locale: String,
    pub addon_ids: Vec<AddonId>,
}

// =============================================================================
// CatalogIndex - The In-Memory Catalog
// =============================================================================

/// Holds all catalog data and the indices used by listing pages.
///
/// Accessors return borrows; mutators are only used while loading.
#[derive(Debug, Default)]
pub struct CatalogIndex {
    // Primary store
    pub(crate) addons: HashMap<AddonId, Addon>,

    // Versions per add-on, in upload order
    pub(crate) versions: HashMap<AddonId, Vec<Version>>,

    // Secondary indices for listing queries
    pub(crate) app_index: HashMap<Application, Vec<AddonId>>,
    pub(crate) type_index: HashMap<AddonType, Vec<AddonId>>,

    // Curated featured configuration
    pub(crate) featured: Vec<FeaturedEntry>,
}

impl CatalogIndex {
    /// Creates a new, empty CatalogIndex.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get an add-on by ID.
    pub fn get_addon(&self, id: AddonId) -> Option<&Addon> {
        self.addons.get(&id)
    }

    /// Get an add-on by slug.
    ///
    /// Slugs are rare lookups (detail pages), so this is a scan rather
    /// than a dedicated index.
    pub fn get_addon_by_slug(&self, slug: &str) -> Option<&Addon> {
        self.addons.values().find(|a| a.slug == slug)
    }

    /// All versions of an add-on, in upload order.
    ///
    /// Returns an empty slice if the add-on has no versions.
    pub fn get_versions(&self, addon_id: AddonId) -> &[Version] {
        self.versions
            .get(&addon_id)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// IDs of all add-ons declaring support for an application.
    pub fn addons_for_app(&self, app: Application) -> &[AddonId] {
        self.app_index
            .get(&app)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// IDs of all add-ons of a given type.
    pub fn addons_of_type(&self, addon_type: AddonType) -> &[AddonId] {
        self.type_index
            .get(&addon_type)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// All curated featured entries.
    pub fn featured_entries(&self) -> &[FeaturedEntry] {
        &self.featured
    }

    /// The access-scoped base collection for listing pages: public,
    /// listed add-ons supporting `app`.
    ///
    /// Results are cloned out so callers get a stable snapshot of the
    /// base; every tab of a listing page is computed from the same
    /// snapshot. Ordered by ID so repeated fetches are deterministic.
    pub fn listed(&self, app: Application) -> Vec<Addon> {
        let mut ids: Vec<AddonId> = self.addons_for_app(app).to_vec();
        ids.sort_unstable();
        ids.iter()
            .filter_map(|id| self.addons.get(id))
            .filter(|a| a.listed && a.status == AddonStatus::Public)
            .cloned()
            .collect()
    }

    /// Like [`listed`](Self::listed), excluding one add-on type.
    ///
    /// The homepage uses this to keep themes off the main tabs.
    pub fn listed_excluding(&self, app: Application, excluded: AddonType) -> Vec<Addon> {
        self.listed(app)
            .into_iter()
            .filter(|a| a.addon_type != excluded)
            .collect()
    }

    // Mutators - used during loading

    /// Insert an add-on into the index.
    pub fn insert_addon(&mut self, addon: Addon) {
        self.addons.insert(addon.id, addon);
    }

    /// Insert a version, keeping upload order per add-on.
    pub fn insert_version(&mut self, version: Version) {
        self.versions
            .entry(version.addon_id)
            .or_default()
            .push(version);
    }

    /// Insert a curated featured entry.
    pub fn insert_featured(&mut self, entry: FeaturedEntry) {
        self.featured.push(entry);
    }

    /// Get counts for debugging/validation.
    pub fn counts(&self) -> (usize, usize, usize) {
        let total_versions = self.versions.values().map(|v| v.len()).sum();
        (self.addons.len(), total_versions, self.featured.len())
    }
}
