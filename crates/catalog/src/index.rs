//! CatalogIndex building and validation.
//!
//! Loading parses the three data files in parallel, builds the
//! per-application and per-type indices, and validates referential
//! integrity before the index is handed to the listing layer.

use crate::error::{CatalogError, Result};
use crate::parser;
use crate::types::*;
use std::path::Path;
use tracing::info;

impl CatalogIndex {
    /// Load the catalog from a data directory.
    ///
    /// Expects addons.dat, featured.dat and versions.dat (see the parser
    /// module for formats).
    pub fn load_from_files(data_dir: &Path) -> Result<Self> {
        let addons_path = data_dir.join("addons.dat");
        let featured_path = data_dir.join("featured.dat");
        let versions_path = data_dir.join("versions.dat");

        // Parse all three files in parallel; nested joins give three-way
        // parallelism.
        let ((addons, featured), versions) = rayon::join(
            || {
                rayon::join(
                    || parser::parse_addons(&addons_path),
                    || parser::parse_featured(&featured_path),
                )
            },
            || parser::parse_versions(&versions_path),
        );

        let addons = addons?;
        let featured = featured?;
        let versions = versions?;

        info!(
            addons = addons.len(),
            featured_entries = featured.len(),
            versions = versions.len(),
            "parsed catalog data files"
        );

        let mut index = CatalogIndex::new();
        for addon in addons {
            index.insert_addon(addon);
        }
        for entry in featured {
            index.insert_featured(entry);
        }
        for version in versions {
            index.insert_version(version);
        }

        index.build_secondary_indices();
        index.validate()?;

        info!("catalog index built and validated");
        Ok(index)
    }

    /// Build the per-application and per-type indices from the primary
    /// store. Called once after inserts; idempotent only on a fresh index.
    pub fn build_secondary_indices(&mut self) {
        for (addon_id, addon) in &self.addons {
            for &app in &addon.apps {
                self.app_index.entry(app).or_default().push(*addon_id);
            }
            self.type_index
                .entry(addon.addon_type)
                .or_default()
                .push(*addon_id);
        }
    }

    /// Validate referential integrity.
    ///
    /// - every version must belong to a known add-on
    /// - every featured ID must resolve to a known add-on
    /// - bayesian ratings must sit in [0, 5]
    pub fn validate(&self) -> Result<()> {
        for versions in self.versions.values() {
            for version in versions {
                if !self.addons.contains_key(&version.addon_id) {
                    return Err(CatalogError::MissingReference {
                        entity: "Addon".to_string(),
                        id: version.addon_id,
                    });
                }
            }
        }
        for entry in &self.featured {
            for id in &entry.addon_ids {
                if !self.addons.contains_key(id) {
                    return Err(CatalogError::MissingReference {
                        entity: "Addon".to_string(),
                        id: *id,
                    });
                }
            }
        }
        for addon in self.addons.values() {
            if !(0.0..=5.0).contains(&addon.bayesian_rating) {
                return Err(CatalogError::InvalidValue {
                    field: "bayesian_rating".to_string(),
                    value: addon.bayesian_rating.to_string(),
                });
            }
        }
        Ok(())
    }
}
