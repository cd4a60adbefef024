//! Gallery sampling for side-strips.
//!
//! Detail pages show a small random sample of listed add-ons of one type
//! (e.g. "more themes like these"). The sample is memoized through the
//! injected [`SampleCache`] so every request in a rotation period sees
//! the same strip; the seed decides when it changes.

use catalog::{Addon, AddonId, AddonType, Application, CatalogIndex};
use listing::SampleCache;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use tracing::debug;

pub struct GallerySampler {
    index: Arc<CatalogIndex>,
    cache: SampleCache<Vec<AddonId>>,
    seed: u64,
}

impl GallerySampler {
    pub fn new(index: Arc<CatalogIndex>, seed: u64) -> Self {
        Self {
            index,
            cache: SampleCache::new(),
            seed,
        }
    }

    /// Up to `limit` random listed add-ons of `addon_type` for `app`.
    ///
    /// The ID sample is cached per (app, type, limit); add-on records are
    /// resolved fresh on every call so callers see current fields.
    pub fn sample(&self, app: Application, addon_type: AddonType, limit: usize) -> Vec<Addon> {
        let key = format!("gallery:{app:?}:{addon_type:?}:{limit}");
        let ids = self.cache.get_or_compute(&key, || {
            let listed: HashSet<AddonId> =
                self.index.listed(app).into_iter().map(|a| a.id).collect();

            // Start from the type index, which is far smaller than the
            // listed base on catalogs dominated by other types, then keep
            // only the IDs in the access-scoped base. Sorted so the
            // shuffle input doesn't depend on index iteration order.
            let mut ids: Vec<AddonId> = self
                .index
                .addons_of_type(addon_type)
                .iter()
                .copied()
                .filter(|id| listed.contains(id))
                .collect();
            ids.sort_unstable();

            let mut hasher = DefaultHasher::new();
            self.seed.hash(&mut hasher);
            key.hash(&mut hasher);
            let mut rng = StdRng::seed_from_u64(hasher.finish());
            ids.shuffle(&mut rng);
            ids.truncate(limit);

            debug!(key, sampled = ids.len(), "computed gallery sample");
            ids
        });

        ids.iter()
            .filter_map(|id| self.index.get_addon(*id))
            .cloned()
            .collect()
    }
}
