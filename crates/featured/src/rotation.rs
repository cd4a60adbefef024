//! Seeded rotation of the featured set.

use crate::registry::FeaturedRegistry;
use catalog::{AddonId, Application};
use listing::FeaturedSetProvider;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use tracing::debug;

/// Random-but-stable featured rotation.
///
/// Shuffles the registry's merged list with an RNG seeded from the
/// rotation seed plus (app, locale). Callers pick the seed's cadence —
/// e.g. the current day number for a daily rotation; the listing layer
/// only sees the resulting ID sequence.
#[derive(Debug, Clone)]
pub struct RotatingFeatured {
    registry: FeaturedRegistry,
    rotation_seed: u64,
}

impl RotatingFeatured {
    pub fn new(registry: FeaturedRegistry, rotation_seed: u64) -> Self {
        Self {
            registry,
            rotation_seed,
        }
    }

    fn shuffle_seed(&self, app: Application, locale: &str) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.rotation_seed.hash(&mut hasher);
        app.hash(&mut hasher);
        locale.hash(&mut hasher);
        hasher.finish()
    }
}

impl FeaturedSetProvider for RotatingFeatured {
    fn featured_ids(&self, app: Application, locale: &str) -> Vec<AddonId> {
        let mut ids = self.registry.ids_for(app, locale);
        let mut rng = StdRng::seed_from_u64(self.shuffle_seed(app, locale));
        ids.shuffle(&mut rng);
        debug!(?app, locale, count = ids.len(), "rotated featured set");
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::FeaturedEntry;

    fn registry(ids: &[AddonId]) -> FeaturedRegistry {
        FeaturedRegistry::from_entries(&[FeaturedEntry {
            app: Application::Firefox,
            locale: String::new(),
            addon_ids: ids.to_vec(),
        }])
    }

    #[test]
    fn test_rotation_is_stable_per_seed() {
        let provider = RotatingFeatured::new(registry(&[1, 2, 3, 4, 5, 6, 7, 8]), 42);

        let first = provider.featured_ids(Application::Firefox, "en-US");
        let second = provider.featured_ids(Application::Firefox, "en-US");
        assert_eq!(first, second);
    }

    #[test]
    fn test_rotation_keeps_the_same_members() {
        let provider = RotatingFeatured::new(registry(&[1, 2, 3, 4, 5]), 7);

        let mut ids = provider.featured_ids(Application::Firefox, "en-US");
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_different_seeds_usually_differ() {
        let base: Vec<AddonId> = (1..=32).collect();
        let a = RotatingFeatured::new(registry(&base), 1).featured_ids(Application::Firefox, "en-US");
        let b = RotatingFeatured::new(registry(&base), 2).featured_ids(Application::Firefox, "en-US");

        // 32 elements; two seeds colliding on the same permutation would
        // point at a broken seed derivation.
        assert_ne!(a, b);
    }

    #[test]
    fn test_empty_registry_is_not_an_error() {
        let provider = RotatingFeatured::new(FeaturedRegistry::default(), 42);
        assert!(provider
            .featured_ids(Application::Firefox, "en-US")
            .is_empty());
    }
}
