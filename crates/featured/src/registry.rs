//! Curated featured configuration, keyed by application and locale.

use catalog::{AddonId, Application, FeaturedEntry};
use std::collections::{HashMap, HashSet};

/// Lookup table over the catalog's featured entries.
///
/// Entries with a blank locale apply everywhere; entries with a concrete
/// locale only apply there, and win placement over the blank ones.
#[derive(Debug, Default, Clone)]
pub struct FeaturedRegistry {
    by_key: HashMap<(Application, String), Vec<AddonId>>,
}

impl FeaturedRegistry {
    pub fn from_entries(entries: &[FeaturedEntry]) -> Self {
        let mut by_key: HashMap<(Application, String), Vec<AddonId>> = HashMap::new();
        for entry in entries {
            by_key
                .entry((entry.app, entry.locale.clone()))
                .or_default()
                .extend(&entry.addon_ids);
        }
        Self { by_key }
    }

    /// The merged featured list for (app, locale): locale-specific IDs
    /// first, then the locale-blank ones, without duplicates.
    pub fn ids_for(&self, app: Application, locale: &str) -> Vec<AddonId> {
        let mut seen = HashSet::new();
        let mut merged = Vec::new();

        let buckets = [
            self.by_key.get(&(app, locale.to_string())),
            self.by_key.get(&(app, String::new())),
        ];
        for ids in buckets.into_iter().flatten() {
            for &id in ids {
                if seen.insert(id) {
                    merged.push(id);
                }
            }
        }
        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(app: Application, locale: &str, ids: &[AddonId]) -> FeaturedEntry {
        FeaturedEntry {
            app,
            locale: locale.to_string(),
            addon_ids: ids.to_vec(),
        }
    }

    #[test]
    fn test_locale_specific_entries_first() {
        let registry = FeaturedRegistry::from_entries(&[
            entry(Application::Firefox, "", &[1, 2, 3]),
            entry(Application::Firefox, "de", &[9, 2]),
        ]);

        // 2 appears in both buckets; the locale-specific placement wins.
        assert_eq!(registry.ids_for(Application::Firefox, "de"), vec![9, 2, 1, 3]);
        assert_eq!(registry.ids_for(Application::Firefox, "fr"), vec![1, 2, 3]);
    }

    #[test]
    fn test_apps_are_isolated() {
        let registry = FeaturedRegistry::from_entries(&[
            entry(Application::Firefox, "", &[1]),
            entry(Application::Thunderbird, "", &[2]),
        ]);

        assert_eq!(registry.ids_for(Application::Thunderbird, "en-US"), vec![2]);
        assert!(registry.ids_for(Application::Mobile, "en-US").is_empty());
    }
}
