//! Request-time resolution of listing tabs.
//!
//! [`ListingFilter`] is the one generic resolver every listing page goes
//! through: given the request's chosen tab key (possibly absent or
//! invalid) it selects the active [`OrderingOption`], and it can produce
//! every option's ordered collection from a single base fetch so a page
//! renders all its tabs without hitting the catalog again.
//!
//! The filter is pure and stateless; concurrent requests share nothing.

use crate::spec::{FilterSpec, OrderingOption};
use catalog::{Addon, AddonId};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// The resolved `(option, collection)` pair for one request.
#[derive(Debug)]
pub struct Selection<'s> {
    pub option: &'s OrderingOption,
    pub addons: Vec<Addon>,
}

/// Generic resolver over a [`FilterSpec`].
#[derive(Debug, Clone, Copy)]
pub struct ListingFilter<'s> {
    spec: &'s FilterSpec,
}

impl<'s> ListingFilter<'s> {
    pub fn new(spec: &'s FilterSpec) -> Self {
        Self { spec }
    }

    /// Resolve a request's option key.
    ///
    /// An unknown or missing key silently falls back to the spec's
    /// default; this never fails, since the default is guaranteed present
    /// at spec construction.
    pub fn select(&self, requested: Option<&str>) -> &'s OrderingOption {
        match requested.and_then(|key| self.spec.get(key)) {
            Some(option) => option,
            None => self.spec.default_option(),
        }
    }

    /// Apply one option's transform to a base collection.
    ///
    /// The result is intersected with `base` by ID, so a transform can
    /// narrow and reorder but never widen the access-scoped base.
    pub fn apply(&self, option: &OrderingOption, base: &[Addon]) -> Vec<Addon> {
        let base_ids: HashSet<AddonId> = base.iter().map(|a| a.id).collect();
        let result: Vec<Addon> = option
            .order(base)
            .into_iter()
            .filter(|a| base_ids.contains(&a.id))
            .collect();
        debug!(
            key = option.key(),
            input = base.len(),
            output = result.len(),
            "applied ordering"
        );
        result
    }

    /// Compute every option's ordered collection against the same base
    /// snapshot.
    ///
    /// One entry per option key. The caller supplies `base` once, so all
    /// tabs see a consistent view even when the underlying catalog is
    /// refreshed between requests.
    pub fn all(&self, base: &[Addon]) -> HashMap<String, Vec<Addon>> {
        self.spec
            .options()
            .iter()
            .map(|option| (option.key().to_string(), self.apply(option, base)))
            .collect()
    }

    /// Resolve and apply in one step.
    pub fn selection(&self, requested: Option<&str>, base: &[Addon]) -> Selection<'s> {
        let option = self.select(requested);
        Selection {
            option,
            addons: self.apply(option, base),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::OrderingOption;
    use catalog::{AddonStatus, AddonType, Application};

    fn addon(id: AddonId, downloads: u64) -> Addon {
        Addon {
            id,
            slug: format!("addon-{id}"),
            name: format!("Addon {id}"),
            addon_type: AddonType::Extension,
            status: AddonStatus::Public,
            listed: true,
            apps: vec![Application::Firefox],
            weekly_downloads: downloads,
            bayesian_rating: 3.5,
            created: 1_200_000_000 + id as i64,
            last_updated: 1_260_000_000 + id as i64,
        }
    }

    fn spec() -> FilterSpec {
        FilterSpec::new(
            vec![
                OrderingOption::new("popular", "Popular", |base| {
                    let mut out = base.to_vec();
                    out.sort_by(|a, b| b.weekly_downloads.cmp(&a.weekly_downloads));
                    out
                }),
                OrderingOption::new("first", "First Only", |base| {
                    base.iter().take(1).cloned().collect()
                }),
            ],
            "popular",
        )
        .unwrap()
    }

    #[test]
    fn test_select_falls_back_to_default() {
        let spec = spec();
        let filter = ListingFilter::new(&spec);

        assert_eq!(filter.select(None).key(), "popular");
        assert_eq!(filter.select(Some("")).key(), "popular");
        assert_eq!(filter.select(Some("zzz")).key(), "popular");
        assert_eq!(filter.select(Some("first")).key(), "first");
    }

    #[test]
    fn test_apply_never_widens_base() {
        let spec = FilterSpec::new(
            vec![OrderingOption::new("rogue", "Rogue", |_base| {
                // A transform that tries to smuggle in an item from
                // outside the base.
                vec![addon(99, 0)]
            })],
            "rogue",
        )
        .unwrap();
        let filter = ListingFilter::new(&spec);

        let base = vec![addon(1, 10), addon(2, 20)];
        let result = filter.apply(filter.select(None), &base);
        assert!(result.is_empty());
    }

    #[test]
    fn test_all_covers_every_option() {
        let spec = spec();
        let filter = ListingFilter::new(&spec);
        let base = vec![addon(1, 10), addon(2, 20), addon(3, 15)];

        let tabs = filter.all(&base);
        assert_eq!(tabs.len(), 2);
        assert_eq!(tabs["popular"].len(), 3);
        assert_eq!(tabs["popular"][0].id, 2);
        assert_eq!(tabs["first"].len(), 1);
    }

    #[test]
    fn test_apply_deterministic() {
        let spec = spec();
        let filter = ListingFilter::new(&spec);
        let base = vec![addon(1, 10), addon(2, 10), addon(3, 10)];

        let first: Vec<AddonId> = filter
            .apply(filter.select(None), &base)
            .iter()
            .map(|a| a.id)
            .collect();
        let second: Vec<AddonId> = filter
            .apply(filter.select(None), &base)
            .iter()
            .map(|a| a.id)
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_selection_pairs_option_and_collection() {
        let spec = spec();
        let filter = ListingFilter::new(&spec);
        let base = vec![addon(1, 10), addon(2, 20)];

        let selection = filter.selection(Some("first"), &base);
        assert_eq!(selection.option.key(), "first");
        assert_eq!(selection.addons.len(), 1);
    }
}
