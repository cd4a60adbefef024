//! Homepage tab assembly.
//!
//! The homepage shows four tabs over one base fetch: Featured, Popular,
//! Recently Added (exposed under the `new` request key) and Recently
//! Updated. Featured is the default; themes stay off the main tabs.

use anyhow::Result;
use catalog::{Addon, AddonType, Application, CatalogIndex};
use listing::orderings::{created, featured, popular, updated};
use listing::{FeaturedSetProvider, FilterSpec, ListingFilter};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, instrument};

/// Rows rendered per homepage tab.
const TAB_ROWS: usize = 4;

/// Request parameter carrying the chosen tab key.
pub const BROWSE_PARAM: &str = "browse";

/// One assembled homepage: the resolved tab plus every tab's rows.
#[derive(Debug)]
pub struct HomePage {
    pub selected_key: String,
    pub selected_label: String,
    /// Every tab's rows, keyed by option key, truncated to [`TAB_ROWS`].
    pub tabs: HashMap<String, Vec<Addon>>,
}

/// Assembles homepage listings from the catalog and the featured
/// rotation.
pub struct HomepageService {
    index: Arc<CatalogIndex>,
    provider: Arc<dyn FeaturedSetProvider>,
}

impl HomepageService {
    pub fn new(index: Arc<CatalogIndex>, provider: Arc<dyn FeaturedSetProvider>) -> Self {
        Self { index, provider }
    }

    /// The homepage's filter spec for one request's featured rotation.
    ///
    /// Static keys, so construction only fails if the wiring itself is
    /// broken; the error is surfaced rather than unwrapped to keep that
    /// failure a startup-visible one.
    fn homepage_spec(&self, featured_ids: Vec<catalog::AddonId>) -> Result<FilterSpec> {
        let spec = FilterSpec::new(
            vec![
                featured(featured_ids),
                popular(),
                created().with_key("new"),
                updated(),
            ],
            "featured",
        )?;
        Ok(spec)
    }

    /// Assemble the homepage for an application/locale.
    ///
    /// `requested` is the raw `browse` parameter value; unknown values
    /// silently land on the featured tab.
    #[instrument(skip(self))]
    pub fn home(
        &self,
        app: Application,
        locale: &str,
        requested: Option<&str>,
    ) -> Result<HomePage> {
        let base = self.index.listed_excluding(app, AddonType::Theme);
        let featured_ids = self.provider.featured_ids(app, locale);
        let spec = self.homepage_spec(featured_ids)?;

        let filter = ListingFilter::new(&spec);
        let selected = filter.select(requested);
        let tabs: HashMap<String, Vec<Addon>> = filter
            .all(&base)
            .into_iter()
            .map(|(key, mut addons)| {
                addons.truncate(TAB_ROWS);
                (key, addons)
            })
            .collect();

        info!(
            selected = selected.key(),
            base = base.len(),
            "assembled homepage"
        );
        Ok(HomePage {
            selected_key: selected.key().to_string(),
            selected_label: selected.label().to_string(),
            tabs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{AddonId, AddonStatus};

    struct FixedFeatured(Vec<AddonId>);

    impl FeaturedSetProvider for FixedFeatured {
        fn featured_ids(&self, _app: Application, _locale: &str) -> Vec<AddonId> {
            self.0.clone()
        }
    }

    fn addon(id: AddonId, addon_type: AddonType, downloads: u64) -> Addon {
        Addon {
            id,
            slug: format!("addon-{id}"),
            name: format!("Addon {id}"),
            addon_type,
            status: AddonStatus::Public,
            listed: true,
            apps: vec![Application::Firefox],
            weekly_downloads: downloads,
            bayesian_rating: 4.0,
            created: 1_200_000_000 + id as i64,
            last_updated: 1_260_000_000 + id as i64,
        }
    }

    fn service(featured_ids: Vec<AddonId>) -> HomepageService {
        let mut index = CatalogIndex::new();
        for id in 1..=6 {
            index.insert_addon(addon(id, AddonType::Extension, id as u64 * 100));
        }
        index.insert_addon(addon(7, AddonType::Theme, 99_999));
        index.build_secondary_indices();

        HomepageService::new(Arc::new(index), Arc::new(FixedFeatured(featured_ids)))
    }

    #[test]
    fn test_home_truncates_tabs_and_excludes_themes() {
        let page = service(vec![2, 5])
            .home(Application::Firefox, "en-US", None)
            .unwrap();

        assert_eq!(page.selected_key, "featured");
        assert_eq!(page.tabs.len(), 4);
        for addons in page.tabs.values() {
            assert!(addons.len() <= 4);
            assert!(addons.iter().all(|a| a.addon_type != AddonType::Theme));
        }

        // Popular tab: downloads descend, top 4 of 6 extensions.
        let popular: Vec<AddonId> = page.tabs["popular"].iter().map(|a| a.id).collect();
        assert_eq!(popular, vec![6, 5, 4, 3]);
    }

    #[test]
    fn test_home_unknown_browse_key_falls_back() {
        let page = service(vec![1])
            .home(Application::Firefox, "en-US", Some("zzz"))
            .unwrap();
        assert_eq!(page.selected_key, "featured");

        let page = service(vec![1])
            .home(Application::Firefox, "en-US", Some("updated"))
            .unwrap();
        assert_eq!(page.selected_key, "updated");
        assert_eq!(page.selected_label, "Recently Updated");
    }

    #[test]
    fn test_home_featured_follows_rotation_order() {
        let page = service(vec![5, 2, 42])
            .home(Application::Firefox, "en-US", None)
            .unwrap();

        let ids: Vec<AddonId> = page.tabs["featured"].iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![5, 2]);
    }
}
