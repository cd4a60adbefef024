//! Featured ordering: a manual/explicit order-by-list.
//!
//! The featured tab is the one ordering that is neither alphabetic,
//! numeric nor timestamp-based: the result must match the order of the
//! ID sequence handed over by the featured-set collaborator, with IDs
//! absent from the base silently dropped.

use crate::spec::OrderingOption;
use catalog::{AddonId, Application};
use std::collections::{HashMap, HashSet};

/// Collaborator resolving the featured set for an application and locale.
///
/// The returned sequence's order is authoritative; how it is sampled or
/// rotated is the provider's business. An empty or partially stale
/// sequence is not an error — the tab just comes up short.
pub trait FeaturedSetProvider: Send + Sync {
    fn featured_ids(&self, app: Application, locale: &str) -> Vec<AddonId>;
}

/// "Featured" tab over an already-resolved ID sequence.
///
/// The caller resolves the provider once per request and bakes the
/// sequence into the option, so every tab of the page sees the same
/// rotation.
pub fn featured(ids: Vec<AddonId>) -> OrderingOption {
    OrderingOption::new("featured", "Featured", move |base| {
        let by_id: HashMap<AddonId, &catalog::Addon> = base.iter().map(|a| (a.id, a)).collect();
        let mut seen = HashSet::new();
        ids.iter()
            .filter(|id| seen.insert(**id))
            .filter_map(|id| by_id.get(id).map(|a| (*a).clone()))
            .collect()
    })
}
