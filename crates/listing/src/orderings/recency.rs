//! Timestamp orderings: recently added and recently updated.

use crate::spec::OrderingOption;

/// "Recently Added" tab: descending creation time.
///
/// Pages that expose this under another request key can rebind it, e.g.
/// `created().with_key("new")` on the homepage.
pub fn created() -> OrderingOption {
    OrderingOption::new("created", "Recently Added", |base| {
        let mut out = base.to_vec();
        out.sort_by(|a, b| b.created.cmp(&a.created));
        out
    })
}

/// "Recently Updated" tab: descending last-update time.
pub fn updated() -> OrderingOption {
    OrderingOption::new("updated", "Recently Updated", |base| {
        let mut out = base.to_vec();
        out.sort_by(|a, b| b.last_updated.cmp(&a.last_updated));
        out
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::addon;

    #[test]
    fn test_created_newest_first() {
        let mut old = addon(1);
        old.created = 1_000;
        let mut new = addon(2);
        new.created = 2_000;

        let out = created().order(&[old, new]);
        assert_eq!(out[0].id, 2);
    }

    #[test]
    fn test_updated_newest_first() {
        let mut stale = addon(1);
        stale.last_updated = 1_000;
        let mut fresh = addon(2);
        fresh.last_updated = 5_000;

        let out = updated().order(&[fresh.clone(), stale]);
        assert_eq!(out[0].id, 2);
        assert_eq!(out.len(), 2);
    }
}
