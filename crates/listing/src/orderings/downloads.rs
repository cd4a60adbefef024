//! Popularity ordering: weekly downloads, busiest first.

use crate::spec::OrderingOption;

/// "Popular" tab: descending weekly downloads.
pub fn popular() -> OrderingOption {
    OrderingOption::new("popular", "Popular", |base| {
        let mut out = base.to_vec();
        out.sort_by(|a, b| b.weekly_downloads.cmp(&a.weekly_downloads));
        out
    })
}
