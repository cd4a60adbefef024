//! Rating ordering: bayesian review average, best first.

use crate::spec::OrderingOption;

/// "Top Rated" tab: descending bayesian rating.
///
/// Ties keep base order (stable sort), so results are deterministic for
/// the same base content.
pub fn rating() -> OrderingOption {
    OrderingOption::new("rating", "Top Rated", |base| {
        let mut out = base.to_vec();
        out.sort_by(|a, b| b.bayesian_rating.total_cmp(&a.bayesian_rating));
        out
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::addon;

    #[test]
    fn test_rating_orders_descending() {
        let mut meh = addon(1);
        meh.bayesian_rating = 2.1;
        let mut great = addon(2);
        great.bayesian_rating = 4.8;

        let out = rating().order(&[meh, great]);
        assert_eq!(out[0].id, 2);
    }

    #[test]
    fn test_rating_ties_keep_base_order() {
        let mut a = addon(1);
        a.bayesian_rating = 4.0;
        let mut b = addon(2);
        b.bayesian_rating = 4.0;

        let out = rating().order(&[a, b]);
        let ids: Vec<u32> = out.iter().map(|x| x.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
