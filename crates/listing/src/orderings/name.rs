//! Alphabetical ordering by display name.

use crate::spec::OrderingOption;

/// "Name" tab: case-insensitive ascending name order.
///
/// Locale-aware collation lives with the (out of scope) localization
/// layer; a plain casefold sort stands in for it here.
pub fn name() -> OrderingOption {
    OrderingOption::new("name", "Name", |base| {
        let mut out = base.to_vec();
        out.sort_by_key(|a| a.name.to_lowercase());
        out
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::addon;

    #[test]
    fn test_name_sorts_case_insensitively() {
        let mut zed = addon(1);
        zed.name = "zed scroller".to_string();
        let mut able = addon(2);
        able.name = "Able Tabs".to_string();
        let mut mid = addon(3);
        mid.name = "mid Bar".to_string();

        let out = name().order(&[zed, able, mid]);
        let names: Vec<&str> = out.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Able Tabs", "mid Bar", "zed scroller"]);
    }
}
