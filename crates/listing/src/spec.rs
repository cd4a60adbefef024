//! Ordering options and the filter spec that groups them.
//!
//! A listing page declares its sort/filter tabs as a [`FilterSpec`]: an
//! ordered table of [`OrderingOption`] entries plus the key to fall back
//! to when a request asks for nothing (or nonsense). The table is plain
//! data; there is no per-page subclassing and no name-based dispatch.

use catalog::Addon;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Function from a base collection to an ordered/filtered collection.
///
/// Transforms narrow and reorder; they must never introduce items absent
/// from the base (the filter enforces this as well, see
/// [`ListingFilter::apply`](crate::filter::ListingFilter::apply)).
pub type Transform = Arc<dyn Fn(&[Addon]) -> Vec<Addon> + Send + Sync>;

/// A named sort/filter variant on a listing page.
///
/// The `key` is the stable identifier exposed as a request parameter
/// value; the `label` is the human-readable tab title.
#[derive(Clone)]
pub struct OrderingOption {
    key: String,
    label: String,
    transform: Transform,
}

impl OrderingOption {
    pub fn new(
        key: impl Into<String>,
        label: impl Into<String>,
        transform: impl Fn(&[Addon]) -> Vec<Addon> + Send + Sync + 'static,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            transform: Arc::new(transform),
        }
    }

    /// Rebind this option under a different request key.
    ///
    /// Lets a page reuse an ordering under its own name, e.g. the
    /// homepage exposing the "created" ordering as `new`.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Run this option's transform over a base collection.
    ///
    /// Most callers go through
    /// [`ListingFilter::apply`](crate::filter::ListingFilter::apply),
    /// which also enforces the never-widens-the-base contract.
    pub fn order(&self, base: &[Addon]) -> Vec<Addon> {
        (self.transform.as_ref())(base)
    }
}

impl fmt::Debug for OrderingOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderingOption")
            .field("key", &self.key)
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// Configuration errors caught when a [`FilterSpec`] is built.
///
/// These are programming errors in page wiring; they surface at startup,
/// never while serving a request.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SpecError {
    #[error("duplicate ordering key: {0}")]
    DuplicateKey(String),

    #[error("default key {0} is not among the spec's options")]
    UnknownDefault(String),
}

/// An ordered set of ordering options with a designated default.
///
/// Invariants, checked at construction: option keys are unique, and
/// `default_key` names one of them.
#[derive(Debug, Clone)]
pub struct FilterSpec {
    options: Vec<OrderingOption>,
    default_key: String,
}

impl FilterSpec {
    pub fn new(
        options: Vec<OrderingOption>,
        default_key: impl Into<String>,
    ) -> Result<Self, SpecError> {
        let default_key = default_key.into();

        let mut seen = HashSet::new();
        for option in &options {
            if !seen.insert(option.key()) {
                return Err(SpecError::DuplicateKey(option.key().to_string()));
            }
        }
        if !seen.contains(default_key.as_str()) {
            return Err(SpecError::UnknownDefault(default_key));
        }

        Ok(Self {
            options,
            default_key,
        })
    }

    /// The options in declaration (tab) order.
    pub fn options(&self) -> &[OrderingOption] {
        &self.options
    }

    pub fn default_key(&self) -> &str {
        &self.default_key
    }

    /// Look up an option by key.
    pub fn get(&self, key: &str) -> Option<&OrderingOption> {
        self.options.iter().find(|o| o.key() == key)
    }

    /// The option named by `default_key`; always present per the
    /// construction invariant.
    pub fn default_option(&self) -> &OrderingOption {
        self.options
            .iter()
            .find(|o| o.key() == self.default_key)
            .unwrap_or_else(|| unreachable!("default key checked at construction"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(key: &str) -> OrderingOption {
        OrderingOption::new(key, key.to_uppercase(), |base| base.to_vec())
    }

    #[test]
    fn test_spec_construction() {
        let spec = FilterSpec::new(vec![identity("popular"), identity("name")], "name").unwrap();
        assert_eq!(spec.options().len(), 2);
        assert_eq!(spec.default_option().key(), "name");
        assert!(spec.get("popular").is_some());
        assert!(spec.get("zzz").is_none());
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let err =
            FilterSpec::new(vec![identity("popular"), identity("popular")], "popular").unwrap_err();
        assert_eq!(err, SpecError::DuplicateKey("popular".to_string()));
    }

    #[test]
    fn test_unknown_default_rejected() {
        let err = FilterSpec::new(vec![identity("popular")], "featured").unwrap_err();
        assert_eq!(err, SpecError::UnknownDefault("featured".to_string()));
    }

    #[test]
    fn test_with_key_rebinds() {
        let option = identity("created").with_key("new");
        assert_eq!(option.key(), "new");
    }
}
