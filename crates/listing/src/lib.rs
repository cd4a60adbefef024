//! Listing layer for the add-on marketplace.
//!
//! This crate provides:
//! - `FilterSpec` / `OrderingOption`: a page's sort tabs as plain data
//! - `ListingFilter`: the generic resolver (select / apply / all)
//! - Stock orderings (popular, created, updated, rating, name, featured)
//! - `SampleCache`: explicit memoization collaborator for side-strips
//!
//! ## Architecture
//! A listing page declares a `FilterSpec` once, fetches its base
//! collection once per request, then lets `ListingFilter` resolve the
//! requested tab and order every tab from that single snapshot. The
//! featured tab is fed by a `FeaturedSetProvider` collaborator whose ID
//! sequence dictates result order exactly.
//!
//! ## Example Usage
//! ```ignore
//! use listing::{FilterSpec, ListingFilter};
//! use listing::orderings::{created, featured, popular, updated};
//!
//! let spec = FilterSpec::new(
//!     vec![
//!         featured(featured_ids),
//!         popular(),
//!         created().with_key("new"),
//!         updated(),
//!     ],
//!     "featured",
//! )?;
//!
//! let filter = ListingFilter::new(&spec);
//! let active = filter.select(request_key.as_deref());
//! let tabs = filter.all(&base);
//! ```

pub mod filter;
pub mod orderings;
pub mod sample_cache;
pub mod spec;

// Re-export main types
pub use filter::{ListingFilter, Selection};
pub use orderings::FeaturedSetProvider;
pub use sample_cache::SampleCache;
pub use spec::{FilterSpec, OrderingOption, SpecError, Transform};
