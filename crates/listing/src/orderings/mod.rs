//! The stock ordering options used on listing pages.
//!
//! Each constructor returns an [`OrderingOption`](crate::spec::OrderingOption)
//! ready to be placed in a page's `FilterSpec`. All of them use stable
//! sorts, so repeated applications over identical base content produce
//! identical results.

pub mod downloads;
pub mod featured;
pub mod name;
pub mod rating;
pub mod recency;

// Re-export for convenience
pub use downloads::popular;
pub use featured::{featured, FeaturedSetProvider};
pub use name::name;
pub use rating::rating;
pub use recency::{created, updated};
