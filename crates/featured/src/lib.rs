//! # Featured Crate
//!
//! Resolves the "featured" set for listing pages: which curated add-ons
//! to show for an application and locale, and in what rotation.
//!
//! ## Components
//!
//! ### FeaturedRegistry
//! The curated configuration: ID lists keyed by (application, locale).
//! Lookup favors locale-specific entries, then falls back to entries with
//! a blank locale, deduplicating across the two.
//!
//! ### RotatingFeatured
//! A [`FeaturedSetProvider`] that shuffles the registry's merged list
//! with a seeded RNG. The shuffle is random-but-stable: the same
//! (rotation seed, app, locale) triple always yields the same order, so
//! a page's tabs agree with each other and with retries of the same
//! request, while different locales and different rotation periods see
//! different front rows.
//!
//! ## Example Usage
//!
//! ```ignore
//! use featured::{FeaturedRegistry, RotatingFeatured};
//! use listing::FeaturedSetProvider;
//!
//! let registry = FeaturedRegistry::from_entries(index.featured_entries());
//! let provider = RotatingFeatured::new(registry, rotation_seed);
//! let ids = provider.featured_ids(Application::Firefox, "de");
//! ```

pub mod registry;
pub mod rotation;

pub use registry::FeaturedRegistry;
pub use rotation::RotatingFeatured;
