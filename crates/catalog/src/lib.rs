//! # Catalog Crate
//!
//! In-memory add-on catalog: domain types, data-file parsing and the
//! indexed store the listing layer queries.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Addon, Version, CatalogIndex)
//! - **parser**: Parse .dat files into Rust structs
//! - **index**: Load data files and build lookup indices
//! - **version**: Dotted-version comparison and client compatibility
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{Application, CatalogIndex};
//! use std::path::Path;
//!
//! let index = CatalogIndex::load_from_files(Path::new("data/catalog"))?;
//!
//! let addon = index.get_addon(7).unwrap();
//! let base = index.listed(Application::Firefox);
//! println!("{} listed add-ons, first: {}", base.len(), addon.name);
//! ```

// Public modules
pub mod error;
pub mod index;
pub mod parser;
pub mod types;
pub mod version;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use types::{
    // Type aliases
    AddonId,
    // Core types
    Addon,
    CatalogIndex,
    FeaturedEntry,
    Version,
    // Enums
    AddonStatus,
    AddonType,
    Application,
};
pub use version::{cmp_versions, current_version_for_client, version_in_range};
