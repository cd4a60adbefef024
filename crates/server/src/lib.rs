//! # Server Crate
//!
//! Orchestration over the catalog and listing layers:
//!
//! - [`HomepageService`]: one base fetch, four ordered tabs, featured
//!   rotation resolved per request
//! - [`GallerySampler`]: cached random side-strips of one add-on type
//! - [`UpdateService`]: newest-compatible-version resolution for client
//!   update checks
//!
//! No HTTP or template layer lives here; these services return plain
//! data for whatever front end consumes them.

pub mod gallery;
pub mod homepage;
pub mod update;

pub use gallery::GallerySampler;
pub use homepage::{HomePage, HomepageService, BROWSE_PARAM};
pub use update::{UpdateHit, UpdateService};
