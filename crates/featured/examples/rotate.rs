//! Prints the featured rotation for a few seeds.
//!
//! Run with: cargo run -p featured --example rotate

use catalog::{Application, FeaturedEntry};
use featured::{FeaturedRegistry, RotatingFeatured};
use listing::FeaturedSetProvider;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .init();

    let registry = FeaturedRegistry::from_entries(&[
        FeaturedEntry {
            app: Application::Firefox,
            locale: String::new(),
            addon_ids: vec![10, 20, 30, 40, 50],
        },
        FeaturedEntry {
            app: Application::Firefox,
            locale: "de".to_string(),
            addon_ids: vec![99, 30],
        },
    ]);

    for seed in 0..3 {
        let provider = RotatingFeatured::new(registry.clone(), seed);
        println!(
            "seed {seed}  en-US: {:?}",
            provider.featured_ids(Application::Firefox, "en-US")
        );
        println!(
            "seed {seed}  de:    {:?}",
            provider.featured_ids(Application::Firefox, "de")
        );
    }
}
