//! Core library for the `geocode` CLI.
//!
//! This crate defines:
//! - The `Location` value object over a raw Nominatim-style result
//! - Typed models (bounding box, coordinates, summary)
//! - Output renderers and configuration handling
//!
//! It is used by `geocoding-cli`, but the `Location` type is usable on its own
//! by anything that already holds a decoded provider response.

mod coerce;
pub mod config;
pub mod error;
pub mod location;
pub mod model;
pub mod render;

pub use config::Config;
pub use error::LocationError;
pub use location::{Location, parse_results};
pub use model::{BoundingBox, Coordinates, LocationSummary};
pub use render::{LocationRenderer, OutputFormat};

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn location_is_shareable_across_threads() {
        assert_send_sync::<Location>();
    }
}
