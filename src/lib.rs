//! Uplift client SDK
//!
//! Umbrella crate re-exporting the client modules: feed composition,
//! typed backend requests, media upload, geocoding, and push fan-out.

pub use api_client as api;
pub use error_types as errors;
pub use feed_core as feed;
pub use geo_client as geo;
pub use media_core as media;
pub use push_fanout as push;
