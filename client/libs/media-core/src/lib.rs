//! Media constraints, validation, and the upload helper
//!
//! The client validates size and type before any encoding work, encodes
//! the file as a base64 data URI, and issues a single PUT against the
//! remote object-storage endpoint.

pub mod constants;
pub mod media;
pub mod upload;

pub use media::{content_type, to_data_uri, validate, MediaKind};
pub use upload::{MediaUploader, StorageConfig};
