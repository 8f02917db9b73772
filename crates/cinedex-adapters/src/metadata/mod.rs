//! Metadata adapters implementing the `MetadataSource` port.

pub mod omdb;

pub use omdb::OmdbClient;
