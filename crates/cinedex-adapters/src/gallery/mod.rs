//! Gallery adapters implementing the `GalleryWriter` port.

pub mod builtin;
pub mod html;

pub use html::HtmlGallery;
