//! cadenza-services: Scale data loading for cadenza

pub mod library;

pub use library::{LibraryError, ScaleLibrary};
