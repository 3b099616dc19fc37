//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&dyn DocumentStore` as the first argument.

pub mod media_repo;

pub use media_repo::MediaRepo;
