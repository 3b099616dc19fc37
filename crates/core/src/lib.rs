//! Domain types shared by the MediaHub store and API crates.
//!
//! Zero internal dependencies: media records and their validation rules,
//! the search filter model, and the core error type.

pub mod error;
pub mod media;
pub mod search;
pub mod types;
