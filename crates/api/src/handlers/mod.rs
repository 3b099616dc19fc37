pub mod diagnostics;
pub mod media;
