//! Re-exported dependencies that appear in the public API.

pub use arcstr;
