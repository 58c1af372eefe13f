//! Per-bit SDC port constraint generation.
//!
//! A [`ConstraintSet`](emit::ConstraintSet) pairs an ordered list of
//! [`CommandTemplate`](constraint::CommandTemplate)s with a
//! [`PortSet`](port::PortSet) and emits one SDC line for every
//! (command, port bit) pair.

pub mod constraint;
pub mod deps;
pub mod emit;
pub mod error;
pub mod fmt;
pub mod io;
pub mod port;
pub mod validation;
pub mod variants;

pub(crate) mod log;

pub use emit::{ConstraintSet, EmitOrder};
pub use variants::Variant;
