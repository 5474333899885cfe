//! Request-level features built on the core and engine modules

pub mod brief;

pub use brief::generate_brief;
