//!
//! The measurement data model.
//!

pub mod compiler;
pub mod record;
