//!
//! Comparison error.
//!

use crate::model::compiler::toolchain::Toolchain;

///
/// Comparison error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// One of the record collections is empty.
    #[error("No valid `{toolchain}` records to compare")]
    EmptyInput {
        /// The toolchain with no records.
        toolchain: Toolchain,
    },
}
