//!
//! Malformed record error.
//!

///
/// Malformed record error.
///
/// Records failing with it are skipped during ingestion.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The record does not have the expected JSON shape.
    #[error("Unexpected record shape: {0}")]
    Shape(#[from] serde_json::Error),
    /// A required field is missing.
    #[error("Missing field `{field}`")]
    MissingField {
        /// The field path.
        field: &'static str,
    },
    /// The toolchain identifier is not supported.
    #[error("Unknown toolchain `{toolchain}`")]
    UnknownToolchain {
        /// The toolchain identifier found in the record.
        toolchain: String,
    },
    /// A function measurement has no mean gas value.
    #[error("Function `{function}` has no mean gas value")]
    MissingFunctionMean {
        /// The function signature.
        function: String,
    },
    /// A gas amount is negative.
    #[error("Negative gas amount {gas} in `{field}`")]
    NegativeGas {
        /// The deployment field or the function signature.
        field: String,
        /// The gas amount found in the record.
        gas: f64,
    },
    /// The record has neither a contract nor compiler settings.
    #[error("Record has neither `contract` nor `compilerSettings`")]
    Untagged,
}
