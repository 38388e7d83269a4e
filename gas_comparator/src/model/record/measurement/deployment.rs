//!
//! Contract deployment measurement.
//!

use crate::model::record::measurement::Gas;

///
/// Contract deployment measurement.
///
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Deployment {
    /// Gas amount spent on deployment.
    pub gas: Gas,
}
