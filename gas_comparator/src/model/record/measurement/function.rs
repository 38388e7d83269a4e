//!
//! Function call measurement.
//!

use crate::model::record::measurement::Gas;

///
/// Function call measurement.
///
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct FunctionMeasurement {
    /// Mean gas cost.
    pub mean: Gas,
}
