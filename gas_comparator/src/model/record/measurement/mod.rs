//!
//! Gas measurements of a contract built by one compiler.
//!

pub mod deployment;
pub mod function;

use crate::model::compiler::CompilerIdentity;

use self::deployment::Deployment;
use self::function::FunctionMeasurement;

///
/// Amount of gas. Reports may carry fractional means.
///
pub type Gas = f64;

///
/// Function signature, that is the function name followed by its parameter types.
///
pub type FunctionSignature = String;

///
/// Per-function measurements in report order.
///
pub type Functions = Vec<(FunctionSignature, FunctionMeasurement)>;

///
/// Gas measurements of a contract built by one compiler.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct MeasurementRecord {
    /// The compiler identity.
    pub compiler: CompilerIdentity,
    /// Contract identifier.
    pub contract: String,
    /// Deployment measurement.
    pub deployment: Deployment,
    /// Per-function measurements.
    #[serde(serialize_with = "serialize_functions")]
    pub functions: Functions,
}

impl MeasurementRecord {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        compiler: CompilerIdentity,
        contract: String,
        deployment_gas: Gas,
        functions: Functions,
    ) -> Self {
        Self {
            compiler,
            contract,
            deployment: Deployment {
                gas: deployment_gas,
            },
            functions,
        }
    }

    ///
    /// Returns the measurement of the function with `signature`.
    ///
    pub fn function(&self, signature: &str) -> Option<&FunctionMeasurement> {
        self.functions
            .iter()
            .find(|(name, _)| name.as_str() == signature)
            .map(|(_, function)| function)
    }
}

///
/// Serializes the functions as a JSON object, keeping the report order.
///
fn serialize_functions<S>(functions: &Functions, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_map(functions.iter().map(|(signature, function)| (signature, function)))
}
