//!
//! Deployment comparison.
//!

use crate::comparison::difference::Percentage;
use crate::model::compiler::CompilerIdentity;
use crate::model::record::measurement::Gas;
use crate::model::record::settings::Settings;

///
/// Deployment gas cost of a contract built by one compiler.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentEntry {
    /// The compiler identity.
    pub compiler: CompilerIdentity,
    /// Gas amount spent on deployment.
    pub gas: Gas,
    /// Settings of the compiler.
    pub compiler_settings: Settings,
}

///
/// Deployment gas cost relative to the deployment baseline.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct DeploymentDifference<'a> {
    /// The compiler identity.
    pub compiler: &'a CompilerIdentity,
    /// Gas amount spent on deployment.
    pub gas: Gas,
    /// Difference against the deployment baseline, in percent.
    /// `None` if the baseline gas is zero.
    pub difference: Option<Percentage>,
}
