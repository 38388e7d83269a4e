//!
//! Loosely typed record layout as found in reports.
//!

use crate::model::record::settings::Settings;

///
/// Loosely typed record layout as found in reports.
///
/// Every field is optional so that missing ones are reported by name.
///
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRecord {
    /// Compiler identity.
    pub compiler: Option<RawCompiler>,
    /// Contract identifier, only present in measurement records.
    pub contract: Option<String>,
    /// Deployment measurement.
    pub deployment: Option<RawDeployment>,
    /// Per-function measurements in report order, each one a [`RawFunction`].
    pub functions: Option<serde_json::Map<String, serde_json::Value>>,
    /// Compiler settings, only present in settings records.
    pub compiler_settings: Option<Settings>,
}

///
/// Compiler identity.
///
#[derive(Debug, serde::Deserialize)]
pub struct RawCompiler {
    /// Toolchain identifier.
    #[serde(rename = "type", alias = "family")]
    pub toolchain: Option<String>,
    /// Free-form version text.
    pub version: Option<String>,
}

///
/// Deployment measurement.
///
#[derive(Debug, serde::Deserialize)]
pub struct RawDeployment {
    /// Gas amount spent on deployment.
    pub gas: Option<f64>,
}

///
/// Function call measurement. Other Foundry statistics are ignored.
///
#[derive(Debug, serde::Deserialize)]
pub struct RawFunction {
    /// Mean gas cost.
    pub mean: Option<f64>,
}
