//!
//! Per-function comparison.
//!

use crate::comparison::difference::Percentage;
use crate::model::compiler::toolchain::Toolchain;
use crate::model::compiler::CompilerIdentity;
use crate::model::record::measurement::Gas;
use crate::model::record::settings::Settings;

///
/// Gas cost of a function built by one compiler, relative to the function baseline.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionDiffEntry {
    /// The compiler identity.
    pub compiler: CompilerIdentity,
    /// Mean gas cost.
    pub gas: Gas,
    /// Settings of the compiler.
    pub compiler_settings: Settings,
    /// Gas cost of the function baseline.
    pub base_gas: Gas,
    /// Difference against the function baseline, in percent.
    pub difference: Percentage,
}

///
/// Per-function comparison.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct FunctionComparison {
    /// Function signature.
    pub name: String,
    /// Measurements in order of discovery.
    pub versions: Vec<FunctionDiffEntry>,
}

impl FunctionComparison {
    ///
    /// Returns the measurement of `toolchain` at `version`.
    ///
    pub fn version(&self, toolchain: Toolchain, version: &str) -> Option<&FunctionDiffEntry> {
        self.versions
            .iter()
            .find(|entry| entry.compiler.matches(toolchain, version))
    }

    ///
    /// The function name without the parameter list.
    ///
    pub fn short_name(&self) -> &str {
        self.name.split('(').next().unwrap_or(self.name.as_str())
    }
}
