//!
//! Aggregation of function measurements across compiler builds.
//!

use std::collections::HashMap;

use crate::comparison::grouping::ContractGroup;
use crate::model::compiler::CompilerIdentity;
use crate::model::record::measurement::Gas;
use crate::model::record::settings::Settings;

///
/// Gas cost of a function measured with one compiler build.
///
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionEntry<'a> {
    /// The compiler identity.
    pub compiler: &'a CompilerIdentity,
    /// Mean gas cost.
    pub gas: Gas,
    /// Settings of the compiler.
    pub compiler_settings: &'a Settings,
}

///
/// All measurements of a single function.
///
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionData<'a> {
    /// Function signature.
    pub signature: &'a str,
    /// Measurements, in the order of the contract's measurement records.
    pub entries: Vec<FunctionEntry<'a>>,
}

///
/// Collects the measurements of every function of a contract.
///
/// Functions are listed in order of first discovery.
///
pub fn aggregate<'a>(group: &ContractGroup<'a>) -> Vec<FunctionData<'a>> {
    let mut functions: Vec<FunctionData<'a>> = Vec::new();
    let mut indexes: HashMap<&'a str, usize> = HashMap::new();

    for measurement in group.measurements.iter().copied() {
        let compiler_settings = group.settings_of(&measurement.compiler);
        for (signature, function) in measurement.functions.iter() {
            let index = *indexes.entry(signature.as_str()).or_insert_with(|| {
                functions.push(FunctionData {
                    signature: signature.as_str(),
                    entries: Vec::new(),
                });
                functions.len() - 1
            });
            functions[index].entries.push(FunctionEntry {
                compiler: &measurement.compiler,
                gas: function.mean,
                compiler_settings,
            });
        }
    }

    functions
}
