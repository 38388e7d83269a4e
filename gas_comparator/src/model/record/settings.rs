//!
//! Compiler settings record.
//!

use std::collections::BTreeMap;

use crate::model::compiler::CompilerIdentity;

///
/// Compiler configuration mapping, kept opaque.
///
pub type Settings = BTreeMap<String, serde_json::Value>;

///
/// Compiler settings record. It is not associated with any contract.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsRecord {
    /// The compiler identity the settings belong to.
    pub compiler: CompilerIdentity,
    /// The compiler settings.
    pub compiler_settings: Settings,
}

impl SettingsRecord {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(compiler: CompilerIdentity, compiler_settings: Settings) -> Self {
        Self {
            compiler,
            compiler_settings,
        }
    }
}
