//!
//! Partitioning of records by contract.
//!

use std::collections::HashMap;

use crate::model::compiler::toolchain::Toolchain;
use crate::model::compiler::CompilerIdentity;
use crate::model::record::measurement::MeasurementRecord;
use crate::model::record::settings::Settings;
use crate::model::record::settings::SettingsRecord;
use crate::model::record::Record;

///
/// Records of a single contract.
///
#[derive(Debug, Clone)]
pub struct ContractGroup<'a> {
    /// Contract identifier.
    pub contract: &'a str,
    /// Measurements of the contract, in input order.
    pub measurements: Vec<&'a MeasurementRecord>,
    /// Settings of the toolchains present in `measurements`, one per compiler identity.
    pub settings: Vec<&'a SettingsRecord>,
}

/// Settings returned for identities without a settings record.
static EMPTY_SETTINGS: Settings = Settings::new();

impl<'a> ContractGroup<'a> {
    ///
    /// Returns the settings of `compiler`, or an empty mapping if there are none.
    ///
    pub fn settings_of(&self, compiler: &CompilerIdentity) -> &'a Settings {
        self.settings
            .iter()
            .copied()
            .find(|record| &record.compiler == compiler)
            .map(|record| &record.compiler_settings)
            .unwrap_or(&EMPTY_SETTINGS)
    }
}

///
/// Partitions measurement records by contract, in order of first appearance,
/// attaching the settings of every toolchain found in each partition.
///
pub fn group<'a, I>(records: I) -> Vec<ContractGroup<'a>>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut settings: Vec<&'a SettingsRecord> = Vec::new();
    let mut groups: Vec<ContractGroup<'a>> = Vec::new();
    let mut indexes: HashMap<&'a str, usize> = HashMap::new();

    for record in records.into_iter() {
        match record {
            Record::Settings(record) => {
                if settings
                    .iter()
                    .all(|existing| existing.compiler != record.compiler)
                {
                    settings.push(record);
                }
            }
            Record::Measurement(record) => {
                let index = *indexes.entry(record.contract.as_str()).or_insert_with(|| {
                    groups.push(ContractGroup {
                        contract: record.contract.as_str(),
                        measurements: Vec::new(),
                        settings: Vec::new(),
                    });
                    groups.len() - 1
                });
                groups[index].measurements.push(record);
            }
        }
    }

    for group in groups.iter_mut() {
        let toolchains: Vec<Toolchain> = group
            .measurements
            .iter()
            .map(|measurement| measurement.compiler.toolchain)
            .collect();
        group.settings = settings
            .iter()
            .filter(|record| toolchains.contains(&record.compiler.toolchain))
            .copied()
            .collect();
    }

    groups
}
