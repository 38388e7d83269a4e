//!
//! Raw input record, either compiler settings or contract measurements.
//!

pub mod error;
pub mod measurement;
pub mod raw;
pub mod settings;

#[cfg(test)]
mod tests;

use std::str::FromStr;

use serde::Deserialize;

use crate::model::compiler::markers::Markers;
use crate::model::compiler::toolchain::Toolchain;
use crate::model::compiler::CompilerIdentity;

use self::error::Error;
use self::measurement::function::FunctionMeasurement;
use self::measurement::Functions;
use self::measurement::Gas;
use self::measurement::MeasurementRecord;
use self::raw::RawFunction;
use self::raw::RawRecord;
use self::settings::SettingsRecord;

///
/// Raw input record, either compiler settings or contract measurements.
///
/// Records with a contract identifier are measurements.
///
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    /// Compiler settings.
    Settings(SettingsRecord),
    /// Contract measurements.
    Measurement(MeasurementRecord),
}

impl Record {
    ///
    /// Parses a record from its JSON value, tagging the compiler identity with `markers`.
    ///
    pub fn try_from_value(value: &serde_json::Value, markers: &Markers) -> Result<Self, Error> {
        let raw = RawRecord::deserialize(value)?;

        let compiler = raw.compiler.ok_or(Error::MissingField { field: "compiler" })?;
        let toolchain = compiler.toolchain.ok_or(Error::MissingField {
            field: "compiler.type",
        })?;
        let toolchain = Toolchain::from_str(toolchain.as_str())
            .map_err(|_| Error::UnknownToolchain { toolchain })?;
        let version = compiler.version.ok_or(Error::MissingField {
            field: "compiler.version",
        })?;
        let compiler = CompilerIdentity::new(toolchain, version, markers);

        match (raw.contract, raw.compiler_settings) {
            (Some(contract), _) => {
                let deployment_gas = raw
                    .deployment
                    .and_then(|deployment| deployment.gas)
                    .ok_or(Error::MissingField {
                        field: "deployment.gas",
                    })?;
                let deployment_gas = Self::validate_gas("deployment.gas", deployment_gas)?;
                let functions = raw
                    .functions
                    .unwrap_or_default()
                    .into_iter()
                    .map(|(function, report)| {
                        let report = RawFunction::deserialize(&report)?;
                        match report.mean {
                            Some(mean) => {
                                let mean = Self::validate_gas(function.as_str(), mean)?;
                                Ok((function, FunctionMeasurement { mean }))
                            }
                            None => Err(Error::MissingFunctionMean { function }),
                        }
                    })
                    .collect::<Result<Functions, Error>>()?;
                Ok(Self::Measurement(MeasurementRecord::new(
                    compiler,
                    contract,
                    deployment_gas,
                    functions,
                )))
            }
            (None, Some(compiler_settings)) => Ok(Self::Settings(SettingsRecord::new(
                compiler,
                compiler_settings,
            ))),
            (None, None) => Err(Error::Untagged),
        }
    }

    ///
    /// Rejects negative gas amounts.
    ///
    fn validate_gas(field: &str, gas: Gas) -> Result<Gas, Error> {
        if gas < 0.0 {
            return Err(Error::NegativeGas {
                field: field.to_owned(),
                gas,
            });
        }
        Ok(gas)
    }

    ///
    /// Parses a collection of records, skipping the malformed ones.
    ///
    pub fn ingest(values: &[serde_json::Value], markers: &Markers) -> Vec<Self> {
        values
            .iter()
            .enumerate()
            .filter_map(|(index, value)| match Self::try_from_value(value, markers) {
                Ok(record) => Some(record),
                Err(error) => {
                    tracing::warn!(index, %error, "Skipping malformed record");
                    None
                }
            })
            .collect()
    }

    ///
    /// The compiler identity of the record.
    ///
    pub fn compiler(&self) -> &CompilerIdentity {
        match self {
            Self::Settings(record) => &record.compiler,
            Self::Measurement(record) => &record.compiler,
        }
    }

    ///
    /// Returns the measurements, if this is a measurement record.
    ///
    pub fn as_measurement(&self) -> Option<&MeasurementRecord> {
        match self {
            Self::Measurement(record) => Some(record),
            Self::Settings(_) => None,
        }
    }

    ///
    /// Returns the settings, if this is a settings record.
    ///
    pub fn as_settings(&self) -> Option<&SettingsRecord> {
        match self {
            Self::Settings(record) => Some(record),
            Self::Measurement(_) => None,
        }
    }
}

impl From<SettingsRecord> for Record {
    fn from(record: SettingsRecord) -> Self {
        Self::Settings(record)
    }
}

impl From<MeasurementRecord> for Record {
    fn from(record: MeasurementRecord) -> Self {
        Self::Measurement(record)
    }
}
