//!
//! Gas report input.
//!

pub mod error;
pub mod project;

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;
use std::path::Path;

use crate::model::compiler::toolchain::Toolchain;

use self::error::Error as InputError;
use self::project::ProjectReports;

///
/// Gas report of one toolchain for one project.
///
#[derive(Debug, serde::Deserialize)]
pub struct Input {
    /// Project identifier.
    pub project: String,
    /// Toolchain identifier.
    pub toolchain: Toolchain,
    /// Compiler version.
    /// Assigned to the records that do not specify their compiler, such as
    /// plain Foundry gas reports.
    #[serde(default)]
    pub version: Option<String>,
    /// The records.
    pub data: Vec<serde_json::Value>,
}

///
/// Gas report file layouts.
///
#[derive(Debug, serde::Deserialize)]
#[serde(untagged)]
pub enum InputFile {
    /// A report of one toolchain for one project.
    Single(Input),
    /// Reports of both toolchains for many projects, keyed by project name.
    Combined(BTreeMap<String, ProjectReports>),
}

impl TryFrom<&Path> for InputFile {
    type Error = InputError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(path).map_err(|error| InputError::Reading {
            error,
            path: path.to_path_buf(),
        })?;
        if text.trim().is_empty() {
            return Err(InputError::EmptyFile {
                path: path.to_path_buf(),
            });
        }
        let json: Self =
            serde_json::from_str(text.as_str()).map_err(|error| InputError::Parsing {
                error,
                path: path.to_path_buf(),
            })?;
        Ok(json)
    }
}

///
/// Gas reports of all projects.
///
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ReportsData {
    /// Reports by project name.
    pub projects: BTreeMap<String, ProjectReports>,
}

impl ReportsData {
    ///
    /// Extends the reports with an input file.
    ///
    pub fn extend(&mut self, input: InputFile) {
        match input {
            InputFile::Single(input) => self.extend_with_single(input),
            InputFile::Combined(projects) => {
                for (project, reports) in projects.into_iter() {
                    let existing = self.projects.entry(project).or_default();
                    existing.extend(Toolchain::Solc, reports.solc);
                    existing.extend(Toolchain::Solx, reports.solx);
                }
            }
        }
    }

    ///
    /// Extends the reports with a report of one toolchain.
    ///
    pub fn extend_with_single(&mut self, input: Input) {
        let toolchain = input.toolchain;
        let data = match input.version {
            Some(version) => input
                .data
                .into_iter()
                .map(|mut record| {
                    if let Some(object) = record.as_object_mut() {
                        object.entry("compiler").or_insert_with(|| {
                            serde_json::json!({
                                "type": toolchain,
                                "version": version,
                            })
                        });
                    }
                    record
                })
                .collect(),
            None => input.data,
        };
        self.projects
            .entry(input.project)
            .or_default()
            .extend(toolchain, data);
    }

    ///
    /// Returns the reports of `project`.
    ///
    pub fn project(&self, project: &str) -> Result<&ProjectReports, InputError> {
        self.projects
            .get(project)
            .ok_or_else(|| InputError::MissingProjectData {
                project: project.to_owned(),
            })
    }
}
