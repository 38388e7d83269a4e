//!
//! Gas comparator output.
//!

pub mod format;
pub mod json;
pub mod project;
pub mod text;


use std::io::Write;
use std::path::PathBuf;

use crate::output::format::Format;
use crate::output::json::Json;
use crate::output::project::ProjectComparison;
use crate::output::text::Text;

///
/// Rendered comparison report.
///
#[derive(Debug)]
pub enum Output {
    /// Report is a single unnamed file.
    SingleFile(String),
}

impl Output {
    ///
    /// Writes the report to a file, or to the standard output if `path` is not provided.
    ///
    pub fn write_to_file(self, path: Option<PathBuf>) -> anyhow::Result<()> {
        match (self, path) {
            (Output::SingleFile(content), Some(path)) => {
                std::fs::write(path.as_path(), content)
                    .map_err(|error| anyhow::anyhow!("Report file {path:?} writing: {error}"))?;
            }
            (Output::SingleFile(content), None) => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(content.as_bytes())?;
                stdout.flush()?;
            }
        }
        Ok(())
    }
}

impl TryFrom<(Vec<ProjectComparison>, Format)> for Output {
    type Error = anyhow::Error;

    fn try_from(
        (projects, output_format): (Vec<ProjectComparison>, Format),
    ) -> Result<Self, Self::Error> {
        Ok(match output_format {
            Format::Text => Text::try_from(projects.as_slice())?.into(),
            Format::Json => Json::try_from(projects.as_slice())?.into(),
        })
    }
}

impl From<Json> for Output {
    fn from(value: Json) -> Self {
        Output::SingleFile(value.content)
    }
}

impl From<Text> for Output {
    fn from(value: Text) -> Self {
        Output::SingleFile(value.content)
    }
}
