//!
//! The gas comparator binary.
//!

pub(crate) mod arguments;
pub(crate) mod tests;

use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() -> anyhow::Result<()> {
    let arguments = Arguments::try_parse()?;

    let default_level = if arguments.quiet { "error" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
    if arguments.output_path.is_some() {
        colored::control::set_override(false);
    }

    let markers = gas_comparator::Markers::new(
        arguments.via_ir_marker.as_str(),
        arguments.optimized_marker.as_str(),
    )?;

    let input_paths: Vec<PathBuf> = if arguments.input_paths.len() == 1 {
        if !arguments.input_paths[0].is_dir() {
            anyhow::bail!(
                "Expected a directory with JSON files, but got a file: {:?}",
                arguments.input_paths[0]
            );
        }
        let resolution_pattern =
            format!("{}/**/*.json", arguments.input_paths[0].to_string_lossy());
        glob::glob(resolution_pattern.as_str())?
            .filter_map(Result::ok)
            .collect()
    } else if arguments.input_paths.is_empty() {
        anyhow::bail!("No input files provided.");
    } else {
        arguments.input_paths.clone()
    };

    let mut reports = gas_comparator::ReportsData::default();
    for path in input_paths.into_iter() {
        match gas_comparator::InputFile::try_from(path.as_path()) {
            Ok(input) => reports.extend(input),
            Err(gas_comparator::InputError::EmptyFile { path }) => {
                if !arguments.quiet {
                    eprintln!(
                        "{} Input file {path:?} is empty and will be skipped.",
                        "Warning:".bright_yellow()
                    );
                }
                continue;
            }
            Err(error) => Err(error)?,
        }
    }

    let projects = compare_reports(&reports, &markers, &arguments)?;

    let output: gas_comparator::Output = (projects, arguments.output_format.clone()).try_into()?;
    output.write_to_file(arguments.output_path)?;

    Ok(())
}

///
/// Compares the requested projects, or all of them if none is requested.
///
/// Projects missing the records of either toolchain are skipped with a warning.
///
fn compare_reports(
    reports: &gas_comparator::ReportsData,
    markers: &gas_comparator::Markers,
    arguments: &Arguments,
) -> anyhow::Result<Vec<gas_comparator::ProjectComparison>> {
    let options = gas_comparator::ComparisonOptions {
        strict_baseline: arguments.strict_baseline,
    };
    let project_names: Vec<String> = match arguments.project.as_ref() {
        Some(project) => vec![project.to_owned()],
        None => reports.projects.keys().cloned().collect(),
    };

    let mut projects = Vec::with_capacity(project_names.len());
    for project in project_names.into_iter() {
        let contracts = match reports.project(project.as_str())?.compare(markers, &options) {
            Ok(contracts) => contracts,
            Err(gas_comparator::ComparisonError::EmptyInput { toolchain }) => {
                if !arguments.quiet {
                    eprintln!(
                        "{} Project `{project}` has no {toolchain} records and will be skipped.",
                        "Warning:".bright_yellow()
                    );
                }
                continue;
            }
        };
        projects.push(
            gas_comparator::ProjectComparison::new(project, contracts).with_versions(
                arguments.candidate_version.clone(),
                arguments.reference_version.clone(),
            ),
        );
    }
    Ok(projects)
}
