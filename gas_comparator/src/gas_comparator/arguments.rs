//!
//! The gas comparator arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The gas comparator arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None, arg_required_else_help = true)]
pub struct Arguments {
    /// Suppresses the warnings.
    #[arg(short, long)]
    pub quiet: bool,

    /// Input files.
    /// If only one path is provided, it is treated as a directory with JSON files.
    pub input_paths: Vec<PathBuf>,

    /// Compares only the specified project.
    /// All projects are compared if omitted.
    #[arg(long)]
    pub project: Option<String>,

    /// The solx version of method tables and statistics.
    /// The first discovered version of each contract is used if omitted.
    #[arg(long)]
    pub candidate_version: Option<String>,

    /// The solc version of method tables and statistics.
    /// The first discovered version of each contract is used if omitted.
    #[arg(long)]
    pub reference_version: Option<String>,

    /// Regular expression marking versions built with the via-IR pipeline.
    #[arg(long, default_value_t = gas_comparator::Markers::ALTERNATE_PIPELINE_DEFAULT.to_owned())]
    pub via_ir_marker: String,

    /// Regular expression marking optimized versions.
    #[arg(long, default_value_t = gas_comparator::Markers::OPTIMIZED_DEFAULT.to_owned())]
    pub optimized_marker: String,

    /// Drops contracts with more than one default pipeline solx measurement.
    #[arg(long)]
    pub strict_baseline: bool,

    /// Report output format: `text` or `json`.
    #[arg(long, default_value_t = gas_comparator::OutputFormat::Text)]
    pub output_format: gas_comparator::OutputFormat,

    /// Output file.
    /// The report is written to the standard output if omitted.
    #[arg(long)]
    pub output_path: Option<PathBuf>,
}
