//!
//! The gas comparator library.
//!

pub mod comparison;
pub mod input;
pub mod model;
pub mod output;

pub use crate::comparison::compare;
pub use crate::comparison::difference::difference;
pub use crate::comparison::difference::Percentage;
pub use crate::comparison::error::Error as ComparisonError;
pub use crate::comparison::report::deployment::DeploymentDifference;
pub use crate::comparison::report::deployment::DeploymentEntry;
pub use crate::comparison::report::function::FunctionComparison;
pub use crate::comparison::report::function::FunctionDiffEntry;
pub use crate::comparison::report::row::MethodRow;
pub use crate::comparison::report::selection::VersionPair;
pub use crate::comparison::report::statistics::PairStatistics;
pub use crate::comparison::report::summary::Summary;
pub use crate::comparison::report::ContractComparison;
pub use crate::comparison::Options as ComparisonOptions;
pub use crate::input::error::Error as InputError;
pub use crate::input::project::ProjectReports;
pub use crate::input::Input;
pub use crate::input::InputFile;
pub use crate::input::ReportsData;
pub use crate::model::compiler::markers::Markers;
pub use crate::model::compiler::pipeline::Pipeline;
pub use crate::model::compiler::toolchain::Toolchain;
pub use crate::model::compiler::CompilerIdentity;
pub use crate::model::record::measurement::MeasurementRecord;
pub use crate::model::record::settings::SettingsRecord;
pub use crate::model::record::Record;
pub use crate::output::format::Format as OutputFormat;
pub use crate::output::project::ProjectComparison;
pub use crate::output::Output;
