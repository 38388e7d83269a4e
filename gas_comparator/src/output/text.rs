//!
//! Human-readable report.
//!

use std::io::Write;

use colored::ColoredString;
use colored::Colorize;

use crate::comparison::difference::Percentage;
use crate::comparison::report::summary::FunctionDelta;
use crate::comparison::report::summary::Summary;
use crate::comparison::report::ContractComparison;
use crate::model::record::measurement::Gas;
use crate::output::project::ProjectComparison;

///
/// Human-readable report of all compared projects.
///
#[derive(Debug, Default)]
pub struct Text {
    /// Rendered report.
    pub content: String,
}

impl Text {
    /// Inner width of the report frame.
    pub const WIDTH: usize = 76;

    /// Number of the most improved and the most regressed functions in the project summary.
    pub const TOP_COUNT: usize = 10;

    ///
    /// Writes the report of a single contract.
    ///
    pub fn write_contract<W>(
        w: &mut W,
        project: &ProjectComparison,
        comparison: &ContractComparison,
    ) -> anyhow::Result<()>
    where
        W: std::io::Write,
    {
        let pair = project.pair(comparison);

        Self::write_header(w, "╔", "╗", comparison.contract_name.as_str())?;
        writeln!(
            w,
            "║ {:<40} {:>14} {:>18} ║",
            "Deployment".bright_white(),
            "Gas",
            "Diff (%)"
        )?;
        for entry in comparison.deployment_differences().into_iter() {
            writeln!(
                w,
                "║ {:<40} {:>14} {:>18} ║",
                entry.compiler.to_string(),
                entry.gas,
                Self::format_difference(entry.difference)
            )?;
        }

        Self::write_header(w, "╠", "╣", pair.to_string().as_str())?;
        writeln!(
            w,
            "║ {:<40} {:>11} {:>11} {:>9} ║",
            "Method".bright_white(),
            "solx",
            "solc",
            "Diff (%)"
        )?;
        for row in comparison.method_rows(&pair).into_iter() {
            writeln!(
                w,
                "║ {:<40} {:>11} {:>11} {:>9} ║",
                Self::truncate(row.short_name, 40),
                Self::format_gas(row.candidate_gas),
                Self::format_gas(row.reference_gas),
                Self::format_difference(row.difference)
            )?;
        }

        Self::write_header(w, "╠", "╣", "Counts")?;
        writeln!(
            w,
            "║ {:<66} {:>7} ║",
            "Total methods".bright_white(),
            comparison.method_count
        )?;
        writeln!(
            w,
            "║ {:<66} {:>7} ║",
            "Methods where solx is more efficient".bright_white(),
            comparison.efficiency_count(&pair).to_string().green()
        )?;
        writeln!(w, "╚{}╝", "═".repeat(Self::WIDTH))?;
        Ok(())
    }

    ///
    /// Writes the summary of a project.
    ///
    pub fn write_summary<W>(w: &mut W, project: &str, summary: &Summary<'_>) -> anyhow::Result<()>
    where
        W: std::io::Write,
    {
        let statistics = &summary.statistics;

        Self::write_header(w, "╔", "╗", format!("Summary: {project}").as_str())?;
        for (name, value) in [
            ("Total methods", statistics.total.to_string().normal()),
            ("Compared methods", statistics.compared.to_string().normal()),
            ("Improved methods", statistics.improved.to_string().green()),
            (
                "Regressed methods",
                statistics.regressed.to_string().bright_red(),
            ),
            (
                "Average difference (%)",
                Self::format_difference(statistics.average_difference),
            ),
        ] {
            writeln!(w, "║ {:<66} {:>7} ║", name.bright_white(), value)?;
        }

        Self::write_deltas(w, "Top improvements", summary.improvements.as_slice())?;
        Self::write_deltas(w, "Top regressions", summary.regressions.as_slice())?;
        writeln!(w, "╚{}╝", "═".repeat(Self::WIDTH))?;
        Ok(())
    }

    ///
    /// Writes the first deltas of a summary section.
    ///
    fn write_deltas<W>(w: &mut W, title: &str, deltas: &[FunctionDelta<'_>]) -> anyhow::Result<()>
    where
        W: std::io::Write,
    {
        if deltas.is_empty() {
            return Ok(());
        }
        Self::write_header(
            w,
            "╠",
            "╣",
            format!("{title} ({} of {})", deltas.len().min(Self::TOP_COUNT), deltas.len())
                .as_str(),
        )?;
        for delta in deltas.iter().take(Self::TOP_COUNT) {
            let name = format!("{}::{}", Self::contract_short_name(delta.contract), delta.function);
            writeln!(
                w,
                "║ {:<64} {:>9} ║",
                Self::truncate(name.as_str(), 64),
                Self::format_difference(Some(delta.difference))
            )?;
        }
        Ok(())
    }

    ///
    /// Writes a frame line with a title.
    ///
    fn write_header<W>(w: &mut W, left: &str, right: &str, title: &str) -> anyhow::Result<()>
    where
        W: std::io::Write,
    {
        let title = Self::truncate(title, Self::WIDTH - 6);
        let fill = Self::WIDTH.saturating_sub(title.chars().count() + 5);
        writeln!(
            w,
            "{left}═╡ {} ╞{}{right}",
            title.bright_white(),
            "═".repeat(fill)
        )?;
        Ok(())
    }

    ///
    /// Formats a difference, coloring improvements and regressions.
    ///
    fn format_difference(difference: Option<Percentage>) -> ColoredString {
        match difference {
            Some(difference) if difference.value() < 0.0 => difference.to_string().green(),
            Some(difference) if difference.value() > 0.0 => difference.to_string().bright_red(),
            Some(difference) => difference.to_string().normal(),
            None => "N/A".bright_black(),
        }
    }

    ///
    /// Formats an optional gas amount.
    ///
    fn format_gas(gas: Option<Gas>) -> String {
        gas.map(|gas| gas.to_string())
            .unwrap_or_else(|| "-".to_owned())
    }

    ///
    /// Returns the contract name without the source path.
    ///
    fn contract_short_name(contract: &str) -> &str {
        contract.rsplit(':').next().unwrap_or(contract)
    }

    ///
    /// Truncates `string` to `width` characters.
    ///
    fn truncate(string: &str, width: usize) -> String {
        if string.chars().count() <= width {
            return string.to_owned();
        }
        let mut truncated: String = string.chars().take(width.saturating_sub(1)).collect();
        truncated.push('…');
        truncated
    }
}

impl TryFrom<&[ProjectComparison]> for Text {
    type Error = anyhow::Error;

    fn try_from(projects: &[ProjectComparison]) -> Result<Self, Self::Error> {
        let mut buffer = Vec::with_capacity(4096);
        for project in projects.iter() {
            for comparison in project.contracts.iter() {
                Self::write_contract(&mut buffer, project, comparison)?;
                writeln!(buffer)?;
            }
            Self::write_summary(&mut buffer, project.project.as_str(), &project.summary())?;
            writeln!(buffer)?;
        }
        let content = String::from_utf8(buffer)?;
        Ok(Self { content })
    }
}
