//!
//! The gas report input tests.
//!

use std::path::Path;

use super::error::Error;
use super::InputFile;
use super::ReportsData;
use crate::comparison::Options;
use crate::model::compiler::markers::Markers;

const SOLC_REPORT: &str = r#"
{ "project": "solmate", "toolchain": "solc", "version": "0.8.30-opt", "data": [ {
    "contract": "src/tokens/ERC20.sol:ERC20",
    "deployment": { "gas": 111281, "size": 406 },
    "functions": {
        "transfer(address,uint256)": { "calls": 5654, "min": 462, "mean": 462, "median": 462, "max": 462 },
        "approve(address,uint256)": { "calls": 1801, "min": 753, "mean": 753, "median": 753, "max": 753 }
    }
} ] }"#;

const COMBINED_REPORT: &str = r#"
{
    "solmate": {
        "solx": [
            { "compiler": { "type": "solx", "version": "0.1.0" }, "compilerSettings": { "optimizer": "M3" } },
            {
                "compiler": { "type": "solx", "version": "0.1.0" },
                "contract": "src/tokens/ERC20.sol:ERC20",
                "deployment": { "gas": 99999, "size": 380 },
                "functions": {
                    "transfer(address,uint256)": { "calls": 5654, "mean": 400 },
                    "approve(address,uint256)": { "calls": 1801, "mean": 800 }
                }
            }
        ]
    },
    "uniswap": { "solc": [], "solx": [] }
}"#;

#[test]
fn single_and_combined() {
    let mut reports = ReportsData::default();
    reports.extend(serde_json::from_str::<InputFile>(SOLC_REPORT).expect("Must be valid"));
    reports.extend(serde_json::from_str::<InputFile>(COMBINED_REPORT).expect("Must be valid"));

    assert_eq!(reports.projects.len(), 2);
    let solmate = reports.project("solmate").expect("Must exist");
    assert_eq!(solmate.solc.len(), 1);
    assert_eq!(solmate.solx.len(), 2);
    assert_eq!(
        solmate.solc[0]["compiler"],
        serde_json::json!({ "type": "solc", "version": "0.8.30-opt" })
    );

    let comparisons = solmate
        .compare(&Markers::default(), &Options::default())
        .expect("Must be comparable");
    assert_eq!(comparisons.len(), 1);
    let comparison = &comparisons[0];
    assert_eq!(comparison.contract_name, "src/tokens/ERC20.sol:ERC20");
    assert_eq!(comparison.method_count, 2);
    assert_eq!(comparison.deployment[0].gas, 111281.0);
    assert_eq!(
        comparison.deployment[1].compiler_settings["optimizer"],
        serde_json::json!("M3")
    );
    assert_eq!(comparison.efficiency_count(&comparison.default_pair()), 1);
}

#[test]
fn fractional_gas_is_compared() {
    let reports: super::project::ProjectReports = serde_json::from_value(serde_json::json!({
        "solc": [{
            "compiler": { "type": "solc", "version": "0.8.30-opt" },
            "contract": "src/Token.sol:Token",
            "deployment": { "gas": 1000 },
            "functions": { "f()": { "mean": 100 } }
        }],
        "solx": [{
            "compiler": { "type": "solx", "version": "0.1.0" },
            "contract": "src/Token.sol:Token",
            "deployment": { "gas": 900.5 },
            "functions": { "f()": { "mean": 90.5 } }
        }]
    }))
    .expect("Must be valid");

    let comparisons = reports
        .compare(&Markers::default(), &Options::default())
        .expect("Must be comparable");

    assert_eq!(comparisons.len(), 1);
    let comparison = &comparisons[0];
    assert_eq!(comparison.results[0].versions[0].difference.to_string(), "10.50");
    let rows = comparison.method_rows(&comparison.default_pair());
    assert_eq!(rows[0].candidate_gas, Some(90.5));
    assert_eq!(
        rows[0].difference.map(|difference| difference.to_string()),
        Some("-9.50".to_owned())
    );
    assert_eq!(comparison.efficiency_count(&comparison.default_pair()), 1);
}

#[test]
fn empty_project_is_invalid_input() {
    let mut reports = ReportsData::default();
    reports.extend(serde_json::from_str::<InputFile>(COMBINED_REPORT).expect("Must be valid"));

    let result = reports
        .project("uniswap")
        .expect("Must exist")
        .compare(&Markers::default(), &Options::default());

    assert!(matches!(
        result,
        Err(crate::comparison::error::Error::EmptyInput { .. })
    ));
}

#[test]
fn error_missing_project() {
    let reports = ReportsData::default();

    let result = reports.project("solady");

    assert!(matches!(
        result,
        Err(Error::MissingProjectData { project }) if project == "solady"
    ));
}

#[test]
fn error_reading() {
    let result = InputFile::try_from(Path::new("/nonexistent/gas-report.json"));

    assert!(matches!(result, Err(Error::Reading { .. })));
}
