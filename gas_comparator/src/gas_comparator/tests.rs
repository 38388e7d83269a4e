//!
//! Tests for the gas comparator.
//!

#![cfg(test)]

use clap::Parser;

use crate::arguments::Arguments;

const SOLC_REPORT: &str = r#"
{ "project": "solmate", "toolchain": "solc", "version": "0.8.30-opt", "data": [ {
    "contract": "src/auth/Owned.sol:Owned",
    "deployment": { "gas": 200000, "size": 1200 },
    "functions": {
        "setOwner(address)": { "calls": 12, "min": 2400, "mean": 2400, "median": 2400, "max": 2400 },
        "owner()": { "calls": 40, "min": 400, "mean": 400, "median": 400, "max": 400 }
    }
}, {
    "contract": "src/tokens/WETH.sol:WETH",
    "deployment": { "gas": 500000, "size": 2400 },
    "functions": {
        "deposit()": { "calls": 100, "min": 23000, "mean": 23000, "median": 23000, "max": 23000 }
    }
} ] }"#;

const SOLX_REPORT: &str = r#"
{ "project": "solmate", "toolchain": "solx", "data": [ {
    "compiler": { "type": "solx", "version": "0.1.0" },
    "compilerSettings": { "optimizer": { "mode": "3" } }
}, {
    "compiler": { "type": "solx", "version": "0.1.0" },
    "contract": "src/auth/Owned.sol:Owned",
    "deployment": { "gas": 180000, "size": 1100 },
    "functions": {
        "setOwner(address)": { "calls": 12, "mean": 2300 },
        "owner()": { "calls": 40, "mean": 410 }
    }
}, {
    "compiler": { "type": "solx", "version": "0.1.0-via-ir" },
    "contract": "src/auth/Owned.sol:Owned",
    "deployment": { "gas": 190000, "size": 1150 },
    "functions": {
        "setOwner(address)": { "calls": 12, "mean": 2200 },
        "owner()": { "calls": 40, "mean": 380 }
    }
}, {
    "compiler": { "type": "solx", "version": "0.1.0-via-ir" },
    "contract": "src/tokens/WETH.sol:WETH",
    "deployment": { "gas": 480000, "size": 2300 },
    "functions": {
        "deposit()": { "calls": 100, "mean": 22000 }
    }
}, {
    "contract": "src/tokens/Broken.sol:Broken"
} ] }"#;

fn reports() -> gas_comparator::ReportsData {
    let mut reports = gas_comparator::ReportsData::default();
    for report in [SOLC_REPORT, SOLX_REPORT] {
        reports.extend(serde_json::from_str(report).expect("Always valid"));
    }
    reports
}

#[test]
fn compare() {
    let arguments = Arguments::try_parse_from(["gas-comparator", "reports"]).expect("Valid");

    let projects =
        crate::compare_reports(&reports(), &gas_comparator::Markers::default(), &arguments)
            .expect("Always valid");

    assert_eq!(projects.len(), 1);
    let project = &projects[0];
    assert_eq!(project.project, "solmate");
    // WETH has no default pipeline solx build
    assert_eq!(project.contracts.len(), 1);

    let owned = &project.contracts[0];
    assert_eq!(owned.contract_name, "src/auth/Owned.sol:Owned");
    assert_eq!(owned.method_count, 2);
    let deployment: Vec<String> = owned
        .deployment_differences()
        .into_iter()
        .map(|entry| format!("{} {}", entry.compiler, entry.difference.expect("Non-zero")))
        .collect();
    assert_eq!(
        deployment,
        vec![
            "solc 0.8.30-opt 0.00",
            "solx 0.1.0 -10.00",
            "solx 0.1.0-via-ir -5.00"
        ]
    );
    assert_eq!(
        owned.deployment[1].compiler_settings["optimizer"],
        serde_json::json!({ "mode": "3" })
    );
    assert_eq!(owned.efficiency_count(&project.pair(owned)), 1);

    let summary = project.summary();
    assert_eq!(summary.statistics.total, 2);
    assert_eq!(summary.statistics.improved, 1);
    assert_eq!(summary.statistics.regressed, 1);
    assert_eq!(summary.improvements[0].function, "setOwner(address)");
    assert_eq!(summary.improvements[0].difference.to_string(), "-4.17");
    assert_eq!(summary.regressions[0].difference.to_string(), "2.50");
}

#[test]
fn compare_selected_versions() {
    let arguments = Arguments::try_parse_from([
        "gas-comparator",
        "reports",
        "--project",
        "solmate",
        "--candidate-version",
        "0.1.0-via-ir",
    ])
    .expect("Valid");

    let projects =
        crate::compare_reports(&reports(), &gas_comparator::Markers::default(), &arguments)
            .expect("Always valid");

    let project = &projects[0];
    let owned = &project.contracts[0];
    assert_eq!(
        project.pair(owned),
        gas_comparator::VersionPair::new("0.1.0-via-ir", "0.8.30-opt")
    );
    assert_eq!(owned.efficiency_count(&project.pair(owned)), 2);
}

#[test]
fn compare_missing_project() {
    let arguments =
        Arguments::try_parse_from(["gas-comparator", "reports", "--project", "solady"])
            .expect("Valid");

    let result =
        crate::compare_reports(&reports(), &gas_comparator::Markers::default(), &arguments);

    assert!(result.is_err());
}

#[test]
fn compare_skips_empty_toolchain() {
    let arguments = Arguments::try_parse_from(["gas-comparator", "-q", "reports"]).expect("Valid");
    let mut reports = gas_comparator::ReportsData::default();
    reports.extend(serde_json::from_str(SOLC_REPORT).expect("Always valid"));

    let projects =
        crate::compare_reports(&reports, &gas_comparator::Markers::default(), &arguments)
            .expect("Always valid");

    assert!(projects.is_empty());
}
