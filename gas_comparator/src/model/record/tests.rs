//!
//! The record ingestion tests.
//!

use serde_json::json;

use super::error::Error;
use super::Record;
use crate::model::compiler::markers::Markers;
use crate::model::compiler::pipeline::Pipeline;
use crate::model::compiler::toolchain::Toolchain;

#[test]
fn ok_measurement() {
    let value = json!({
        "compiler": { "type": "solx", "version": "0.1.0-via-ir" },
        "contract": "src/Token.sol:Token",
        "deployment": { "gas": 111281, "size": 406 },
        "functions": {
            "transfer(address,uint256)": { "calls": 5, "mean": 462, "median": 462 },
            "approve(address,uint256)": { "calls": 3, "mean": 753 }
        }
    });
    let record = Record::try_from_value(&value, &Markers::default()).expect("Must be valid");
    let measurement = record.as_measurement().expect("Must be a measurement");

    assert_eq!(measurement.compiler.toolchain, Toolchain::Solx);
    assert_eq!(measurement.compiler.pipeline, Pipeline::ViaIR);
    assert!(!measurement.compiler.optimized);
    assert_eq!(measurement.contract, "src/Token.sol:Token");
    assert_eq!(measurement.deployment.gas, 111281.0);
    assert_eq!(
        measurement
            .function("approve(address,uint256)")
            .map(|function| function.mean),
        Some(753.0)
    );
    assert_eq!(
        measurement
            .function("transfer(address,uint256)")
            .map(|function| function.mean),
        Some(462.0)
    );
}

#[test]
fn ok_fractional_gas() {
    let value = json!({
        "compiler": { "type": "solx", "version": "0.1.0" },
        "contract": "src/Token.sol:Token",
        "deployment": { "gas": 900.25 },
        "functions": { "f()": { "calls": 3, "mean": 90.5 } }
    });
    let record = Record::try_from_value(&value, &Markers::default()).expect("Must be valid");
    let measurement = record.as_measurement().expect("Must be a measurement");

    assert_eq!(measurement.deployment.gas, 900.25);
    assert_eq!(
        measurement.function("f()").map(|function| function.mean),
        Some(90.5)
    );
}

#[test]
fn ok_functions_in_report_order() {
    let value = json!({
        "compiler": { "type": "solx", "version": "0.1.0" },
        "contract": "src/Token.sol:Token",
        "deployment": { "gas": 1000 },
        "functions": {
            "z()": { "mean": 10 },
            "a()": { "mean": 20 },
            "m(uint256)": { "mean": 30 }
        }
    });
    let record = Record::try_from_value(&value, &Markers::default()).expect("Must be valid");
    let measurement = record.as_measurement().expect("Must be a measurement");

    let signatures: Vec<&str> = measurement
        .functions
        .iter()
        .map(|(signature, _)| signature.as_str())
        .collect();
    assert_eq!(signatures, vec!["z()", "a()", "m(uint256)"]);
}

#[test]
fn ok_settings() {
    let value = json!({
        "compiler": { "family": "solc", "version": "0.8.30-opt" },
        "compilerSettings": { "optimizer": { "enabled": true, "runs": 200 } }
    });
    let record = Record::try_from_value(&value, &Markers::default()).expect("Must be valid");
    let settings = record.as_settings().expect("Must be settings");

    assert_eq!(settings.compiler.toolchain, Toolchain::Solc);
    assert_eq!(settings.compiler.pipeline, Pipeline::Default);
    assert!(settings.compiler.optimized);
    assert_eq!(
        settings.compiler_settings["optimizer"],
        json!({ "enabled": true, "runs": 200 })
    );
}

#[test]
fn ok_custom_markers() {
    let markers = Markers::new("yul", "O[1-3]").expect("Must be valid");
    let value = json!({
        "compiler": { "type": "solx", "version": "0.1.0 yul O3" },
        "compilerSettings": {}
    });
    let record = Record::try_from_value(&value, &markers).expect("Must be valid");

    assert_eq!(record.compiler().pipeline, Pipeline::ViaIR);
    assert!(record.compiler().optimized);
}

#[test]
fn error_missing_compiler() {
    let value = json!({
        "contract": "src/Token.sol:Token",
        "deployment": { "gas": 1 },
        "functions": {}
    });
    let result = Record::try_from_value(&value, &Markers::default());

    assert!(matches!(
        result,
        Err(Error::MissingField { field: "compiler" })
    ));
}

#[test]
fn error_missing_deployment_gas() {
    let value = json!({
        "compiler": { "type": "solx", "version": "0.1.0" },
        "contract": "src/Token.sol:Token",
        "deployment": { "size": 406 },
        "functions": {}
    });
    let result = Record::try_from_value(&value, &Markers::default());

    assert!(matches!(
        result,
        Err(Error::MissingField {
            field: "deployment.gas"
        })
    ));
}

#[test]
fn error_unknown_toolchain() {
    let value = json!({
        "compiler": { "type": "zksolc", "version": "1.5.0" },
        "compilerSettings": {}
    });
    let result = Record::try_from_value(&value, &Markers::default());

    assert!(matches!(result, Err(Error::UnknownToolchain { toolchain }) if toolchain == "zksolc"));
}

#[test]
fn error_negative_gas() {
    let value = json!({
        "compiler": { "type": "solx", "version": "0.1.0" },
        "contract": "src/Token.sol:Token",
        "deployment": { "gas": 1000 },
        "functions": { "f()": { "mean": -1.5 } }
    });
    let result = Record::try_from_value(&value, &Markers::default());

    assert!(matches!(result, Err(Error::NegativeGas { field, .. }) if field == "f()"));
}

#[test]
fn error_untagged() {
    let value = json!({
        "compiler": { "type": "solc", "version": "0.8.30" }
    });
    let result = Record::try_from_value(&value, &Markers::default());

    assert!(matches!(result, Err(Error::Untagged)));
}

#[test]
fn error_shape() {
    let value = json!({
        "compiler": { "type": "solc", "version": "0.8.30" },
        "contract": "src/Token.sol:Token",
        "deployment": { "gas": "a lot" }
    });
    let result = Record::try_from_value(&value, &Markers::default());

    assert!(matches!(result, Err(Error::Shape(_))));
}

#[test]
fn ingest_skips_malformed() {
    let values = vec![
        json!({
            "compiler": { "type": "solc", "version": "0.8.30" },
            "compilerSettings": {}
        }),
        json!({ "contract": "src/Token.sol:Token" }),
        json!({
            "compiler": { "type": "solc", "version": "0.8.30" },
            "contract": "src/Token.sol:Token",
            "deployment": { "gas": 1000 },
            "functions": { "f()": { "mean": 100 } }
        }),
        json!({
            "compiler": { "type": "solc", "version": "0.8.30" },
            "contract": "src/Token.sol:Token",
            "deployment": { "gas": 1000 },
            "functions": { "f()": { "calls": 1 } }
        }),
    ];
    let records = Record::ingest(values.as_slice(), &Markers::default());

    assert_eq!(records.len(), 2);
    assert!(records[0].as_settings().is_some());
    assert!(records[1].as_measurement().is_some());
}
