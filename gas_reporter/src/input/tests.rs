//!
//! The gas report loader tests.
//!

use std::io::Write;
use std::path::Path;

use proptest::prelude::*;

use crate::context::RunContext;
use crate::model::method_result::MethodResult;

use super::error::Error;
use super::filter::Filter;
use super::method::Method;
use super::RawReport;

const REPORT: &str = r#"
{
    "namespace": "ethGasStats",
    "info": {
        "methods": {
            "Token_a9059cbb": {
                "key": "a9059cbb",
                "contract": "Token",
                "method": "transfer",
                "fnSig": "transfer(address,uint256)",
                "numberOfCalls": 3,
                "gasData": [100, 120, 110]
            },
            "Token_40c10f19": {
                "key": "40c10f19",
                "contract": "Token",
                "method": "mint",
                "numberOfCalls": 0,
                "gasData": []
            },
            "Vault_d0e30db0": {
                "contract": "Vault",
                "method": "deposit",
                "numberOfCalls": 2,
                "gasData": [51000, 50001]
            },
            "Registry_1e59c529": {
                "contract": "Registry",
                "method": "register",
                "numberOfCalls": 1,
                "gasData": [70000]
            }
        }
    }
}"#;

fn context() -> RunContext {
    RunContext::new("42".to_owned(), "abc1234".to_owned(), None)
}

fn parse(text: &str) -> Result<RawReport, Error> {
    RawReport::parse(Path::new("gasReporterOutput.json"), text)
}

fn method(number_of_calls: u64, gas_data: Vec<u64>) -> Method {
    Method {
        contract: "Token".to_owned(),
        method: "transfer".to_owned(),
        number_of_calls,
        gas_data,
        extra: serde_json::Map::new(),
    }
}

#[test]
fn keeps_source_order() {
    let report = parse(REPORT)
        .expect("Always valid")
        .to_run_report(&Filter::default(), &context())
        .expect("Always valid");

    assert_eq!(report.id, "42");
    assert_eq!(report.commit, "abc1234");
    assert_eq!(
        report.data,
        vec![
            MethodResult::new("Token", "transfer", 100, 120, 110),
            MethodResult::new("Vault", "deposit", 50001, 51000, 50501),
            MethodResult::new("Registry", "register", 70000, 70000, 70000),
        ]
    );
}

#[test]
fn filters_contracts() {
    let filter: Filter = "Token,Registry".parse().expect("Always valid");
    let report = parse(REPORT)
        .expect("Always valid")
        .to_run_report(&filter, &context())
        .expect("Always valid");

    let contracts: Vec<&str> = report
        .data
        .iter()
        .map(|result| result.contract.as_str())
        .collect();
    assert_eq!(contracts, vec!["Token", "Registry"]);
}

#[test]
fn skips_uncalled_methods() {
    let raw = parse(REPORT).expect("Always valid");
    let filter = Filter::default();
    assert!(raw.matching(&filter).all(|method| method.number_of_calls > 0));
    assert!(raw.matching(&filter).all(|method| method.method != "mint"));
}

#[test]
fn matching_keeps_unknown_fields() {
    let raw = parse(REPORT).expect("Always valid");
    let filter: Filter = "Token".parse().expect("Always valid");
    let matching: Vec<&Method> = raw.matching(&filter).collect();

    assert_eq!(matching.len(), 1);
    assert_eq!(
        matching[0].extra.get("fnSig"),
        Some(&serde_json::json!("transfer(address,uint256)"))
    );
}

#[test]
fn average_divides_by_calls() {
    // Four calls, two measurements.
    assert_eq!(method(4, vec![100, 101]).statistics(), Some((100, 101, 50)));
}

#[test]
fn average_rounds_half_up() {
    assert_eq!(method(2, vec![1, 2]).statistics(), Some((1, 2, 2)));
    assert_eq!(method(3, vec![1, 1, 2]).statistics(), Some((1, 2, 1)));
}

#[test]
fn error_empty_gas_data() {
    let text = r#"{ "info": { "methods": { "k": {
        "contract": "Token", "method": "burn", "numberOfCalls": 2, "gasData": []
    } } } }"#;
    let result = parse(text)
        .expect("Always valid")
        .to_run_report(&Filter::default(), &context());
    assert!(matches!(
        result,
        Err(Error::EmptyGasData { method: ref name, .. }) if name == "burn"
    ));
}

#[test]
fn error_missing_methods() {
    assert!(matches!(
        parse(r#"{ "info": {} }"#),
        Err(Error::MissingMethods { .. })
    ));
    assert!(matches!(
        parse(r#"{ "info": { "methods": [] } }"#),
        Err(Error::MissingMethods { .. })
    ));
}

#[test]
fn error_missing_field() {
    let text = r#"{ "info": { "methods": { "k": {
        "contract": "Token", "method": "burn", "gasData": [1]
    } } } }"#;
    assert!(matches!(parse(text), Err(Error::Parsing { .. })));
}

#[test]
fn error_invalid_json() {
    assert!(matches!(parse("{ not json"), Err(Error::Parsing { .. })));
}

#[test]
fn error_empty_file() {
    assert!(matches!(parse(" \n"), Err(Error::Empty { .. })));
}

#[test]
fn load_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("Always valid");
    file.write_all(REPORT.as_bytes()).expect("Always valid");

    let filter: Filter = "Vault".parse().expect("Always valid");
    let report = super::load(file.path(), &filter, &context()).expect("Always valid");
    assert_eq!(
        report.data,
        vec![MethodResult::new("Vault", "deposit", 50001, 51000, 50501)]
    );
}

#[test]
fn error_unreadable_file() {
    let directory = tempfile::tempdir().expect("Always valid");
    let path = directory.path().join("missing.json");
    assert!(matches!(
        super::load(path.as_path(), &Filter::default(), &context()),
        Err(Error::Reading { .. })
    ));
}

proptest! {
    #[test]
    fn average_matches_rounded_mean(gas_data in prop::collection::vec(0u64..10_000_000, 1..64)) {
        let calls = gas_data.len() as u64;
        let expected = (gas_data.iter().sum::<u64>() as f64 / calls as f64).round() as u64;
        let (min, max, avg) = method(calls, gas_data.clone()).statistics().expect("Always valid");

        prop_assert_eq!(avg, expected);
        prop_assert!(min <= avg && avg <= max);
    }

    #[test]
    fn average_of_uniform_data(gas in 0u64..100_000_000, calls in 1usize..2048) {
        let result = method(calls as u64, vec![gas; calls]).statistics();
        prop_assert_eq!(result, Some((gas, gas, gas)));
    }
}
