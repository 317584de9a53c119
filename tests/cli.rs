//! E2E tests for the conversion and catalog commands

use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new("cargo")
        .args(["run", "--quiet", "--"])
        .args(args)
        .output()
        .expect("Failed to execute command")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn inclusive_adds_tax() {
    let output = run(&["inclusive", "--price", "100.00", "--tax", "iva12"]);
    assert!(output.status.success(), "Command failed: {:?}", output);
    assert_eq!(stdout(&output).trim(), "112.0000");
}

#[test]
fn inclusive_without_price_is_not_computable() {
    let output = run(&["inclusive", "--tax", "iva14"]);
    assert!(output.status.success(), "Command failed: {:?}", output);
    assert_eq!(stdout(&output).trim(), "-");
}

#[test]
fn inclusive_overflow_is_not_computable() {
    let output = run(&[
        "inclusive",
        "--price",
        "79228162514264337593543950335",
        "--tax",
        "iva12",
    ]);
    assert!(output.status.success(), "Command failed: {:?}", output);
    assert_eq!(stdout(&output).trim(), "-");
}

#[test]
fn exclusive_removes_tax() {
    let output = run(&["exclusive", "--price", "57.00", "--tax", "iva14"]);
    assert!(output.status.success(), "Command failed: {:?}", output);
    assert_eq!(stdout(&output).trim(), "50.0000");
}

#[test]
fn exclusive_honours_digits() {
    let output = run(&["exclusive", "--price", "10", "--tax", "iva12", "--digits", "2"]);
    assert!(output.status.success(), "Command failed: {:?}", output);
    assert_eq!(stdout(&output).trim(), "8.93");
}

#[test]
fn unknown_tag_is_zero_rated_unless_strict() {
    let output = run(&["inclusive", "--price", "10", "--tax", "iva21"]);
    assert!(output.status.success(), "Command failed: {:?}", output);
    assert_eq!(stdout(&output).trim(), "10.00");

    let output = run(&["inclusive", "--price", "10", "--tax", "iva21", "--strict"]);
    assert!(!output.status.success());
}

#[test]
fn config_file_overrides_rates_and_digits() {
    let output = run(&[
        "exclusive",
        "--config",
        "tests/data/config.json",
        "--price",
        "115",
        "--tax",
        "iva14",
    ]);
    assert!(output.status.success(), "Command failed: {:?}", output);
    assert_eq!(stdout(&output).trim(), "100.00");
}

#[test]
fn catalog_table() {
    let output = run(&["catalog", "-f", "tests/data/catalog.json"]);
    assert!(output.status.success(), "Command failed: {:?}", output);

    let stdout = stdout(&output);
    assert!(stdout.contains("Agua 500ml"));
    assert!(stdout.contains("112.0000"));
    assert!(stdout.contains("67.2000"));
    assert!(stdout.contains("50.0000"));
    assert!(stdout.contains("no_iva"));
}

#[test]
fn catalog_json() {
    let output = run(&["catalog", "-f", "tests/data/catalog.json", "--json"]);
    assert!(output.status.success(), "Command failed: {:?}", output);

    let rows: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[1]["name"], "Cola 1L");
    assert_eq!(rows[1]["tax"], "iva14");
    assert_eq!(rows[1]["list_price"], "50.0000");
    // Pan inherits its tax but has no category
    assert_eq!(rows[3]["tax"], "-");
    assert_eq!(rows[3]["list_price_with_tax"], "-");
}

#[test]
fn catalog_products_csv() {
    let output = run(&[
        "catalog",
        "-f",
        "tests/data/catalog.json",
        "--products",
        "--date",
        "2024-12-30",
        "--csv",
    ]);
    assert!(output.status.success(), "Command failed: {:?}", output);

    let stdout = stdout(&output);
    assert!(stdout.contains("code,template,sale_price,delivery_date"));
    assert!(stdout.contains("AG-500,Agua 500ml,100.00,2025-01-01"));
    assert!(stdout.contains("AG-500-PK,Agua 500ml,100.00,2025-01-04"));
}

#[test]
fn rates_json() {
    let output = run(&["rates", "--json"]);
    assert!(output.status.success(), "Command failed: {:?}", output);

    let rows: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[2]["tag"], "iva12");
    assert_eq!(rows[2]["factor"], "1.12");
}

#[test]
fn schema_describes_catalog() {
    let output = run(&["schema"]);
    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout(&output).contains("TemplateInput"));
}
