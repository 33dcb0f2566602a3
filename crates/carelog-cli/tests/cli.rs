use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;
use std::path::Path;
use tempfile::TempDir;

fn run_cmd(records_path: &Path, args: &[&str]) -> String {
    let output = cargo_bin_cmd!("carelog")
        .args(["--records-path", records_path.to_str().expect("records path")])
        .args(args)
        .output()
        .expect("run command");
    assert!(output.status.success(), "command failed: {:?}", output);
    String::from_utf8(output.stdout).expect("utf8")
}

fn run_cmd_json(records_path: &Path, args: &[&str]) -> Value {
    let output = cargo_bin_cmd!("carelog")
        .args([
            "--records-path",
            records_path.to_str().expect("records path"),
            "--json",
        ])
        .args(args)
        .output()
        .expect("run command");
    assert!(output.status.success(), "command failed: {:?}", output);
    serde_json::from_slice(&output.stdout).expect("parse json")
}

#[test]
fn cli_add_show_edit_delete_flow() {
    let temp = TempDir::new().expect("temp dir");
    let records_path = temp.path().join("patients.json");

    run_cmd(
        &records_path,
        &[
            "add",
            "--first-name",
            "John",
            "--last-name",
            "Doe",
            "--phone",
            "07123456789",
            "--email",
            "john.doe@example.com",
            "--birth-date",
            "1985-02-01",
            "--height",
            "180",
            "--weight",
            "80",
        ],
    );

    let list = run_cmd_json(&records_path, &["list"]);
    let items = list.as_array().expect("array");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["full_name"], "John Doe");
    let id = items[0]["id"].as_str().expect("id").to_string();

    let detail = run_cmd_json(&records_path, &["show", &id]);
    assert_eq!(detail["phone"], "07123456789");
    assert_eq!(detail["bmi"], 24.7);
    assert_eq!(detail["bmi_category"], "Normal (18.5-24.9)");

    let updated = run_cmd_json(&records_path, &["edit", &id, "--weight", "100"]);
    assert_eq!(updated["weight_kg"], 100.0);
    assert_eq!(updated["bmi"], 30.9);
    assert_eq!(updated["bmi_category"], "Obese (>=30)");

    let found = run_cmd_json(&records_path, &["search", "doe"]);
    assert_eq!(found.as_array().expect("array").len(), 1);

    run_cmd(&records_path, &["delete", &id, "--yes"]);
    let empty = run_cmd_json(&records_path, &["list"]);
    assert!(empty.as_array().expect("array").is_empty());
}

#[test]
fn cli_rejects_invalid_phone_with_typed_exit_code() {
    let temp = TempDir::new().expect("temp dir");
    let records_path = temp.path().join("patients.json");

    let output = cargo_bin_cmd!("carelog")
        .args([
            "--records-path",
            records_path.to_str().expect("records path"),
            "add",
            "--first-name",
            "John",
            "--last-name",
            "Doe",
            "--phone",
            "08123456789",
            "--email",
            "john.doe@example.com",
            "--birth-date",
            "1985-02-01",
            "--height",
            "180",
            "--weight",
            "80",
        ])
        .output()
        .expect("run command");
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("phone number must be 11 digits and start with 07"));
}

#[test]
fn cli_bmi_command_reports_category() {
    let temp = TempDir::new().expect("temp dir");
    let records_path = temp.path().join("patients.json");

    let output = run_cmd_json(&records_path, &["bmi", "--weight", "74.5", "--height", "170"]);
    assert_eq!(output["bmi"], 25.8);
    assert_eq!(output["category"], "Overweight (25.0-29.9)");
}
