use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::str::contains;

use tombola_core::store::{state_dir_at, CONFIG_FILE, ROSTER_FILE};
use tempfile::TempDir;

fn tombola_cmd(home: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("tombola"));
    cmd.env("HOME", home).env("USERPROFILE", home);
    cmd
}

fn init_desk(home: &TempDir, extra: &[&str]) {
    let mut args = vec!["init"];
    args.extend_from_slice(extra);
    tombola_cmd(home.path()).args(args).assert().success();
}

fn add_person(home: &TempDir, first: &str, last: &str, address: &str, phone: &str) {
    tombola_cmd(home.path())
        .args([
            "add",
            "--first-name",
            first,
            "--last-name",
            last,
            "--address",
            address,
            "--phone",
            phone,
        ])
        .assert()
        .success();
}

#[test]
fn init_writes_config_and_prints_summary() {
    let home = TempDir::new().expect("home");

    tombola_cmd(home.path())
        .args(["init", "--seed", "100", "--identity-code", "8", "--no-address"])
        .assert()
        .success()
        .stdout(contains("✓ Desk configured"))
        .stdout(contains("first ticket: 100"))
        .stdout(contains("identity code length: 8"));

    let config_path = state_dir_at(home.path()).join(CONFIG_FILE);
    let raw = fs::read_to_string(&config_path).expect("read config");
    assert!(raw.contains("\"seed\": 100"), "seed missing from config: {raw}");
    assert!(raw.contains("\"collect_address\": false"), "address flag missing: {raw}");
}

#[test]
fn init_twice_keeps_the_first_configuration() {
    let home = TempDir::new().expect("home");

    init_desk(&home, &["--seed", "100"]);
    tombola_cmd(home.path())
        .args(["init", "--seed", "500"])
        .assert()
        .success()
        .stdout(contains("· Desk already configured"))
        .stdout(contains("first ticket: 100"));

    add_person(&home, "Maria", "Lopez", "Av. Grau 123", "987654321");
    tombola_cmd(home.path())
        .args(["list"])
        .assert()
        .success()
        .stdout(contains("100"));
}

#[test]
fn full_desk_flow_issues_sequential_tickets() {
    let home = TempDir::new().expect("home");
    init_desk(&home, &[]);

    tombola_cmd(home.path())
        .args([
            "add",
            "--first-name",
            "Maria",
            "--last-name",
            "Lopez",
            "--address",
            "Av. Grau 123",
            "--phone",
            "987654321",
        ])
        .assert()
        .success()
        .stdout(contains("✓ Ticket 047 registered to MARIA LOPEZ"));

    add_person(&home, "Juan", "Perez", "Jr. Union 45", "912345678");

    tombola_cmd(home.path())
        .args(["list"])
        .assert()
        .success()
        .stdout(contains("2 registrants"))
        .stdout(contains("next ticket 049"))
        .stdout(contains("047"))
        .stdout(contains("048"))
        .stdout(contains("MARIA"));

    tombola_cmd(home.path())
        .args(["edit", "047", "phone", "999111222"])
        .assert()
        .success()
        .stdout(contains("✎ Ticket 047"))
        .stdout(contains("999111222"));

    tombola_cmd(home.path())
        .args(["show", "047"])
        .assert()
        .success()
        .stdout(contains("TICKET 047"))
        .stdout(contains("MARIA LOPEZ"))
        .stdout(contains("999111222"));

    tombola_cmd(home.path())
        .args(["remove", "048", "--yes"])
        .assert()
        .success()
        .stdout(contains("✓ Removed ticket 048 (JUAN PEREZ)"));

    // Removed numbers are never handed out again.
    tombola_cmd(home.path())
        .args([
            "add",
            "--first-name",
            "Ana",
            "--last-name",
            "Ruiz",
            "--address",
            "Calle Lima 9",
            "--phone",
            "911222333",
        ])
        .assert()
        .success()
        .stdout(contains("✓ Ticket 049 registered to ANA RUIZ"));
}

#[test]
fn list_json_matches_wire_schema() {
    let home = TempDir::new().expect("home");
    init_desk(&home, &[]);
    add_person(&home, "Maria", "Lopez", "Av. Grau 123", "987654321");
    add_person(&home, "Juan", "Perez", "Jr. Union 45", "912345678");

    let assert = tombola_cmd(home.path())
        .args(["list", "--json"])
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("stdout utf8");
    let payload: serde_json::Value = serde_json::from_str(&stdout).expect("parse list json");

    let top_keys: BTreeSet<String> = payload
        .as_object()
        .expect("list root object")
        .keys()
        .cloned()
        .collect();
    let expected_top: BTreeSet<String> = ["summary", "registrants"]
        .into_iter()
        .map(str::to_string)
        .collect();
    assert_eq!(top_keys, expected_top, "list root schema changed");

    assert_eq!(payload["summary"]["count"], 2);
    assert_eq!(payload["summary"]["nextTicket"], "049");

    let rows = payload["registrants"].as_array().expect("registrants array");
    assert_eq!(rows.len(), 2);

    let expected_row_fields: BTreeSet<String> = [
        "position",
        "ticketNumber",
        "firstName",
        "lastName",
        "address",
        "phone",
        "id",
        "createdAt",
    ]
    .into_iter()
    .map(str::to_string)
    .collect();
    for row in rows {
        let keys: BTreeSet<String> = row
            .as_object()
            .expect("row object")
            .keys()
            .cloned()
            .collect();
        assert_eq!(keys, expected_row_fields, "registrant row schema changed");
    }

    assert_eq!(rows[0]["position"], 1);
    assert_eq!(rows[0]["ticketNumber"], "047");
    assert_eq!(rows[1]["position"], 2);
    assert_eq!(rows[1]["ticketNumber"], "048");
}

#[test]
fn identity_desk_collects_the_code_instead_of_an_address() {
    let home = TempDir::new().expect("home");
    init_desk(&home, &["--identity-code", "8", "--no-address"]);

    tombola_cmd(home.path())
        .args([
            "add",
            "--first-name",
            "Maria",
            "--last-name",
            "Lopez",
            "--identity-code",
            "12345678",
            "--phone",
            "987654321",
        ])
        .assert()
        .success()
        .stdout(contains("✓ Ticket 047"));

    let assert = tombola_cmd(home.path())
        .args(["list", "--json"])
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("stdout utf8");
    let payload: serde_json::Value = serde_json::from_str(&stdout).expect("parse list json");

    let row = &payload["registrants"][0];
    assert_eq!(row["identityCode"], "12345678");
    assert!(row.get("address").is_none(), "address should not be collected");
}

#[test]
fn export_writes_the_workbook_where_asked() {
    let home = TempDir::new().expect("home");
    let out = TempDir::new().expect("out");
    init_desk(&home, &[]);
    add_person(&home, "Maria", "Lopez", "Av. Grau 123", "987654321");

    tombola_cmd(home.path())
        .args(["export", "--out"])
        .arg(out.path())
        .assert()
        .success()
        .stdout(contains("✓ Exported 1 registrants"))
        .stdout(contains("tickets_generados.xlsx"));

    let workbook = out.path().join("tickets_generados.xlsx");
    let bytes = fs::read(&workbook).expect("read workbook");
    assert!(bytes.starts_with(b"PK"), "xlsx must be a ZIP container");
}

#[test]
fn roster_file_survives_between_invocations() {
    let home = TempDir::new().expect("home");
    init_desk(&home, &[]);
    add_person(&home, "Maria", "Lopez", "Av. Grau 123", "987654321");

    let roster_path = state_dir_at(home.path()).join(ROSTER_FILE);
    let raw = fs::read_to_string(&roster_path).expect("read roster");
    assert!(raw.contains("\"ticketNumber\":\"047\""), "wire keys changed: {raw}");

    // A fresh process continues the sequence from disk.
    add_person(&home, "Juan", "Perez", "Jr. Union 45", "912345678");
    let raw = fs::read_to_string(&roster_path).expect("read roster");
    assert!(raw.contains("\"ticketNumber\":\"048\""), "sequence broke: {raw}");
}
